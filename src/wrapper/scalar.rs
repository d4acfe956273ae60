use std::future::Future;

use super::{
    AsyncOutcomeWrapper, AsyncSequenceWrapper, AsyncWrapper, OutcomeSequenceWrapper,
    OutcomeWrapper, SequenceWrapper,
};
use crate::combinators::{
    async_outcome, async_scalar, async_sequence, outcome, outcome_sequence, sequence,
};
use crate::outcome::{Outcome, OutcomeSequence};

sync_wrapper! {
    /// The starting point of a pipeline: a plain value with no track and no
    /// multiplicity.
    Wrapper<T>(T)
}

impl<T> Wrapper<T> {
    #[inline]
    pub fn construct(value: T) -> Self {
        Self(value)
    }

    pub fn map<T2, G>(self, f: G) -> Wrapper<T2>
    where
        G: FnOnce(T) -> T2,
    {
        Wrapper(f(self.0))
    }

    pub fn map_to_async<T2, G, Fut>(self, f: G) -> AsyncWrapper<impl Future<Output = T2>>
    where
        G: FnOnce(T) -> Fut,
        Fut: Future<Output = T2>,
    {
        AsyncWrapper::new(async_scalar::map_to_async(async_scalar::construct(self.0), f))
    }

    pub fn map_to_async_outcome<F, S, G, Fut>(
        self,
        f: G,
    ) -> AsyncOutcomeWrapper<impl Future<Output = Outcome<F, S>>>
    where
        G: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<F, S>>,
    {
        AsyncOutcomeWrapper::new(async_scalar::map_to_async(async_scalar::construct(self.0), f))
    }

    pub fn map_to_async_sequence<T2, G, Fut, I>(
        self,
        f: G,
    ) -> AsyncSequenceWrapper<impl Future<Output = Vec<T2>>>
    where
        G: FnMut(T) -> Fut,
        Fut: Future<Output = I>,
        I: IntoIterator<Item = T2>,
    {
        AsyncSequenceWrapper::new(async_sequence::map_to_async_sequence(
            async_sequence::construct(self.0),
            f,
        ))
    }

    /// Runs a fallible step, moving the pipeline onto two tracks.
    pub fn map_to_outcome<F, S, G>(self, f: G) -> OutcomeWrapper<F, S>
    where
        G: FnOnce(T) -> Outcome<F, S>,
    {
        OutcomeWrapper::new(outcome::map_success_to_outcome(Outcome::Success(self.0), f))
    }

    pub fn map_to_outcome_sequence<F, S, G>(self, f: G) -> OutcomeSequenceWrapper<F, S>
    where
        G: FnMut(T) -> OutcomeSequence<F, S>,
    {
        OutcomeSequenceWrapper::new(outcome_sequence::map_successes_to_outcome_sequence(
            outcome_sequence::construct_successes(self.0),
            f,
        ))
    }

    pub fn map_to_sequence<T2, G, I>(self, f: G) -> SequenceWrapper<T2>
    where
        G: FnMut(T) -> I,
        I: IntoIterator<Item = T2>,
    {
        SequenceWrapper::new(sequence::map_to_sequence(sequence::construct(self.0), f))
    }

    pub fn tap<G, R>(self, f: G) -> Self
    where
        G: FnOnce(&T) -> R,
    {
        let _ = f(&self.0);
        self
    }

    pub fn tap_to_async<G, Fut>(self, f: G) -> AsyncWrapper<impl Future<Output = T>>
    where
        T: Clone,
        G: FnOnce(T) -> Fut,
        Fut: Future,
    {
        AsyncWrapper::new(async_scalar::tap_to_async(async_scalar::construct(self.0), f))
    }

    /// Runs an asynchronous check. Its failure becomes the pipeline's
    /// failure; its success is discarded in favour of the original value.
    pub fn tap_to_async_outcome<F, X, G, Fut>(
        self,
        f: G,
    ) -> AsyncOutcomeWrapper<impl Future<Output = Outcome<F, T>>>
    where
        T: Clone,
        G: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<F, X>>,
    {
        AsyncOutcomeWrapper::new(async_outcome::tap_success_to_async_outcome(
            async_outcome::construct_from_outcome(Outcome::Success(self.0)),
            f,
        ))
    }

    pub fn tap_to_async_sequence<G, Fut, I>(
        self,
        f: G,
    ) -> AsyncSequenceWrapper<impl Future<Output = Vec<T>>>
    where
        T: Clone,
        G: FnMut(T) -> Fut,
        Fut: Future<Output = I>,
        I: IntoIterator,
    {
        AsyncSequenceWrapper::new(async_sequence::tap_to_async_sequence(
            async_sequence::construct(self.0),
            f,
        ))
    }

    pub fn tap_to_outcome<F, X, G>(self, f: G) -> OutcomeWrapper<F, T>
    where
        G: FnOnce(&T) -> Outcome<F, X>,
    {
        OutcomeWrapper::new(outcome::tap_success_to_outcome(Outcome::Success(self.0), f))
    }

    pub fn tap_to_outcome_sequence<F, X, G>(self, f: G) -> OutcomeSequenceWrapper<F, T>
    where
        T: Clone,
        G: FnMut(&T) -> OutcomeSequence<F, X>,
    {
        OutcomeSequenceWrapper::new(outcome_sequence::tap_successes_to_outcome_sequence(
            outcome_sequence::construct_successes(self.0),
            f,
        ))
    }

    /// Repeats the value once per item the side effect yields.
    pub fn tap_to_sequence<G, I>(self, f: G) -> SequenceWrapper<T>
    where
        T: Clone,
        G: FnMut(&T) -> I,
        I: IntoIterator,
    {
        SequenceWrapper::new(sequence::tap_to_sequence(sequence::construct(self.0), f))
    }
}
