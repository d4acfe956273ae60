use std::future::Future;

use super::{AsyncSequenceWrapper, OutcomeSequenceWrapper};
use crate::combinators::{async_sequence, outcome_sequence, sequence};
use crate::outcome::{Outcome, OutcomeSequence, Sequence};

sync_wrapper! {
    /// An ordered list of values, each of which goes through every step.
    SequenceWrapper<T>(Sequence<T>)
}

impl<T> SequenceWrapper<T> {
    #[inline]
    pub fn construct(value: T) -> Self {
        Self(sequence::construct(value))
    }

    #[inline]
    pub fn from_sequence(seq: Sequence<T>) -> Self {
        Self(seq)
    }

    pub fn map<T2, G>(self, f: G) -> SequenceWrapper<T2>
    where
        G: FnMut(T) -> T2,
    {
        SequenceWrapper(sequence::map(self.0, f))
    }

    /// Awaits `f` on each element, one after the other.
    pub fn map_to_async<T2, G, Fut>(self, f: G) -> AsyncSequenceWrapper<impl Future<Output = Vec<T2>>>
    where
        G: FnMut(T) -> Fut,
        Fut: Future<Output = T2>,
    {
        AsyncSequenceWrapper::new(async_sequence::map_to_async(
            async_sequence::construct_from_sequence(self.0),
            f,
        ))
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
            async_sequence::construct_from_sequence(self.0),
            f,
        ))
    }

    /// Runs a fallible step on each element, stopping at the first failure.
    pub fn map_to_outcome<F, S, G>(self, f: G) -> OutcomeSequenceWrapper<F, S>
    where
        G: FnMut(T) -> Outcome<F, S>,
    {
        OutcomeSequenceWrapper::new(outcome_sequence::map_successes_to_outcome(
            outcome_sequence::construct_successes_from_sequence(self.0),
            f,
        ))
    }

    pub fn map_to_outcome_sequence<F, S, G>(self, f: G) -> OutcomeSequenceWrapper<F, S>
    where
        G: FnMut(T) -> OutcomeSequence<F, S>,
    {
        OutcomeSequenceWrapper::new(outcome_sequence::map_successes_to_outcome_sequence(
            outcome_sequence::construct_successes_from_sequence(self.0),
            f,
        ))
    }

    pub fn map_to_sequence<T2, G, I>(self, f: G) -> SequenceWrapper<T2>
    where
        G: FnMut(T) -> I,
        I: IntoIterator<Item = T2>,
    {
        SequenceWrapper(sequence::map_to_sequence(self.0, f))
    }

    pub fn tap<G, R>(self, f: G) -> Self
    where
        G: FnMut(&T) -> R,
    {
        Self(sequence::tap(self.0, f))
    }

    pub fn tap_to_async<G, Fut>(self, f: G) -> AsyncSequenceWrapper<impl Future<Output = Vec<T>>>
    where
        T: Clone,
        G: FnMut(T) -> Fut,
        Fut: Future,
    {
        AsyncSequenceWrapper::new(async_sequence::tap_to_async(
            async_sequence::construct_from_sequence(self.0),
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
            async_sequence::construct_from_sequence(self.0),
            f,
        ))
    }

    pub fn tap_to_outcome<F, X, G>(self, f: G) -> OutcomeSequenceWrapper<F, T>
    where
        G: FnMut(&T) -> Outcome<F, X>,
    {
        OutcomeSequenceWrapper::new(outcome_sequence::tap_successes_to_outcome(
            outcome_sequence::construct_successes_from_sequence(self.0),
            f,
        ))
    }

    pub fn tap_to_outcome_sequence<F, X, G>(self, f: G) -> OutcomeSequenceWrapper<F, T>
    where
        T: Clone,
        G: FnMut(&T) -> OutcomeSequence<F, X>,
    {
        OutcomeSequenceWrapper::new(outcome_sequence::tap_successes_to_outcome_sequence(
            outcome_sequence::construct_successes_from_sequence(self.0),
            f,
        ))
    }

    pub fn tap_to_sequence<G, I>(self, f: G) -> Self
    where
        T: Clone,
        G: FnMut(&T) -> I,
        I: IntoIterator,
    {
        Self(sequence::tap_to_sequence(self.0, f))
    }
}
