use std::future::Future;

use futures::future::Ready;

use super::{AsyncOutcomeWrapper, AsyncSequenceWrapper};
use crate::combinators::{async_outcome, async_scalar, async_sequence};
use crate::outcome::Outcome;

async_wrapper! {
    /// A value that becomes available later.
    ///
    /// Steps run only once the wrapper is awaited, each after the previous
    /// one has finished.
    AsyncWrapper
}

impl<T> AsyncWrapper<Ready<T>> {
    #[inline]
    pub fn construct(value: T) -> Self {
        Self(async_scalar::construct(value))
    }
}

impl<Fut: Future> AsyncWrapper<Fut> {
    #[inline]
    pub fn from_async(fut: Fut) -> Self {
        Self(fut)
    }
}

impl<T, Fut> AsyncWrapper<Fut>
where
    Fut: Future<Output = T>,
{
    pub fn map<T2, G>(self, f: G) -> AsyncWrapper<impl Future<Output = T2>>
    where
        G: FnOnce(T) -> T2,
    {
        AsyncWrapper(async_scalar::map(self.0, f))
    }

    pub fn map_to_async<T2, G, Fut2>(self, f: G) -> AsyncWrapper<impl Future<Output = T2>>
    where
        G: FnOnce(T) -> Fut2,
        Fut2: Future<Output = T2>,
    {
        AsyncWrapper(async_scalar::map_to_async(self.0, f))
    }

    pub fn map_to_async_outcome<F, S, G, Fut2>(
        self,
        f: G,
    ) -> AsyncOutcomeWrapper<impl Future<Output = Outcome<F, S>>>
    where
        G: FnOnce(T) -> Fut2,
        Fut2: Future<Output = Outcome<F, S>>,
    {
        AsyncOutcomeWrapper::new(async_scalar::map_to_async(self.0, f))
    }

    pub fn map_to_async_sequence<T2, G, Fut2, I>(
        self,
        f: G,
    ) -> AsyncSequenceWrapper<impl Future<Output = Vec<T2>>>
    where
        G: FnMut(T) -> Fut2,
        Fut2: Future<Output = I>,
        I: IntoIterator<Item = T2>,
    {
        AsyncSequenceWrapper::new(async_sequence::map_to_async_sequence(
            async_sequence::construct_from_async(self.0),
            f,
        ))
    }

    pub fn map_to_outcome<F, S, G>(self, f: G) -> AsyncOutcomeWrapper<impl Future<Output = Outcome<F, S>>>
    where
        G: FnOnce(T) -> Outcome<F, S>,
    {
        AsyncOutcomeWrapper::new(async_outcome::map_success_to_outcome(
            async_outcome::construct_success_from_async(self.0),
            f,
        ))
    }

    pub fn map_to_sequence<T2, G, I>(self, f: G) -> AsyncSequenceWrapper<impl Future<Output = Vec<T2>>>
    where
        G: FnMut(T) -> I,
        I: IntoIterator<Item = T2>,
    {
        AsyncSequenceWrapper::new(async_sequence::map_to_sequence(
            async_sequence::construct_from_async(self.0),
            f,
        ))
    }

    pub fn tap<G, R>(self, f: G) -> AsyncWrapper<impl Future<Output = T>>
    where
        G: FnOnce(&T) -> R,
    {
        AsyncWrapper(async_scalar::tap(self.0, f))
    }

    pub fn tap_to_async<G, Fut2>(self, f: G) -> AsyncWrapper<impl Future<Output = T>>
    where
        T: Clone,
        G: FnOnce(T) -> Fut2,
        Fut2: Future,
    {
        AsyncWrapper(async_scalar::tap_to_async(self.0, f))
    }

    pub fn tap_to_async_outcome<F, X, G, Fut2>(
        self,
        f: G,
    ) -> AsyncOutcomeWrapper<impl Future<Output = Outcome<F, T>>>
    where
        T: Clone,
        G: FnOnce(T) -> Fut2,
        Fut2: Future<Output = Outcome<F, X>>,
    {
        AsyncOutcomeWrapper::new(async_outcome::tap_success_to_async_outcome(
            async_outcome::construct_success_from_async(self.0),
            f,
        ))
    }

    pub fn tap_to_async_sequence<G, Fut2, I>(
        self,
        f: G,
    ) -> AsyncSequenceWrapper<impl Future<Output = Vec<T>>>
    where
        T: Clone,
        G: FnMut(T) -> Fut2,
        Fut2: Future<Output = I>,
        I: IntoIterator,
    {
        AsyncSequenceWrapper::new(async_sequence::tap_to_async_sequence(
            async_sequence::construct_from_async(self.0),
            f,
        ))
    }

    pub fn tap_to_outcome<F, X, G>(self, f: G) -> AsyncOutcomeWrapper<impl Future<Output = Outcome<F, T>>>
    where
        G: FnOnce(&T) -> Outcome<F, X>,
    {
        AsyncOutcomeWrapper::new(async_outcome::tap_success_to_outcome(
            async_outcome::construct_success_from_async(self.0),
            f,
        ))
    }

    pub fn tap_to_sequence<G, I>(self, f: G) -> AsyncSequenceWrapper<impl Future<Output = Vec<T>>>
    where
        T: Clone,
        G: FnMut(&T) -> I,
        I: IntoIterator,
    {
        AsyncSequenceWrapper::new(async_sequence::tap_to_sequence(
            async_sequence::construct_from_async(self.0),
            f,
        ))
    }
}
