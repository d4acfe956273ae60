use std::future::Future;

use futures::future::{Map, Ready};

use crate::combinators::async_outcome;
use crate::outcome::Outcome;

async_wrapper! {
    /// A two-track value that becomes available later.
    ///
    /// ```
    /// use futures::executor::block_on;
    /// use trackway::wrapper::AsyncOutcomeWrapper;
    /// use trackway::Outcome;
    ///
    /// let w = AsyncOutcomeWrapper::from_outcome(Outcome::<&str, _>::Success(1))
    ///     .map_success_to_async(|x| async move { x * 2 })
    ///     .map_success_to_async(|x| async move { x * 2 });
    /// assert_eq!(block_on(w.resolve()), Outcome::Success(4));
    /// ```
    AsyncOutcomeWrapper
}

impl<F, S> AsyncOutcomeWrapper<Ready<Outcome<F, S>>> {
    #[inline]
    pub fn of_failure(value: F) -> Self {
        Self::from_outcome(Outcome::Failure(value))
    }

    #[inline]
    pub fn of_success(value: S) -> Self {
        Self::from_outcome(Outcome::Success(value))
    }

    #[inline]
    pub fn from_outcome(o: Outcome<F, S>) -> Self {
        Self(async_outcome::construct_from_outcome(o))
    }
}

impl<F, S, Fut> AsyncOutcomeWrapper<Map<Fut, fn(F) -> Outcome<F, S>>>
where
    Fut: Future<Output = F>,
{
    /// Puts the output of `fut` on the failure track.
    pub fn failure_from_async(fut: Fut) -> Self {
        Self(async_outcome::construct_failure_from_async(fut))
    }
}

impl<F, S, Fut> AsyncOutcomeWrapper<Map<Fut, fn(S) -> Outcome<F, S>>>
where
    Fut: Future<Output = S>,
{
    /// Puts the output of `fut` on the success track.
    pub fn success_from_async(fut: Fut) -> Self {
        Self(async_outcome::construct_success_from_async(fut))
    }
}

impl<F, S, Fut> AsyncOutcomeWrapper<Fut>
where
    Fut: Future<Output = Outcome<F, S>>,
{
    #[inline]
    pub fn from_async_outcome(fut: Fut) -> Self {
        Self(fut)
    }

    pub fn map_failure<F2, G>(self, f: G) -> AsyncOutcomeWrapper<impl Future<Output = Outcome<F2, S>>>
    where
        G: FnOnce(F) -> F2,
    {
        AsyncOutcomeWrapper(async_outcome::map_failure(self.0, f))
    }

    pub fn map_failure_to_async<F2, G, Fut2>(
        self,
        f: G,
    ) -> AsyncOutcomeWrapper<impl Future<Output = Outcome<F2, S>>>
    where
        G: FnOnce(F) -> Fut2,
        Fut2: Future<Output = F2>,
    {
        AsyncOutcomeWrapper(async_outcome::map_failure_to_async(self.0, f))
    }

    pub fn map_failure_to_async_outcome<F2, G, Fut2>(
        self,
        f: G,
    ) -> AsyncOutcomeWrapper<impl Future<Output = Outcome<F2, S>>>
    where
        G: FnOnce(F) -> Fut2,
        Fut2: Future<Output = Outcome<F2, S>>,
    {
        AsyncOutcomeWrapper(async_outcome::map_failure_to_async_outcome(self.0, f))
    }

    pub fn map_failure_to_outcome<F2, G>(
        self,
        f: G,
    ) -> AsyncOutcomeWrapper<impl Future<Output = Outcome<F2, S>>>
    where
        G: FnOnce(F) -> Outcome<F2, S>,
    {
        AsyncOutcomeWrapper(async_outcome::map_failure_to_outcome(self.0, f))
    }

    pub fn map_success<S2, G>(self, f: G) -> AsyncOutcomeWrapper<impl Future<Output = Outcome<F, S2>>>
    where
        G: FnOnce(S) -> S2,
    {
        AsyncOutcomeWrapper(async_outcome::map_success(self.0, f))
    }

    /// Awaits `f` on a success and keeps its output on the success track.
    pub fn map_success_to_async<S2, G, Fut2>(
        self,
        f: G,
    ) -> AsyncOutcomeWrapper<impl Future<Output = Outcome<F, S2>>>
    where
        G: FnOnce(S) -> Fut2,
        Fut2: Future<Output = S2>,
    {
        AsyncOutcomeWrapper(async_outcome::map_success_to_async(self.0, f))
    }

    pub fn map_success_to_async_outcome<S2, G, Fut2>(
        self,
        f: G,
    ) -> AsyncOutcomeWrapper<impl Future<Output = Outcome<F, S2>>>
    where
        G: FnOnce(S) -> Fut2,
        Fut2: Future<Output = Outcome<F, S2>>,
    {
        AsyncOutcomeWrapper(async_outcome::map_success_to_async_outcome(self.0, f))
    }

    pub fn map_success_to_outcome<S2, G>(
        self,
        f: G,
    ) -> AsyncOutcomeWrapper<impl Future<Output = Outcome<F, S2>>>
    where
        G: FnOnce(S) -> Outcome<F, S2>,
    {
        AsyncOutcomeWrapper(async_outcome::map_success_to_outcome(self.0, f))
    }

    pub fn tap_failure<G, R>(self, f: G) -> AsyncOutcomeWrapper<impl Future<Output = Outcome<F, S>>>
    where
        G: FnOnce(&F) -> R,
    {
        AsyncOutcomeWrapper(async_outcome::tap_failure(self.0, f))
    }

    pub fn tap_failure_to_async<G, Fut2>(
        self,
        f: G,
    ) -> AsyncOutcomeWrapper<impl Future<Output = Outcome<F, S>>>
    where
        F: Clone,
        G: FnOnce(F) -> Fut2,
        Fut2: Future,
    {
        AsyncOutcomeWrapper(async_outcome::tap_failure_to_async(self.0, f))
    }

    pub fn tap_failure_to_async_outcome<X, G, Fut2>(
        self,
        f: G,
    ) -> AsyncOutcomeWrapper<impl Future<Output = Outcome<F, S>>>
    where
        F: Clone,
        G: FnOnce(F) -> Fut2,
        Fut2: Future<Output = Outcome<X, S>>,
    {
        AsyncOutcomeWrapper(async_outcome::tap_failure_to_async_outcome(self.0, f))
    }

    pub fn tap_failure_to_outcome<X, G>(
        self,
        f: G,
    ) -> AsyncOutcomeWrapper<impl Future<Output = Outcome<F, S>>>
    where
        G: FnOnce(&F) -> Outcome<X, S>,
    {
        AsyncOutcomeWrapper(async_outcome::tap_failure_to_outcome(self.0, f))
    }

    pub fn tap_success<G, R>(self, f: G) -> AsyncOutcomeWrapper<impl Future<Output = Outcome<F, S>>>
    where
        G: FnOnce(&S) -> R,
    {
        AsyncOutcomeWrapper(async_outcome::tap_success(self.0, f))
    }

    pub fn tap_success_to_async<G, Fut2>(
        self,
        f: G,
    ) -> AsyncOutcomeWrapper<impl Future<Output = Outcome<F, S>>>
    where
        S: Clone,
        G: FnOnce(S) -> Fut2,
        Fut2: Future,
    {
        AsyncOutcomeWrapper(async_outcome::tap_success_to_async(self.0, f))
    }

    pub fn tap_success_to_async_outcome<X, G, Fut2>(
        self,
        f: G,
    ) -> AsyncOutcomeWrapper<impl Future<Output = Outcome<F, S>>>
    where
        S: Clone,
        G: FnOnce(S) -> Fut2,
        Fut2: Future<Output = Outcome<F, X>>,
    {
        AsyncOutcomeWrapper(async_outcome::tap_success_to_async_outcome(self.0, f))
    }

    pub fn tap_success_to_outcome<X, G>(
        self,
        f: G,
    ) -> AsyncOutcomeWrapper<impl Future<Output = Outcome<F, S>>>
    where
        G: FnOnce(&S) -> Outcome<F, X>,
    {
        AsyncOutcomeWrapper(async_outcome::tap_success_to_outcome(self.0, f))
    }
}
