use std::future::Future;

use super::{AsyncOutcomeWrapper, OutcomeSequenceWrapper};
use crate::combinators::{async_outcome, outcome, outcome_sequence};
use crate::outcome::{Outcome, OutcomeSequence, Sequence, Track};

sync_wrapper! {
    /// A two-track value. Failure-track methods only act on a failure,
    /// success-track methods only on a success.
    ///
    /// ```
    /// use trackway::wrapper::OutcomeWrapper;
    /// use trackway::Outcome;
    ///
    /// let w = OutcomeWrapper::<String, _>::of_success(25.0_f64)
    ///     .map_success_to_outcome(|x| {
    ///         if x < 0.0 { Outcome::Failure("negative".to_string()) } else { Outcome::Success(x.sqrt()) }
    ///     })
    ///     .map_failure(|e| e.to_uppercase());
    /// assert_eq!(w.into_value(), Outcome::Success(5.0));
    /// ```
    OutcomeWrapper<F, S>(Outcome<F, S>)
}

impl<F, S> OutcomeWrapper<F, S> {
    #[inline]
    pub fn of_failure(value: F) -> Self {
        Self(Outcome::Failure(value))
    }

    #[inline]
    pub fn of_success(value: S) -> Self {
        Self(Outcome::Success(value))
    }

    #[inline]
    pub fn from_outcome(o: Outcome<F, S>) -> Self {
        Self(o)
    }

    #[inline]
    pub fn track(&self) -> Track {
        self.0.track()
    }

    pub fn map_failure<F2, G>(self, f: G) -> OutcomeWrapper<F2, S>
    where
        G: FnOnce(F) -> F2,
    {
        OutcomeWrapper(outcome::map_failure(self.0, f))
    }

    pub fn map_failure_to_async<F2, G, Fut>(
        self,
        f: G,
    ) -> AsyncOutcomeWrapper<impl Future<Output = Outcome<F2, S>>>
    where
        G: FnOnce(F) -> Fut,
        Fut: Future<Output = F2>,
    {
        AsyncOutcomeWrapper::new(async_outcome::map_failure_to_async(
            async_outcome::construct_from_outcome(self.0),
            f,
        ))
    }

    pub fn map_failure_to_async_outcome<F2, G, Fut>(
        self,
        f: G,
    ) -> AsyncOutcomeWrapper<impl Future<Output = Outcome<F2, S>>>
    where
        G: FnOnce(F) -> Fut,
        Fut: Future<Output = Outcome<F2, S>>,
    {
        AsyncOutcomeWrapper::new(async_outcome::map_failure_to_async_outcome(
            async_outcome::construct_from_outcome(self.0),
            f,
        ))
    }

    /// Gives a failure the chance to recover onto the success track.
    pub fn map_failure_to_outcome<F2, G>(self, f: G) -> OutcomeWrapper<F2, S>
    where
        G: FnOnce(F) -> Outcome<F2, S>,
    {
        OutcomeWrapper(outcome::map_failure_to_outcome(self.0, f))
    }

    pub fn map_failure_to_outcome_sequence<F2, G>(self, f: G) -> OutcomeSequenceWrapper<F2, S>
    where
        G: FnOnce(F) -> OutcomeSequence<F2, S>,
    {
        OutcomeSequenceWrapper::new(outcome_sequence::map_failure_to_outcome_sequence(
            outcome_sequence::construct_from_outcome(self.0),
            f,
        ))
    }

    /// Recovers a failure into zero or more successes. The result is always
    /// on the success track.
    pub fn map_failure_to_sequence<F2, G>(self, f: G) -> OutcomeSequenceWrapper<F2, S>
    where
        G: FnOnce(F) -> Sequence<S>,
    {
        OutcomeSequenceWrapper::new(outcome_sequence::map_failure_to_sequence(
            outcome_sequence::construct_from_outcome(self.0),
            f,
        ))
    }

    pub fn map_success<S2, G>(self, f: G) -> OutcomeWrapper<F, S2>
    where
        G: FnOnce(S) -> S2,
    {
        OutcomeWrapper(outcome::map_success(self.0, f))
    }

    pub fn map_success_to_async<S2, G, Fut>(
        self,
        f: G,
    ) -> AsyncOutcomeWrapper<impl Future<Output = Outcome<F, S2>>>
    where
        G: FnOnce(S) -> Fut,
        Fut: Future<Output = S2>,
    {
        AsyncOutcomeWrapper::new(async_outcome::map_success_to_async(
            async_outcome::construct_from_outcome(self.0),
            f,
        ))
    }

    pub fn map_success_to_async_outcome<S2, G, Fut>(
        self,
        f: G,
    ) -> AsyncOutcomeWrapper<impl Future<Output = Outcome<F, S2>>>
    where
        G: FnOnce(S) -> Fut,
        Fut: Future<Output = Outcome<F, S2>>,
    {
        AsyncOutcomeWrapper::new(async_outcome::map_success_to_async_outcome(
            async_outcome::construct_from_outcome(self.0),
            f,
        ))
    }

    pub fn map_success_to_outcome<S2, G>(self, f: G) -> OutcomeWrapper<F, S2>
    where
        G: FnOnce(S) -> Outcome<F, S2>,
    {
        OutcomeWrapper(outcome::map_success_to_outcome(self.0, f))
    }

    pub fn map_success_to_outcome_sequence<S2, G>(self, f: G) -> OutcomeSequenceWrapper<F, S2>
    where
        G: FnMut(S) -> OutcomeSequence<F, S2>,
    {
        OutcomeSequenceWrapper::new(outcome_sequence::map_successes_to_outcome_sequence(
            outcome_sequence::construct_from_outcome(self.0),
            f,
        ))
    }

    pub fn map_success_to_sequence<S2, G, I>(self, f: G) -> OutcomeSequenceWrapper<F, S2>
    where
        G: FnMut(S) -> I,
        I: IntoIterator<Item = S2>,
    {
        OutcomeSequenceWrapper::new(outcome_sequence::map_successes_to_sequence(
            outcome_sequence::construct_from_outcome(self.0),
            f,
        ))
    }

    pub fn tap_failure<G, R>(self, f: G) -> Self
    where
        G: FnOnce(&F) -> R,
    {
        Self(outcome::tap_failure(self.0, f))
    }

    pub fn tap_failure_to_async<G, Fut>(
        self,
        f: G,
    ) -> AsyncOutcomeWrapper<impl Future<Output = Outcome<F, S>>>
    where
        F: Clone,
        G: FnOnce(F) -> Fut,
        Fut: Future,
    {
        AsyncOutcomeWrapper::new(async_outcome::tap_failure_to_async(
            async_outcome::construct_from_outcome(self.0),
            f,
        ))
    }

    pub fn tap_failure_to_async_outcome<X, G, Fut>(
        self,
        f: G,
    ) -> AsyncOutcomeWrapper<impl Future<Output = Outcome<F, S>>>
    where
        F: Clone,
        G: FnOnce(F) -> Fut,
        Fut: Future<Output = Outcome<X, S>>,
    {
        AsyncOutcomeWrapper::new(async_outcome::tap_failure_to_async_outcome(
            async_outcome::construct_from_outcome(self.0),
            f,
        ))
    }

    pub fn tap_failure_to_outcome<X, G>(self, f: G) -> Self
    where
        G: FnOnce(&F) -> Outcome<X, S>,
    {
        Self(outcome::tap_failure_to_outcome(self.0, f))
    }

    pub fn tap_failure_to_outcome_sequence<X, G>(self, f: G) -> OutcomeSequenceWrapper<F, S>
    where
        G: FnOnce(&F) -> OutcomeSequence<X, S>,
    {
        OutcomeSequenceWrapper::new(outcome_sequence::tap_failure_to_outcome_sequence(
            outcome_sequence::construct_from_outcome(self.0),
            f,
        ))
    }

    /// Turns a failure into successes, one copy of the failure payload per
    /// item the side effect yields.
    pub fn tap_failure_to_sequence<F2, G, I>(self, f: G) -> OutcomeSequenceWrapper<F2, S>
    where
        F: Clone + Into<S>,
        G: FnOnce(&F) -> I,
        I: IntoIterator,
    {
        OutcomeSequenceWrapper::new(outcome_sequence::tap_failure_to_sequence(
            outcome_sequence::construct_from_outcome(self.0),
            f,
        ))
    }

    pub fn tap_success<G, R>(self, f: G) -> Self
    where
        G: FnOnce(&S) -> R,
    {
        Self(outcome::tap_success(self.0, f))
    }

    pub fn tap_success_to_async<G, Fut>(
        self,
        f: G,
    ) -> AsyncOutcomeWrapper<impl Future<Output = Outcome<F, S>>>
    where
        S: Clone,
        G: FnOnce(S) -> Fut,
        Fut: Future,
    {
        AsyncOutcomeWrapper::new(async_outcome::tap_success_to_async(
            async_outcome::construct_from_outcome(self.0),
            f,
        ))
    }

    pub fn tap_success_to_async_outcome<X, G, Fut>(
        self,
        f: G,
    ) -> AsyncOutcomeWrapper<impl Future<Output = Outcome<F, S>>>
    where
        S: Clone,
        G: FnOnce(S) -> Fut,
        Fut: Future<Output = Outcome<F, X>>,
    {
        AsyncOutcomeWrapper::new(async_outcome::tap_success_to_async_outcome(
            async_outcome::construct_from_outcome(self.0),
            f,
        ))
    }

    /// Validates a success. A failing check replaces the success with its
    /// failure.
    pub fn tap_success_to_outcome<X, G>(self, f: G) -> Self
    where
        G: FnOnce(&S) -> Outcome<F, X>,
    {
        Self(outcome::tap_success_to_outcome(self.0, f))
    }

    pub fn tap_success_to_outcome_sequence<X, G>(self, f: G) -> OutcomeSequenceWrapper<F, S>
    where
        S: Clone,
        G: FnMut(&S) -> OutcomeSequence<F, X>,
    {
        OutcomeSequenceWrapper::new(outcome_sequence::tap_successes_to_outcome_sequence(
            outcome_sequence::construct_from_outcome(self.0),
            f,
        ))
    }

    pub fn tap_success_to_sequence<G, I>(self, f: G) -> OutcomeSequenceWrapper<F, S>
    where
        S: Clone,
        G: FnMut(&S) -> I,
        I: IntoIterator,
    {
        OutcomeSequenceWrapper::new(outcome_sequence::tap_successes_to_sequence(
            outcome_sequence::construct_from_outcome(self.0),
            f,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    type W = OutcomeWrapper<&'static str, i32>;

    #[test]
    fn test_constructors_and_track() {
        assert_eq!(W::of_failure("e").track(), Track::Failure);
        assert_eq!(W::of_success(1).track(), Track::Success);
        assert_eq!(W::from_outcome(Outcome::Success(2)).into_value(), Outcome::Success(2));
    }

    #[test]
    fn test_success_steps_skip_failures() {
        let called = Cell::new(false);
        let w = W::of_failure("boom")
            .map_success(|x| {
                called.set(true);
                x + 1
            })
            .map_success_to_outcome(|x| Outcome::Success(x * 2))
            .tap_success(|_| called.set(true));
        assert_eq!(w.into_value(), Outcome::Failure("boom"));
        assert!(!called.get());
    }

    #[test]
    fn test_failure_recovery() {
        let w = W::of_failure("boom").map_failure_to_outcome(|e| Outcome::<(), _>::Success(e.len() as i32));
        assert_eq!(w.into_value(), Outcome::Success(4));

        let w = W::of_failure("boom").map_failure_to_sequence::<(), _>(|_| vec![]);
        assert_eq!(w.into_value(), Outcome::Success(vec![]));

        let w = W::of_failure("boom").map_failure_to_sequence::<(), _>(|_| vec![1, 2]);
        assert_eq!(w.into_value(), Outcome::Success(vec![1, 2]));

        let w = W::of_failure("boom")
            .map_failure_to_outcome_sequence(|e| Outcome::Failure(e.to_uppercase()));
        assert_eq!(w.into_value(), Outcome::Failure("BOOM".to_string()));
    }

    #[test]
    fn test_success_to_sequence() {
        let w = W::of_success(3).map_success_to_sequence(|x| vec![x; 2]);
        assert_eq!(w.into_value(), Outcome::Success(vec![3, 3]));

        let w = W::of_success(3).map_success_to_outcome_sequence(|x| Outcome::Success(vec![x, -x]));
        assert_eq!(w.into_value(), Outcome::Success(vec![3, -3]));

        let w = W::of_success(3).tap_success_to_sequence(|_| 0..3);
        assert_eq!(w.into_value(), Outcome::Success(vec![3, 3, 3]));

        let w = W::of_success(3).tap_success_to_outcome_sequence(|_| Outcome::<_, Vec<()>>::Failure("no"));
        assert_eq!(w.into_value(), Outcome::<_, Vec<i32>>::Failure("no"));
    }

    #[test]
    fn test_fallible_taps() {
        let w = W::of_success(3).tap_success_to_outcome(|_| Outcome::<_, ()>::Failure("rejected"));
        assert_eq!(w.into_value(), Outcome::Failure("rejected"));

        let w = W::of_failure("boom").tap_failure_to_outcome(|_| Outcome::<(), _>::Success(0));
        assert_eq!(w.into_value(), Outcome::Success(0));

        let w = W::of_failure("boom").tap_failure_to_outcome(|_| Outcome::Failure(()));
        assert_eq!(w.into_value(), Outcome::Failure("boom"));

        let w = W::of_failure("boom")
            .tap_failure_to_outcome_sequence(|_| Outcome::<(), _>::Success(vec![7, 8]));
        assert_eq!(w.into_value(), Outcome::Success(vec![7, 8]));

        let w = OutcomeWrapper::<i32, i64>::of_failure(4).tap_failure_to_sequence::<(), _, _>(|_| [(); 2]);
        assert_eq!(w.into_value(), Outcome::Success(vec![4_i64, 4]));
    }

    #[test]
    fn test_async_steps() {
        let w = W::of_success(2).map_success_to_async(|x| async move { x * 10 });
        assert_eq!(block_on(w.resolve()), Outcome::Success(20));

        let w = W::of_success(2).map_success_to_async_outcome(|_| async { Outcome::<_, i32>::Failure("late") });
        assert_eq!(block_on(w.resolve()), Outcome::<_, i32>::Failure("late"));

        let w = W::of_failure("boom").map_failure_to_async(|e| async move { e.len() });
        assert_eq!(block_on(w.resolve()), Outcome::Failure(4));

        let w = W::of_failure("boom")
            .map_failure_to_async_outcome(|_| async { Outcome::<(), _>::Success(1) });
        assert_eq!(block_on(w.resolve()), Outcome::Success(1));

        let seen = Cell::new(0);
        let w = W::of_success(6).tap_success_to_async(|x| {
            seen.set(x);
            async {}
        });
        assert_eq!(block_on(w.resolve()), Outcome::Success(6));
        assert_eq!(seen.get(), 6);

        let w = W::of_failure("boom").tap_failure_to_async(|_| async {});
        assert_eq!(block_on(w.resolve()), Outcome::Failure("boom"));

        let w = W::of_success(6).tap_success_to_async_outcome(|_| async { Outcome::<_, ()>::Failure("no") });
        assert_eq!(block_on(w.resolve()), Outcome::Failure("no"));

        let w = W::of_failure("boom")
            .tap_failure_to_async_outcome(|_| async { Outcome::<(), _>::Success(9) });
        assert_eq!(block_on(w.resolve()), Outcome::Success(9));
    }
}
