use crate::combinators::outcome_sequence;
use crate::outcome::{Outcome, OutcomeSequence, Sequence, Track};

sync_wrapper! {
    /// Either one failure or an ordered list of successes.
    ///
    /// Element-wise fallible steps stop at the first failing element.
    OutcomeSequenceWrapper<F, S>(OutcomeSequence<F, S>)
}

impl<F, S> OutcomeSequenceWrapper<F, S> {
    #[inline]
    pub fn of_failure(value: F) -> Self {
        Self(outcome_sequence::construct_failure(value))
    }

    /// A success holding the single element `value`.
    #[inline]
    pub fn of_successes(value: S) -> Self {
        Self(outcome_sequence::construct_successes(value))
    }

    #[inline]
    pub fn from_sequence(seq: Sequence<S>) -> Self {
        Self(outcome_sequence::construct_successes_from_sequence(seq))
    }

    /// Lifts a scalar outcome; a success becomes a single-element list.
    #[inline]
    pub fn from_outcome(o: Outcome<F, S>) -> Self {
        Self(outcome_sequence::construct_from_outcome(o))
    }

    #[inline]
    pub fn track(&self) -> Track {
        self.0.track()
    }

    pub fn map_failure<F2, G>(self, f: G) -> OutcomeSequenceWrapper<F2, S>
    where
        G: FnOnce(F) -> F2,
    {
        OutcomeSequenceWrapper(outcome_sequence::map_failure(self.0, f))
    }

    pub fn map_failure_to_outcome<F2, G>(self, f: G) -> OutcomeSequenceWrapper<F2, S>
    where
        G: FnOnce(F) -> Outcome<F2, S>,
    {
        OutcomeSequenceWrapper(outcome_sequence::map_failure_to_outcome(self.0, f))
    }

    pub fn map_failure_to_outcome_sequence<F2, G>(self, f: G) -> OutcomeSequenceWrapper<F2, S>
    where
        G: FnOnce(F) -> OutcomeSequence<F2, S>,
    {
        OutcomeSequenceWrapper(outcome_sequence::map_failure_to_outcome_sequence(self.0, f))
    }

    pub fn map_failure_to_sequence<F2, G>(self, f: G) -> OutcomeSequenceWrapper<F2, S>
    where
        G: FnOnce(F) -> Sequence<S>,
    {
        OutcomeSequenceWrapper(outcome_sequence::map_failure_to_sequence(self.0, f))
    }

    pub fn map_successes<S2, G>(self, f: G) -> OutcomeSequenceWrapper<F, S2>
    where
        G: FnMut(S) -> S2,
    {
        OutcomeSequenceWrapper(outcome_sequence::map_successes(self.0, f))
    }

    pub fn map_successes_to_outcome<S2, G>(self, f: G) -> OutcomeSequenceWrapper<F, S2>
    where
        G: FnMut(S) -> Outcome<F, S2>,
    {
        OutcomeSequenceWrapper(outcome_sequence::map_successes_to_outcome(self.0, f))
    }

    pub fn map_successes_to_outcome_sequence<S2, G>(self, f: G) -> OutcomeSequenceWrapper<F, S2>
    where
        G: FnMut(S) -> OutcomeSequence<F, S2>,
    {
        OutcomeSequenceWrapper(outcome_sequence::map_successes_to_outcome_sequence(self.0, f))
    }

    pub fn map_successes_to_sequence<S2, G, I>(self, f: G) -> OutcomeSequenceWrapper<F, S2>
    where
        G: FnMut(S) -> I,
        I: IntoIterator<Item = S2>,
    {
        OutcomeSequenceWrapper(outcome_sequence::map_successes_to_sequence(self.0, f))
    }

    pub fn tap_failure<G, R>(self, f: G) -> Self
    where
        G: FnOnce(&F) -> R,
    {
        Self(outcome_sequence::tap_failure(self.0, f))
    }

    pub fn tap_failure_to_outcome<X, G>(self, f: G) -> Self
    where
        G: FnOnce(&F) -> Outcome<X, S>,
    {
        Self(outcome_sequence::tap_failure_to_outcome(self.0, f))
    }

    pub fn tap_failure_to_outcome_sequence<X, G>(self, f: G) -> Self
    where
        G: FnOnce(&F) -> OutcomeSequence<X, S>,
    {
        Self(outcome_sequence::tap_failure_to_outcome_sequence(self.0, f))
    }

    pub fn tap_failure_to_sequence<F2, G, I>(self, f: G) -> OutcomeSequenceWrapper<F2, S>
    where
        F: Clone + Into<S>,
        G: FnOnce(&F) -> I,
        I: IntoIterator,
    {
        OutcomeSequenceWrapper(outcome_sequence::tap_failure_to_sequence(self.0, f))
    }

    pub fn tap_successes<G, R>(self, f: G) -> Self
    where
        G: FnMut(&S) -> R,
    {
        Self(outcome_sequence::tap_successes(self.0, f))
    }

    pub fn tap_successes_to_outcome<X, G>(self, f: G) -> Self
    where
        G: FnMut(&S) -> Outcome<F, X>,
    {
        Self(outcome_sequence::tap_successes_to_outcome(self.0, f))
    }

    pub fn tap_successes_to_outcome_sequence<X, G>(self, f: G) -> Self
    where
        S: Clone,
        G: FnMut(&S) -> OutcomeSequence<F, X>,
    {
        Self(outcome_sequence::tap_successes_to_outcome_sequence(self.0, f))
    }

    pub fn tap_successes_to_sequence<G, I>(self, f: G) -> Self
    where
        S: Clone,
        G: FnMut(&S) -> I,
        I: IntoIterator,
    {
        Self(outcome_sequence::tap_successes_to_sequence(self.0, f))
    }
}
