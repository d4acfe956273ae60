//! Combinators over an [`OutcomeSequence`], an outcome whose success track
//! carries a sequence.
//!
//! Per-element steps that can fail are collapsed by one policy: the first
//! failure wins and no later element is visited. If every element succeeds,
//! the successes are flattened into one sequence in element order.
//!
//! # Examples
//!
//! ```
//! use trackway::Outcome;
//! use trackway::combinators::outcome_sequence::{
//!     construct_successes_from_sequence, map_successes, map_successes_to_sequence,
//! };
//!
//! let os = construct_successes_from_sequence::<&str, _>(vec![1, 2, 3]);
//! let os = map_successes(os, |x| x * 2);
//! let os = map_successes_to_sequence(os, |x| [x, -x]);
//! assert_eq!(os, Outcome::Success(vec![2, -2, 4, -4, 6, -6]));
//! ```
use super::{outcome, sequence};
use crate::outcome::{Outcome, OutcomeSequence, Sequence};

/// Create a failed outcome sequence.
#[inline]
pub fn construct_failure<F, S>(value: F) -> OutcomeSequence<F, S> {
    Outcome::Failure(value)
}

/// Lifts an outcome: a success becomes a single-element sequence.
#[inline]
pub fn construct_from_outcome<F, S>(o: Outcome<F, S>) -> OutcomeSequence<F, S> {
    outcome::map_success(o, sequence::construct)
}

/// Create a successful outcome sequence with a single element.
#[inline]
pub fn construct_successes<F, S>(value: S) -> OutcomeSequence<F, S> {
    Outcome::Success(sequence::construct(value))
}

#[inline]
pub fn construct_successes_from_sequence<F, S>(seq: Sequence<S>) -> OutcomeSequence<F, S> {
    Outcome::Success(seq)
}

pub fn map_failure<F1, F2, S, G>(os: OutcomeSequence<F1, S>, f: G) -> OutcomeSequence<F2, S>
where
    G: FnOnce(F1) -> F2,
{
    outcome::map_failure(os, f)
}

/// Recovers a failure through `f`; a recovered success becomes a
/// single-element sequence.
pub fn map_failure_to_outcome<F1, F2, S, G>(
    os: OutcomeSequence<F1, S>,
    f: G,
) -> OutcomeSequence<F2, S>
where
    G: FnOnce(F1) -> Outcome<F2, S>,
{
    outcome::map_failure_to_outcome(os, move |e| construct_from_outcome(f(e)))
}

pub fn map_failure_to_outcome_sequence<F1, F2, S, G>(
    os: OutcomeSequence<F1, S>,
    f: G,
) -> OutcomeSequence<F2, S>
where
    G: FnOnce(F1) -> OutcomeSequence<F2, S>,
{
    outcome::map_failure_to_outcome(os, f)
}

/// Recovers a failure into zero or more successes.
///
/// The result is always a success, so its failure type is left to the
/// caller. An empty recovery is `Success([])`, not an error.
///
/// # Examples
///
/// ```
/// use trackway::Outcome;
/// use trackway::combinators::outcome_sequence::map_failure_to_sequence;
///
/// let recovered: Outcome<(), Vec<i32>> =
///     map_failure_to_sequence(Outcome::Failure("not found"), |_| vec![]);
/// assert_eq!(recovered, Outcome::Success(vec![]));
/// ```
pub fn map_failure_to_sequence<F1, F2, S, G>(
    os: OutcomeSequence<F1, S>,
    f: G,
) -> OutcomeSequence<F2, S>
where
    G: FnOnce(F1) -> Sequence<S>,
{
    match os {
        Outcome::Failure(e) => Outcome::Success(f(e)),
        Outcome::Success(seq) => Outcome::Success(seq),
    }
}

pub fn map_successes<F, S1, S2, G>(os: OutcomeSequence<F, S1>, f: G) -> OutcomeSequence<F, S2>
where
    G: FnMut(S1) -> S2,
{
    outcome::map_success(os, move |seq| sequence::map(seq, f))
}

/// Applies a fallible `f` to every success, stopping at the first failure.
///
/// Elements are visited left to right. Once `f` fails, that failure is
/// returned and `f` is not called on any later element.
///
/// # Examples
///
/// ```
/// use trackway::Outcome;
/// use trackway::combinators::outcome_sequence::map_successes_to_outcome;
///
/// let check = |x: i32| if x > 0 { Outcome::Success(x * 2) } else { Outcome::Failure("bad") };
///
/// assert_eq!(map_successes_to_outcome(Outcome::Success(vec![1, 2]), check), Outcome::Success(vec![2, 4]));
/// assert_eq!(map_successes_to_outcome(Outcome::Success(vec![1, -1, 2]), check), Outcome::Failure("bad"));
/// ```
pub fn map_successes_to_outcome<F, S1, S2, G>(
    os: OutcomeSequence<F, S1>,
    mut f: G,
) -> OutcomeSequence<F, S2>
where
    G: FnMut(S1) -> Outcome<F, S2>,
{
    map_successes_to_outcome_sequence(os, move |s| construct_from_outcome(f(s)))
}

/// Applies `f` to every success and concatenates the success sequences,
/// stopping at the first failure.
pub fn map_successes_to_outcome_sequence<F, S1, S2, G>(
    os: OutcomeSequence<F, S1>,
    mut f: G,
) -> OutcomeSequence<F, S2>
where
    G: FnMut(S1) -> OutcomeSequence<F, S2>,
{
    outcome::map_success_to_outcome(os, move |seq| {
        let mut out = Vec::with_capacity(seq.len());
        for (index, s) in seq.into_iter().enumerate() {
            match f(s) {
                Outcome::Failure(e) => {
                    tracing::trace!(index, "element failed, short-circuiting");
                    return Outcome::Failure(e);
                }
                Outcome::Success(more) => out.extend(more),
            }
        }
        Outcome::Success(out)
    })
}

pub fn map_successes_to_sequence<F, S1, S2, G, I>(
    os: OutcomeSequence<F, S1>,
    f: G,
) -> OutcomeSequence<F, S2>
where
    G: FnMut(S1) -> I,
    I: IntoIterator<Item = S2>,
{
    outcome::map_success(os, move |seq| sequence::map_to_sequence(seq, f))
}

pub fn tap_failure<F, S, G, R>(os: OutcomeSequence<F, S>, f: G) -> OutcomeSequence<F, S>
where
    G: FnOnce(&F) -> R,
{
    outcome::tap_failure(os, f)
}

/// Runs a fallible side effect on a failure.
///
/// A failing side effect keeps the original failure. A succeeding one
/// replaces it with its success as a single-element sequence.
pub fn tap_failure_to_outcome<F, S, X, G>(os: OutcomeSequence<F, S>, f: G) -> OutcomeSequence<F, S>
where
    G: FnOnce(&F) -> Outcome<X, S>,
{
    outcome::tap_failure_to_outcome(os, move |e| construct_from_outcome(f(e)))
}

pub fn tap_failure_to_outcome_sequence<F, S, X, G>(
    os: OutcomeSequence<F, S>,
    f: G,
) -> OutcomeSequence<F, S>
where
    G: FnOnce(&F) -> OutcomeSequence<X, S>,
{
    outcome::tap_failure_to_outcome(os, f)
}

/// Runs a sequence-returning side effect on a failure and turns the failure
/// into successes, one copy of the failure payload per item the side effect
/// yields.
pub fn tap_failure_to_sequence<F1, F2, S, G, I>(
    os: OutcomeSequence<F1, S>,
    f: G,
) -> OutcomeSequence<F2, S>
where
    F1: Clone + Into<S>,
    G: FnOnce(&F1) -> I,
    I: IntoIterator,
{
    map_failure_to_sequence(os, move |e| {
        let items: Vec<_> = f(&e).into_iter().collect();
        if items.is_empty() {
            tracing::trace!("side effect produced no items, dropping failure");
        }
        items.into_iter().map(|_| e.clone().into()).collect()
    })
}

pub fn tap_successes<F, S, G, R>(os: OutcomeSequence<F, S>, f: G) -> OutcomeSequence<F, S>
where
    G: FnMut(&S) -> R,
{
    outcome::map_success(os, move |seq| sequence::tap(seq, f))
}

/// Runs a fallible side effect on every success, stopping at the first
/// failure. Successful side effects keep the original element.
pub fn tap_successes_to_outcome<F, S, X, G>(
    os: OutcomeSequence<F, S>,
    mut f: G,
) -> OutcomeSequence<F, S>
where
    G: FnMut(&S) -> Outcome<F, X>,
{
    map_successes_to_outcome(os, move |s| {
        outcome::tap_success_to_outcome(Outcome::Success(s), &mut f)
    })
}

/// Runs a fallible, sequence-returning side effect on every success.
///
/// The first failing side effect wins. Otherwise each element is repeated
/// once per item in its side effect's success sequence.
pub fn tap_successes_to_outcome_sequence<F, S, X, G>(
    os: OutcomeSequence<F, S>,
    mut f: G,
) -> OutcomeSequence<F, S>
where
    S: Clone,
    G: FnMut(&S) -> OutcomeSequence<F, X>,
{
    map_successes_to_outcome_sequence(os, move |s| {
        let effect = f(&s);
        outcome::map_success(effect, |xs| xs.into_iter().map(|_| s.clone()).collect())
    })
}

/// Runs a sequence-returning side effect on every success and repeats each
/// element once per item it yields. An empty result drops the element.
///
/// # Examples
///
/// ```
/// use trackway::Outcome;
/// use trackway::combinators::outcome_sequence::tap_successes_to_sequence;
///
/// let os: Outcome<(), Vec<i32>> = Outcome::Success(vec![1, 2]);
/// assert_eq!(
///     tap_successes_to_sequence(os, |x| vec![*x; 2]),
///     Outcome::Success(vec![1, 1, 2, 2])
/// );
/// ```
pub fn tap_successes_to_sequence<F, S, G, I>(os: OutcomeSequence<F, S>, f: G) -> OutcomeSequence<F, S>
where
    S: Clone,
    G: FnMut(&S) -> I,
    I: IntoIterator,
{
    outcome::map_success(os, move |seq| sequence::tap_to_sequence(seq, f))
}
