//! Combinators over a single [`Outcome`].
//!
//! Every function dispatches once on the track. The off-track value is passed
//! through untouched, and the step function is never called for it.
//!
//! # Examples
//!
//! ```
//! use trackway::Outcome;
//! use trackway::combinators::outcome::{map_success, map_success_to_outcome};
//!
//! fn sqrt(x: f64) -> Outcome<&'static str, f64> {
//!     if x < 0.0 { Outcome::Failure("negative") } else { Outcome::Success(x.sqrt()) }
//! }
//!
//! let ok = map_success(map_success_to_outcome(Outcome::Success(25.0), sqrt), |x| x + 1.0);
//! assert_eq!(ok, Outcome::Success(6.0));
//!
//! let bad = map_success(map_success_to_outcome(Outcome::Success(-25.0), sqrt), |x| x + 1.0);
//! assert_eq!(bad, Outcome::Failure("negative"));
//! ```
use crate::outcome::{Never, Outcome};

/// Create an outcome on the failure track that can never be a success.
#[inline]
pub fn of_failure<F>(value: F) -> Outcome<F, Never> {
    Outcome::Failure(value)
}

/// Create an outcome on the success track that can never be a failure.
#[inline]
pub fn of_success<S>(value: S) -> Outcome<Never, S> {
    Outcome::Success(value)
}

/// Transforms the failure payload, leaving a success untouched.
#[inline]
pub fn map_failure<F1, F2, S, G>(outcome: Outcome<F1, S>, f: G) -> Outcome<F2, S>
where
    G: FnOnce(F1) -> F2,
{
    match outcome {
        Outcome::Failure(e) => Outcome::Failure(f(e)),
        Outcome::Success(s) => Outcome::Success(s),
    }
}

/// Replaces a failure with the outcome returned by `f`.
///
/// This is the recovery flat-map: `f` may put the pipeline back on the
/// success track.
#[inline]
pub fn map_failure_to_outcome<F1, F2, S, G>(outcome: Outcome<F1, S>, f: G) -> Outcome<F2, S>
where
    G: FnOnce(F1) -> Outcome<F2, S>,
{
    match outcome {
        Outcome::Failure(e) => f(e),
        Outcome::Success(s) => Outcome::Success(s),
    }
}

/// Transforms the success payload, leaving a failure untouched.
#[inline]
pub fn map_success<F, S1, S2, G>(outcome: Outcome<F, S1>, f: G) -> Outcome<F, S2>
where
    G: FnOnce(S1) -> S2,
{
    match outcome {
        Outcome::Failure(e) => Outcome::Failure(e),
        Outcome::Success(s) => Outcome::Success(f(s)),
    }
}

/// Replaces a success with the outcome returned by `f`.
#[inline]
pub fn map_success_to_outcome<F, S1, S2, G>(outcome: Outcome<F, S1>, f: G) -> Outcome<F, S2>
where
    G: FnOnce(S1) -> Outcome<F, S2>,
{
    match outcome {
        Outcome::Failure(e) => Outcome::Failure(e),
        Outcome::Success(s) => f(s),
    }
}

/// Runs a side effect on the failure payload and returns the outcome unchanged.
#[inline]
pub fn tap_failure<F, S, G, R>(outcome: Outcome<F, S>, f: G) -> Outcome<F, S>
where
    G: FnOnce(&F) -> R,
{
    if let Outcome::Failure(e) = &outcome {
        let _ = f(e);
    }
    outcome
}

/// Runs a fallible side effect on the failure payload.
///
/// If the side effect fails, the original failure is kept. If it succeeds,
/// its success replaces the failure.
#[inline]
pub fn tap_failure_to_outcome<F, S, G, X>(outcome: Outcome<F, S>, f: G) -> Outcome<F, S>
where
    G: FnOnce(&F) -> Outcome<X, S>,
{
    match outcome {
        Outcome::Failure(e) => match f(&e) {
            Outcome::Failure(_) => Outcome::Failure(e),
            Outcome::Success(s) => Outcome::Success(s),
        },
        Outcome::Success(s) => Outcome::Success(s),
    }
}

/// Runs a side effect on the success payload and returns the outcome unchanged.
#[inline]
pub fn tap_success<F, S, G, R>(outcome: Outcome<F, S>, f: G) -> Outcome<F, S>
where
    G: FnOnce(&S) -> R,
{
    if let Outcome::Success(s) = &outcome {
        let _ = f(s);
    }
    outcome
}

/// Runs a fallible side effect on the success payload.
///
/// If the side effect fails, its failure replaces the success. If it
/// succeeds, the original success is kept.
#[inline]
pub fn tap_success_to_outcome<F, S, G, X>(outcome: Outcome<F, S>, f: G) -> Outcome<F, S>
where
    G: FnOnce(&S) -> Outcome<F, X>,
{
    match outcome {
        Outcome::Failure(e) => Outcome::Failure(e),
        Outcome::Success(s) => match f(&s) {
            Outcome::Failure(e) => Outcome::Failure(e),
            Outcome::Success(_) => Outcome::Success(s),
        },
    }
}
