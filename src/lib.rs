//! # Trackway: Two-Track Pipelines
//!
//! Chain steps over values that may have failed, may hold several elements,
//! or may only be available later, and let each step run only where it
//! applies.
//!
//! ## Core Types
//!
//! - **[`Outcome<F, S>`]**: a value on the failure track or the success track
//! - **[`Sequence<T>`]**: an ordered list of values, each going through every step
//! - **[`OutcomeSequence<F, S>`]**: one failure, or a list of successes
//! - Any [`Future`](std::future::Future) of the above, for values that arrive later
//!
//! ## Key Features
//!
//! - **Track isolation**: success steps skip failures and failure steps skip successes
//! - **Fail-fast**: element-wise fallible steps stop at the first failing element
//! - **Widening**: a step returning a richer shape moves the pipeline into it
//! - **Sequential async**: every future is awaited once, in call order
//!
//! ## Example
//!
//! ```
//! use trackway::prelude::*;
//!
//! fn sqrt_if_non_negative(x: f64) -> Outcome<String, f64> {
//!     if x < 0.0 {
//!         Outcome::Failure(format!("{x} is negative"))
//!     } else {
//!         Outcome::Success(x.sqrt())
//!     }
//! }
//!
//! let roots = SequenceWrapper::from_sequence(vec![4.0, 9.0, -1.0, 16.0])
//!     .map_to_outcome(sqrt_if_non_negative)
//!     .map_successes(|r| r as i64);
//! assert_eq!(roots.into_value(), Outcome::Failure("-1 is negative".to_string()));
//! ```
//!
//! ## Layers
//!
//! **Combinators** ([`combinators`]): free functions taking the value first
//! and the step second, one module per shape.
//!
//! **Wrappers** ([`wrapper`]): method-chaining types over the same
//! combinators. Each method delegates to exactly one combinator.
//!
//! **Composition** ([`compose`]): [`pipe!`] and [`compose!`] for left-to-right
//! application of plain functions.

pub mod combinators;
pub mod compose;
pub mod error;
pub mod outcome;
pub mod prelude;
pub mod wrapper;

pub use error::TrackError;
pub use outcome::{Never, Outcome, OutcomeSequence, Sequence, Track};
pub use wrapper::{
    AsyncOutcomeWrapper, AsyncSequenceWrapper, AsyncWrapper, OutcomeSequenceWrapper,
    OutcomeWrapper, SequenceWrapper, Wrapped, Wrapper,
};
