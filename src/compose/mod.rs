//! Left-to-right function application.
//!
//! [`pipe!`](crate::pipe) and [`compose!`](crate::compose) chain steps whose
//! types change along the way. [`pipe`] and [`compose`] take a runtime list of
//! boxed steps of one type. [`Pipe`] adds `.pipe(f)` to every value.

mod macros;
mod pipe;

pub use pipe::{compose, pipe, BoxedStep, Pipe};
