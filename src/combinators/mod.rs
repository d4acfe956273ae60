//! Free-function combinators, one module per domain.
//!
//! The leaf modules ([`outcome`], [`sequence`], [`async_scalar`]) each cover
//! one axis. The composite modules ([`async_outcome`], [`async_sequence`],
//! [`outcome_sequence`]) are built by composing the leaves, so a step behaves
//! the same way on every path that reaches it.
pub mod async_outcome;
pub mod async_scalar;
pub mod async_sequence;
pub mod outcome;
pub mod outcome_sequence;
pub mod sequence;
