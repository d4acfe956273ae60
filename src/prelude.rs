//! Commonly used imports
//!
//! Use `use trackway::prelude::*;` for quick access to the core types and
//! every wrapper.

// Core types
pub use crate::{Never, Outcome, OutcomeSequence, Sequence, Track, TrackError};

// Wrappers
pub use crate::wrapper::{
    AsyncOutcomeWrapper, AsyncSequenceWrapper, AsyncWrapper, OutcomeSequenceWrapper,
    OutcomeWrapper, SequenceWrapper, Wrapped, Wrapper,
};

// Composition
pub use crate::compose::Pipe;
pub use crate::{compose, pipe};
