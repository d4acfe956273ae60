use thiserror::Error;

use crate::outcome::Track;

/// Errors raised when an [`Outcome`](crate::Outcome) is read on the wrong track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum TrackError {
    /// The outcome sits on `found`, but the caller asked for `expected`.
    #[error("expected a {expected} outcome, found a {found} outcome")]
    WrongTrack { expected: Track, found: Track },
}

impl TrackError {
    pub(crate) fn wrong_track(expected: Track) -> Self {
        TrackError::WrongTrack {
            expected,
            found: expected.opposite(),
        }
    }
}
