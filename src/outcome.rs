use std::fmt;

use either::Either;

use crate::error::TrackError;

/// A value that cannot exist.
///
/// Used as the payload type of a track that cannot occur, e.g. the failure
/// track of [`of_success`](crate::combinators::outcome::of_success).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Never {}

impl Never {
    /// Converts the impossible value into any type.
    #[inline]
    pub fn absurd<T>(self) -> T {
        match self {}
    }
}

impl fmt::Display for Never {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl std::error::Error for Never {}

/// Which of the two tracks an [`Outcome`] occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Track {
    Failure,
    Success,
}

impl Track {
    #[inline]
    pub const fn opposite(self) -> Track {
        match self {
            Track::Failure => Track::Success,
            Track::Success => Track::Failure,
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Track::Failure => f.write_str("failure"),
            Track::Success => f.write_str("success"),
        }
    }
}

/// Result of a two-track computation, either a failure or a success.
///
/// `Outcome` is the data half of the railway: it carries no behaviour beyond
/// its tag and payload. Pipelines are built from the functions in
/// [`combinators`](crate::combinators) or the chaining types in
/// [`wrapper`](crate::wrapper).
///
/// # Examples
///
/// ```rust
/// use trackway::Outcome;
///
/// let ok: Outcome<&str, i32> = Outcome::Success(42);
/// let bad: Outcome<&str, i32> = Outcome::Failure("negative");
///
/// assert!(ok.is_success());
/// assert_eq!(bad.failure(), Some("negative"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Outcome<F, S> {
    /// The failure track
    Failure(F),
    /// The success track
    Success(S),
}

/// An ordered collection of values, the payload of the sequence combinators.
pub type Sequence<T> = Vec<T>;

/// An outcome whose success track carries a sequence.
pub type OutcomeSequence<F, S> = Outcome<F, Sequence<S>>;

impl<F, S> Outcome<F, S> {
    /// Returns `true` if the outcome is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trackway::Outcome;
    ///
    /// let x: Outcome<&str, i32> = Outcome::Failure("negative");
    /// assert!(x.is_failure());
    ///
    /// let y: Outcome<&str, i32> = Outcome::Success(5);
    /// assert!(!y.is_failure());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Returns `true` if the outcome is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// The track this outcome occupies.
    #[inline]
    pub const fn track(&self) -> Track {
        match self {
            Outcome::Failure(_) => Track::Failure,
            Outcome::Success(_) => Track::Success,
        }
    }

    /// Converts from `Outcome<F, S>` to `Option<F>`, discarding a success.
    #[inline]
    pub fn failure(self) -> Option<F> {
        match self {
            Outcome::Failure(f) => Some(f),
            Outcome::Success(_) => None,
        }
    }

    /// Converts from `Outcome<F, S>` to `Option<S>`, discarding a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trackway::Outcome;
    ///
    /// let x: Outcome<&str, i32> = Outcome::Success(5);
    /// assert_eq!(x.success(), Some(5));
    ///
    /// let y: Outcome<&str, i32> = Outcome::Failure("negative");
    /// assert_eq!(y.success(), None);
    /// ```
    #[inline]
    pub fn success(self) -> Option<S> {
        match self {
            Outcome::Failure(_) => None,
            Outcome::Success(s) => Some(s),
        }
    }

    /// Borrows the failure payload, or reports which track was found instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trackway::{Outcome, Track, TrackError};
    ///
    /// let x: Outcome<&str, i32> = Outcome::Success(5);
    /// assert_eq!(
    ///     x.try_failure(),
    ///     Err(TrackError::WrongTrack { expected: Track::Failure, found: Track::Success })
    /// );
    /// ```
    #[inline]
    pub fn try_failure(&self) -> Result<&F, TrackError> {
        match self {
            Outcome::Failure(f) => Ok(f),
            Outcome::Success(_) => Err(TrackError::wrong_track(Track::Failure)),
        }
    }

    /// Borrows the success payload, or reports which track was found instead.
    #[inline]
    pub fn try_success(&self) -> Result<&S, TrackError> {
        match self {
            Outcome::Failure(_) => Err(TrackError::wrong_track(Track::Success)),
            Outcome::Success(s) => Ok(s),
        }
    }

    #[inline]
    pub fn failure_or(self, default: F) -> F {
        match self {
            Outcome::Failure(f) => f,
            Outcome::Success(_) => default,
        }
    }

    #[inline]
    pub fn failure_or_else<G>(self, g: G) -> F
    where
        G: FnOnce(S) -> F,
    {
        match self {
            Outcome::Failure(f) => f,
            Outcome::Success(s) => g(s),
        }
    }

    #[inline]
    pub fn success_or(self, default: S) -> S {
        match self {
            Outcome::Failure(_) => default,
            Outcome::Success(s) => s,
        }
    }

    #[inline]
    pub fn success_or_else<G>(self, g: G) -> S
    where
        G: FnOnce(F) -> S,
    {
        match self {
            Outcome::Failure(f) => g(f),
            Outcome::Success(s) => s,
        }
    }

    #[inline]
    pub const fn as_ref(&self) -> Outcome<&F, &S> {
        match self {
            Outcome::Failure(f) => Outcome::Failure(f),
            Outcome::Success(s) => Outcome::Success(s),
        }
    }

    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut F, &mut S> {
        match self {
            Outcome::Failure(f) => Outcome::Failure(f),
            Outcome::Success(s) => Outcome::Success(s),
        }
    }

    /// Swaps the tracks: a failure becomes a success and vice versa.
    #[inline]
    pub fn flip(self) -> Outcome<S, F> {
        match self {
            Outcome::Failure(f) => Outcome::Success(f),
            Outcome::Success(s) => Outcome::Failure(s),
        }
    }

    #[inline]
    pub fn contains_failure<U>(&self, f: &U) -> bool
    where
        U: PartialEq<F>,
    {
        matches!(self, Outcome::Failure(v) if f == v)
    }

    #[inline]
    pub fn contains_success<U>(&self, s: &U) -> bool
    where
        U: PartialEq<S>,
    {
        matches!(self, Outcome::Success(v) if s == v)
    }

    /// Converts into a `std` [`Result`], with the success on `Ok`.
    #[inline]
    pub fn into_result(self) -> Result<S, F> {
        match self {
            Outcome::Failure(f) => Err(f),
            Outcome::Success(s) => Ok(s),
        }
    }

    #[inline]
    pub fn expect_failure(self, msg: &str) -> F {
        match self {
            Outcome::Failure(f) => f,
            Outcome::Success(_) => panic!("{}", msg),
        }
    }

    #[inline]
    pub fn expect_success(self, msg: &str) -> S {
        match self {
            Outcome::Failure(_) => panic!("{}", msg),
            Outcome::Success(s) => s,
        }
    }

    #[inline]
    pub fn unwrap_failure(self) -> F {
        match self {
            Outcome::Failure(f) => f,
            Outcome::Success(_) => {
                panic!("called `Outcome::unwrap_failure()` on a `Success` value")
            }
        }
    }

    #[inline]
    pub fn unwrap_success(self) -> S {
        match self {
            Outcome::Failure(_) => {
                panic!("called `Outcome::unwrap_success()` on a `Failure` value")
            }
            Outcome::Success(s) => s,
        }
    }
}

impl<S> Outcome<Never, S> {
    /// Gives a success-only outcome a concrete failure type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trackway::Outcome;
    /// use trackway::combinators::outcome::of_success;
    ///
    /// let widened: Outcome<String, i32> = of_success(3).widen_failure();
    /// assert_eq!(widened, Outcome::Success(3));
    /// ```
    #[inline]
    pub fn widen_failure<F>(self) -> Outcome<F, S> {
        match self {
            Outcome::Failure(never) => never.absurd(),
            Outcome::Success(s) => Outcome::Success(s),
        }
    }

    /// Extracts the success payload; there is no other track to fall back on.
    #[inline]
    pub fn into_success(self) -> S {
        match self {
            Outcome::Failure(never) => never.absurd(),
            Outcome::Success(s) => s,
        }
    }
}

impl<F> Outcome<F, Never> {
    /// Gives a failure-only outcome a concrete success type.
    #[inline]
    pub fn widen_success<S>(self) -> Outcome<F, S> {
        match self {
            Outcome::Failure(f) => Outcome::Failure(f),
            Outcome::Success(never) => never.absurd(),
        }
    }

    #[inline]
    pub fn into_failure(self) -> F {
        match self {
            Outcome::Failure(f) => f,
            Outcome::Success(never) => never.absurd(),
        }
    }
}

impl<F, S> From<Result<S, F>> for Outcome<F, S> {
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(s) => Outcome::Success(s),
            Err(f) => Outcome::Failure(f),
        }
    }
}

impl<F, S> From<Outcome<F, S>> for Result<S, F> {
    fn from(outcome: Outcome<F, S>) -> Self {
        outcome.into_result()
    }
}

impl<F, S> From<Either<F, S>> for Outcome<F, S> {
    fn from(either: Either<F, S>) -> Self {
        match either {
            Either::Left(f) => Outcome::Failure(f),
            Either::Right(s) => Outcome::Success(s),
        }
    }
}

impl<F, S> From<Outcome<F, S>> for Either<F, S> {
    fn from(outcome: Outcome<F, S>) -> Self {
        match outcome {
            Outcome::Failure(f) => Either::Left(f),
            Outcome::Success(s) => Either::Right(s),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Never {
    fn serialize<Z: serde::Serializer>(&self, _: Z) -> Result<Z::Ok, Z::Error> {
        match *self {}
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Never {
    fn deserialize<D: serde::Deserializer<'de>>(_: D) -> Result<Self, D::Error> {
        Err(serde::de::Error::custom("a value of type `Never` cannot exist"))
    }
}
