//! Method-chaining wrappers over the combinator modules.
//!
//! Each wrapper owns one domain value and exposes that domain's combinators
//! as methods. A method whose step returns a richer shape hands back the
//! wrapper for that shape, so a pipeline widens as it goes:
//!
//! ```
//! use trackway::wrapper::Wrapper;
//! use trackway::Outcome;
//!
//! let parsed = Wrapper::construct("12")
//!     .map(str::trim)
//!     .map_to_outcome(|s| Outcome::from(s.parse::<u8>()))
//!     .map_success(|n| n * 2);
//! assert_eq!(parsed.into_value(), Outcome::Success(24));
//! ```
//!
//! Every method is a thin delegation to [`combinators`](crate::combinators),
//! so chaining and calling the free functions behave identically.

/// Boilerplate shared by every wrapper: the newtype itself plus
/// `new`, `core`, `into_core`, `From<core>` and [`Wrapped`].
macro_rules! wrapper_common {
    ($(#[$meta:meta])* $name:ident<$($param:ident),+>($core:ty)) => {
        $(#[$meta])*
        pub struct $name<$($param),+>($core);

        impl<$($param),+> $name<$($param),+> {
            #[inline]
            pub fn new(core: $core) -> Self {
                Self(core)
            }

            #[inline]
            pub fn core(&self) -> &$core {
                &self.0
            }

            #[inline]
            pub fn into_core(self) -> $core {
                self.0
            }
        }

        impl<$($param),+> From<$core> for $name<$($param),+> {
            fn from(core: $core) -> Self {
                Self(core)
            }
        }

        impl<$($param),+> $crate::wrapper::Wrapped for $name<$($param),+> {
            type Core = $core;

            fn from_core(core: $core) -> Self {
                Self(core)
            }

            fn core(&self) -> &$core {
                &self.0
            }

            fn into_core(self) -> $core {
                self.0
            }
        }
    };
}

/// A wrapper around an already available value.
macro_rules! sync_wrapper {
    ($(#[$meta:meta])* $name:ident<$($param:ident),+>($core:ty)) => {
        wrapper_common! {
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq, Hash)]
            $name<$($param),+>($core)
        }

        impl<$($param),+> $name<$($param),+> {
            /// Borrow the wrapped value.
            #[inline]
            pub fn value(&self) -> &$core {
                &self.0
            }

            /// End the chain and return the wrapped value.
            #[inline]
            pub fn into_value(self) -> $core {
                self.0
            }
        }
    };
}

/// A wrapper around a future. Awaiting the wrapper awaits the future.
macro_rules! async_wrapper {
    ($(#[$meta:meta])* $name:ident) => {
        wrapper_common! {
            $(#[$meta])*
            #[derive(Debug, Clone)]
            #[must_use = "futures do nothing unless you `.await` or poll them"]
            $name<Fut>(Fut)
        }

        impl<Fut: std::future::Future> $name<Fut> {
            /// End the chain and await the result.
            pub async fn resolve(self) -> Fut::Output {
                self.0.await
            }
        }

        impl<Fut: std::future::Future> std::future::IntoFuture for $name<Fut> {
            type Output = Fut::Output;
            type IntoFuture = Fut;

            fn into_future(self) -> Fut {
                self.0
            }
        }
    };
}

mod async_outcome;
mod async_scalar;
mod async_sequence;
mod outcome;
mod outcome_sequence;
mod scalar;
mod sequence;

pub use async_outcome::AsyncOutcomeWrapper;
pub use async_scalar::AsyncWrapper;
pub use async_sequence::AsyncSequenceWrapper;
pub use outcome::OutcomeWrapper;
pub use outcome_sequence::OutcomeSequenceWrapper;
pub use scalar::Wrapper;
pub use sequence::SequenceWrapper;

/// Access to the value held by any wrapper, for code generic over wrappers.
pub trait Wrapped: Sized {
    /// The domain value the wrapper holds.
    type Core;

    fn from_core(core: Self::Core) -> Self;

    fn core(&self) -> &Self::Core;

    fn into_core(self) -> Self::Core;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Outcome;

    fn unwrap_any<W: Wrapped>(w: W) -> W::Core {
        w.into_core()
    }

    fn rewrap<W: Wrapped>(w: W) -> W {
        W::from_core(w.into_core())
    }

    #[test]
    fn test_wrapped_round_trips_core() {
        assert_eq!(unwrap_any(Wrapper::construct(3)), 3);
        assert_eq!(unwrap_any(SequenceWrapper::from_sequence(vec![1, 2])), vec![1, 2]);

        let w: OutcomeWrapper<&str, i32> = Outcome::Failure("e").into();
        assert_eq!(Wrapped::core(&w), &Outcome::Failure("e"));
        assert_eq!(rewrap(w.clone()), w);
        assert_eq!(unwrap_any(w), Outcome::Failure("e"));
    }

    #[test]
    fn test_async_wrapper_is_awaitable() {
        let w = AsyncWrapper::construct(5).map(|x| x + 1);
        assert_eq!(futures::executor::block_on(async { w.await }), 6);

        let w = AsyncSequenceWrapper::from_sequence(vec![1, 2]);
        assert_eq!(futures::executor::block_on(w.resolve()), vec![1, 2]);
    }
}
