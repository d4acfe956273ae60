//! Combinators over a value that becomes available later.
//!
//! The async value is any [`Future`]. Every combinator awaits the receiver
//! exactly once, then applies its step. Nothing is polled concurrently and
//! nothing is cached.
use std::future::Future;

use futures::future::{self, FutureExt, Ready};

/// Wrap an already available value as a resolved future.
#[inline]
pub fn construct<T>(value: T) -> Ready<T> {
    future::ready(value)
}

/// Resolves `fut` and applies the synchronous `f` to its output.
pub fn map<T1, T2, Fut, G>(fut: Fut, f: G) -> impl Future<Output = T2>
where
    Fut: Future<Output = T1>,
    G: FnOnce(T1) -> T2,
{
    fut.map(f)
}

/// Resolves `fut`, then resolves the future returned by `f`.
///
/// # Examples
///
/// ```
/// use futures::executor::block_on;
/// use trackway::combinators::async_scalar::{construct, map_to_async};
///
/// let doubled = map_to_async(construct(21), |x| async move { x * 2 });
/// assert_eq!(block_on(doubled), 42);
/// ```
pub fn map_to_async<T1, T2, Fut, G, Fut2>(fut: Fut, f: G) -> impl Future<Output = T2>
where
    Fut: Future<Output = T1>,
    G: FnOnce(T1) -> Fut2,
    Fut2: Future<Output = T2>,
{
    fut.then(f)
}

/// Runs a side effect on the resolved value and yields it unchanged.
pub fn tap<T, Fut, G, R>(fut: Fut, f: G) -> impl Future<Output = T>
where
    Fut: Future<Output = T>,
    G: FnOnce(&T) -> R,
{
    fut.inspect(move |t| {
        let _ = f(t);
    })
}

/// Runs an asynchronous side effect on a clone of the resolved value.
///
/// The side effect is awaited to completion before the original value is
/// yielded.
pub async fn tap_to_async<T, Fut, G, Fut2>(fut: Fut, f: G) -> T
where
    T: Clone,
    Fut: Future<Output = T>,
    G: FnOnce(T) -> Fut2,
    Fut2: Future,
{
    let t = fut.await;
    let _ = f(t.clone()).await;
    t
}
