//! Combinators over a future that resolves to an [`Outcome`].
//!
//! Synchronous steps are lifted from [`outcome`](super::outcome) through
//! [`async_scalar::map`](super::async_scalar::map). Asynchronous steps resolve
//! the receiver first and only then call the step, and only on the matching
//! track. Off-track values stay wrapped in a future even though no async work
//! happens for them.
use std::future::Future;

use futures::future::{FutureExt, Map, Ready};

use super::{async_scalar, outcome};
use crate::outcome::{Never, Outcome};

/// Create a resolved future holding a failure.
#[inline]
pub fn construct_failure<F>(value: F) -> Ready<Outcome<F, Never>> {
    async_scalar::construct(outcome::of_failure(value))
}

/// Create a resolved future holding a success.
#[inline]
pub fn construct_success<S>(value: S) -> Ready<Outcome<Never, S>> {
    async_scalar::construct(outcome::of_success(value))
}

/// Create a resolved future holding `o`.
#[inline]
pub fn construct_from_outcome<F, S>(o: Outcome<F, S>) -> Ready<Outcome<F, S>> {
    async_scalar::construct(o)
}

/// Puts the output of `fut` on the failure track.
pub fn construct_failure_from_async<F, S, Fut>(fut: Fut) -> Map<Fut, fn(F) -> Outcome<F, S>>
where
    Fut: Future<Output = F>,
{
    fut.map(Outcome::Failure as fn(F) -> Outcome<F, S>)
}

/// Puts the output of `fut` on the success track.
pub fn construct_success_from_async<F, S, Fut>(fut: Fut) -> Map<Fut, fn(S) -> Outcome<F, S>>
where
    Fut: Future<Output = S>,
{
    fut.map(Outcome::Success as fn(S) -> Outcome<F, S>)
}

pub fn map_failure<F1, F2, S, Fut, G>(fut: Fut, f: G) -> impl Future<Output = Outcome<F2, S>>
where
    Fut: Future<Output = Outcome<F1, S>>,
    G: FnOnce(F1) -> F2,
{
    async_scalar::map(fut, move |o| outcome::map_failure(o, f))
}

/// Resolves the receiver and, on a failure, awaits `f(failure)` as the new
/// failure payload.
pub async fn map_failure_to_async<F1, F2, S, Fut, G, Fut2>(fut: Fut, f: G) -> Outcome<F2, S>
where
    Fut: Future<Output = Outcome<F1, S>>,
    G: FnOnce(F1) -> Fut2,
    Fut2: Future<Output = F2>,
{
    match fut.await {
        Outcome::Failure(e) => Outcome::Failure(f(e).await),
        Outcome::Success(s) => Outcome::Success(s),
    }
}

pub fn map_failure_to_outcome<F1, F2, S, Fut, G>(
    fut: Fut,
    f: G,
) -> impl Future<Output = Outcome<F2, S>>
where
    Fut: Future<Output = Outcome<F1, S>>,
    G: FnOnce(F1) -> Outcome<F2, S>,
{
    async_scalar::map(fut, move |o| outcome::map_failure_to_outcome(o, f))
}

/// Resolves the receiver and, on a failure, replaces it with the outcome `f`
/// resolves to.
pub async fn map_failure_to_async_outcome<F1, F2, S, Fut, G, Fut2>(
    fut: Fut,
    f: G,
) -> Outcome<F2, S>
where
    Fut: Future<Output = Outcome<F1, S>>,
    G: FnOnce(F1) -> Fut2,
    Fut2: Future<Output = Outcome<F2, S>>,
{
    match fut.await {
        Outcome::Failure(e) => f(e).await,
        Outcome::Success(s) => Outcome::Success(s),
    }
}

pub fn map_success<F, S1, S2, Fut, G>(fut: Fut, f: G) -> impl Future<Output = Outcome<F, S2>>
where
    Fut: Future<Output = Outcome<F, S1>>,
    G: FnOnce(S1) -> S2,
{
    async_scalar::map(fut, move |o| outcome::map_success(o, f))
}

/// Resolves the receiver and, on a success, awaits `f(success)` as the new
/// success payload.
///
/// # Examples
///
/// ```
/// use futures::executor::block_on;
/// use trackway::Outcome;
/// use trackway::combinators::async_outcome::{construct_from_outcome, map_success_to_async};
///
/// let ok = Outcome::<&str, i32>::Success(2);
/// let doubled = map_success_to_async(construct_from_outcome(ok), |x| async move { x * 2 });
/// assert_eq!(block_on(doubled), Outcome::Success(4));
/// ```
pub async fn map_success_to_async<F, S1, S2, Fut, G, Fut2>(fut: Fut, f: G) -> Outcome<F, S2>
where
    Fut: Future<Output = Outcome<F, S1>>,
    G: FnOnce(S1) -> Fut2,
    Fut2: Future<Output = S2>,
{
    match fut.await {
        Outcome::Failure(e) => Outcome::Failure(e),
        Outcome::Success(s) => Outcome::Success(f(s).await),
    }
}

pub fn map_success_to_outcome<F, S1, S2, Fut, G>(
    fut: Fut,
    f: G,
) -> impl Future<Output = Outcome<F, S2>>
where
    Fut: Future<Output = Outcome<F, S1>>,
    G: FnOnce(S1) -> Outcome<F, S2>,
{
    async_scalar::map(fut, move |o| outcome::map_success_to_outcome(o, f))
}

/// The asynchronous flat-map: on a success, the outcome `f` resolves to
/// replaces the receiver's.
pub async fn map_success_to_async_outcome<F, S1, S2, Fut, G, Fut2>(
    fut: Fut,
    f: G,
) -> Outcome<F, S2>
where
    Fut: Future<Output = Outcome<F, S1>>,
    G: FnOnce(S1) -> Fut2,
    Fut2: Future<Output = Outcome<F, S2>>,
{
    match fut.await {
        Outcome::Failure(e) => Outcome::Failure(e),
        Outcome::Success(s) => f(s).await,
    }
}

pub fn tap_failure<F, S, Fut, G, R>(fut: Fut, f: G) -> impl Future<Output = Outcome<F, S>>
where
    Fut: Future<Output = Outcome<F, S>>,
    G: FnOnce(&F) -> R,
{
    async_scalar::map(fut, move |o| outcome::tap_failure(o, f))
}

pub async fn tap_failure_to_async<F, S, Fut, G, Fut2>(fut: Fut, f: G) -> Outcome<F, S>
where
    F: Clone,
    Fut: Future<Output = Outcome<F, S>>,
    G: FnOnce(F) -> Fut2,
    Fut2: Future,
{
    match fut.await {
        Outcome::Failure(e) => {
            let _ = f(e.clone()).await;
            Outcome::Failure(e)
        }
        Outcome::Success(s) => Outcome::Success(s),
    }
}

pub fn tap_failure_to_outcome<F, S, X, Fut, G>(
    fut: Fut,
    f: G,
) -> impl Future<Output = Outcome<F, S>>
where
    Fut: Future<Output = Outcome<F, S>>,
    G: FnOnce(&F) -> Outcome<X, S>,
{
    async_scalar::map(fut, move |o| outcome::tap_failure_to_outcome(o, f))
}

/// Runs an asynchronous, fallible side effect on a failure.
///
/// A failing side effect keeps the original failure; a succeeding one
/// replaces it with its success.
pub async fn tap_failure_to_async_outcome<F, S, X, Fut, G, Fut2>(
    fut: Fut,
    f: G,
) -> Outcome<F, S>
where
    F: Clone,
    Fut: Future<Output = Outcome<F, S>>,
    G: FnOnce(F) -> Fut2,
    Fut2: Future<Output = Outcome<X, S>>,
{
    match fut.await {
        Outcome::Failure(e) => match f(e.clone()).await {
            Outcome::Failure(_) => Outcome::Failure(e),
            Outcome::Success(s) => Outcome::Success(s),
        },
        Outcome::Success(s) => Outcome::Success(s),
    }
}

pub fn tap_success<F, S, Fut, G, R>(fut: Fut, f: G) -> impl Future<Output = Outcome<F, S>>
where
    Fut: Future<Output = Outcome<F, S>>,
    G: FnOnce(&S) -> R,
{
    async_scalar::map(fut, move |o| outcome::tap_success(o, f))
}

pub async fn tap_success_to_async<F, S, Fut, G, Fut2>(fut: Fut, f: G) -> Outcome<F, S>
where
    S: Clone,
    Fut: Future<Output = Outcome<F, S>>,
    G: FnOnce(S) -> Fut2,
    Fut2: Future,
{
    match fut.await {
        Outcome::Failure(e) => Outcome::Failure(e),
        Outcome::Success(s) => {
            let _ = f(s.clone()).await;
            Outcome::Success(s)
        }
    }
}

pub fn tap_success_to_outcome<F, S, X, Fut, G>(
    fut: Fut,
    f: G,
) -> impl Future<Output = Outcome<F, S>>
where
    Fut: Future<Output = Outcome<F, S>>,
    G: FnOnce(&S) -> Outcome<F, X>,
{
    async_scalar::map(fut, move |o| outcome::tap_success_to_outcome(o, f))
}

/// Runs an asynchronous, fallible side effect on a success.
///
/// A failing side effect replaces the success with its failure; a
/// succeeding one keeps the original success.
pub async fn tap_success_to_async_outcome<F, S, X, Fut, G, Fut2>(
    fut: Fut,
    f: G,
) -> Outcome<F, S>
where
    S: Clone,
    Fut: Future<Output = Outcome<F, S>>,
    G: FnOnce(S) -> Fut2,
    Fut2: Future<Output = Outcome<F, X>>,
{
    match fut.await {
        Outcome::Failure(e) => Outcome::Failure(e),
        Outcome::Success(s) => match f(s.clone()).await {
            Outcome::Failure(e) => Outcome::Failure(e),
            Outcome::Success(_) => Outcome::Success(s),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    fn ok(v: i32) -> Ready<Outcome<&'static str, i32>> {
        construct_from_outcome(Outcome::Success(v))
    }

    fn bad(e: &'static str) -> Ready<Outcome<&'static str, i32>> {
        construct_from_outcome(Outcome::Failure(e))
    }

    #[test]
    fn test_constructors() {
        assert_eq!(block_on(construct_failure(1)), Outcome::Failure(1));
        assert_eq!(block_on(construct_success(2)), Outcome::Success(2));
        assert_eq!(
            block_on(construct_failure_from_async::<_, (), _>(async { "late" })),
            Outcome::Failure("late")
        );
        assert_eq!(
            block_on(construct_success_from_async::<(), _, _>(async { 3 })),
            Outcome::Success(3)
        );
    }

    #[test]
    fn test_map_success_to_async_chain() {
        let log = RefCell::new(Vec::new());
        let double_slowly = |x: i32| {
            let log = &log;
            async move {
                futures::future::ready(()).await;
                log.borrow_mut().push(x);
                x * 2
            }
        };

        let fut = map_success_to_async(map_success_to_async(ok(1), double_slowly), double_slowly);
        assert_eq!(block_on(fut), Outcome::Success(4));
        assert_eq!(*log.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_map_success_to_async_skips_failure() {
        let called = Cell::new(false);
        let fut = map_success_to_async(bad("nope"), |x| {
            called.set(true);
            async move { x }
        });

        assert_eq!(block_on(fut), Outcome::Failure("nope"));
        assert!(!called.get());
    }

    #[test]
    fn test_map_success_to_async_outcome() {
        let halve = |x: i32| async move {
            if x % 2 == 0 {
                Outcome::Success(x / 2)
            } else {
                Outcome::Failure("odd")
            }
        };

        assert_eq!(block_on(map_success_to_async_outcome(ok(8), halve)), Outcome::Success(4));
        assert_eq!(block_on(map_success_to_async_outcome(ok(3), halve)), Outcome::Failure("odd"));
        assert_eq!(
            block_on(map_success_to_async_outcome(bad("early"), halve)),
            Outcome::Failure("early")
        );
    }

    #[test]
    fn test_sync_steps_match_outcome_combinators() {
        assert_eq!(block_on(map_success(ok(2), |x| x + 1)), Outcome::Success(3));
        assert_eq!(block_on(map_failure(bad("e"), str::len)), Outcome::Failure(1));
        assert_eq!(
            block_on(map_success_to_outcome(ok(2), |_| Outcome::Failure("stop"))),
            Outcome::<&str, i32>::Failure("stop")
        );
        assert_eq!(
            block_on(map_failure_to_outcome(bad("e"), |_| Outcome::<&str, i32>::Success(0))),
            Outcome::Success(0)
        );
    }

    #[test]
    fn test_failure_track_async_steps() {
        let recovered = map_failure_to_async_outcome(bad("retry"), |e| async move {
            if e == "retry" {
                Outcome::<&str, i32>::Success(9)
            } else {
                Outcome::Failure(e)
            }
        });
        assert_eq!(block_on(recovered), Outcome::Success(9));

        let renamed = map_failure_to_async(bad("e"), |e| async move { e.to_uppercase() });
        assert_eq!(block_on(renamed), Outcome::Failure("E".to_string()));
    }

    #[test]
    fn test_taps() {
        let seen = RefCell::new(Vec::new());

        let out = block_on(tap_success_to_async(ok(5), |x| {
            let seen = &seen;
            async move { seen.borrow_mut().push(x) }
        }));
        assert_eq!(out, Outcome::Success(5));

        let out = block_on(tap_failure(bad("x"), |_| seen.borrow_mut().push(-1)));
        assert_eq!(out, Outcome::Failure("x"));
        assert_eq!(*seen.borrow(), vec![5, -1]);

        let out = block_on(tap_success_to_async_outcome(ok(5), |_| async {
            Outcome::<&str, ()>::Failure("audit failed")
        }));
        assert_eq!(out, Outcome::Failure("audit failed"));

        let out = block_on(tap_failure_to_async_outcome(bad("x"), |_| async {
            Outcome::<(), i32>::Failure(())
        }));
        assert_eq!(out, Outcome::Failure("x"));

        let out = block_on(tap_success_to_outcome(ok(1), |_| Outcome::<&str, ()>::Success(())));
        assert_eq!(out, Outcome::Success(1));
    }
}
