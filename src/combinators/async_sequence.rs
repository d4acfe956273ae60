//! Combinators over a future that resolves to a [`Sequence`].
//!
//! Per-element asynchronous steps are awaited one at a time, in element order.
use std::future::Future;

use futures::future::{FutureExt, Map, Ready};

use super::{async_scalar, sequence};
use crate::outcome::Sequence;

/// Create a resolved future holding a single-element sequence.
#[inline]
pub fn construct<T>(value: T) -> Ready<Sequence<T>> {
    async_scalar::construct(sequence::construct(value))
}

/// Turns the output of `fut` into a single-element sequence.
pub fn construct_from_async<T, Fut>(fut: Fut) -> Map<Fut, fn(T) -> Sequence<T>>
where
    Fut: Future<Output = T>,
{
    fut.map(sequence::construct as fn(T) -> Sequence<T>)
}

#[inline]
pub fn construct_from_sequence<T>(seq: Sequence<T>) -> Ready<Sequence<T>> {
    async_scalar::construct(seq)
}

pub fn map<T1, T2, Fut, G>(fut: Fut, f: G) -> impl Future<Output = Sequence<T2>>
where
    Fut: Future<Output = Sequence<T1>>,
    G: FnMut(T1) -> T2,
{
    async_scalar::map(fut, move |seq| sequence::map(seq, f))
}

/// Resolves the sequence, then awaits `f` on each element in turn.
///
/// # Examples
///
/// ```
/// use futures::executor::block_on;
/// use trackway::combinators::async_sequence::{construct_from_sequence, map_to_async};
///
/// let doubled = map_to_async(construct_from_sequence(vec![1, 2]), |x| async move { x * 2 });
/// assert_eq!(block_on(doubled), vec![2, 4]);
/// ```
pub async fn map_to_async<T1, T2, Fut, G, Fut2>(fut: Fut, mut f: G) -> Sequence<T2>
where
    Fut: Future<Output = Sequence<T1>>,
    G: FnMut(T1) -> Fut2,
    Fut2: Future<Output = T2>,
{
    let seq = fut.await;
    let mut out = Vec::with_capacity(seq.len());
    for t in seq {
        out.push(f(t).await);
    }
    out
}

/// Resolves the sequence, awaits `f` on each element in turn and
/// concatenates the resulting sequences.
pub async fn map_to_async_sequence<T1, T2, Fut, G, Fut2, I>(fut: Fut, mut f: G) -> Sequence<T2>
where
    Fut: Future<Output = Sequence<T1>>,
    G: FnMut(T1) -> Fut2,
    Fut2: Future<Output = I>,
    I: IntoIterator<Item = T2>,
{
    let mut out = Vec::new();
    for t in fut.await {
        out.extend(f(t).await);
    }
    out
}

pub fn map_to_sequence<T1, T2, Fut, G, I>(fut: Fut, f: G) -> impl Future<Output = Sequence<T2>>
where
    Fut: Future<Output = Sequence<T1>>,
    G: FnMut(T1) -> I,
    I: IntoIterator<Item = T2>,
{
    async_scalar::map(fut, move |seq| sequence::map_to_sequence(seq, f))
}

pub fn tap<T, Fut, G, R>(fut: Fut, f: G) -> impl Future<Output = Sequence<T>>
where
    Fut: Future<Output = Sequence<T>>,
    G: FnMut(&T) -> R,
{
    async_scalar::map(fut, move |seq| sequence::tap(seq, f))
}

/// Awaits an asynchronous side effect on a clone of each element, in order,
/// and yields the original sequence.
pub async fn tap_to_async<T, Fut, G, Fut2>(fut: Fut, mut f: G) -> Sequence<T>
where
    T: Clone,
    Fut: Future<Output = Sequence<T>>,
    G: FnMut(T) -> Fut2,
    Fut2: Future,
{
    let seq = fut.await;
    for t in &seq {
        let _ = f(t.clone()).await;
    }
    seq
}

/// Awaits a sequence-returning side effect on each element and repeats the
/// element once per item it yields.
pub async fn tap_to_async_sequence<T, Fut, G, Fut2, I>(fut: Fut, mut f: G) -> Sequence<T>
where
    T: Clone,
    Fut: Future<Output = Sequence<T>>,
    G: FnMut(T) -> Fut2,
    Fut2: Future<Output = I>,
    I: IntoIterator,
{
    let mut out = Vec::new();
    for (index, t) in fut.await.into_iter().enumerate() {
        let before = out.len();
        out.extend(f(t.clone()).await.into_iter().map(|_| t.clone()));
        if out.len() == before {
            tracing::trace!(index, "side effect produced no items, dropping element");
        }
    }
    out
}

pub fn tap_to_sequence<T, Fut, G, I>(fut: Fut, f: G) -> impl Future<Output = Sequence<T>>
where
    T: Clone,
    Fut: Future<Output = Sequence<T>>,
    G: FnMut(&T) -> I,
    I: IntoIterator,
{
    async_scalar::map(fut, move |seq| sequence::tap_to_sequence(seq, f))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[test]
    fn test_constructors() {
        assert_eq!(block_on(construct(1)), vec![1]);
        assert_eq!(block_on(construct_from_async(async { 'a' })), vec!['a']);
        assert_eq!(block_on(construct_from_sequence(vec![1, 2])), vec![1, 2]);
    }

    #[test]
    fn test_map_to_async_awaits_in_element_order() {
        let log = RefCell::new(Vec::new());
        let fut = map_to_async(construct_from_sequence(vec![3, 1, 2]), |x| {
            let log = &log;
            log.borrow_mut().push(format!("call {x}"));
            async move {
                log.borrow_mut().push(format!("done {x}"));
                x * 10
            }
        });

        assert_eq!(block_on(fut), vec![30, 10, 20]);
        assert_eq!(
            *log.borrow(),
            vec!["call 3", "done 3", "call 1", "done 1", "call 2", "done 2"]
        );
    }

    #[test]
    fn test_map_to_async_sequence_flattens() {
        let fut = map_to_async_sequence(construct_from_sequence(vec![1, 2]), |x| async move {
            vec![x, x]
        });
        assert_eq!(block_on(fut), vec![1, 1, 2, 2]);
    }

    #[test]
    fn test_sync_steps() {
        assert_eq!(block_on(map(construct(2), |x| x + 1)), vec![3]);
        assert_eq!(
            block_on(map_to_sequence(construct_from_sequence(vec![1, 2]), |x| vec![x; 2])),
            vec![1, 1, 2, 2]
        );
        assert_eq!(
            block_on(tap_to_sequence(construct_from_sequence(vec![1, 2]), |x| 0..*x)),
            vec![1, 2, 2]
        );
    }

    #[test]
    fn test_async_taps_replicate_originals() {
        let fut = tap_to_async_sequence(construct_from_sequence(vec![1, 2, 3]), |x| async move {
            vec![(); (x % 3) as usize]
        });
        assert_eq!(block_on(fut), vec![1, 2, 2]);

        let seen = RefCell::new(Vec::new());
        let fut = tap_to_async(construct_from_sequence(vec![4, 5]), |x| {
            let seen = &seen;
            async move { seen.borrow_mut().push(x) }
        });
        assert_eq!(block_on(fut), vec![4, 5]);
        assert_eq!(*seen.borrow(), vec![4, 5]);

        let fut = tap(construct_from_sequence(vec![6]), |x| seen.borrow_mut().push(*x));
        assert_eq!(block_on(fut), vec![6]);
        assert_eq!(*seen.borrow(), vec![4, 5, 6]);
    }
}
