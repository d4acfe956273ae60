use std::future::Future;

use futures::future::{Map, Ready};

use crate::combinators::async_sequence;
use crate::outcome::Sequence;

async_wrapper! {
    /// A list of values that becomes available later. Per-element
    /// asynchronous steps are awaited one element at a time.
    AsyncSequenceWrapper
}

impl<T> AsyncSequenceWrapper<Ready<Sequence<T>>> {
    #[inline]
    pub fn construct(value: T) -> Self {
        Self(async_sequence::construct(value))
    }

    #[inline]
    pub fn from_sequence(seq: Sequence<T>) -> Self {
        Self(async_sequence::construct_from_sequence(seq))
    }
}

impl<T, Fut> AsyncSequenceWrapper<Map<Fut, fn(T) -> Sequence<T>>>
where
    Fut: Future<Output = T>,
{
    /// Turns the output of `fut` into a single-element list.
    pub fn from_async(fut: Fut) -> Self {
        Self(async_sequence::construct_from_async(fut))
    }
}

impl<T, Fut> AsyncSequenceWrapper<Fut>
where
    Fut: Future<Output = Sequence<T>>,
{
    #[inline]
    pub fn from_async_sequence(fut: Fut) -> Self {
        Self(fut)
    }

    pub fn map<T2, G>(self, f: G) -> AsyncSequenceWrapper<impl Future<Output = Sequence<T2>>>
    where
        G: FnMut(T) -> T2,
    {
        AsyncSequenceWrapper(async_sequence::map(self.0, f))
    }

    pub fn map_to_async<T2, G, Fut2>(
        self,
        f: G,
    ) -> AsyncSequenceWrapper<impl Future<Output = Sequence<T2>>>
    where
        G: FnMut(T) -> Fut2,
        Fut2: Future<Output = T2>,
    {
        AsyncSequenceWrapper(async_sequence::map_to_async(self.0, f))
    }

    pub fn map_to_async_sequence<T2, G, Fut2, I>(
        self,
        f: G,
    ) -> AsyncSequenceWrapper<impl Future<Output = Sequence<T2>>>
    where
        G: FnMut(T) -> Fut2,
        Fut2: Future<Output = I>,
        I: IntoIterator<Item = T2>,
    {
        AsyncSequenceWrapper(async_sequence::map_to_async_sequence(self.0, f))
    }

    pub fn map_to_sequence<T2, G, I>(
        self,
        f: G,
    ) -> AsyncSequenceWrapper<impl Future<Output = Sequence<T2>>>
    where
        G: FnMut(T) -> I,
        I: IntoIterator<Item = T2>,
    {
        AsyncSequenceWrapper(async_sequence::map_to_sequence(self.0, f))
    }

    pub fn tap<G, R>(self, f: G) -> AsyncSequenceWrapper<impl Future<Output = Sequence<T>>>
    where
        G: FnMut(&T) -> R,
    {
        AsyncSequenceWrapper(async_sequence::tap(self.0, f))
    }

    pub fn tap_to_async<G, Fut2>(self, f: G) -> AsyncSequenceWrapper<impl Future<Output = Sequence<T>>>
    where
        T: Clone,
        G: FnMut(T) -> Fut2,
        Fut2: Future,
    {
        AsyncSequenceWrapper(async_sequence::tap_to_async(self.0, f))
    }

    pub fn tap_to_async_sequence<G, Fut2, I>(
        self,
        f: G,
    ) -> AsyncSequenceWrapper<impl Future<Output = Sequence<T>>>
    where
        T: Clone,
        G: FnMut(T) -> Fut2,
        Fut2: Future<Output = I>,
        I: IntoIterator,
    {
        AsyncSequenceWrapper(async_sequence::tap_to_async_sequence(self.0, f))
    }

    pub fn tap_to_sequence<G, I>(self, f: G) -> AsyncSequenceWrapper<impl Future<Output = Sequence<T>>>
    where
        T: Clone,
        G: FnMut(&T) -> I,
        I: IntoIterator,
    {
        AsyncSequenceWrapper(async_sequence::tap_to_sequence(self.0, f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[test]
    fn test_constructors() {
        assert_eq!(block_on(AsyncSequenceWrapper::construct(1).resolve()), vec![1]);
        assert_eq!(block_on(AsyncSequenceWrapper::from_async(async { 'z' }).resolve()), vec!['z']);
        let w = AsyncSequenceWrapper::from_async_sequence(async { vec![1, 2] });
        assert_eq!(block_on(w.resolve()), vec![1, 2]);
    }

    #[test]
    fn test_chain() {
        let log = RefCell::new(Vec::new());
        let w = AsyncSequenceWrapper::from_sequence(vec![1, 2, 3])
            .map(|x| x * 2)
            .map_to_async(|x| {
                let log = &log;
                async move {
                    log.borrow_mut().push(x);
                    x + 1
                }
            })
            .map_to_sequence(|x| [x; 2])
            .tap(|x| log.borrow_mut().push(-x));
        assert_eq!(block_on(w.resolve()), vec![3, 3, 5, 5, 7, 7]);
        assert_eq!(*log.borrow(), vec![2, 4, 6, -3, -3, -5, -5, -7, -7]);
    }

    #[test]
    fn test_taps_replicate() {
        let w = AsyncSequenceWrapper::from_sequence(vec!['a', 'b'])
            .tap_to_sequence(|c| if *c == 'a' { vec![(); 2] } else { vec![] })
            .tap_to_async(|_| async {})
            .tap_to_async_sequence(|_| async { [(); 1] });
        assert_eq!(block_on(w.resolve()), vec!['a', 'a']);

        let w = AsyncSequenceWrapper::from_sequence(vec![1, 2])
            .map_to_async_sequence(|x| async move { 0..x });
        assert_eq!(block_on(w.resolve()), vec![0, 0, 1]);
    }
}
