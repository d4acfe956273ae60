//! Combinators over an ordered [`Sequence`].
//!
//! Nothing here short-circuits: every element is visited, in order.
use crate::outcome::Sequence;

/// Create a sequence holding a single value.
#[inline]
pub fn construct<T>(value: T) -> Sequence<T> {
    vec![value]
}

/// Applies `f` to every element, preserving order.
pub fn map<T1, T2, G>(seq: Sequence<T1>, f: G) -> Sequence<T2>
where
    G: FnMut(T1) -> T2,
{
    seq.into_iter().map(f).collect()
}

/// Applies `f` to every element and concatenates the results in element order.
///
/// # Examples
///
/// ```
/// use trackway::combinators::sequence::map_to_sequence;
///
/// let flat = map_to_sequence(vec![1, 2, 3], |x| [x, -x]);
/// assert_eq!(flat, vec![1, -1, 2, -2, 3, -3]);
/// ```
pub fn map_to_sequence<T1, T2, G, I>(seq: Sequence<T1>, f: G) -> Sequence<T2>
where
    G: FnMut(T1) -> I,
    I: IntoIterator<Item = T2>,
{
    seq.into_iter().flat_map(f).collect()
}

/// Runs a side effect on every element and returns the sequence unchanged.
pub fn tap<T, G, R>(seq: Sequence<T>, mut f: G) -> Sequence<T>
where
    G: FnMut(&T) -> R,
{
    for t in &seq {
        let _ = f(t);
    }
    seq
}

/// Runs a sequence-returning side effect on every element.
///
/// Each original element is repeated once per item the side effect yields,
/// so an empty side-effect result drops the element.
///
/// # Examples
///
/// ```
/// use trackway::combinators::sequence::tap_to_sequence;
///
/// let tapped = tap_to_sequence(vec![1, 2, 3], |x| vec![(); *x as usize - 1]);
/// assert_eq!(tapped, vec![2, 3, 3]);
/// ```
pub fn tap_to_sequence<T, G, I>(seq: Sequence<T>, mut f: G) -> Sequence<T>
where
    T: Clone,
    G: FnMut(&T) -> I,
    I: IntoIterator,
{
    let mut out = Vec::with_capacity(seq.len());
    for (index, t) in seq.into_iter().enumerate() {
        let before = out.len();
        out.extend(f(&t).into_iter().map(|_| t.clone()));
        if out.len() == before {
            tracing::trace!(index, "side effect produced no items, dropping element");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_construct() {
        assert_eq!(construct(7), vec![7]);
    }

    #[test]
    fn test_map_preserves_order() {
        assert_eq!(map(vec![1, 2, 3], |x| x * 2), vec![2, 4, 6]);
        assert_eq!(map(Vec::<i32>::new(), |x| x * 2), Vec::<i32>::new());
    }

    #[test]
    fn test_map_to_sequence_concatenates() {
        assert_eq!(
            map_to_sequence(vec!["ab", "", "c"], |s| s.chars().collect::<Vec<_>>()),
            vec!['a', 'b', 'c']
        );
    }

    #[test]
    fn test_tap_visits_in_order() {
        let seen = RefCell::new(Vec::new());
        let out = tap(vec![3, 1, 2], |x| seen.borrow_mut().push(*x));

        assert_eq!(out, vec![3, 1, 2]);
        assert_eq!(*seen.borrow(), vec![3, 1, 2]);
    }

    #[test]
    fn test_tap_to_sequence_replicates_original() {
        let out = tap_to_sequence(vec![1, 2], |x| vec![x.to_string(), x.to_string()]);
        assert_eq!(out, vec![1, 1, 2, 2]);
    }

    #[test]
    fn test_tap_to_sequence_empty_effect_drops_element() {
        let out = tap_to_sequence(vec![1, 2, 3], |x| if *x == 2 { vec![] } else { vec![()] });
        assert_eq!(out, vec![1, 3]);
    }
}
