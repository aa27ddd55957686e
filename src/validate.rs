//! Heap-order validation
//!
//! A single forward pass compares each child with its parent. The parent
//! index advances once every two children, so no index arithmetic is needed
//! beyond an alternating 0/1 stride. Nothing is mutated.

use log::debug;

use crate::error::HeapViolation;
use crate::index;

/// Returns the index of the first element that is higher priority than its
/// parent, or `v.len()` if `v` is a heap.
///
/// `v[..is_heap_until(v)]` is always a heap.
///
/// ```rust
/// use rust_heap_algorithms::validate::is_heap_until;
///
/// assert_eq!(is_heap_until(&[9, 6, 5, 4]), 4);
/// assert_eq!(is_heap_until(&[9, 6, 5, 7]), 3);
/// ```
pub fn is_heap_until<T: Ord>(v: &[T]) -> usize {
    is_heap_until_by(v, T::lt)
}

/// [`is_heap_until`] with a custom priority predicate.
pub fn is_heap_until_by<T, F>(v: &[T], mut is_less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut parent = 0;
    let mut stride = 0;
    for child in 1..v.len() {
        if is_less(&v[parent], &v[child]) {
            return child;
        }
        parent += stride;
        stride ^= 1;
    }
    v.len()
}

/// [`is_heap_until`] ordering by a key extraction function.
pub fn is_heap_until_by_key<T, K, F>(v: &[T], mut key: F) -> usize
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    is_heap_until_by(v, |a, b| key(a).lt(&key(b)))
}

/// Returns `true` if `v` is in heap order.
///
/// ```rust
/// use rust_heap_algorithms::validate::is_heap;
///
/// assert!(is_heap::<i32>(&[]));
/// assert!(is_heap(&[9, 6, 5, 4, 3, 2, 1]));
/// assert!(!is_heap(&[1, 2]));
/// ```
pub fn is_heap<T: Ord>(v: &[T]) -> bool {
    is_heap_by(v, T::lt)
}

/// [`is_heap`] with a custom priority predicate.
pub fn is_heap_by<T, F>(v: &[T], is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    is_heap_until_by(v, is_less) == v.len()
}

/// [`is_heap`] ordering by a key extraction function.
pub fn is_heap_by_key<T, K, F>(v: &[T], key: F) -> bool
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    is_heap_until_by_key(v, key) == v.len()
}

/// Checks heap order, reporting the first violating parent/child pair.
///
/// ```rust
/// use rust_heap_algorithms::error::HeapViolation;
/// use rust_heap_algorithms::validate::check_heap;
///
/// assert_eq!(check_heap(&[5, 4, 3]), Ok(()));
/// assert_eq!(
///     check_heap(&[5, 4, 3, 8]),
///     Err(HeapViolation { parent: 1, child: 3 })
/// );
/// ```
pub fn check_heap<T: Ord>(v: &[T]) -> Result<(), HeapViolation> {
    check_heap_by(v, T::lt)
}

/// [`check_heap`] with a custom priority predicate.
pub fn check_heap_by<T, F>(v: &[T], is_less: F) -> Result<(), HeapViolation>
where
    F: FnMut(&T, &T) -> bool,
{
    let child = is_heap_until_by(v, is_less);
    if child == v.len() {
        return Ok(());
    }
    let violation = HeapViolation {
        parent: index::parent(child),
        child,
    };
    debug!("{} (heap of {} elements)", violation, v.len());
    Err(violation)
}

/// [`check_heap`] ordering by a key extraction function.
pub fn check_heap_by_key<T, K, F>(v: &[T], mut key: F) -> Result<(), HeapViolation>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    check_heap_by(v, |a, b| key(a).lt(&key(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivial_slices_are_heaps() {
        assert_eq!(is_heap_until::<u8>(&[]), 0);
        assert_eq!(is_heap_until(&[1]), 1);
        assert!(is_heap(&[1, 1, 1, 1]));
    }

    #[test]
    fn test_violation_at_each_child() {
        // Every child index gets compared with the right parent.
        for n in 2..40usize {
            let mut v: Vec<usize> = (0..n).rev().map(|x| x + 100).collect();
            assert!(is_heap(&v));
            for child in 1..n {
                let saved = v[child];
                v[child] = 1000;
                assert_eq!(is_heap_until(&v), child);
                assert_eq!(
                    check_heap(&v),
                    Err(HeapViolation {
                        parent: (child - 1) / 2,
                        child
                    })
                );
                v[child] = saved;
            }
        }
    }

    #[test]
    fn test_equal_child_is_not_violation() {
        assert!(is_heap(&[3, 3, 3]));
        assert_eq!(check_heap(&[3, 3, 2, 3]), Ok(()));
    }

    #[test]
    fn test_min_heap_by() {
        let v = [1, 2, 3, 4, 5];
        assert!(is_heap_by(&v, |a, b| a > b));
        assert!(!is_heap(&v));
        assert_eq!(is_heap_until_by(&v, |a, b| a > b), 5);
    }

    #[test]
    fn test_by_key() {
        let v = [(0, 'a'), (1, 'b')];
        assert!(is_heap_by_key(&v, |&(k, _)| core::cmp::Reverse(k)));
        assert_eq!(
            check_heap_by_key(&v, |&(k, _)| k),
            Err(HeapViolation { parent: 0, child: 1 })
        );
    }

    #[test]
    fn test_violation_display() {
        let e = HeapViolation { parent: 1, child: 3 };
        assert_eq!(
            e.to_string(),
            "heap order violated: element 3 has higher priority than its parent 1"
        );
    }
}
