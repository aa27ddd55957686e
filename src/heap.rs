//! Heap operations over mutable slices
//!
//! These functions maintain a binary max-heap laid out implicitly in a slice
//! (see [`index`](crate::index)). The slice is never grown or shrunk: an
//! operation that takes an element out of the heap moves it to the back of the
//! active region and leaves truncation to the caller.
//!
//! Every operation comes in three flavours:
//!
//! - `op(v, ..)` orders by `T: Ord`, largest first.
//! - `op_by(v, .., is_less)` takes a predicate returning `true` iff its first
//!   argument is strictly lower priority than its second.
//! - `op_by_key(v, .., key)` orders by `key(elem)`, largest key first.
//!
//! The same ordering must be used for every call on a given heap. Heap-order
//! preconditions are not checked; violating them leaves the slice in an
//! unspecified order, but it is always a permutation of the input.
//!
//! None of the operations is stable, and none allocates.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `push_heap`   | O(log n)   |
//! | `pop_heap`    | O(log n)   |
//! | `make_heap`   | O(n)       |
//! | `sort_heap`   | O(n log n) |
//! | `remove_heap` | O(log n)   |
//! | `change_heap` | O(log n)   |
//! | `heapsort`    | O(n log n) |
//!
//! # Example
//!
//! ```rust
//! use rust_heap_algorithms::heap::{make_heap, pop_heap, push_heap};
//!
//! let mut v = vec![3, 1, 4, 1, 5];
//! make_heap(&mut v);
//! assert_eq!(v[0], 5);
//!
//! v.push(9);
//! push_heap(&mut v);
//! assert_eq!(v[0], 9);
//!
//! pop_heap(&mut v);
//! assert_eq!(v.pop(), Some(9));
//! assert_eq!(v[0], 5);
//! ```

use log::trace;

use crate::index;
use crate::sift::{sift_down_range, sift_up_range};

// ============================================================================
// push
// ============================================================================

/// Inserts the last element of `v` into the heap formed by the rest.
///
/// `v[..len - 1]` must be a heap; the new element is typically one the caller
/// just appended.
///
/// ```rust
/// use rust_heap_algorithms::heap::push_heap;
///
/// let mut v = vec![9, 6, 5, 4, 3, 2, 1];
/// v.push(7);
/// push_heap(&mut v);
/// assert_eq!(v[0], 9);
/// assert_eq!(v[1], 7);
/// ```
pub fn push_heap<T: Ord>(v: &mut [T]) {
    push_heap_by(v, T::lt)
}

/// [`push_heap`] with a custom priority predicate.
pub fn push_heap_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    push_range(v, &mut is_less)
}

/// [`push_heap`] ordering by a key extraction function.
pub fn push_heap_by_key<T, K, F>(v: &mut [T], mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    push_heap_by(v, |a, b| key(a).lt(&key(b)))
}

#[inline]
fn push_range<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }
    let last = v.len() - 1;
    sift_up_range(v, 0, last, is_less);
}

// ============================================================================
// pop
// ============================================================================

/// Moves the highest-priority element to the back of `v` and restores heap
/// order over `v[..len - 1]`.
///
/// `v` must be a heap. Afterwards the removed maximum is `v[len - 1]`; callers
/// holding a `Vec` typically follow with `Vec::pop`. Slices shorter than two
/// elements are left as they are.
///
/// ```rust
/// use rust_heap_algorithms::heap::{make_heap, pop_heap};
///
/// let mut v = vec![2, 3, 1];
/// make_heap(&mut v);
/// pop_heap(&mut v);
/// assert_eq!(v.pop(), Some(3));
/// assert_eq!(v[0], 2);
/// ```
pub fn pop_heap<T: Ord>(v: &mut [T]) {
    pop_heap_by(v, T::lt)
}

/// [`pop_heap`] with a custom priority predicate.
pub fn pop_heap_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    pop_range(v, &mut is_less)
}

/// [`pop_heap`] ordering by a key extraction function.
pub fn pop_heap_by_key<T, K, F>(v: &mut [T], mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    pop_heap_by(v, |a, b| key(a).lt(&key(b)))
}

#[inline]
fn pop_range<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }
    // The old back element is carried from the root down.
    v.swap(0, len - 1);
    sift_down_range(&mut v[..len - 1], 0, 0, is_less);
}

// ============================================================================
// make
// ============================================================================

/// Rearranges `v` into a heap.
///
/// Bottom-up construction: every element that has a child is sifted down,
/// from the last such element back to the root. Runs in O(n).
///
/// ```rust
/// use rust_heap_algorithms::heap::make_heap;
/// use rust_heap_algorithms::validate::is_heap;
///
/// let mut v = [3, 1, 4, 1, 5, 9, 2, 6];
/// make_heap(&mut v);
/// assert!(is_heap(&v));
/// assert_eq!(v[0], 9);
/// ```
pub fn make_heap<T: Ord>(v: &mut [T]) {
    make_heap_by(v, T::lt)
}

/// [`make_heap`] with a custom priority predicate.
pub fn make_heap_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    trace!("make_heap over {} elements", v.len());
    make_range(v, &mut is_less)
}

/// [`make_heap`] ordering by a key extraction function.
pub fn make_heap_by_key<T, K, F>(v: &mut [T], mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    make_heap_by(v, |a, b| key(a).lt(&key(b)))
}

fn make_range<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let Some(last) = index::last_parent(v.len()) else {
        return;
    };
    for pos in (0..=last).rev() {
        // Each subtree is sifted in isolation: the carried value never climbs
        // above its own root.
        sift_down_range(v, pos, pos, is_less);
    }
}

// ============================================================================
// sort
// ============================================================================

/// Sorts a heap into ascending order by popping the maximum to the back of a
/// shrinking region.
///
/// `v` must be a heap; afterwards it generally is not. Not stable.
///
/// ```rust
/// use rust_heap_algorithms::heap::{make_heap, sort_heap};
///
/// let mut v = [5, 2, 8, 1, 9];
/// make_heap(&mut v);
/// sort_heap(&mut v);
/// assert_eq!(v, [1, 2, 5, 8, 9]);
/// ```
pub fn sort_heap<T: Ord>(v: &mut [T]) {
    sort_heap_by(v, T::lt)
}

/// [`sort_heap`] with a custom priority predicate.
pub fn sort_heap_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    trace!("sort_heap over {} elements", v.len());
    sort_range(v, &mut is_less)
}

/// [`sort_heap`] ordering by a key extraction function.
pub fn sort_heap_by_key<T, K, F>(v: &mut [T], mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_heap_by(v, |a, b| key(a).lt(&key(b)))
}

fn sort_range<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for end in (2..=v.len()).rev() {
        pop_range(&mut v[..end], is_less);
    }
}

// ============================================================================
// remove
// ============================================================================

/// Takes the element at `position` out of the heap `v[..heap_size]`.
///
/// The removed element ends up at `v[heap_size - 1]` and `v[..heap_size - 1]`
/// is a heap again. Nothing is dropped; the caller erases the element from its
/// container if it wants it gone.
///
/// # Panics
///
/// Panics if `heap_size > v.len()` or `position >= heap_size`.
///
/// ```rust
/// use rust_heap_algorithms::heap::remove_heap;
/// use rust_heap_algorithms::validate::is_heap;
///
/// let mut v = vec![9, 6, 5, 4, 3, 2, 1];
/// remove_heap(&mut v, 7, 3);
/// assert_eq!(v[6], 4);
/// assert!(is_heap(&v[..6]));
/// ```
pub fn remove_heap<T: Ord>(v: &mut [T], heap_size: usize, position: usize) {
    remove_heap_by(v, heap_size, position, T::lt)
}

/// [`remove_heap`] with a custom priority predicate.
pub fn remove_heap_by<T, F>(v: &mut [T], heap_size: usize, position: usize, mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    check_position(v.len(), heap_size, position);
    remove_range(&mut v[..heap_size], position, &mut is_less)
}

/// [`remove_heap`] ordering by a key extraction function.
pub fn remove_heap_by_key<T, K, F>(v: &mut [T], heap_size: usize, position: usize, mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    remove_heap_by(v, heap_size, position, |a, b| key(a).lt(&key(b)))
}

#[inline]
fn remove_range<T, F>(heap: &mut [T], position: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let last = heap.len() - 1;
    if position == last {
        return;
    }
    // The old back element is carried from `position`; it may end up above it.
    heap.swap(position, last);
    sift_down_range(&mut heap[..last], 0, position, is_less);
}

// ============================================================================
// change
// ============================================================================

/// Restores heap order after the priority of `v[position]` was changed in
/// place. The heap size is unchanged.
///
/// # Panics
///
/// Panics if `heap_size > v.len()` or `position >= heap_size`.
///
/// ```rust
/// use rust_heap_algorithms::heap::change_heap;
/// use rust_heap_algorithms::validate::is_heap;
///
/// let mut v = [9, 6, 5, 4, 3, 2, 1];
/// v[5] = 10;
/// change_heap(&mut v, 7, 5);
/// assert_eq!(v[0], 10);
/// assert!(is_heap(&v));
/// ```
pub fn change_heap<T: Ord>(v: &mut [T], heap_size: usize, position: usize) {
    change_heap_by(v, heap_size, position, T::lt)
}

/// [`change_heap`] with a custom priority predicate.
pub fn change_heap_by<T, F>(v: &mut [T], heap_size: usize, position: usize, mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    check_position(v.len(), heap_size, position);
    let heap = &mut v[..heap_size];
    // Take the changed element out to the back, then push it back in.
    remove_range(heap, position, &mut is_less);
    sift_up_range(heap, 0, heap_size - 1, &mut is_less);
}

/// [`change_heap`] ordering by a key extraction function.
pub fn change_heap_by_key<T, K, F>(v: &mut [T], heap_size: usize, position: usize, mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    change_heap_by(v, heap_size, position, |a, b| key(a).lt(&key(b)))
}

#[inline]
fn check_position(len: usize, heap_size: usize, position: usize) {
    assert!(
        heap_size <= len,
        "heap size {} exceeds slice length {}",
        heap_size,
        len
    );
    assert!(
        position < heap_size,
        "position {} out of bounds for heap of size {}",
        position,
        heap_size
    );
}

// ============================================================================
// heapsort
// ============================================================================

/// Sorts `v` in ascending order in place: [`make_heap`] then [`sort_heap`].
///
/// Unstable, O(n log n) worst case, no allocation.
///
/// ```rust
/// use rust_heap_algorithms::heap::heapsort;
///
/// let mut v = [3, 1, 4, 1, 5, 9, 2, 6];
/// heapsort(&mut v);
/// assert_eq!(v, [1, 1, 2, 3, 4, 5, 6, 9]);
/// ```
pub fn heapsort<T: Ord>(v: &mut [T]) {
    heapsort_by(v, T::lt)
}

/// [`heapsort`] with a custom priority predicate; sorts so that `is_less`
/// holds for no adjacent pair `(v[i + 1], v[i])`.
pub fn heapsort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    trace!("heapsort over {} elements", v.len());
    make_range(v, &mut is_less);
    sort_range(v, &mut is_less);
}

/// [`heapsort`] ordering by a key extraction function.
pub fn heapsort_by_key<T, K, F>(v: &mut [T], mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    heapsort_by(v, |a, b| key(a).lt(&key(b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{is_heap, is_heap_by};

    #[test]
    fn test_make_heap_small() {
        let mut empty: [i32; 0] = [];
        make_heap(&mut empty);

        let mut one = [7];
        make_heap(&mut one);
        assert_eq!(one, [7]);

        let mut two = [1, 2];
        make_heap(&mut two);
        assert_eq!(two, [2, 1]);
    }

    #[test]
    fn test_make_heap_descending_input_untouched() {
        let mut v = [9, 8, 7, 6, 5, 4, 3, 2, 1];
        make_heap(&mut v);
        assert_eq!(v, [9, 8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_push_each() {
        let mut v = Vec::new();
        for x in [5, 3, 8, 1, 9, 2, 7] {
            v.push(x);
            push_heap(&mut v);
            assert!(is_heap(&v));
        }
        assert_eq!(v[0], 9);
    }

    #[test]
    fn test_pop_drains_descending() {
        let mut v = vec![3, 1, 4, 1, 5, 9, 2, 6];
        make_heap(&mut v);
        let mut out = Vec::new();
        while !v.is_empty() {
            pop_heap(&mut v);
            out.push(v.pop().unwrap());
            assert!(is_heap(&v));
        }
        assert_eq!(out, [9, 6, 5, 4, 3, 2, 1, 1]);
    }

    #[test]
    fn test_pop_two_elements() {
        let mut v = [2, 1];
        pop_heap(&mut v);
        assert_eq!(v, [1, 2]);
    }

    #[test]
    fn test_sort_heap() {
        let mut v = [10, 4, 7, 1, 3, 2, 5];
        make_heap(&mut v);
        sort_heap(&mut v);
        assert_eq!(v, [1, 2, 3, 4, 5, 7, 10]);
    }

    #[test]
    fn test_min_heap_by() {
        let mut v = [5, 3, 8, 1, 9, 2];
        make_heap_by(&mut v, |a, b| a > b);
        assert!(is_heap_by(&v, |a, b| a > b));
        assert_eq!(v[0], 1);

        sort_heap_by(&mut v, |a, b| a > b);
        assert_eq!(v, [9, 8, 5, 3, 2, 1]);
    }

    #[test]
    fn test_by_key() {
        let mut v = [("b", 2), ("d", 4), ("a", 1), ("c", 3)];
        make_heap_by_key(&mut v, |&(_, k)| k);
        assert_eq!(v[0], ("d", 4));

        pop_heap_by_key(&mut v, |&(_, k)| k);
        assert_eq!(v[3], ("d", 4));
        assert_eq!(v[0], ("c", 3));
    }

    #[test]
    fn test_remove_root_matches_pop() {
        let mut a = [9, 6, 5, 4, 3, 2, 1];
        let mut b = a;
        remove_heap(&mut a, 7, 0);
        pop_heap(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_remove_last_is_noop() {
        let mut v = [9, 6, 5, 4, 3, 2, 1];
        remove_heap(&mut v, 7, 6);
        assert_eq!(v, [9, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_remove_carried_value_climbs() {
        // Removing 20 deep in the left subtree pulls the back element 50 in,
        // which belongs above 40.
        let mut v = [100, 40, 90, 30, 20, 80, 70, 5, 4, 3, 2, 60, 50];
        remove_heap(&mut v, 13, 4);
        assert_eq!(v[12], 20);
        assert!(is_heap(&v[..12]));
        assert_eq!(v[1], 50);
    }

    #[test]
    fn test_remove_with_tail_beyond_heap() {
        let mut v = [9, 6, 5, 4, 3, 2, 1, 100];
        remove_heap(&mut v, 7, 1);
        assert_eq!(v[6], 6);
        assert_eq!(v[7], 100);
        assert!(is_heap(&v[..6]));
    }

    #[test]
    fn test_change_increase_and_decrease() {
        let mut v = [9, 6, 5, 4, 3, 2, 1];

        v[6] = 20;
        change_heap(&mut v, 7, 6);
        assert_eq!(v[0], 20);
        assert!(is_heap(&v));

        v[0] = 0;
        change_heap(&mut v, 7, 0);
        assert_eq!(v[0], 9);
        assert!(is_heap(&v));
    }

    #[test]
    fn test_change_single() {
        let mut v = [1];
        change_heap(&mut v, 1, 0);
        assert_eq!(v, [1]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_remove_position_out_of_bounds() {
        let mut v = [3, 2, 1];
        remove_heap(&mut v, 3, 3);
    }

    #[test]
    #[should_panic(expected = "exceeds slice length")]
    fn test_change_heap_size_too_large() {
        let mut v = [3, 2, 1];
        change_heap(&mut v, 4, 0);
    }

    #[test]
    fn test_heapsort() {
        let mut v: Vec<i32> = (0..100).map(|i| (i * 37) % 101).collect();
        let mut expected = v.clone();
        expected.sort();
        heapsort(&mut v);
        assert_eq!(v, expected);
    }
}
