//! Sift-up and sift-down, the two primitives every heap operation is built on
//!
//! Both primitives carry a single value through the tree in a [`Hole`]: the
//! elements it passes are shifted one level with a bitwise copy and the value
//! is written once, at its final position. No swaps, no temporaries beyond
//! the carried value, no allocation.
//!
//! - **Promote** (sift-up) walks the hole toward `top` while the parent is
//!   lower priority than the carried value.
//! - **Adjust** (sift-down) walks the hole all the way to the leaves along the
//!   higher-priority child, then promotes the carried value from there. Going
//!   to the bottom first and climbing back costs one comparison per level on
//!   the way down instead of two, and the carried value (usually taken from
//!   the back of the heap) rarely climbs far.
//!
//! The public wrappers [`promote_heap_by`] and [`adjust_heap_by`] treat the
//! element currently stored at `position` as the carried value.
//!
//! # Example
//!
//! ```rust
//! use rust_heap_algorithms::sift::{adjust_heap, promote_heap};
//! use rust_heap_algorithms::validate::is_heap;
//!
//! // A heap with a raw value appended at the back.
//! let mut v = [9, 6, 5, 4, 3, 2, 1, 7];
//! promote_heap(&mut v, 0, 7);
//! assert!(is_heap(&v));
//!
//! // Replace the root with a small value and push it back down.
//! v[0] = 0;
//! adjust_heap(&mut v, 0, 8, 0);
//! assert!(is_heap(&v));
//! ```

use core::mem;

use crate::hole::Hole;
use crate::index;

/// Moves the hole toward `top` while the parent is lower priority than the
/// carried element.
#[inline]
fn promote<T, F>(hole: &mut Hole<'_, T>, top: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while hole.pos() > top {
        let parent = index::parent(hole.pos());
        // SAFETY: parent < pos < len.
        unsafe {
            if !is_less(hole.get(parent), hole.element()) {
                break;
            }
            hole.move_to(parent);
        }
    }
}

/// Sifts the element at `pos` toward `top`.
///
/// Callers guarantee `pos < data.len()`.
#[inline]
pub(crate) fn sift_up_range<T, F>(data: &mut [T], top: usize, pos: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(pos < data.len());
    // SAFETY: pos is in bounds.
    let mut hole = unsafe { Hole::new(data, pos) };
    promote(&mut hole, top, is_less);
}

/// Vacates `pos`, moves the vacancy to the bottom of the heap formed by all of
/// `data`, then promotes the element that was at `pos` back toward `top`.
///
/// Callers guarantee `top <= pos < data.len()`.
pub(crate) fn sift_down_range<T, F>(data: &mut [T], top: usize, pos: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Zero-sized values are indistinguishable, so any arrangement is a heap.
    // Their slices may also be long enough for the child index to overflow.
    if mem::size_of::<T>() == 0 {
        return;
    }

    let heap_size = data.len();
    debug_assert!(top <= pos && pos < heap_size);

    // SAFETY: pos is in bounds.
    let mut hole = unsafe { Hole::new(data, pos) };

    // Start at the right child and step back to the left one when it wins.
    let mut child = index::right_child(pos);
    while child < heap_size {
        // SAFETY: child < heap_size and child - 1 > hole.pos().
        unsafe {
            if is_less(hole.get(child), hole.get(child - 1)) {
                child -= 1;
            }
            hole.move_to(child);
        }
        child = index::right_child(hole.pos());
    }

    // A single left child with no sibling.
    if child == heap_size {
        // SAFETY: child - 1 == heap_size - 1 is the left child of the hole.
        unsafe { hole.move_to(child - 1) };
    }

    promote(&mut hole, top, is_less);
}

/// Sifts the element at `position` up toward `top` using the natural order.
///
/// See [`promote_heap_by`].
pub fn promote_heap<T: Ord>(v: &mut [T], top: usize, position: usize) {
    promote_heap_by(v, top, position, T::lt)
}

/// Sifts the element at `position` up toward `top`.
///
/// The element at `position` is the carried value; its slot is treated as
/// vacant. While the hole is below `top` and its parent compares lower
/// priority than the carried value, the parent is shifted down into the hole.
/// The carried value is written where the walk stops. If `position == top`
/// the value stays put and no comparison is made.
///
/// `is_less(a, b)` must return `true` iff `a` is strictly lower priority than
/// `b`, and must be the same ordering that built the heap.
///
/// # Panics
///
/// Panics if `position >= v.len()` or `top > position`.
///
/// # Example
///
/// ```rust
/// use rust_heap_algorithms::sift::promote_heap_by;
///
/// // Min-heap with a new value at the back.
/// let mut v = [1, 3, 2, 0];
/// promote_heap_by(&mut v, 0, 3, |a, b| a > b);
/// assert_eq!(v, [0, 1, 2, 3]);
/// ```
pub fn promote_heap_by<T, F>(v: &mut [T], top: usize, position: usize, mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    assert!(
        position < v.len(),
        "promote position {} out of bounds for slice of length {}",
        position,
        v.len()
    );
    assert!(
        top <= position,
        "promote top {} is below position {}",
        top,
        position
    );
    sift_up_range(v, top, position, &mut is_less);
}

/// Restores heap order below `position` using the natural order.
///
/// See [`adjust_heap_by`].
pub fn adjust_heap<T: Ord>(v: &mut [T], top: usize, heap_size: usize, position: usize) {
    adjust_heap_by(v, top, heap_size, position, T::lt)
}

/// Restores heap order over `v[..heap_size]` after the slot at `position` was
/// refilled with a new value.
///
/// The element at `position` is the carried value. The vacancy is moved down
/// along the higher-priority child until it reaches a leaf, then the carried
/// value is promoted from there, never above `top`. Both subtrees of
/// `position` must already be heaps. Elements at or past `heap_size` are not
/// touched.
///
/// # Panics
///
/// Panics if `heap_size > v.len()`, `position >= heap_size` or
/// `top > position`.
///
/// # Example
///
/// ```rust
/// use rust_heap_algorithms::sift::adjust_heap_by;
/// use rust_heap_algorithms::validate::is_heap;
///
/// let mut v = [1, 6, 5, 4, 3, 2, 99];
/// adjust_heap_by(&mut v, 0, 6, 0, |a, b| a < b);
/// assert!(is_heap(&v[..6]));
/// assert_eq!(v[0], 6);
/// assert_eq!(v[6], 99);
/// ```
pub fn adjust_heap_by<T, F>(
    v: &mut [T],
    top: usize,
    heap_size: usize,
    position: usize,
    mut is_less: F,
) where
    F: FnMut(&T, &T) -> bool,
{
    assert!(
        heap_size <= v.len(),
        "heap size {} exceeds slice length {}",
        heap_size,
        v.len()
    );
    assert!(
        position < heap_size,
        "adjust position {} out of bounds for heap of size {}",
        position,
        heap_size
    );
    assert!(
        top <= position,
        "adjust top {} is below position {}",
        top,
        position
    );
    sift_down_range(&mut v[..heap_size], top, position, &mut is_less);
}
