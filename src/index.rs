//! Index arithmetic for the implicit binary tree
//!
//! A heap of `n` elements occupies indices `0..n` of a slice. No tree is ever
//! materialised; parent and child links are computed:
//!
//! ```text
//!                           0
//!              1                         2
//!       3            4            5             6
//!   7      8      9     10    11     12     13     14
//! ```
//!
//! - parent of `i` (for `i > 0`): `(i - 1) / 2`
//! - left child of `i`: `2i + 1`
//! - right child of `i`: `2i + 2`

/// Index of the parent of `i`.
///
/// `i` must be non-zero; the root has no parent.
///
/// ```rust
/// use rust_heap_algorithms::index::parent;
/// assert_eq!(parent(1), 0);
/// assert_eq!(parent(2), 0);
/// assert_eq!(parent(5), 2);
/// assert_eq!(parent(6), 2);
/// ```
#[inline(always)]
pub const fn parent(i: usize) -> usize {
    debug_assert!(i > 0);
    (i - 1) >> 1
}

/// Index of the left child of `i`.
///
/// ```rust
/// use rust_heap_algorithms::index::left_child;
/// assert_eq!(left_child(0), 1);
/// assert_eq!(left_child(3), 7);
/// ```
#[inline(always)]
pub const fn left_child(i: usize) -> usize {
    2 * i + 1
}

/// Index of the right child of `i`.
///
/// ```rust
/// use rust_heap_algorithms::index::right_child;
/// assert_eq!(right_child(0), 2);
/// assert_eq!(right_child(6), 14);
/// ```
#[inline(always)]
pub const fn right_child(i: usize) -> usize {
    2 * i + 2
}

/// Index of the last element that has at least one child in a heap of
/// `len` elements, or `None` when `len < 2` (no element has a child).
///
/// ```rust
/// use rust_heap_algorithms::index::last_parent;
/// assert_eq!(last_parent(0), None);
/// assert_eq!(last_parent(1), None);
/// assert_eq!(last_parent(2), Some(0));
/// assert_eq!(last_parent(7), Some(2));
/// assert_eq!(last_parent(8), Some(3));
/// ```
#[inline]
pub const fn last_parent(len: usize) -> Option<usize> {
    if len < 2 {
        None
    } else {
        Some((len - 2) >> 1)
    }
}
