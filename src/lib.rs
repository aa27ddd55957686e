//! In-place Binary Heap Algorithms for Rust
//!
//! This crate provides the primitive operations needed to build priority
//! queues and similar containers on top of any mutable slice. The heap is a
//! binary max-heap encoded implicitly in the slice: the children of index `i`
//! live at `2i + 1` and `2i + 2`. The crate owns no storage and never
//! allocates.
//!
//! # Operations
//!
//! - **push_heap**: insert the last element of the slice into the heap before it - O(log n)
//! - **pop_heap**: move the maximum to the back and re-heap the rest - O(log n)
//! - **make_heap**: arrange an arbitrary slice into a heap - O(n)
//! - **sort_heap**: turn a heap into an ascending sequence - O(n log n)
//! - **remove_heap**: take an arbitrary element out to the back of the heap - O(log n)
//! - **change_heap**: restore order after an element's priority changed - O(log n)
//! - **is_heap / is_heap_until / check_heap**: validate heap order - O(n)
//!
//! Each operation takes the natural order (`T: Ord`), a custom `is_less`
//! predicate (`_by`) or a key function (`_by_key`). The [`HeapSlice`] trait
//! exposes them as methods on slices.
//!
//! # Example
//!
//! ```rust
//! use rust_heap_algorithms::HeapSlice;
//!
//! let mut v = vec![3, 1, 4, 1, 5, 9, 2, 6];
//! v.make_heap();
//! assert!(v.is_heap());
//!
//! let mut extracted = Vec::new();
//! while !v.is_empty() {
//!     v.pop_heap();
//!     extracted.push(v.pop().unwrap());
//! }
//! assert_eq!(extracted, [9, 6, 5, 4, 3, 2, 1, 1]);
//! ```
//!
//! # Features
//!
//! - `std` (default): implements `std::error::Error` for [`HeapViolation`].
//!   Without it the crate is `no_std`.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

mod hole;

pub mod error;
pub mod heap;
pub mod index;
pub mod sift;
pub mod traits;
pub mod validate;

// Re-export the main API for convenience
pub use error::HeapViolation;
pub use heap::{
    change_heap, change_heap_by, change_heap_by_key, heapsort, heapsort_by, heapsort_by_key,
    make_heap, make_heap_by, make_heap_by_key, pop_heap, pop_heap_by, pop_heap_by_key, push_heap,
    push_heap_by, push_heap_by_key, remove_heap, remove_heap_by, remove_heap_by_key, sort_heap,
    sort_heap_by, sort_heap_by_key,
};
pub use traits::HeapSlice;
pub use validate::{
    check_heap, check_heap_by, check_heap_by_key, is_heap, is_heap_by, is_heap_by_key,
    is_heap_until, is_heap_until_by, is_heap_until_by_key,
};
