//! Method-call access to the heap operations
//!
//! [`HeapSlice`] is implemented for `[T]`, so anything that derefs to a
//! mutable slice (`Vec<T>`, arrays, `Box<[T]>`) can call the operations of
//! [`heap`](crate::heap) and [`validate`](crate::validate) as methods. This is
//! the shape a container built on this crate would use:
//!
//! ```rust
//! use rust_heap_algorithms::HeapSlice;
//!
//! let mut queue = vec![4, 8, 1];
//! queue.make_heap();
//!
//! queue.push(6);
//! queue.push_heap();
//!
//! queue.pop_heap();
//! assert_eq!(queue.pop(), Some(8));
//! assert!(queue.is_heap());
//! ```

use crate::error::HeapViolation;
use crate::{heap, validate};

/// Heap operations on a slice
///
/// Methods without a suffix order by `T: Ord` (largest first). The `_by`
/// methods take a predicate returning `true` iff its first argument is
/// strictly lower priority than its second. The same ordering must be used
/// for every call on a given heap.
pub trait HeapSlice<T> {
    /// See [`heap::push_heap`].
    fn push_heap(&mut self)
    where
        T: Ord;

    /// See [`heap::push_heap_by`].
    fn push_heap_by<F>(&mut self, is_less: F)
    where
        F: FnMut(&T, &T) -> bool;

    /// See [`heap::pop_heap`].
    fn pop_heap(&mut self)
    where
        T: Ord;

    /// See [`heap::pop_heap_by`].
    fn pop_heap_by<F>(&mut self, is_less: F)
    where
        F: FnMut(&T, &T) -> bool;

    /// See [`heap::make_heap`].
    fn make_heap(&mut self)
    where
        T: Ord;

    /// See [`heap::make_heap_by`].
    fn make_heap_by<F>(&mut self, is_less: F)
    where
        F: FnMut(&T, &T) -> bool;

    /// See [`heap::sort_heap`].
    fn sort_heap(&mut self)
    where
        T: Ord;

    /// See [`heap::sort_heap_by`].
    fn sort_heap_by<F>(&mut self, is_less: F)
    where
        F: FnMut(&T, &T) -> bool;

    /// See [`heap::remove_heap`].
    fn remove_heap(&mut self, heap_size: usize, position: usize)
    where
        T: Ord;

    /// See [`heap::remove_heap_by`].
    fn remove_heap_by<F>(&mut self, heap_size: usize, position: usize, is_less: F)
    where
        F: FnMut(&T, &T) -> bool;

    /// See [`heap::change_heap`].
    fn change_heap(&mut self, heap_size: usize, position: usize)
    where
        T: Ord;

    /// See [`heap::change_heap_by`].
    fn change_heap_by<F>(&mut self, heap_size: usize, position: usize, is_less: F)
    where
        F: FnMut(&T, &T) -> bool;

    /// See [`validate::is_heap`].
    fn is_heap(&self) -> bool
    where
        T: Ord;

    /// See [`validate::is_heap_by`].
    fn is_heap_by<F>(&self, is_less: F) -> bool
    where
        F: FnMut(&T, &T) -> bool;

    /// See [`validate::is_heap_until`].
    fn is_heap_until(&self) -> usize
    where
        T: Ord;

    /// See [`validate::is_heap_until_by`].
    fn is_heap_until_by<F>(&self, is_less: F) -> usize
    where
        F: FnMut(&T, &T) -> bool;

    /// See [`validate::check_heap`].
    fn check_heap(&self) -> Result<(), HeapViolation>
    where
        T: Ord;

    /// See [`validate::check_heap_by`].
    fn check_heap_by<F>(&self, is_less: F) -> Result<(), HeapViolation>
    where
        F: FnMut(&T, &T) -> bool;
}

impl<T> HeapSlice<T> for [T] {
    fn push_heap(&mut self)
    where
        T: Ord,
    {
        heap::push_heap(self)
    }

    fn push_heap_by<F>(&mut self, is_less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        heap::push_heap_by(self, is_less)
    }

    fn pop_heap(&mut self)
    where
        T: Ord,
    {
        heap::pop_heap(self)
    }

    fn pop_heap_by<F>(&mut self, is_less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        heap::pop_heap_by(self, is_less)
    }

    fn make_heap(&mut self)
    where
        T: Ord,
    {
        heap::make_heap(self)
    }

    fn make_heap_by<F>(&mut self, is_less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        heap::make_heap_by(self, is_less)
    }

    fn sort_heap(&mut self)
    where
        T: Ord,
    {
        heap::sort_heap(self)
    }

    fn sort_heap_by<F>(&mut self, is_less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        heap::sort_heap_by(self, is_less)
    }

    fn remove_heap(&mut self, heap_size: usize, position: usize)
    where
        T: Ord,
    {
        heap::remove_heap(self, heap_size, position)
    }

    fn remove_heap_by<F>(&mut self, heap_size: usize, position: usize, is_less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        heap::remove_heap_by(self, heap_size, position, is_less)
    }

    fn change_heap(&mut self, heap_size: usize, position: usize)
    where
        T: Ord,
    {
        heap::change_heap(self, heap_size, position)
    }

    fn change_heap_by<F>(&mut self, heap_size: usize, position: usize, is_less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        heap::change_heap_by(self, heap_size, position, is_less)
    }

    fn is_heap(&self) -> bool
    where
        T: Ord,
    {
        validate::is_heap(self)
    }

    fn is_heap_by<F>(&self, is_less: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        validate::is_heap_by(self, is_less)
    }

    fn is_heap_until(&self) -> usize
    where
        T: Ord,
    {
        validate::is_heap_until(self)
    }

    fn is_heap_until_by<F>(&self, is_less: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        validate::is_heap_until_by(self, is_less)
    }

    fn check_heap(&self) -> Result<(), HeapViolation>
    where
        T: Ord,
    {
        validate::check_heap(self)
    }

    fn check_heap_by<F>(&self, is_less: F) -> Result<(), HeapViolation>
    where
        F: FnMut(&T, &T) -> bool,
    {
        validate::check_heap_by(self, is_less)
    }
}
