//! The vacancy carried through a sift
//!
//! Sifting moves a single value through the heap while every element it
//! passes is shifted by one slot. Rather than swapping at each level, the value
//! is read out of the slice once, leaving a logical hole. Neighbours are then
//! copied bitwise into the hole, and the value is written back exactly once
//! when the [`Hole`] is dropped.
//!
//! Writing back in `Drop` keeps the slice a valid permutation of its original
//! elements even if a user comparator panics mid-sift.

use core::mem::ManuallyDrop;
use core::ptr;

/// A slot of `data` whose element has been moved out into `elt`.
///
/// While the hole exists the slot at `pos` is logically uninitialised and
/// must not be read through `data`.
pub(crate) struct Hole<'a, T> {
    data: &'a mut [T],
    elt: ManuallyDrop<T>,
    pos: usize,
}

impl<'a, T> Hole<'a, T> {
    /// Moves the element at `pos` out of `data`, leaving a hole.
    ///
    /// # Safety
    ///
    /// `pos` must be in bounds for `data`.
    #[inline]
    pub(crate) unsafe fn new(data: &'a mut [T], pos: usize) -> Self {
        debug_assert!(pos < data.len());
        let elt = ptr::read(data.get_unchecked(pos));
        Hole {
            data,
            elt: ManuallyDrop::new(elt),
            pos,
        }
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// The element being carried.
    #[inline]
    pub(crate) fn element(&self) -> &T {
        &self.elt
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Safety
    ///
    /// `index` must be in bounds and different from the hole position.
    #[inline]
    pub(crate) unsafe fn get(&self, index: usize) -> &T {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        self.data.get_unchecked(index)
    }

    /// Copies the element at `index` into the hole; `index` becomes the hole.
    ///
    /// # Safety
    ///
    /// `index` must be in bounds and different from the hole position.
    #[inline]
    pub(crate) unsafe fn move_to(&mut self, index: usize) {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        let base = self.data.as_mut_ptr();
        let src: *const T = base.add(index);
        let dst: *mut T = base.add(self.pos);
        ptr::copy_nonoverlapping(src, dst, 1);
        self.pos = index;
    }
}

impl<T> Drop for Hole<'_, T> {
    #[inline]
    fn drop(&mut self) {
        // Fill the hole with the carried element.
        unsafe {
            let pos = self.pos;
            ptr::copy_nonoverlapping(&*self.elt, self.data.get_unchecked_mut(pos), 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_fills_hole() {
        let mut data = [10, 20, 30, 40];
        unsafe {
            let mut hole = Hole::new(&mut data, 3);
            assert_eq!(*hole.element(), 40);
            hole.move_to(1);
            assert_eq!(hole.pos(), 1);
            assert_eq!(*hole.get(0), 10);
        }
        assert_eq!(data, [10, 40, 30, 20]);
    }

    #[test]
    fn test_untouched_hole_is_identity() {
        let mut data = [String::from("a"), String::from("b")];
        unsafe {
            let hole = Hole::new(&mut data, 0);
            assert_eq!(hole.element(), "a");
        }
        assert_eq!(data, ["a", "b"]);
    }
}
