//! Error type for heap validation

use core::fmt;

/// A parent/child pair that breaks heap order
///
/// Returned by [`check_heap`](crate::validate::check_heap) for the first child
/// (in index order) that is strictly higher priority than its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeapViolation {
    /// Index of the parent
    pub parent: usize,
    /// Index of the offending child; everything before it is a heap
    pub child: usize,
}

impl fmt::Display for HeapViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "heap order violated: element {} has higher priority than its parent {}",
            self.child, self.parent
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HeapViolation {}
