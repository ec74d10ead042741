//! Half-open index ranges over an index-aligned `x`/`y` pair.
//!
//! Used both for evaluation windows and for defective runs.

// External dependencies
use core::ops::Range;

/// Half-open index range `[start, end)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct IndexRange {
    /// First index (inclusive).
    pub start: usize,

    /// One past the last index (exclusive).
    pub end: usize,
}

impl IndexRange {
    /// Create a new range. `start` must not exceed `end`.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "IndexRange::new: start > end");
        Self { start, end }
    }

    /// Number of indices covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the range covers no index.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `idx` lies inside the range.
    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        self.start <= idx && idx < self.end
    }

    /// Borrow the covered part of an index-aligned slice.
    #[inline]
    pub fn slice<'a, T>(&self, values: &'a [T]) -> &'a [T] {
        &values[self.start..self.end]
    }

    /// Convert into a standard range for indexing.
    #[inline]
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<(usize, usize)> for IndexRange {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

impl From<IndexRange> for (usize, usize) {
    fn from(range: IndexRange) -> Self {
        (range.start, range.end)
    }
}
