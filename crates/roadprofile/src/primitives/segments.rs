//! Fixed-physical-length segmentation of an irregularly sampled distance axis.
//!
//! ## Purpose
//!
//! This module splits a non-decreasing distance axis into consecutive
//! half-open index windows, each spanning at least a target physical length.
//! Sample spacing may vary arbitrarily along the profile.
//!
//! ## Design notes
//!
//! * **Lazy**: Windows are produced by an iterator; nothing is allocated.
//! * **Bounded lookahead**: Each search is confined to a window of
//!   `LOOKAHEAD_FACTOR` times the previous window size and re-expanded to the
//!   full suffix only when that window is exhausted.
//! * **Binary search**: `partition_point` locates the boundary inside the
//!   lookahead window, which is valid because `x` is non-decreasing.
//!
//! ## Key concepts
//!
//! * **Minimal window**: `end - 1` is the first index with
//!   `x[end - 1] - x[start] >= length - EPS32`.
//! * **Float slack**: `f32::EPSILON` is subtracted from the target length so
//!   that spans summing to exactly `length` (e.g. `0.21 - 0.11`) are accepted.
//! * **Remainder**: A trailing stretch shorter than `length` is dropped.
//!
//! ## Invariants
//!
//! * Emitted windows are contiguous: each starts where the previous ended.
//! * Every window holds at least one index, so the cursor strictly advances.
//!
//! ## Non-goals
//!
//! * This module does not validate its input (handled by `Validator`).
//! * This module does not slice or copy the data.

// External dependencies
use core::iter::FusedIterator;
use num_traits::Float;

// Internal dependencies
use crate::primitives::range::IndexRange;

/// Slack subtracted from physical lengths before comparing spans.
#[inline]
pub fn length_slack<T: Float>() -> T {
    T::from(f32::EPSILON).unwrap_or_else(T::epsilon)
}

// ============================================================================
// Length Segments Iterator
// ============================================================================

/// Iterator over windows spanning at least a target physical length.
#[derive(Debug, Clone)]
pub struct LengthSegments<'a, T> {
    x: &'a [T],

    // Target length with the float slack already applied.
    length: T,

    // Start of the next window.
    cursor: usize,

    // Exclusive end of the current lookahead window.
    lookahead_end: usize,
}

impl<'a, T: Float> LengthSegments<'a, T> {
    /// Growth factor of the lookahead window relative to the previous window.
    pub const LOOKAHEAD_FACTOR: usize = 3;

    /// Create a segmenter over `x` for windows of at least `length`.
    ///
    /// `x` must be non-decreasing and free of NaN.
    pub fn new(x: &'a [T], length: T) -> Self {
        Self {
            x,
            length: length - length_slack::<T>(),
            cursor: 0,
            lookahead_end: x.len(),
        }
    }

    /// The target length after the float slack was applied.
    #[inline]
    pub fn effective_length(&self) -> T {
        self.length
    }
}

impl<T: Float> Iterator for LengthSegments<'_, T> {
    type Item = IndexRange;

    fn next(&mut self) -> Option<IndexRange> {
        let n = self.x.len();
        let start = self.cursor;

        // No remaining suffix reaches the target length
        if start >= n || self.x[n - 1] - self.x[start] < self.length {
            self.cursor = n;
            return None;
        }

        let x0 = self.x[start];
        let length = self.length;
        let below = |v: &T| *v - x0 < length;

        let lookahead_end = self.lookahead_end.clamp(start, n);
        let mut offset = self.x[start..lookahead_end].partition_point(below);
        if start + offset == lookahead_end {
            // Lookahead exhausted, search the rest of the suffix
            offset += self.x[lookahead_end..].partition_point(below);
        }

        let end = start + offset + 1;
        let step = end - start;
        self.cursor = end;
        self.lookahead_end = end.saturating_add(Self::LOOKAHEAD_FACTOR * step).min(n);

        Some(IndexRange::new(start, end))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.x.len().saturating_sub(self.cursor)))
    }
}

impl<T: Float> FusedIterator for LengthSegments<'_, T> {}
