//! Windowed reduction over fixed-length evaluation segments.
//!
//! ## Purpose
//!
//! Texture metrics are reported per evaluation length: a statistic is
//! computed on every segment and consecutive segment results are averaged in
//! groups. This module drives the segmenter, applies the caller's reduction
//! to every window, and averages groups of `nmean` results.
//!
//! ## Key concepts
//!
//! * **Window**: One segment emitted by [`LengthSegments`].
//! * **Group**: `nmean` consecutive windows; its boundary is the distance at
//!   the end of its last window.
//!
//! ## Invariants
//!
//! * The reduction is called exactly once per window, in window order.
//! * `boundaries.len() == values.len() + 1` and `boundaries[0] == x[0]`.
//! * A trailing group with fewer than `nmean` windows is dropped.
//!
//! ## Non-goals
//!
//! * This module does not validate its input (handled by `Validator`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::constant;
use crate::primitives::segments::LengthSegments;

/// Averaged window results with the distance bounds of each group.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowedOutput<T> {
    /// `x[0]` followed by the end distance of every complete group.
    pub boundaries: Vec<T>,

    /// Mean of the window results of every complete group.
    pub values: Vec<T>,
}

impl<T: Float> WindowedOutput<T> {
    /// Number of complete groups.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no complete group was produced.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(group_start, group_end, value)`.
    pub fn groups(&self) -> impl Iterator<Item = (T, T, T)> + '_ {
        self.boundaries
            .windows(2)
            .zip(&self.values)
            .map(|(b, &v)| (b[0], b[1], v))
    }
}

/// Apply `reduce` to every window of at least `seglen` and average groups of `nmean`.
pub fn reduce_windows<T, F>(
    x: &[T],
    y: &[T],
    mut reduce: F,
    nmean: usize,
    seglen: T,
) -> WindowedOutput<T>
where
    T: Float,
    F: FnMut(&[T], &[T]) -> T,
{
    debug_assert!(nmean >= 1, "reduce_windows: nmean must be at least 1");

    let mut boundaries = vec![x[0]];
    let mut values = Vec::new();
    let group_size = constant::<T>(nmean as f64);

    let mut group_sum = T::zero();
    let mut filled = 0;

    for window in LengthSegments::new(x, seglen) {
        let x_sub = window.slice(x);
        group_sum = group_sum + reduce(x_sub, window.slice(y));
        filled += 1;

        if filled == nmean {
            boundaries.push(x_sub[x_sub.len() - 1]);
            values.push(group_sum / group_size);
            group_sum = T::zero();
            filled = 0;
        }
    }

    WindowedOutput { boundaries, values }
}
