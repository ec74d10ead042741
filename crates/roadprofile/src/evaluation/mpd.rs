//! Mean profile depth (MPD).
//!
//! ## Purpose
//!
//! This module computes the mean profile depth of a texture profile. Each
//! evaluation segment (100 mm by default) is detrended, split in two halves
//! at 50 mm, and the mean of the two half-segment peaks is the segment's
//! mean segment depth (MSD). Groups of MSD values are averaged into MPD.
//!
//! ## Design notes
//!
//! * **Detrending**: The least-squares line of the segment is subtracted
//!   before the peaks are taken.
//! * **Split**: The first half holds every sample with `x <= x[0] + 0.05`;
//!   both halves are kept non-empty for segments of at least two samples.
//!
//! ## Non-goals
//!
//! * This module does not validate its input (handled by `Validator`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::reducer::{WindowedOutput, reduce_windows};
use crate::math::constant;
use crate::math::linefit::LineFit;

/// Default evaluation segment length, in metres.
pub const DEFAULT_SEGMENT_LENGTH: f64 = 0.1;

/// Default number of segments averaged into one MPD value.
pub const DEFAULT_NMEAN: usize = 10;

/// Distance from the segment start at which the two halves are split, in metres.
pub const MSD_SPLIT: f64 = 0.05;

/// Mean of the peaks of the two half-segments of `(x, y)`.
///
/// No detrending is applied. Returns NaN for empty input.
pub fn mean_segment_depth<T: Float>(x: &[T], y: &[T]) -> T {
    let n = x.len().min(y.len());
    match n {
        0 => return T::nan(),
        1 => return y[0],
        _ => {}
    }

    let limit = x[0] + constant::<T>(MSD_SPLIT);
    let split = x[..n].partition_point(|&v| v <= limit).clamp(1, n - 1);

    let peak = |values: &[T]| values.iter().fold(T::neg_infinity(), |m, &v| m.max(v));
    let two = T::one() + T::one();

    (peak(&y[..split]) + peak(&y[split..n])) / two
}

/// Mean segment depth of a single evaluation segment after linear detrending.
pub fn segment_mpd<T: Float>(x: &[T], y: &[T]) -> T {
    match LineFit::least_squares(x, y) {
        Some(line) => mean_segment_depth(x, &line.residuals(x, y)),
        None => T::nan(),
    }
}

/// Mean profile depth per group of `nmean` segments of length `seglen`.
pub fn calculate_mpd<T: Float>(x: &[T], y: &[T], nmean: usize, seglen: T) -> WindowedOutput<T> {
    reduce_windows(x, y, segment_mpd::<T>, nmean, seglen)
}
