//! Texture penetration area (TPA).
//!
//! ## Purpose
//!
//! The texture penetration area measures how much profile material a flat
//! tread would displace if lowered into the texture. A horizontal plane is
//! placed `threshold` below the highest sample and the area of profile above
//! that plane is integrated.
//!
//! ## Design notes
//!
//! * **Exact integration**: The profile is treated as piecewise linear; each
//!   segment's positive part above the plane is integrated in closed form,
//!   including partial segments that cross the plane.
//! * **Depth cap**: The plane never sinks below the deepest sample, so a flat
//!   profile has zero penetration area.
//!
//! ## Invariants
//!
//! * The area is non-negative and invariant under a vertical offset of the profile.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::reducer::{WindowedOutput, reduce_windows};

/// Area of the profile above a plane `threshold` below its highest sample.
pub fn texture_penetration_area<T: Float>(x: &[T], y: &[T], threshold: T) -> T {
    let n = x.len().min(y.len());
    if n < 2 {
        return T::zero();
    }

    let (lowest, highest) = y[..n]
        .iter()
        .fold((T::infinity(), T::neg_infinity()), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let level = (highest - threshold).max(lowest);
    let two = T::one() + T::one();

    let mut area = T::zero();
    for i in 1..n {
        let h = x[i] - x[i - 1];
        let u0 = y[i - 1] - level;
        let u1 = y[i] - level;

        area = area
            + if u0 >= T::zero() && u1 >= T::zero() {
                h * (u0 + u1) / two
            } else if u0 <= T::zero() && u1 <= T::zero() {
                T::zero()
            } else {
                // Segment crosses the plane: triangle on the positive side
                let (p, q) = if u0 > T::zero() { (u0, u1) } else { (u1, u0) };
                h * p * p / (two * (p - q))
            };
    }

    area
}

/// Texture penetration area per group of `nmean` segments of length `seglen`.
pub fn calculate_tpa<T: Float>(
    x: &[T],
    y: &[T],
    threshold: T,
    nmean: usize,
    seglen: T,
) -> WindowedOutput<T> {
    reduce_windows(
        x,
        y,
        |xs, ys| texture_penetration_area(xs, ys, threshold),
        nmean,
        seglen,
    )
}
