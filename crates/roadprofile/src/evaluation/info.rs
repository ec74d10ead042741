//! Sampling statistics of a measured distance axis.
//!
//! ## Purpose
//!
//! Before processing a recording it is useful to know how regularly it was
//! sampled. This module summarises the spacing of the distance axis:
//! length, monotonicity, coinciding samples, and spacing statistics.
//!
//! ## Design notes
//!
//! * **Units**: Distances are given in metres; spacings are reported in millimetres.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::math::constant;

/// Spacing statistics of a distance axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileInfo<T> {
    /// Number of measurement points.
    pub points: usize,

    /// Distance between the first and last point, in metres.
    pub section_length: T,

    /// Whether every spacing is strictly positive.
    pub strictly_increasing: bool,

    /// Whether any two consecutive points share the same distance.
    pub coinciding_points: bool,

    /// Mean spacing, in millimetres.
    pub mean_spacing: T,

    /// Population standard deviation of the spacing, in millimetres.
    pub std_spacing: T,

    /// Largest spacing, in millimetres.
    pub largest_spacing: T,

    /// Smallest spacing, in millimetres.
    pub smallest_spacing: T,
}

impl<T: Float> ProfileInfo<T> {
    /// Summarise a distance axis given in metres.
    ///
    /// Returns `None` for fewer than two points.
    pub fn from_distances(metres: &[T]) -> Option<Self> {
        let n = metres.len();
        if n < 2 {
            return None;
        }

        let to_mm = constant::<T>(1000.0);
        let spacings: Vec<T> = metres.windows(2).map(|w| (w[1] - w[0]) * to_mm).collect();
        let count = T::from(spacings.len())?;

        let mean = spacings.iter().fold(T::zero(), |acc, &d| acc + d) / count;
        let variance = spacings
            .iter()
            .fold(T::zero(), |acc, &d| acc + (d - mean) * (d - mean))
            / count;

        Some(Self {
            points: n,
            section_length: metres[n - 1] - metres[0],
            strictly_increasing: spacings.iter().all(|&d| d > T::zero()),
            coinciding_points: spacings.iter().any(|&d| d == T::zero()),
            mean_spacing: mean,
            std_spacing: variance.sqrt(),
            largest_spacing: spacings.iter().fold(T::neg_infinity(), |m, &d| m.max(d)),
            smallest_spacing: spacings.iter().fold(T::infinity(), |m, &d| m.min(d)),
        })
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "YES" } else { "NO" }
}

impl<T: Float + Display> Display for ProfileInfo<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let km = self.section_length / constant::<T>(1000.0);

        writeln!(
            f,
            "Number of measurement points:      {:.2} mio.",
            self.points as f64 / 1e6
        )?;
        writeln!(f, "Length of measured sections:       {:.2} km", km)?;
        writeln!(
            f,
            "Measurement increasing:            {}",
            yes_no(self.strictly_increasing)
        )?;
        writeln!(
            f,
            "Any measurements coinciding:       {}",
            yes_no(self.coinciding_points)
        )?;
        writeln!(
            f,
            "Mean distance between points:      {:.4} mm (σ = {:.4} mm)",
            self.mean_spacing, self.std_spacing
        )?;
        writeln!(
            f,
            "Largest distance between points:   {:.4} mm",
            self.largest_spacing
        )?;
        write!(
            f,
            "Smallest distance between points:  {:.4} mm",
            self.smallest_spacing
        )
    }
}
