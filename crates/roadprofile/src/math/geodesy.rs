//! Great-circle distances and path curvature from GPS fixes.
//!
//! ## Purpose
//!
//! Measurement vehicles log WGS84 positions alongside the texture profile.
//! This module converts consecutive fixes into travelled distances and
//! estimates the local radius of curvature of the driven path.
//!
//! ## Design notes
//!
//! * **Spherical model**: Spherical law of cosines on a sphere of radius
//!   `EARTH_RADIUS_M`; the dot product is clamped to `[-1, 1]` so identical
//!   fixes give a distance of zero instead of NaN.
//! * **Circumcircle**: The radius through three consecutive fixes follows from
//!   the side lengths (`abc / sqrt((a+b+c)(b+c-a)(c+a-b)(a+b-c))`).
//!
//! ## Non-goals
//!
//! * Ellipsoidal (Vincenty) accuracy.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::constant;

/// Earth radius used for all distance computations, in metres.
pub const EARTH_RADIUS_M: f64 = 6_373_000.0;

/// Radius reported for straight (collinear or degenerate) triples, in metres.
pub const STRAIGHT_RADIUS_M: f64 = 10_000.0;

/// Great-circle distance in metres between two fixes given in degrees.
pub fn distance_on_unit_sphere<T: Float>(lat1: T, lon1: T, lat2: T, lon2: T) -> T {
    let right_angle = constant::<T>(90.0);

    // Polar angles measured from the north pole
    let phi1 = (right_angle - lat1).to_radians();
    let phi2 = (right_angle - lat2).to_radians();
    let theta1 = lon1.to_radians();
    let theta2 = lon2.to_radians();

    let dot = phi1.sin() * phi2.sin() * (theta1 - theta2).cos() + phi1.cos() * phi2.cos();
    let arc = dot.max(-T::one()).min(T::one()).acos();

    arc * constant::<T>(EARTH_RADIUS_M)
}

/// Distances in metres between consecutive fixes (`n - 1` values).
pub fn segment_lengths<T: Float>(lat: &[T], lon: &[T]) -> Vec<T> {
    debug_assert_eq!(lat.len(), lon.len(), "segment_lengths: length mismatch");

    lat.windows(2)
        .zip(lon.windows(2))
        .map(|(la, lo)| distance_on_unit_sphere(la[0], lo[0], la[1], lo[1]))
        .collect()
}

/// Radius of the circle through a triangle with side lengths `a`, `b`, `c`.
///
/// Degenerate triangles return `STRAIGHT_RADIUS_M`.
pub fn circumcircle_radius<T: Float>(a: T, b: T, c: T) -> T {
    let divider = ((a + b + c) * (b + c - a) * (c + a - b) * (a + b - c))
        .abs()
        .sqrt();
    let radius = (a * b * c) / divider;

    if divider == T::zero() || !radius.is_finite() {
        constant(STRAIGHT_RADIUS_M)
    } else {
        radius
    }
}

/// Radius of curvature in metres at every fix.
///
/// Interior radii come from the circumcircle of each fix and its two
/// neighbours; the first and last fix copy their neighbour. Paths with
/// fewer than three fixes are reported as straight.
pub fn curvature_radii<T: Float>(lat: &[T], lon: &[T]) -> Vec<T> {
    let n = lat.len().min(lon.len());
    if n < 3 {
        return vec![constant(STRAIGHT_RADIUS_M); n];
    }

    let sides = segment_lengths(&lat[..n], &lon[..n]);
    let mut radii = vec![T::zero(); n];

    for i in 1..n - 1 {
        let chord = distance_on_unit_sphere(lat[i - 1], lon[i - 1], lat[i + 1], lon[i + 1]);
        radii[i] = circumcircle_radius(sides[i - 1], sides[i], chord);
    }

    radii[0] = radii[1];
    radii[n - 1] = radii[n - 2];
    radii
}
