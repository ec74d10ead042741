//! Tests for straight-line fits.
//!
//! ## Test Organization
//!
//! 1. **Two-Point Fits** - Exact lines and degenerate pairs
//! 2. **Least Squares** - Exact and noisy data, vertical clouds

use approx::assert_relative_eq;

use roadprofile::prelude::*;
use roadprofile::internals::math::linefit::LineFit;

// ============================================================================
// Two-Point Fit Tests
// ============================================================================

/// Test the line through two points.
#[test]
fn test_fit_line_two_points() {
    let line = fit_line([(1.0, 3.0), (3.0, 7.0)]).unwrap();

    assert_relative_eq!(line.slope, 2.0);
    assert_relative_eq!(line.intercept, 1.0);
    assert_relative_eq!(line.evaluate(2.0), 5.0);
}

/// Test that coinciding x values have no line.
#[test]
fn test_fit_line_degenerate() {
    assert!(fit_line([(1.0, 3.0), (1.0, 7.0)]).is_none());
    assert!(fit_line([(1.0, 3.0), (f64::INFINITY, 7.0)]).is_none());
}

/// Test evaluation into an output buffer.
#[test]
fn test_evaluate_into() {
    let line = LineFit {
        slope: 0.5,
        intercept: -1.0,
    };
    let mut out = [0.0; 3];
    line.evaluate_into(&[0.0, 2.0, 4.0], &mut out);

    assert_eq!(out, [-1.0, 0.0, 1.0]);
}

// ============================================================================
// Least Squares Tests
// ============================================================================

/// Test recovery of an exact line.
#[test]
fn test_least_squares_exact() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y: Vec<f64> = x.iter().map(|v| 1337.0 * v + 1.337).collect();
    let line = LineFit::least_squares(&x, &y).unwrap();

    assert_relative_eq!(line.slope, 1337.0, max_relative = 1e-12);
    assert_relative_eq!(line.intercept, 1.337, max_relative = 1e-9);

    let residuals = line.residuals(&x, &y);
    assert!(residuals.iter().all(|r| r.abs() < 1e-9));
}

/// Test symmetric noise around a line.
#[test]
fn test_least_squares_symmetric_noise() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [1.0, 2.0, 4.0, 5.0];
    let line = LineFit::least_squares(&x, &y).unwrap();

    // Closed form: slope = sxy / sxx = 7 / 5
    assert_relative_eq!(line.slope, 1.4, epsilon = 1e-12);
    assert_relative_eq!(line.intercept, 0.9, epsilon = 1e-12);
}

/// Test degenerate inputs.
#[test]
fn test_least_squares_degenerate() {
    assert!(LineFit::<f64>::least_squares(&[], &[]).is_none());

    // All x equal: horizontal line through the mean
    let line = LineFit::least_squares(&[2.0, 2.0, 2.0], &[1.0, 2.0, 6.0]).unwrap();
    assert_eq!(line.slope, 0.0);
    assert_relative_eq!(line.intercept, 3.0);
}
