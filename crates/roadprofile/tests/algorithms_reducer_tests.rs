//! Tests for windowed reduction.
//!
//! ## Test Organization
//!
//! 1. **Grouping** - Group means, boundaries and dropped remainders
//! 2. **Callback** - Call order and window contents
//! 3. **Validation** - Rejected parameters

use approx::assert_relative_eq;

use roadprofile::prelude::*;

// ============================================================================
// Grouping Tests
// ============================================================================

/// Test group means and boundaries with one window per group.
#[test]
fn test_one_window_per_group() {
    let x: Vec<f64> = (0..10).map(f64::from).collect();
    let y: Vec<f64> = (0..10).map(|i| f64::from(i) * 2.0).collect();

    // Windows [0,3), [3,6), [6,9)
    let out = reduce_windowed(&x, &y, |_, ys| ys[0], 1, 2.0).unwrap();

    assert_eq!(out.values, vec![0.0, 6.0, 12.0]);
    assert_eq!(out.boundaries, vec![0.0, 2.0, 5.0, 8.0]);
    assert_eq!(out.len(), 3);
}

/// Test averaging with an incomplete trailing group.
#[test]
fn test_incomplete_group_dropped() {
    let x: Vec<f64> = (0..10).map(f64::from).collect();
    let y = x.clone();

    // Three windows, groups of two: only the first group completes
    let out = reduce_windowed(&x, &y, |_, ys| ys[0], 2, 2.0).unwrap();

    assert_eq!(out.values.len(), 1);
    assert_relative_eq!(out.values[0], 1.5);
    assert_eq!(out.boundaries, vec![0.0, 5.0]);
}

/// Test a profile too short for any window.
#[test]
fn test_no_windows() {
    let x = [0.0, 0.5];
    let out = reduce_windowed(&x, &x, |_, _| 1.0, 1, 1.0).unwrap();

    assert!(out.is_empty());
    assert_eq!(out.boundaries, vec![0.0]);
}

/// Test the group iterator.
#[test]
fn test_groups_iterator() {
    let x: Vec<f64> = (0..10).map(f64::from).collect();
    let out = reduce_windowed(&x, &x, |xs, _| xs.len() as f64, 1, 2.0).unwrap();

    let groups: Vec<_> = out.groups().collect();
    assert_eq!(groups, vec![(0.0, 2.0, 3.0), (2.0, 5.0, 3.0), (5.0, 8.0, 3.0)]);
}

// ============================================================================
// Callback Tests
// ============================================================================

/// Test that the reduction sees aligned window slices in order.
#[test]
fn test_callback_order_and_alignment() {
    let x: Vec<f64> = (0..8).map(f64::from).collect();
    let y: Vec<f64> = x.iter().map(|v| v * 10.0).collect();
    let mut seen = Vec::new();

    let _ = reduce_windowed(
        &x,
        &y,
        |xs, ys| {
            assert_eq!(xs.len(), ys.len());
            assert!(xs.iter().zip(ys).all(|(a, b)| *b == a * 10.0));
            seen.push(xs[0]);
            0.0
        },
        1,
        3.0,
    )
    .unwrap();

    assert_eq!(seen, vec![0.0, 4.0]);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test rejection of invalid parameters.
#[test]
fn test_invalid_parameters() {
    let x = [0.0, 1.0, 2.0];

    assert!(matches!(
        reduce_windowed(&x, &x, |_, _| 0.0, 0, 1.0),
        Err(ProfileError::InvalidParameter { name: "nmean", .. })
    ));
    assert!(matches!(
        reduce_windowed(&x, &x, |_, _| 0.0, 1, -1.0),
        Err(ProfileError::InvalidParameter { name: "seglen", .. })
    ));
    assert!(matches!(
        reduce_windowed(&x, &x[..2], |_, _| 0.0, 1, 1.0),
        Err(ProfileError::MismatchedInputs { .. })
    ));
}
