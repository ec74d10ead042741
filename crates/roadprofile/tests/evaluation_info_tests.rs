//! Tests for sampling statistics of the distance axis.

use approx::assert_relative_eq;

use roadprofile::prelude::*;

/// Test statistics of an irregular axis with a repeated distance.
#[test]
fn test_irregular_axis() {
    let x = [0.0, 0.001, 0.002, 0.002, 0.005];
    let info = profile_info(&x).unwrap();

    assert_eq!(info.points, 5);
    assert_relative_eq!(info.section_length, 0.005);
    assert!(!info.strictly_increasing);
    assert!(info.coinciding_points);

    // Spacings in mm: 1, 1, 0, 3
    assert_relative_eq!(info.mean_spacing, 1.25, epsilon = 1e-9);
    assert_relative_eq!(info.largest_spacing, 3.0, epsilon = 1e-9);
    assert_relative_eq!(info.smallest_spacing, 0.0, epsilon = 1e-9);
    assert_relative_eq!(info.std_spacing, 1.0897247358851685, epsilon = 1e-9);
}

/// Test a uniform axis.
#[test]
fn test_uniform_axis() {
    let x: Vec<f64> = (0..101).map(|i| i as f64 * 0.001).collect();
    let info = profile_info(&x).unwrap();

    assert!(info.strictly_increasing);
    assert!(!info.coinciding_points);
    assert_relative_eq!(info.mean_spacing, 1.0, epsilon = 1e-9);
    assert!(info.std_spacing < 1e-9);
}

/// Test the human-readable summary.
#[test]
fn test_display() {
    let info = profile_info(&[0.0, 0.001, 0.001]).unwrap();
    let text = info.to_string();

    assert!(text.contains("Measurement increasing:            NO"));
    assert!(text.contains("Any measurements coinciding:       YES"));
    assert!(text.contains("Largest distance between points:   1.0000 mm"));
}

/// Test rejection of short and non-finite axes.
#[test]
fn test_invalid_inputs() {
    assert!(matches!(
        profile_info(&[0.0]),
        Err(ProfileError::TooFewPoints { got: 1, min: 2 })
    ));
    assert!(matches!(
        profile_info(&[0.0, f64::NAN]),
        Err(ProfileError::InvalidInput(_))
    ));
}
