//! Tests for Butterworth filtering.
//!
//! ## Test Organization
//!
//! 1. **Design** - Order, pass band and presets
//! 2. **Frequency Response** - DC and Nyquist behaviour
//! 3. **Validation** - Rejected filter parameters

use approx::assert_abs_diff_eq;

use roadprofile::prelude::*;
use roadprofile::internals::algorithms::filter::ButterworthFilter;

// ============================================================================
// Helper Functions
// ============================================================================

fn alternating(n: usize) -> Vec<f64> {
    (0..n).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect()
}

// ============================================================================
// Design Tests
// ============================================================================

/// Test the MPD high-pass preset.
#[test]
fn test_mpd_highpass_preset() {
    let filter = ButterworthFilter::<f64>::mpd_highpass();
    assert_eq!(filter.order(), 2);
    assert_eq!(filter.kind(), FilterKind::HighPass);

    let spec = FilterSpec::<f64>::mpd_highpass();
    assert_abs_diff_eq!(spec.cutoff, 1.0 / 140.0, epsilon = 1e-15);
    assert_abs_diff_eq!(spec.sample_rate, 2.0, epsilon = 1e-15);
}

/// Test that in-place and copying application agree.
#[test]
fn test_apply_variants_agree() {
    let signal: Vec<f64> = (0..50).map(|i| (i as f64 * 0.3).sin()).collect();
    let filter = ButterworthFilter::design(3, 0.1, 1.0, FilterKind::LowPass);

    let copied = filter.apply(&signal);
    let mut in_place = signal.clone();
    filter.apply_in_place(&mut in_place);

    assert_eq!(copied, in_place);
}

/// Test that a zero signal stays zero.
#[test]
fn test_zero_signal() {
    let out = apply_filter(&[0.0; 32], 4, 0.1, 1.0, FilterKind::HighPass).unwrap();
    assert!(out.iter().all(|&v| v == 0.0));
}

// ============================================================================
// Frequency Response Tests
// ============================================================================

/// Test that low-pass filters settle to a constant input.
#[test]
fn test_lowpass_passes_dc() {
    for order in 1..=5 {
        let out = apply_filter(&[1.0; 400], order, 0.1, 1.0, FilterKind::LowPass).unwrap();
        assert_abs_diff_eq!(out[399], 1.0, epsilon = 1e-6);
    }
}

/// Test that high-pass filters remove a constant input.
#[test]
fn test_highpass_blocks_dc() {
    for order in 1..=5 {
        let out = apply_filter(&[1.0; 400], order, 0.1, 1.0, FilterKind::HighPass).unwrap();
        assert_abs_diff_eq!(out[399], 0.0, epsilon = 1e-6);
    }
}

/// Test that low-pass filters remove the Nyquist frequency.
#[test]
fn test_lowpass_blocks_nyquist() {
    let out = apply_filter(&alternating(400), 2, 0.1, 1.0, FilterKind::LowPass).unwrap();
    assert_abs_diff_eq!(out[399], 0.0, epsilon = 1e-6);
}

/// Test that high-pass filters pass the Nyquist frequency.
#[test]
fn test_highpass_passes_nyquist() {
    let out = apply_filter(&alternating(400), 2, 0.1, 1.0, FilterKind::HighPass).unwrap();
    assert_abs_diff_eq!(out[399].abs(), 1.0, epsilon = 1e-6);
}

/// Test the MPD high-pass on a slow ramp.
///
/// Verifies that long-wavelength trends are strongly attenuated.
#[test]
fn test_mpd_highpass_attenuates_trend() {
    let ramp: Vec<f64> = (0..5000).map(|i| 1.0 + i as f64 * 1e-4).collect();
    let out = mpd_highpass(&ramp);

    assert!(out[4999].abs() < 0.05, "trend residue {}", out[4999]);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test rejection of invalid filter parameters.
#[test]
fn test_invalid_parameters() {
    let signal = [1.0, 2.0, 3.0];

    assert!(matches!(
        apply_filter(&signal, 0, 0.1, 1.0, FilterKind::LowPass),
        Err(ProfileError::InvalidParameter { name: "order", .. })
    ));
    assert!(matches!(
        apply_filter(&signal, 2, 0.5, 1.0, FilterKind::LowPass),
        Err(ProfileError::InvalidParameter { name: "cutoff", .. })
    ));
    assert!(matches!(
        apply_filter(&signal, 2, 0.0, 1.0, FilterKind::LowPass),
        Err(ProfileError::InvalidParameter { name: "cutoff", .. })
    ));
    assert!(matches!(
        apply_filter(&signal, 2, 0.1, -1.0, FilterKind::LowPass),
        Err(ProfileError::InvalidParameter {
            name: "sample_rate",
            ..
        })
    ));
}
