//! Tests for the builder, the processor, and batch processing.
//!
//! These tests verify the composed pipeline:
//! - Builder validation and duplicate detection
//! - Stage ordering (repair, filter, envelope, metrics)
//! - Batch processing in input order, sequential and parallel
//!
//! ## Test Organization
//!
//! 1. **Builder** - Defaults, validation and duplicates
//! 2. **Pipeline** - Single-profile processing
//! 3. **Batch** - Many profiles
//! 4. **Display** - Human-readable summary

use approx::assert_relative_eq;

use roadprofile::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

// 100 mm blocks of a square-ish texture, 110 mm apart.
fn texture_profile(blocks: usize) -> (Vec<f64>, Vec<f64>) {
    let base_x = [0.0, 0.025, 0.075, 0.1];
    let base_y = [2.0, -2.0, -2.0, 2.0];

    let mut x = Vec::new();
    let mut y = Vec::new();
    for n in 0..blocks {
        x.extend(base_x.iter().map(|v| v + n as f64 * 0.11));
        y.extend_from_slice(&base_y);
    }
    (x, y)
}

// ============================================================================
// Builder Tests
// ============================================================================

/// Test the default configuration.
#[test]
fn test_builder_defaults() {
    let processor = RoadProfile::<f64>::new().build().unwrap();
    let config = processor.config();

    assert_eq!(config.criterion, DropoutCriterion::NaN);
    assert_relative_eq!(config.truncation_threshold, 0.005);
    assert_eq!(config.max_restarts, 100);
    assert_relative_eq!(config.segment_length, 0.1);
    assert_eq!(config.nmean, 10);
    assert!(config.filter.is_none());
    assert!(config.envelope.is_none());
    assert!(!config.mpd);
    assert!(config.tpa.is_none());
    assert!(processor.is_parallel());
}

/// Test duplicate parameter detection.
#[test]
fn test_builder_duplicates() {
    let result = RoadProfile::<f64>::new().nmean(1).nmean(2).build();
    assert!(matches!(
        result,
        Err(ProfileError::DuplicateParameter { parameter: "nmean" })
    ));

    let result = RoadProfile::<f64>::new()
        .highpass()
        .filter(FilterSpec::mpd_highpass())
        .build();
    assert!(matches!(
        result,
        Err(ProfileError::DuplicateParameter { parameter: "filter" })
    ));
}

/// Test parameter validation at build time.
#[test]
fn test_builder_validation() {
    assert!(RoadProfile::<f64>::new().envelope(-1.0).build().is_err());
    assert!(RoadProfile::<f64>::new().max_restarts(0).build().is_err());
    assert!(RoadProfile::<f64>::new().segment_length(0.0).build().is_err());
    assert!(RoadProfile::<f64>::new().nmean(0).build().is_err());
    assert!(RoadProfile::<f64>::new().tpa(-0.5).build().is_err());
    assert!(RoadProfile::<f64>::new().truncation_threshold(-1.0).build().is_err());

    let bad_filter = FilterSpec {
        order: 2,
        cutoff: 2.0,
        sample_rate: 2.0,
        kind: FilterKind::LowPass,
    };
    assert!(RoadProfile::<f64>::new().filter(bad_filter).build().is_err());
}

// ============================================================================
// Pipeline Tests
// ============================================================================

/// Test repair only.
#[test]
fn test_process_repair_only() {
    let x: Vec<f64> = (1..=10).map(f64::from).collect();
    let mut y: Vec<f64> = x.iter().map(|v| 2.0 * v).collect();
    y[0] = f64::NAN;
    y[4] = f64::NAN;

    let result = RoadProfile::new().build().unwrap().process(&x, &y).unwrap();

    // Leading run of one sample is 0 m long, so it is filled
    assert_eq!(result.truncation, Truncation::none(10));
    assert_eq!(result.x, x);
    assert_eq!(result.y[0], 4.0);
    assert_relative_eq!(result.y[4], 10.0);
    assert_eq!(result.repaired_samples, 2);
    assert!(result.envelope.is_none());
    assert!(result.mpd.is_none());
    assert!(!result.filtered);
}

/// Test that truncation cuts the distance axis as well.
#[test]
fn test_process_truncates_axis() {
    let x: Vec<f64> = (0..10).map(f64::from).collect();
    let mut y = vec![1.0; 10];
    y[..3].fill(-9999.0);

    let result = RoadProfile::new()
        .dropout_criterion(DropoutCriterion::Sentinel(-9999.0))
        .build()
        .unwrap()
        .process(&x, &y)
        .unwrap();

    assert_eq!(result.x, x[3..].to_vec());
    assert_eq!(result.y.len(), 7);
    assert!(result.is_truncated(10));
}

/// Test the envelope stage inside the pipeline.
#[test]
fn test_process_envelope() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [0.0, 0.0, 10.0, 0.0, 0.0];

    let result = RoadProfile::new()
        .envelope(1.0)
        .build()
        .unwrap()
        .process(&x, &y)
        .unwrap();

    assert_eq!(result.y, vec![6.0, 9.0, 10.0, 9.0, 6.0]);
    assert_eq!(
        result.envelope,
        Some(EnvelopeStatus {
            sweeps: 3,
            converged: true
        })
    );
    assert!(!result.envelope_capped());
}

/// Test texture metrics on a synthetic profile.
#[test]
fn test_process_metrics() {
    let (x, y) = texture_profile(20);

    let result = RoadProfile::new()
        .mpd()
        .tpa(1.0)
        .build()
        .unwrap()
        .process(&x, &y)
        .unwrap();

    let mpd = result.mpd.as_ref().unwrap();
    assert_eq!(mpd.len(), 2);
    for v in &mpd.values {
        assert_relative_eq!(*v, 2.0, epsilon = 1e-9);
    }

    let tpa = result.tpa.as_ref().unwrap();
    assert_eq!(tpa.boundaries, mpd.boundaries);
    assert!(tpa.values.iter().all(|&v| v > 0.0));

    assert_relative_eq!(result.mean_mpd().unwrap(), 2.0, epsilon = 1e-9);
}

/// Test that the high-pass stage runs before the metrics.
#[test]
fn test_process_highpass() {
    let x: Vec<f64> = (0..2000).map(|i| i as f64 * 0.001).collect();
    let y: Vec<f64> = x.iter().map(|v| 5.0 + (v * 200.0).sin()).collect();

    let plain = RoadProfile::new().build().unwrap().process(&x, &y).unwrap();
    let filtered = RoadProfile::new()
        .highpass()
        .build()
        .unwrap()
        .process(&x, &y)
        .unwrap();

    assert!(filtered.filtered);
    assert_eq!(plain.y, y);
    assert_ne!(filtered.y, y);

    // The offset of 5 is removed by the end of the profile
    let tail_mean = filtered.y[1500..].iter().sum::<f64>() / 500.0;
    assert!(tail_mean.abs() < 0.5, "tail mean {}", tail_mean);
}

/// Test input validation in the processor.
#[test]
fn test_process_invalid_input() {
    let processor = RoadProfile::<f64>::new().build().unwrap();

    assert_eq!(
        processor.process(&[], &[]),
        Err(ProfileError::EmptyInput)
    );
    assert_eq!(
        processor.process(&[1.0, 0.0], &[0.0, 0.0]),
        Err(ProfileError::NonMonotonicDistance { index: 1 })
    );
    assert_eq!(
        processor.process(&[0.0, 1.0], &[f64::NAN, f64::NAN]),
        Err(ProfileError::NoValidSamples)
    );
}

// ============================================================================
// Batch Tests
// ============================================================================

/// Test batch results are returned in input order.
#[test]
fn test_batch_order_and_isolation() {
    let (x1, y1) = texture_profile(10);
    let (x2, y2) = texture_profile(20);
    let bad_y = vec![f64::NAN; x1.len()];

    let processor = RoadProfile::new().mpd().build().unwrap();
    let profiles = [
        (x1.as_slice(), y1.as_slice()),
        (x1.as_slice(), bad_y.as_slice()),
        (x2.as_slice(), y2.as_slice()),
    ];
    let results = processor.process_batch(&profiles);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().mpd.as_ref().unwrap().len(), 1);
    assert_eq!(results[1], Err(ProfileError::NoValidSamples));
    assert_eq!(results[2].as_ref().unwrap().mpd.as_ref().unwrap().len(), 2);
}

/// Test that sequential and parallel batches agree.
#[test]
fn test_batch_parallel_matches_sequential() {
    let owned: Vec<(Vec<f64>, Vec<f64>)> = (1..=12).map(texture_profile).collect();
    let profiles: Vec<(&[f64], &[f64])> = owned
        .iter()
        .map(|(x, y)| (x.as_slice(), y.as_slice()))
        .collect();

    let parallel = RoadProfile::new().mpd().nmean(1).build().unwrap();
    let sequential = RoadProfile::new()
        .mpd()
        .nmean(1)
        .parallel(false)
        .build()
        .unwrap();

    assert!(!sequential.is_parallel());
    assert_eq!(
        parallel.process_batch(&profiles),
        sequential.process_batch(&profiles)
    );
}

/// Test that the parallel hint is not tracked as a parameter.
///
/// Verifies the last value wins without a duplicate error.
#[test]
fn test_parallel_hint_last_wins() {
    let processor = RoadProfile::<f64>::new()
        .parallel(false)
        .parallel(true)
        .build()
        .unwrap();
    assert!(processor.is_parallel());

    let processor = RoadProfile::<f64>::new()
        .parallel(true)
        .parallel(false)
        .build()
        .unwrap();
    assert!(!processor.is_parallel());
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test the human-readable summary.
#[test]
fn test_result_display() {
    let (x, y) = texture_profile(10);
    let result = RoadProfile::new()
        .envelope(10.0)
        .mpd()
        .nmean(5)
        .build()
        .unwrap()
        .process(&x, &y)
        .unwrap();

    let text = result.to_string();
    assert!(text.contains("Summary:"));
    assert!(text.contains("Data points: 40"));
    assert!(text.contains("Envelope:"));
    assert!(text.contains("Texture Metrics:"));
    assert!(text.contains("MPD"));
    assert!(!text.contains("TPA"));
}
