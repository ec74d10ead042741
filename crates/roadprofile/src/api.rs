//! High-level API for road profile processing.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points. `ProfileBuilder`
//! configures the full pipeline (repair, filter, envelope, texture metrics)
//! and builds a `ProfileProcessor`; the free functions expose each stage on
//! its own with input validation.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are checked once in `build()`; inputs are
//!   checked on every call.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ProfileBuilder`] via `RoadProfile::new()`.
//! 2. Chain configuration methods (`.envelope()`, `.mpd()`, etc.).
//! 3. Call `.build()` and run `.process(&x, &y)` or `.process_batch(&profiles)`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::dropout::DropoutRepairer;
use crate::algorithms::envelope::EnvelopeConstraint;
use crate::algorithms::reducer::reduce_windows;
use crate::engine::executor::ProfileConfig;
use crate::engine::validator::Validator;
use crate::evaluation::{mpd, tpa};
use crate::math::{constant, geodesy};

// Publicly re-exported types
pub use crate::adapters::batch::{ProfileProcessor, ProfileSlices};
pub use crate::algorithms::dropout::{DropoutCriterion, RepairedProfile, Truncation};
pub use crate::algorithms::envelope::EnvelopeOutput;
pub use crate::algorithms::filter::{ButterworthFilter, FilterKind, FilterSpec};
pub use crate::algorithms::reducer::WindowedOutput;
pub use crate::engine::output::{EnvelopeStatus, ProfileResult};
pub use crate::evaluation::info::ProfileInfo;
pub use crate::math::geodesy::distance_on_unit_sphere;
pub use crate::math::linefit::{LineFit, fit_line};
pub use crate::primitives::errors::ProfileError;
pub use crate::primitives::range::IndexRange;
pub use crate::primitives::runs::{Runs, detect_runs};
pub use crate::primitives::segments::LengthSegments;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring the processing pipeline.
#[derive(Debug, Clone)]
pub struct ProfileBuilder<T> {
    /// Rule identifying defective samples.
    pub dropout_criterion: Option<DropoutCriterion<T>>,

    /// Length above which boundary dropouts are truncated.
    pub truncation_threshold: Option<T>,

    /// Filter applied after repair.
    pub filter: Option<FilterSpec<T>>,

    /// Envelope curvature bound.
    pub envelope: Option<T>,

    /// Envelope sweep cap.
    pub max_restarts: Option<usize>,

    /// Evaluation segment length for texture metrics.
    pub segment_length: Option<T>,

    /// Segments averaged per metric value.
    pub nmean: Option<usize>,

    /// Compute mean profile depth.
    pub mpd: Option<bool>,

    /// Plane depth for texture penetration area.
    pub tpa: Option<T>,

    /// Parallel batch execution hint.
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for ProfileBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ProfileBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            dropout_criterion: None,
            truncation_threshold: None,
            filter: None,
            envelope: None,
            max_restarts: None,
            segment_length: None,
            nmean: None,
            mpd: None,
            tpa: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the rule identifying defective samples (default: NaN).
    pub fn dropout_criterion(mut self, criterion: DropoutCriterion<T>) -> Self {
        if self.dropout_criterion.is_some() {
            self.duplicate_param = Some("dropout_criterion");
        }
        self.dropout_criterion = Some(criterion);
        self
    }

    /// Set the boundary dropout length above which samples are cut (default: 0.005).
    pub fn truncation_threshold(mut self, threshold: T) -> Self {
        if self.truncation_threshold.is_some() {
            self.duplicate_param = Some("truncation_threshold");
        }
        self.truncation_threshold = Some(threshold);
        self
    }

    /// Apply the standard MPD high-pass filter after repair.
    pub fn highpass(self) -> Self {
        self.filter(FilterSpec::mpd_highpass())
    }

    /// Apply a custom Butterworth filter after repair.
    pub fn filter(mut self, spec: FilterSpec<T>) -> Self {
        if self.filter.is_some() {
            self.duplicate_param = Some("filter");
        }
        self.filter = Some(spec);
        self
    }

    /// Enable the envelope with curvature bound `d`.
    pub fn envelope(mut self, d: T) -> Self {
        if self.envelope.is_some() {
            self.duplicate_param = Some("envelope");
        }
        self.envelope = Some(d);
        self
    }

    /// Set the maximum number of envelope sweeps (default: 100).
    ///
    /// The cap counts every sweep, including the first and the converging one.
    pub fn max_restarts(mut self, max_restarts: usize) -> Self {
        if self.max_restarts.is_some() {
            self.duplicate_param = Some("max_restarts");
        }
        self.max_restarts = Some(max_restarts);
        self
    }

    /// Set the evaluation segment length (default: 0.1).
    pub fn segment_length(mut self, length: T) -> Self {
        if self.segment_length.is_some() {
            self.duplicate_param = Some("segment_length");
        }
        self.segment_length = Some(length);
        self
    }

    /// Set the number of segments averaged per metric value (default: 10).
    pub fn nmean(mut self, nmean: usize) -> Self {
        if self.nmean.is_some() {
            self.duplicate_param = Some("nmean");
        }
        self.nmean = Some(nmean);
        self
    }

    /// Compute mean profile depth.
    pub fn mpd(mut self) -> Self {
        if self.mpd.is_some() {
            self.duplicate_param = Some("mpd");
        }
        self.mpd = Some(true);
        self
    }

    /// Compute texture penetration area with a plane `threshold` below the peak.
    pub fn tpa(mut self, threshold: T) -> Self {
        if self.tpa.is_some() {
            self.duplicate_param = Some("tpa");
        }
        self.tpa = Some(threshold);
        self
    }

    /// Set parallel execution hint for `process_batch` (only for dev)
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and build the processor.
    pub fn build(self) -> Result<ProfileProcessor<T>, ProfileError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let mut config = ProfileConfig::default();

        if let Some(criterion) = self.dropout_criterion {
            config.criterion = criterion;
        }
        if let Some(threshold) = self.truncation_threshold {
            Validator::validate_threshold(threshold, "truncation_threshold")?;
            config.truncation_threshold = threshold;
        }
        if let Some(spec) = self.filter {
            Validator::validate_filter(spec.order, spec.cutoff, spec.sample_rate)?;
            config.filter = Some(spec);
        }
        if let Some(d) = self.envelope {
            Validator::validate_envelope(d)?;
            config.envelope = Some(d);
        }
        if let Some(max_restarts) = self.max_restarts {
            Validator::validate_max_restarts(max_restarts)?;
            config.max_restarts = max_restarts;
        }
        if let Some(length) = self.segment_length {
            Validator::validate_length(length, "segment_length")?;
            config.segment_length = length;
        }
        if let Some(nmean) = self.nmean {
            Validator::validate_nmean(nmean)?;
            config.nmean = nmean;
        }
        if let Some(threshold) = self.tpa {
            Validator::validate_threshold(threshold, "tpa")?;
            config.tpa = Some(threshold);
        }
        config.mpd = self.mpd.unwrap_or(false);

        Ok(ProfileProcessor::new(config, self.parallel.unwrap_or(true)))
    }
}

// ============================================================================
// Segmentation
// ============================================================================

/// Lazy windows of `x` each spanning at least `length`.
pub fn segment_by_length<T: Float>(
    x: &[T],
    length: T,
) -> Result<LengthSegments<'_, T>, ProfileError> {
    Validator::validate_distances(x, 2)?;
    Validator::validate_length(length, "length")?;
    Ok(LengthSegments::new(x, length))
}

// ============================================================================
// Repair
// ============================================================================

/// Repair dropouts with the default 5 mm truncation threshold.
pub fn repair_dropouts<T: Float>(
    x: &[T],
    y: &[T],
    criterion: DropoutCriterion<T>,
) -> Result<RepairedProfile<T>, ProfileError> {
    let threshold = constant(DropoutRepairer::<T>::DEFAULT_TRUNCATION_THRESHOLD);
    repair_dropouts_with_threshold(x, y, criterion, threshold)
}

/// Repair dropouts, truncating boundary runs longer than `threshold`.
pub fn repair_dropouts_with_threshold<T: Float>(
    x: &[T],
    y: &[T],
    criterion: DropoutCriterion<T>,
    threshold: T,
) -> Result<RepairedProfile<T>, ProfileError> {
    Validator::validate_inputs(x, y, 1)?;
    Validator::validate_threshold(threshold, "truncation_threshold")?;
    DropoutRepairer::new(criterion)
        .truncation_threshold(threshold)
        .repair(x, y)
}

// ============================================================================
// Envelope and Filtering
// ============================================================================

/// Bound the discrete second difference of `z` by `d`.
///
/// `max_restarts` caps the total number of sweeps.
pub fn apply_envelope<T: Float>(
    z: &[T],
    d: T,
    max_restarts: usize,
) -> Result<EnvelopeOutput<T>, ProfileError> {
    Validator::validate_envelope(d)?;
    Validator::validate_max_restarts(max_restarts)?;
    Ok(EnvelopeConstraint::new(d).max_restarts(max_restarts).apply(z))
}

/// Run an `order`-th Butterworth filter forward over `signal`.
pub fn apply_filter<T: Float>(
    signal: &[T],
    order: usize,
    cutoff: T,
    sample_rate: T,
    kind: FilterKind,
) -> Result<Vec<T>, ProfileError> {
    Validator::validate_filter(order, cutoff, sample_rate)?;
    Ok(ButterworthFilter::design(order, cutoff, sample_rate, kind).apply(signal))
}

/// Apply the standard MPD high-pass filter.
pub fn mpd_highpass<T: Float>(signal: &[T]) -> Vec<T> {
    ButterworthFilter::mpd_highpass().apply(signal)
}

// ============================================================================
// Windowed Reduction
// ============================================================================

/// Reduce every window of at least `seglen` with `f` and average groups of `nmean`.
pub fn reduce_windowed<T, F>(
    x: &[T],
    y: &[T],
    f: F,
    nmean: usize,
    seglen: T,
) -> Result<WindowedOutput<T>, ProfileError>
where
    T: Float,
    F: FnMut(&[T], &[T]) -> T,
{
    validate_windowed(x, y, nmean, seglen)?;
    Ok(reduce_windows(x, y, f, nmean, seglen))
}

/// Mean profile depth per group of `nmean` segments of length `seglen`.
pub fn calculate_mpd<T: Float>(
    x: &[T],
    y: &[T],
    nmean: usize,
    seglen: T,
) -> Result<WindowedOutput<T>, ProfileError> {
    validate_windowed(x, y, nmean, seglen)?;
    Ok(mpd::calculate_mpd(x, y, nmean, seglen))
}

/// Texture penetration area per group of `nmean` segments of length `seglen`.
pub fn calculate_tpa<T: Float>(
    x: &[T],
    y: &[T],
    threshold: T,
    nmean: usize,
    seglen: T,
) -> Result<WindowedOutput<T>, ProfileError> {
    validate_windowed(x, y, nmean, seglen)?;
    Validator::validate_threshold(threshold, "threshold")?;
    Ok(tpa::calculate_tpa(x, y, threshold, nmean, seglen))
}

fn validate_windowed<T: Float>(
    x: &[T],
    y: &[T],
    nmean: usize,
    seglen: T,
) -> Result<(), ProfileError> {
    Validator::validate_inputs(x, y, 1)?;
    Validator::validate_nmean(nmean)?;
    Validator::validate_length(seglen, "seglen")
}

// ============================================================================
// Geodesy and Sampling Statistics
// ============================================================================

/// Great-circle distances between consecutive fixes, in metres.
pub fn segment_lengths<T: Float>(lat: &[T], lon: &[T]) -> Result<Vec<T>, ProfileError> {
    Validator::validate_coordinates(lat, lon)?;
    Ok(geodesy::segment_lengths(lat, lon))
}

/// Radius of curvature at every fix, in metres.
pub fn curvature_radii<T: Float>(lat: &[T], lon: &[T]) -> Result<Vec<T>, ProfileError> {
    Validator::validate_coordinates(lat, lon)?;
    Ok(geodesy::curvature_radii(lat, lon))
}

/// Spacing statistics of a distance axis in metres.
pub fn profile_info<T: Float>(x: &[T]) -> Result<ProfileInfo<T>, ProfileError> {
    Validator::validate_finite(x, 2)?;
    ProfileInfo::from_distances(x).ok_or(ProfileError::TooFewPoints {
        got: x.len(),
        min: 2,
    })
}
