//! Execution engine for the profile processing pipeline.
//!
//! ## Purpose
//!
//! This module runs the configured stages over one profile, in order:
//! dropout repair, optional high-pass filtering, optional envelope, and the
//! requested windowed texture metrics.
//!
//! ## Design notes
//!
//! * **Single owned buffer**: The repaired copy of `y` is filtered and
//!   enveloped in place; the caller's slices are only read.
//! * **Separation**: Each stage is delegated to its algorithm module; the
//!   executor only sequences them and gathers the outputs.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * The output `x` is the input `x` cut with the repair's truncation record.
//! * Metrics are computed on the fully processed profile.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not handle parallel execution (handled by adapters).

// External dependencies
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::algorithms::dropout::{DropoutCriterion, DropoutRepairer};
use crate::algorithms::envelope::EnvelopeConstraint;
use crate::algorithms::filter::FilterSpec;
use crate::engine::output::{EnvelopeStatus, ProfileResult};
use crate::evaluation::mpd::{DEFAULT_NMEAN, DEFAULT_SEGMENT_LENGTH, calculate_mpd};
use crate::evaluation::tpa::calculate_tpa;
use crate::math::constant;
use crate::primitives::errors::ProfileError;

// ============================================================================
// Configuration
// ============================================================================

/// Resolved configuration of a processing run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileConfig<T> {
    /// How defective samples are recognised.
    pub criterion: DropoutCriterion<T>,

    /// Boundary runs longer than this are truncated instead of filled.
    pub truncation_threshold: T,

    /// High-pass (or low-pass) filter applied after repair.
    pub filter: Option<FilterSpec<T>>,

    /// Envelope curvature bound `d`.
    pub envelope: Option<T>,

    /// Maximum number of envelope sweeps.
    pub max_restarts: usize,

    /// Evaluation segment length for the texture metrics.
    pub segment_length: T,

    /// Number of segments averaged into one metric value.
    pub nmean: usize,

    /// Whether mean profile depth is computed.
    pub mpd: bool,

    /// Plane depth for texture penetration area, if computed.
    pub tpa: Option<T>,
}

impl<T: Float> Default for ProfileConfig<T> {
    fn default() -> Self {
        Self {
            criterion: DropoutCriterion::NaN,
            truncation_threshold: constant(DropoutRepairer::<T>::DEFAULT_TRUNCATION_THRESHOLD),
            filter: None,
            envelope: None,
            max_restarts: EnvelopeConstraint::<T>::DEFAULT_MAX_RESTARTS,
            segment_length: constant(DEFAULT_SEGMENT_LENGTH),
            nmean: DEFAULT_NMEAN,
            mpd: false,
            tpa: None,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs a `ProfileConfig` over validated profiles.
#[derive(Debug, Clone)]
pub struct ProfileExecutor<T> {
    config: ProfileConfig<T>,
}

impl<T: Float> ProfileExecutor<T> {
    /// Create an executor for a resolved configuration.
    pub fn new(config: ProfileConfig<T>) -> Self {
        Self { config }
    }

    /// The configuration this executor runs.
    pub fn config(&self) -> &ProfileConfig<T> {
        &self.config
    }

    /// Run every configured stage over `(x, y)`.
    ///
    /// `x` must already be validated as finite and non-decreasing.
    pub fn run(&self, x: &[T], y: &[T]) -> Result<ProfileResult<T>, ProfileError> {
        let config = &self.config;

        // Stage 1: repair
        let repaired = DropoutRepairer::new(config.criterion)
            .truncation_threshold(config.truncation_threshold)
            .repair(x, y)?;
        let truncation = repaired.truncation;
        let x_kept = truncation.apply(x).to_vec();
        let mut z = repaired.y;

        // Stage 2: filter
        if let Some(spec) = &config.filter {
            spec.design().apply_in_place(&mut z);
        }

        // Stage 3: envelope
        let envelope = config.envelope.map(|d| {
            let out = EnvelopeConstraint::new(d)
                .max_restarts(config.max_restarts)
                .apply(&z);
            z = out.z;
            EnvelopeStatus {
                sweeps: out.sweeps,
                converged: out.converged,
            }
        });

        // Stage 4: metrics
        let mpd = config
            .mpd
            .then(|| calculate_mpd(&x_kept, &z, config.nmean, config.segment_length));
        let tpa = config.tpa.map(|threshold| {
            calculate_tpa(&x_kept, &z, threshold, config.nmean, config.segment_length)
        });

        debug!(
            points = x_kept.len(),
            repaired = repaired.repaired_samples,
            mpd_groups = mpd.as_ref().map_or(0, |m| m.len()),
            tpa_groups = tpa.as_ref().map_or(0, |t| t.len()),
            "profile processed"
        );

        Ok(ProfileResult {
            x: x_kept,
            y: z,
            truncation,
            repaired_samples: repaired.repaired_samples,
            filtered: config.filter.is_some(),
            envelope,
            mpd,
            tpa,
        })
    }
}
