//! Detection and repair of dropout samples.
//!
//! ## Purpose
//!
//! Laser profilometers report invalid readings either as a sentinel value
//! (e.g. `-9999`) or as NaN. This module locates runs of such samples and
//! repairs them so that the profile can be reduced window by window.
//!
//! ## Design notes
//!
//! * **Boundary runs**: A run touching the first or last sample is cut from
//!   the profile when it covers more ground than `truncation_threshold`;
//!   otherwise it is flat-filled with the nearest valid sample.
//! * **Interior runs**: Always bridged by the straight line through the two
//!   valid neighbours, evaluated at the original distances.
//! * **Ownership**: The caller's slices are never mutated. Exactly one owned
//!   copy of the kept range of `y` is made and repaired in place.
//!
//! ## Key concepts
//!
//! * **Truncation record**: `(front_cut, back_cut)` such that the repaired
//!   signal corresponds to `original[front_cut..back_cut]`.
//! * **Threshold**: Defaults to 5 mm expressed in metres, compared with the
//!   same `f32::EPSILON` slack used by the segmenter.
//!
//! ## Invariants
//!
//! * Interior runs are never truncated.
//! * Without dropouts the signal is returned unchanged with truncation `(0, n)`.
//!
//! ## Non-goals
//!
//! * This module does not validate its input (handled by `Validator`).
//! * This module does not cut the distance axis; use [`Truncation::apply`].

// External dependencies
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::math::constant;
use crate::math::linefit::LineFit;
use crate::primitives::errors::ProfileError;
use crate::primitives::runs::detect_runs;
use crate::primitives::segments::length_slack;

// ============================================================================
// Dropout Criterion
// ============================================================================

/// Rule deciding which samples are dropouts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropoutCriterion<T> {
    /// Samples exactly equal to the sentinel value. A NaN sentinel matches NaN samples.
    Sentinel(T),

    /// Samples that are NaN.
    NaN,
}

impl<T: Float> Default for DropoutCriterion<T> {
    fn default() -> Self {
        Self::NaN
    }
}

impl<T: Float> DropoutCriterion<T> {
    /// Build a criterion from a raw marker value; NaN selects [`DropoutCriterion::NaN`].
    pub fn from_value(marker: T) -> Self {
        if marker.is_nan() {
            Self::NaN
        } else {
            Self::Sentinel(marker)
        }
    }

    /// Whether `value` is a dropout under this criterion.
    #[inline]
    pub fn is_dropout(&self, value: T) -> bool {
        match *self {
            Self::Sentinel(marker) if marker.is_nan() => value.is_nan(),
            Self::Sentinel(marker) => value == marker,
            Self::NaN => value.is_nan(),
        }
    }

    /// Element-wise dropout condition for `y`.
    pub fn condition(&self, y: &[T]) -> Vec<bool> {
        y.iter().map(|&v| self.is_dropout(v)).collect()
    }
}

// ============================================================================
// Output Types
// ============================================================================

/// Range of the original arrays kept after boundary truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Truncation {
    /// Number of leading samples removed.
    pub front_cut: usize,

    /// Exclusive end of the kept range, in original indices.
    pub back_cut: usize,
}

impl Truncation {
    /// Record for a signal of `len` samples with nothing removed.
    #[inline]
    pub fn none(len: usize) -> Self {
        Self {
            front_cut: 0,
            back_cut: len,
        }
    }

    /// Number of samples kept.
    #[inline]
    pub fn len(&self) -> usize {
        self.back_cut - self.front_cut
    }

    /// Whether no sample was kept.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether any sample of a signal of `original_len` samples was removed.
    #[inline]
    pub fn is_truncated(&self, original_len: usize) -> bool {
        self.front_cut > 0 || self.back_cut < original_len
    }

    /// The kept part of an index-aligned series (e.g. the distance axis).
    #[inline]
    pub fn apply<'a, U>(&self, values: &'a [U]) -> &'a [U] {
        &values[self.front_cut..self.back_cut]
    }
}

impl From<Truncation> for (usize, usize) {
    fn from(t: Truncation) -> Self {
        (t.front_cut, t.back_cut)
    }
}

/// Repaired signal with the truncation applied to it.
#[derive(Debug, Clone, PartialEq)]
pub struct RepairedProfile<T> {
    /// Repaired signal, `truncation.len()` samples long.
    pub y: Vec<T>,

    /// Kept range of the original arrays.
    pub truncation: Truncation,

    /// Number of samples overwritten by flat-fill or interpolation.
    pub repaired_samples: usize,
}

// ============================================================================
// Repairer
// ============================================================================

/// Dropout repair configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropoutRepairer<T> {
    /// Rule deciding which samples are dropouts.
    pub criterion: DropoutCriterion<T>,

    /// Boundary runs spanning more than this distance are truncated.
    pub truncation_threshold: T,
}

impl<T: Float> DropoutRepairer<T> {
    /// Default truncation threshold: 5 mm, in metres.
    pub const DEFAULT_TRUNCATION_THRESHOLD: f64 = 0.005;

    /// Create a repairer with the default truncation threshold.
    pub fn new(criterion: DropoutCriterion<T>) -> Self {
        Self {
            criterion,
            truncation_threshold: constant(Self::DEFAULT_TRUNCATION_THRESHOLD),
        }
    }

    /// Override the truncation threshold (same unit as `x`).
    pub fn truncation_threshold(mut self, threshold: T) -> Self {
        self.truncation_threshold = threshold;
        self
    }

    // Whether a boundary run over `x[start..end]` covers too much ground to patch.
    #[inline]
    fn exceeds_threshold(&self, x: &[T], start: usize, end: usize) -> bool {
        x[end - 1] - x[start] > self.truncation_threshold + length_slack::<T>()
    }

    /// Repair the dropouts of `y` sampled at distances `x`.
    ///
    /// `x` and `y` must have the same non-zero length.
    pub fn repair(&self, x: &[T], y: &[T]) -> Result<RepairedProfile<T>, ProfileError> {
        let n = y.len();
        debug_assert_eq!(x.len(), n, "repair: length mismatch");

        let mut condition = self.criterion.condition(y);
        let mut front_cut = 0;
        let mut back_cut = n;
        let mut fill_front = None;
        let mut fill_back = None;

        // Step 1: Run touching the first sample
        if condition.first() == Some(&true) {
            let end = condition.iter().position(|&c| !c).unwrap_or(n);
            if end == n {
                return Err(ProfileError::NoValidSamples);
            }
            if self.exceeds_threshold(x, 0, end) {
                front_cut = end;
            } else {
                fill_front = Some(end);
            }
        }

        // Step 2: Run touching the last sample (a valid sample exists at this point)
        if condition.last() == Some(&true) {
            let start = n - condition.iter().rev().position(|&c| !c).unwrap_or(n);
            if self.exceeds_threshold(x, start, n) {
                back_cut = start;
            } else {
                fill_back = Some(start);
            }
        }

        if front_cut > 0 || back_cut < n {
            debug!(front_cut, back_cut, len = n, "truncated boundary dropouts");
        }

        // Step 3: Single owned copy of the kept range
        let xs = &x[front_cut..back_cut];
        let condition = &mut condition[front_cut..back_cut];
        let mut out = y[front_cut..back_cut].to_vec();
        let len = out.len();
        let mut repaired_samples = 0;

        if let Some(end) = fill_front {
            let value = out[end];
            out[..end].fill(value);
            condition[..end].fill(false);
            repaired_samples += end;
        }

        if let Some(start) = fill_back {
            let local = start - front_cut;
            let value = out[local - 1];
            out[local..].fill(value);
            condition[local..].fill(false);
            repaired_samples += len - local;
        }

        // Step 4: Interior runs
        for run in detect_runs(condition) {
            if run.start == 0 || run.end == len {
                return Err(ProfileError::InsufficientNeighbors {
                    start: run.start + front_cut,
                    end: run.end + front_cut,
                });
            }

            let left = run.start - 1;
            let right = run.end;
            let line = LineFit::through((xs[left], out[left]), (xs[right], out[right])).ok_or(
                ProfileError::DegenerateInterpolation {
                    left: left + front_cut,
                    right: right + front_cut,
                },
            )?;

            line.evaluate_into(run.slice(xs), &mut out[run.as_range()]);
            repaired_samples += run.len();
        }

        if repaired_samples > 0 {
            debug!(repaired_samples, "repaired dropout samples");
        }

        Ok(RepairedProfile {
            y: out,
            truncation: Truncation {
                front_cut,
                back_cut,
            },
            repaired_samples,
        })
    }
}
