//! Output types for the profile processing pipeline.
//!
//! ## Purpose
//!
//! This module defines `ProfileResult`, which carries everything a
//! `ProfileProcessor` run produces: the repaired (and optionally filtered
//! and enveloped) profile, the truncation record, and the texture metrics
//! that were requested.
//!
//! ## Design notes
//!
//! * **Optional outputs**: Stages that were not configured leave their
//!   output as `None`.
//! * **Consistency**: `x` is cut with the same truncation record as `y`, so
//!   both stay index-aligned.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//!
//! ## Invariants
//!
//! * `x.len() == y.len() == truncation.len()`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::dropout::Truncation;
use crate::algorithms::reducer::WindowedOutput;

// ============================================================================
// Envelope Status
// ============================================================================

/// How the envelope stage terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeStatus {
    /// Number of sweeps performed.
    pub sweeps: usize,

    /// Whether the last sweep made no change.
    pub converged: bool,
}

// ============================================================================
// Result Structure
// ============================================================================

/// Processed profile and the metrics computed from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileResult<T> {
    /// Distances of the kept samples.
    pub x: Vec<T>,

    /// Processed profile, index-aligned with `x`.
    pub y: Vec<T>,

    /// Kept range of the original input.
    pub truncation: Truncation,

    /// Number of samples that were filled or interpolated.
    pub repaired_samples: usize,

    /// Whether the high-pass filter was applied.
    pub filtered: bool,

    /// Termination of the envelope stage, if it ran.
    pub envelope: Option<EnvelopeStatus>,

    /// Mean profile depth per group of windows.
    pub mpd: Option<WindowedOutput<T>>,

    /// Texture penetration area per group of windows.
    pub tpa: Option<WindowedOutput<T>>,
}

impl<T: Float> ProfileResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Check if the repair stage cut samples from either end.
    pub fn is_truncated(&self, original_len: usize) -> bool {
        self.truncation.is_truncated(original_len)
    }

    /// Check if the envelope stage hit its sweep cap.
    pub fn envelope_capped(&self) -> bool {
        matches!(self.envelope, Some(EnvelopeStatus { converged: false, .. }))
    }

    /// Mean of all MPD group values, if any were computed.
    pub fn mean_mpd(&self) -> Option<T> {
        self.mpd.as_ref().and_then(mean_of)
    }

    /// Mean of all TPA group values, if any were computed.
    pub fn mean_tpa(&self) -> Option<T> {
        self.tpa.as_ref().and_then(mean_of)
    }
}

fn mean_of<T: Float>(output: &WindowedOutput<T>) -> Option<T> {
    if output.values.is_empty() {
        return None;
    }
    let sum = output.values.iter().fold(T::zero(), |acc, &v| acc + v);
    T::from(output.values.len()).map(|n| sum / n)
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for ProfileResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.x.len())?;
        writeln!(
            f,
            "  Kept range:  [{}, {})",
            self.truncation.front_cut, self.truncation.back_cut
        )?;
        writeln!(f, "  Repaired:    {}", self.repaired_samples)?;

        if self.filtered {
            writeln!(f, "  High-pass:   Applied")?;
        }

        if let Some(status) = self.envelope {
            let state = if status.converged {
                "converged"
            } else {
                "capped"
            };
            writeln!(f, "  Envelope:    {} sweeps ({})", status.sweeps, state)?;
        }

        if let Some(mean) = self.mean_mpd() {
            writeln!(f, "  Mean MPD:    {}", mean)?;
        }
        if let Some(mean) = self.mean_tpa() {
            writeln!(f, "  Mean TPA:    {}", mean)?;
        }

        let has_mpd = self.mpd.is_some();
        let has_tpa = self.tpa.is_some();
        if !has_mpd && !has_tpa {
            return Ok(());
        }

        // One row per group; MPD and TPA share the segmentation
        writeln!(f)?;
        writeln!(f, "Texture Metrics:")?;
        write!(f, "{:>10} {:>10}", "From", "To")?;
        if has_mpd {
            write!(f, " {:>12}", "MPD")?;
        }
        if has_tpa {
            write!(f, " {:>12}", "TPA")?;
        }
        writeln!(f)?;

        let line_width = 21 + if has_mpd { 13 } else { 0 } + if has_tpa { 13 } else { 0 };
        writeln!(f, "{:-<width$}", "", width = line_width)?;

        let reference = self.mpd.as_ref().or(self.tpa.as_ref());
        let rows = reference.map_or(0, WindowedOutput::len);
        for idx in 0..rows {
            if let Some(out) = reference {
                write!(
                    f,
                    "{:>10.3} {:>10.3}",
                    out.boundaries[idx],
                    out.boundaries[idx + 1]
                )?;
            }
            if let Some(mpd) = &self.mpd {
                write!(f, " {:>12.6}", mpd.values[idx])?;
            }
            if let Some(tpa) = &self.tpa {
                write!(f, " {:>12.6}", tpa.values[idx])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
