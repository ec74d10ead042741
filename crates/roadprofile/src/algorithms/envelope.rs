//! Envelope constraint modelling tire contact.
//!
//! ## Purpose
//!
//! A tire cannot follow arbitrarily sharp valleys of the road texture. This
//! module bounds the discrete second difference of a profile so that
//! `z[i] - (z[i-1] + z[i+1]) / 2 <= d` at every interior sample, producing
//! the envelope the tire rests on.
//!
//! ## Design notes
//!
//! * **Local relaxation**: Each interior sample is checked in order and at
//!   most one local correction is applied per violation.
//! * **Fixed point**: Sweeps repeat from the first interior sample until a
//!   full sweep makes no change.
//! * **Termination**: An explicit sweep counter caps the iteration at
//!   `max_restarts` sweeps. Hitting the cap is not an error; the best-effort
//!   envelope is returned with `converged == false`.
//!
//! ## Key concepts
//!
//! * **Curvature**: `delta = z[i] - (z[i-1] + z[i+1]) / 2`.
//! * **Peak correction** (`delta > d`): raise the next neighbour, flatten both
//!   neighbours to `z[i] - d`, or raise the previous neighbour, chosen by the
//!   signs of `z[i-1] - z[i] + d` and `z[i+1] - z[i] + d`.
//! * **Valley correction** (`delta < -d`): lift `z[i]` itself.
//!
//! ## Invariants
//!
//! * Output length equals input length.
//! * `d == 0` and inputs shorter than 3 samples are returned unchanged.
//!
//! ## Non-goals
//!
//! * This module does not validate `d` or `max_restarts` (handled by `Validator`).

// External dependencies
use num_traits::Float;
use tracing::{debug, warn};

// ============================================================================
// Output
// ============================================================================

/// Envelope together with its convergence status.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvelopeOutput<T> {
    /// Constrained profile.
    pub z: Vec<T>,

    /// Number of sweeps performed.
    pub sweeps: usize,

    /// Whether the last sweep made no change.
    pub converged: bool,
}

// ============================================================================
// Envelope Constraint
// ============================================================================

/// Second-difference bound configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeConstraint<T> {
    /// Upper bound on the local curvature (same unit as the profile).
    pub d: T,

    /// Maximum number of sweeps, the converging sweep included.
    pub max_restarts: usize,
}

impl<T: Float> EnvelopeConstraint<T> {
    /// Default cap on the number of sweeps.
    pub const DEFAULT_MAX_RESTARTS: usize = 100;

    /// Create a constraint with the default sweep cap.
    pub fn new(d: T) -> Self {
        Self {
            d,
            max_restarts: Self::DEFAULT_MAX_RESTARTS,
        }
    }

    /// Override the sweep cap (total sweeps, not restarts after the first).
    pub fn max_restarts(mut self, max_restarts: usize) -> Self {
        self.max_restarts = max_restarts;
        self
    }

    /// Apply the constraint to a copy of `z`.
    pub fn apply(&self, z: &[T]) -> EnvelopeOutput<T> {
        let mut z = z.to_vec();

        if self.d == T::zero() || z.len() < 3 {
            return EnvelopeOutput {
                z,
                sweeps: 0,
                converged: true,
            };
        }

        let mut sweeps = 0;
        let mut converged = false;
        while sweeps < self.max_restarts {
            sweeps += 1;
            if self.sweep(&mut z) == 0 {
                converged = true;
                break;
            }
        }

        if converged {
            debug!(sweeps, "envelope converged");
        } else {
            warn!(
                sweeps,
                max_restarts = self.max_restarts,
                "envelope stopped at the sweep cap without converging"
            );
        }

        EnvelopeOutput {
            z,
            sweeps,
            converged,
        }
    }

    // Run one relaxation sweep over the interior samples, returning the number of corrections.
    fn sweep(&self, z: &mut [T]) -> usize {
        let d = self.d;
        let two = T::one() + T::one();
        let mut changes = 0;

        for i in 1..z.len() - 1 {
            let delta = z[i] - (z[i - 1] + z[i + 1]) / two;

            if delta - d > T::zero() {
                let excess = two * (delta - d);
                if z[i - 1] - z[i] + d > T::zero() {
                    z[i + 1] = z[i + 1] + excess;
                } else if z[i + 1] - z[i] + d < T::zero() {
                    z[i - 1] = z[i] - d;
                    z[i + 1] = z[i] - d;
                } else {
                    z[i - 1] = z[i - 1] + excess;
                }
                changes += 1;
            } else if delta + d < T::zero() {
                z[i] = z[i] - (delta - d);
                changes += 1;
            }
        }

        changes
    }
}
