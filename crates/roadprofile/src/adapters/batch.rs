//! Batch adapter for profile processing.
//!
//! ## Purpose
//!
//! This module provides the processor returned by `ProfileBuilder::build`.
//! It validates each profile, delegates to the execution engine, and can
//! process many independent profiles at once.
//!
//! ## Design notes
//!
//! * **Delegation**: All computation happens in `ProfileExecutor`.
//! * **Parallelism**: With the `cpu` feature, `process_batch` hands one
//!   profile to each rayon task; the engine itself stays single-threaded.
//! * **Fallback**: Without the `cpu` feature, or with `parallel(false)`,
//!   profiles are processed sequentially.
//!
//! ## Invariants
//!
//! * Batch results are returned in input order.
//! * A failing profile does not affect the others.
//!
//! ## Non-goals
//!
//! * This adapter does not split a single profile across threads.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{ProfileConfig, ProfileExecutor};
use crate::engine::output::ProfileResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::ProfileError;

/// A distance/signal pair borrowed from the caller.
pub type ProfileSlices<'a, T> = (&'a [T], &'a [T]);

// ============================================================================
// Batch Processor
// ============================================================================

/// Validated, ready-to-run profile processor.
#[derive(Debug, Clone)]
pub struct ProfileProcessor<T> {
    executor: ProfileExecutor<T>,
    parallel: bool,
}

impl<T: Float> ProfileProcessor<T> {
    /// Wrap a configuration that has already passed validation.
    pub(crate) fn new(config: ProfileConfig<T>, parallel: bool) -> Self {
        Self {
            executor: ProfileExecutor::new(config),
            parallel,
        }
    }

    /// The configuration this processor runs.
    pub fn config(&self) -> &ProfileConfig<T> {
        self.executor.config()
    }

    /// Whether `process_batch` may run profiles in parallel.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Process a single profile.
    pub fn process(&self, x: &[T], y: &[T]) -> Result<ProfileResult<T>, ProfileError> {
        Validator::validate_inputs(x, y, 1)?;
        self.executor.run(x, y)
    }

    fn process_sequential(
        &self,
        profiles: &[ProfileSlices<'_, T>],
    ) -> Vec<Result<ProfileResult<T>, ProfileError>> {
        profiles.iter().map(|&(x, y)| self.process(x, y)).collect()
    }
}

impl<T: Float + Send + Sync> ProfileProcessor<T> {
    /// Process independent profiles, one result per profile in input order.
    pub fn process_batch(
        &self,
        profiles: &[ProfileSlices<'_, T>],
    ) -> Vec<Result<ProfileResult<T>, ProfileError>> {
        #[cfg(feature = "cpu")]
        {
            if self.parallel {
                return profiles
                    .par_iter()
                    .map(|&(x, y)| self.process(x, y))
                    .collect();
            }
        }

        self.process_sequential(profiles)
    }
}
