//! # roadprofile: Road Texture Profile Processing for Rust
//!
//! Preparation and evaluation of longitudinal road texture profiles measured
//! by laser profilometers: dropout repair, fixed-length segmentation,
//! envelope constraints, high-pass filtering, and the texture metrics mean
//! profile depth (MPD) and texture penetration area (TPA).
//!
//! ## What does it do?
//!
//! A profile is a pair of index-aligned arrays: the travelled distance `x`
//! (metres, non-decreasing) and the measured height `y`. Laser sensors drop
//! out on dark or steep surfaces, leaving NaN or sentinel samples. The
//! pipeline:
//!
//! 1. **Repairs** dropouts: boundary runs longer than 5 mm are cut off,
//!    shorter ones are filled with the nearest valid value, and interior runs
//!    are linearly interpolated.
//! 2. Optionally **filters** the profile with a Butterworth high-pass.
//! 3. Optionally applies an **envelope** bounding the second difference, which
//!    models how far a tyre can enter the texture.
//! 4. **Segments** the profile into windows of a fixed physical length and
//!    reduces each window to MPD or TPA, averaged over groups of windows.
//!
//! ## Quick Start
//!
//! ```rust
//! use roadprofile::prelude::*;
//!
//! let x: Vec<f64> = (0..400).map(|i| i as f64 * 0.001).collect();
//! let mut y: Vec<f64> = x.iter().map(|&d| (d * 300.0).sin()).collect();
//! y[10] = f64::NAN;
//!
//! let processor = RoadProfile::new()
//!     .envelope(0.1)
//!     .segment_length(0.1)
//!     .nmean(1)
//!     .mpd()
//!     .build()?;
//!
//! let result = processor.process(&x, &y)?;
//! assert_eq!(result.repaired_samples, 1);
//! assert_eq!(result.mpd.map(|m| m.len()), Some(3));
//! # Result::<(), ProfileError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `process` returns a `Result<ProfileResult<T>, ProfileError>`.
//!
//! - **`Ok(ProfileResult<T>)`**: The processed profile and requested metrics.
//! - **`Err(ProfileError)`**: Invalid input (e.g., decreasing distances),
//!   invalid configuration, or an unrepairable profile.
//!
//! An envelope that hits its sweep cap is not an error: the result carries
//! `converged == false` and a `tracing` warning is emitted.
//!
//! ## Individual Stages
//!
//! Every stage is also available as a validated function:
//!
//! ```rust
//! use roadprofile::prelude::*;
//!
//! let x: Vec<f64> = (1..=10).map(f64::from).collect();
//! let mut y = vec![0.0; 10];
//! y[2..5].fill(999.0);
//!
//! let repaired = repair_dropouts(&x, &y, DropoutCriterion::Sentinel(999.0))?;
//! assert_eq!(repaired.y, vec![0.0; 10]);
//! assert_eq!(repaired.truncation, Truncation::none(10));
//!
//! let windows: Vec<IndexRange> = segment_by_length(&x, 3.0)?.collect();
//! assert_eq!(windows[0], IndexRange::new(0, 4));
//! # Result::<(), ProfileError>::Ok(())
//! ```
//!
//! ## Feature Flags
//!
//! - **`cpu`** (default): Process batches of profiles in parallel with `rayon`.
//!
//! ## Logging
//!
//! The crate emits `tracing` events (truncation, repair counts, envelope
//! convergence) and never installs a subscriber.

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - repair, envelope, filtering, reduction.
mod algorithms;

// Layer 4: Evaluation - texture metrics and sampling statistics.
mod evaluation;

// Layer 5: Engine - orchestration and validation.
mod engine;

// Layer 6: Adapters - single and batch processing.
mod adapters;

// High-level fluent API.
mod api;

pub use api::*;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        DropoutCriterion, EnvelopeStatus, FilterKind, FilterSpec, IndexRange,
        ProfileBuilder as RoadProfile, ProfileError, ProfileProcessor, ProfileResult, Truncation,
        WindowedOutput, apply_envelope, apply_filter, calculate_mpd, calculate_tpa, detect_runs,
        fit_line, mpd_highpass, profile_info, reduce_windowed, repair_dropouts,
        repair_dropouts_with_threshold, segment_by_length,
    };
}

// Internal modules for development and testing.
//
// Re-exports the layers so integration tests can reach unchecked helpers.
#[doc(hidden)]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
}
