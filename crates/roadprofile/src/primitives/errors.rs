//! Error types for road profile processing.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while segmenting,
//! repairing, filtering, or reducing a profile, including input validation
//! and parameter constraints.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Deferred**: Builder misconfiguration is stored and reported at `build()`.
//! * **Derived**: `Display` and `std::error::Error` come from `thiserror`.
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty arrays, mismatched lengths, non-monotonic distances.
//! 2. **Parameter validation**: Non-positive lengths, negative envelope parameters.
//! 3. **Repair failures**: Degenerate interpolation intervals, missing neighbors.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric parameter values are reported as `f64` regardless of the working precision.
//!
//! ## Non-goals
//!
//! * Non-convergence of the envelope is not an error; it is reported on the output.
//! * This module does not perform the validation logic itself.

// External dependencies
use thiserror::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for road profile operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    /// Input arrays are empty.
    #[error("Input arrays are empty")]
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// `x` and `y` arrays must have the same number of elements.
    #[error("Length mismatch: x has {x_len} points, y has {y_len}")]
    MismatchedInputs {
        /// Number of elements in the `x` array.
        x_len: usize,
        /// Number of elements in the `y` array.
        y_len: usize,
    },

    /// Number of points is below the minimum requirement for the operation.
    #[error("Too few points: got {got}, need at least {min}")]
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// The distance axis decreases at `index` (`x[index] < x[index - 1]`).
    #[error("Distance axis is not non-decreasing at index {index}")]
    NonMonotonicDistance {
        /// First index where the ordering is violated.
        index: usize,
    },

    /// A numeric parameter is outside its admissible range.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// The two neighbors bounding an interior dropout share the same distance.
    #[error("Degenerate interpolation: neighbors at indices {left} and {right} coincide in x")]
    DegenerateInterpolation {
        /// Index of the left neighbor.
        left: usize,
        /// Index of the right neighbor.
        right: usize,
    },

    /// An interior dropout run has no valid sample on one of its sides.
    #[error("Dropout run [{start}, {end}) lacks a valid neighbor for interpolation")]
    InsufficientNeighbors {
        /// Start of the run (inclusive).
        start: usize,
        /// End of the run (exclusive).
        end: usize,
    },

    /// Every sample of the signal matches the dropout criterion.
    #[error("Signal contains no valid samples")]
    NoValidSamples,

    /// Parameter was set multiple times in the builder.
    #[error(
        "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
    )]
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}
