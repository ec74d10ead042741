//! Input validation for profile data and processing parameters.
//!
//! ## Purpose
//!
//! This module provides the validation functions used by every public entry
//! point. It checks input lengths, the ordering of the distance axis, and
//! parameter bounds before any algorithm runs.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Distance axis**: Must be finite and non-decreasing; equal neighbours are allowed.
//! * **Signal**: May contain NaN or sentinel values; those are dropouts, not errors.
//! * **Parameter bounds**: Lengths positive, thresholds and `d` non-negative.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, repair, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ProfileError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for profile data and parameters.
///
/// All methods return `Result<(), ProfileError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    /// Largest supported Butterworth order.
    pub const MAX_FILTER_ORDER: usize = 16;

    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate an index-aligned distance/signal pair.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T], min: usize) -> Result<(), ProfileError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(ProfileError::EmptyInput);
        }

        // Check 2: Matching lengths
        if x.len() != y.len() {
            return Err(ProfileError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        // Check 3: Distance axis
        Self::validate_distances(x, min)
    }

    /// Validate a distance axis: at least `min` points, finite and non-decreasing.
    pub fn validate_distances<T: Float>(x: &[T], min: usize) -> Result<(), ProfileError> {
        Self::validate_finite(x, min)?;

        if let Some(i) = (1..x.len()).find(|&i| x[i] < x[i - 1]) {
            return Err(ProfileError::NonMonotonicDistance { index: i });
        }

        Ok(())
    }

    /// Validate that `values` holds at least `min` finite numbers.
    pub fn validate_finite<T: Float>(values: &[T], min: usize) -> Result<(), ProfileError> {
        if values.is_empty() {
            return Err(ProfileError::EmptyInput);
        }

        if values.len() < min {
            return Err(ProfileError::TooFewPoints {
                got: values.len(),
                min,
            });
        }

        if let Some(i) = values.iter().position(|v| !v.is_finite()) {
            return Err(ProfileError::InvalidInput(format!(
                "value at index {} is not finite ({})",
                i,
                values[i].to_f64().unwrap_or(f64::NAN)
            )));
        }

        Ok(())
    }

    /// Validate a pair of latitude/longitude arrays in degrees.
    pub fn validate_coordinates<T: Float>(lat: &[T], lon: &[T]) -> Result<(), ProfileError> {
        if lat.is_empty() || lon.is_empty() {
            return Err(ProfileError::EmptyInput);
        }

        if lat.len() != lon.len() {
            return Err(ProfileError::MismatchedInputs {
                x_len: lat.len(),
                y_len: lon.len(),
            });
        }

        let right_angle = T::from(90.0).unwrap_or_else(T::nan);
        for (i, (&la, &lo)) in lat.iter().zip(lon).enumerate() {
            if !la.is_finite() || !lo.is_finite() || la.abs() > right_angle {
                return Err(ProfileError::InvalidInput(format!(
                    "invalid coordinate at index {}: ({}, {})",
                    i,
                    la.to_f64().unwrap_or(f64::NAN),
                    lo.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a strictly positive, finite length (segment or evaluation length).
    pub fn validate_length<T: Float>(length: T, name: &'static str) -> Result<(), ProfileError> {
        if !length.is_finite() || length <= T::zero() {
            return Err(Self::invalid_parameter(name, length));
        }
        Ok(())
    }

    /// Validate a non-negative, finite threshold.
    pub fn validate_threshold<T: Float>(value: T, name: &'static str) -> Result<(), ProfileError> {
        if !value.is_finite() || value < T::zero() {
            return Err(Self::invalid_parameter(name, value));
        }
        Ok(())
    }

    /// Validate the number of windows averaged per group.
    pub fn validate_nmean(nmean: usize) -> Result<(), ProfileError> {
        if nmean == 0 {
            return Err(ProfileError::InvalidParameter {
                name: "nmean",
                value: 0.0,
            });
        }
        Ok(())
    }

    /// Validate the envelope curvature bound `d`.
    pub fn validate_envelope<T: Float>(d: T) -> Result<(), ProfileError> {
        Self::validate_threshold(d, "d")
    }

    /// Validate the envelope sweep cap.
    pub fn validate_max_restarts(max_restarts: usize) -> Result<(), ProfileError> {
        if max_restarts == 0 {
            return Err(ProfileError::InvalidParameter {
                name: "max_restarts",
                value: 0.0,
            });
        }
        Ok(())
    }

    /// Validate Butterworth filter parameters.
    ///
    /// # Notes
    ///
    /// * `cutoff` must lie strictly between 0 and the Nyquist frequency `sample_rate / 2`.
    pub fn validate_filter<T: Float>(
        order: usize,
        cutoff: T,
        sample_rate: T,
    ) -> Result<(), ProfileError> {
        if order == 0 || order > Self::MAX_FILTER_ORDER {
            return Err(ProfileError::InvalidParameter {
                name: "order",
                value: order as f64,
            });
        }

        Self::validate_length(sample_rate, "sample_rate")?;

        let nyquist = sample_rate / (T::one() + T::one());
        if !cutoff.is_finite() || cutoff <= T::zero() || cutoff >= nyquist {
            return Err(Self::invalid_parameter("cutoff", cutoff));
        }

        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), ProfileError> {
        if let Some(param) = duplicate_param {
            return Err(ProfileError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }

    fn invalid_parameter<T: Float>(name: &'static str, value: T) -> ProfileError {
        ProfileError::InvalidParameter {
            name,
            value: value.to_f64().unwrap_or(f64::NAN),
        }
    }
}
