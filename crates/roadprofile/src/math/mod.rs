//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the algorithms:
//! - Degree-1 polynomial fits
//! - Great-circle distances and curvature radii
//!
//! These are reusable building blocks with no profile-specific policy.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

// External dependencies
use num_traits::Float;

/// Straight-line fits.
pub mod linefit;

/// Geodesic distances and path curvature.
pub mod geodesy;

// Convert an `f64` constant into the working precision.
#[inline]
pub(crate) fn constant<T: Float>(v: f64) -> T {
    T::from(v).unwrap_or_else(T::nan)
}
