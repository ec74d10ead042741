//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the index ranges, lazy iterators, and error types
//! used throughout the crate. It has zero internal dependencies within the
//! crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Half-open index ranges.
pub mod range;

/// Fixed-length segmentation of the distance axis.
pub mod segments;

/// Runs of consecutive defective samples.
pub mod runs;

/// Shared error types.
pub mod errors;
