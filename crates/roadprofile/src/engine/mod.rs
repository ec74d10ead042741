//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer sequences the algorithms into the processing pipeline and
//! guards every entry point with input and parameter validation.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Pipeline execution over a single profile.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for processed profiles.
pub mod output;
