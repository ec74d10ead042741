//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer adapts the engine to how profiles arrive: one at a time, or as
//! a batch of independent recordings that can be processed in parallel.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Batch processor for one or many profiles.
pub mod batch;
