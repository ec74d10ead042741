//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer computes the texture metrics and summaries reported for a
//! prepared profile:
//! - Mean profile depth per evaluation length
//! - Texture penetration area per evaluation length
//! - Sampling statistics of the distance axis
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
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Mean profile depth.
pub mod mpd;

/// Texture penetration area.
pub mod tpa;

/// Sampling statistics of the distance axis.
pub mod info;
