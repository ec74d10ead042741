//! Layer 3: Algorithms
//!
//! This layer implements the core profile preparation logic: dropout repair,
//! the envelope constraint, Butterworth filtering, and windowed reduction.
//! It is orchestrated by the engine layer.

// Dropout detection and repair.
pub mod dropout;

// Second-difference envelope constraint.
pub mod envelope;

// Butterworth IIR filtering.
pub mod filter;

// Windowed reduction over evaluation lengths.
pub mod reducer;
