//! Maximal runs of consecutive `true` values in a boolean condition.
//!
//! ## Purpose
//!
//! This module locates stretches of defective samples. Given a condition
//! array (true = defective), it yields every maximal run of consecutive
//! true values as a half-open index range.
//!
//! ## Invariants
//!
//! * Runs are emitted in ascending order and never overlap.
//! * Every true index belongs to exactly one emitted run.
//! * The index just before and just after a run is false or out of bounds.
//!
//! ## Non-goals
//!
//! * This module does not decide how runs are repaired.

// External dependencies
use core::iter::FusedIterator;

// Internal dependencies
use crate::primitives::range::IndexRange;

/// Iterator over maximal runs of `true` in a condition slice.
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    condition: &'a [bool],
    cursor: usize,
}

impl<'a> Runs<'a> {
    /// Create a run iterator over `condition`.
    pub fn new(condition: &'a [bool]) -> Self {
        Self {
            condition,
            cursor: 0,
        }
    }
}

impl Iterator for Runs<'_> {
    type Item = IndexRange;

    fn next(&mut self) -> Option<IndexRange> {
        let rest = &self.condition[self.cursor..];
        let start = self.cursor + rest.iter().position(|&c| c)?;
        let len = self.condition[start..]
            .iter()
            .position(|&c| !c)
            .unwrap_or(self.condition.len() - start);

        let end = start + len;
        self.cursor = end;
        Some(IndexRange::new(start, end))
    }
}

impl FusedIterator for Runs<'_> {}

/// Iterate over the maximal runs of `true` in `condition`.
#[inline]
pub fn detect_runs(condition: &[bool]) -> Runs<'_> {
    Runs::new(condition)
}
