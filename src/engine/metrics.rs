//! Reduction metrics.
//!
//! Small structs used to observe what a reduction did: how many operand
//! sequences and orderings each stage tried, how many candidates survived, and
//! how long it took. Collection is cheap counters plus one `Instant` per
//! stage; the plain entry points simply discard it.

use std::time::Duration;

/// Counters and timings for a whole token reduction.
#[derive(Debug, Default, Clone)]
pub struct ReductionMetrics {
    /// Total elapsed time, filled in by the API layer.
    pub total: Duration,
    /// One entry per search stage, in the order they ran.
    pub stages: Vec<StageMetrics>,
}

impl ReductionMetrics {
    pub fn orderings_evaluated(&self) -> usize {
        self.stages.iter().map(|s| s.orderings).sum()
    }

    pub fn candidates_accepted(&self) -> usize {
        self.stages.iter().map(|s| s.candidates).sum()
    }
}

/// What one search stage saw.
#[derive(Debug, Default, Clone)]
pub struct StageMetrics {
    /// Label the stage searched from (digit string or the word's letter digits).
    pub input: String,
    pub duration: Duration,
    /// Operand sequences searched (1 for a word stage).
    pub sequences: usize,
    pub orderings: usize,
    pub candidates: usize,
    /// Minimal core picked at this stage, if any.
    pub selected: Option<u64>,
}
