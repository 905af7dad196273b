//! Reduction driver.
//!
//! Two entry points share one stage loop:
//!
//! - [`reduce_from_digits`] chunks a digit string (see `chunker.rs`) and
//!   searches every operand sequence.
//! - [`reduce_from_word`] searches a word's four letter values directly.
//!
//! Each stage picks the minimal core among its candidates (first wins on
//! ties). While that core still has four or more digits, its decimal string is
//! fed into another digits stage with the trace so far as `pretrace`:
//!
//! ```text
//! stage 1  "64023592" -> 1028   (4 digits, keep going)
//! stage 2  "1028"     -> 4      (done)
//! ```
//!
//! If a later stage finds nothing, the last successful stage's result stands.
//! The loop is capped by [`Options::max_depth`]; hitting the cap is reported
//! as [`CoreError::SearchExhausted`] rather than looping on.

use super::chunker::operand_sequences;
use super::metrics::{ReductionMetrics, StageMetrics};
use super::search::{compute_cores, ordering_count};
use crate::{Candidate, CoreError, Options, Reduction, Result};
use std::time::Instant;

/// Cores with at least this many digits are reduced again.
pub const MIN_REDUCIBLE_DIGITS: usize = 4;

/// Reduce a digit string with default [`Options`].
///
/// Fewer than four digits is `Ok(None)`: there is nothing to reduce.
pub fn reduce_from_digits(digits: &str, pretrace: &str) -> Result<Option<Reduction>> {
    reduce_digits_with(digits, pretrace, &Options::default(), &mut ReductionMetrics::default())
}

/// Reduce a four-letter word's values with default [`Options`].
///
/// `start_digits` labels the trace (conventionally the concatenated letter
/// values, e.g. `"2315184"` for WORD).
pub fn reduce_from_word(operands: &[u64; 4], start_digits: &str, pretrace: &str) -> Result<Option<Reduction>> {
    reduce_word_with(operands, start_digits, pretrace, &Options::default(), &mut ReductionMetrics::default())
}

pub(crate) fn reduce_digits_with(
    digits: &str,
    pretrace: &str,
    options: &Options,
    metrics: &mut ReductionMetrics,
) -> Result<Option<Reduction>> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::InvalidDigits(digits.to_string()));
    }
    match digits_stage(digits, pretrace, metrics) {
        Some(first) => settle(first.into(), options, metrics).map(Some),
        None => Ok(None),
    }
}

pub(crate) fn reduce_word_with(
    operands: &[u64; 4],
    start_digits: &str,
    pretrace: &str,
    options: &Options,
    metrics: &mut ReductionMetrics,
) -> Result<Option<Reduction>> {
    let started = Instant::now();
    let candidates = compute_cores(start_digits, operands, pretrace);
    let selected = record_stage(metrics, start_digits, 1, candidates, started);

    match selected {
        Some(first) => settle(first.into(), options, metrics).map(Some),
        None => Ok(None),
    }
}

/// Keep re-reducing `current` until its core is short enough, a stage finds
/// nothing, or the depth cap is reached.
fn settle(mut current: Reduction, options: &Options, metrics: &mut ReductionMetrics) -> Result<Reduction> {
    loop {
        let digits = current.core_digits();
        if digits.len() < MIN_REDUCIBLE_DIGITS {
            return Ok(current);
        }
        if current.stages >= options.max_depth {
            tracing::warn!(core = current.core, depth = current.stages, "reduction depth cap reached");
            return Err(CoreError::SearchExhausted { depth: current.stages });
        }

        match digits_stage(&digits, &current.trace, metrics) {
            Some(next) => {
                debug_assert!(
                    next.core.to_string().len() < digits.len(),
                    "stage did not shrink {} -> {}",
                    digits,
                    next.core
                );
                current = Reduction { core: next.core, trace: next.trace, stages: current.stages + 1 };
            }
            None => {
                tracing::debug!(core = current.core, "no candidate at next stage; keeping current core");
                return Ok(current);
            }
        }
    }
}

/// One chunk-and-search pass over `digits`. Returns the minimal candidate.
fn digits_stage(digits: &str, pretrace: &str, metrics: &mut ReductionMetrics) -> Option<Candidate> {
    if digits.len() < MIN_REDUCIBLE_DIGITS {
        return None;
    }
    let started = Instant::now();
    let sequences = operand_sequences(digits);
    let candidates: Vec<Candidate> = sequences.iter().flat_map(|ops| compute_cores(digits, ops, pretrace)).collect();
    record_stage(metrics, digits, sequences.len(), candidates, started)
}

fn record_stage(
    metrics: &mut ReductionMetrics,
    input: &str,
    sequences: usize,
    candidates: Vec<Candidate>,
    started: Instant,
) -> Option<Candidate> {
    let count = candidates.len();
    let selected = select_min(candidates);

    tracing::debug!(
        input,
        sequences,
        candidates = count,
        selected = selected.as_ref().map(|c| c.core),
        "stage searched"
    );

    metrics.stages.push(StageMetrics {
        input: input.to_string(),
        duration: started.elapsed(),
        sequences,
        orderings: sequences * ordering_count(),
        candidates: count,
        selected: selected.as_ref().map(|c| c.core),
    });
    selected
}

/// Smallest core; the first one encountered wins a tie.
fn select_min(candidates: Vec<Candidate>) -> Option<Candidate> {
    candidates.into_iter().min_by_key(|c| c.core)
}
