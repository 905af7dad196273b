//! Core search over operator orderings.
//!
//! For one operand sequence, every ordering of `{-, *, ÷}` is paired
//! positionally with `operands[1..]` and evaluated from `operands[0]`. Each
//! ordering that ends on a positive integer contributes one [`Candidate`].
//!
//! ```text
//! operands: [12, 3, 4, 5]
//! ordering: [*, ÷, -]
//! trace:    "12345: 12, * 3, ÷ 4, - 5; Core = 4"
//! ```
//!
//! When called mid-reduction, `pretrace` is non-empty and the new derivation
//! is appended after an arrow instead of starting with the `start` label:
//! `"...; Core = 1028 → 1, - 0, ÷ 2, * 8; Core = 4"`.

use super::evaluator::{evaluate, terminal_core};
use super::permute::permutations;
use crate::{Candidate, Operator};
use once_cell::sync::Lazy;
use std::fmt::Write as _;

/// All orderings of [`Operator::ALL`], in tie-breaking order.
static OPERATOR_ORDERINGS: Lazy<Vec<Vec<Operator>>> = Lazy::new(|| permutations(&Operator::ALL));

/// Number of orderings tried per operand sequence.
pub(crate) fn ordering_count() -> usize {
    OPERATOR_ORDERINGS.len()
}

/// Collect every valid `(core, trace)` for `operands`, in ordering order.
///
/// Sequences shorter than two operands produce nothing. Longer sequences
/// pair operators with `operands[1..]` positionally, so operands beyond the
/// fourth are never consumed.
pub fn compute_cores(start: &str, operands: &[u64], pretrace: &str) -> Vec<Candidate> {
    let Some((&seed, rest)) = operands.split_first() else {
        return Vec::new();
    };
    if rest.is_empty() {
        return Vec::new();
    }

    let mut found = Vec::new();
    for ordering in OPERATOR_ORDERINGS.iter() {
        let steps: Vec<(Operator, u64)> = ordering.iter().copied().zip(rest.iter().copied()).collect();

        let value = match evaluate(seed, steps.iter().copied()) {
            Ok(v) => v,
            Err(reason) => {
                tracing::trace!(start, ?ordering, ?reason, "ordering rejected");
                continue;
            }
        };
        let Some(core) = terminal_core(&value) else {
            tracing::trace!(start, ?ordering, %value, "non-integral terminal value");
            continue;
        };

        let mut trace = if pretrace.is_empty() { format!("{start}: {seed}") } else { format!("{pretrace} → {seed}") };
        for (op, operand) in &steps {
            push_step!(trace, op, operand);
        }
        let _ = write!(trace, "; Core = {core}");

        tracing::trace!(start, core, %trace, "candidate");
        found.push(Candidate { core, trace });
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cores(found: &[Candidate]) -> Vec<u64> {
        found.iter().map(|c| c.core).collect()
    }

    #[test]
    fn six_orderings() {
        assert_eq!(ordering_count(), 6);
    }

    #[test]
    fn seed_one_over_two_three_four_has_no_candidate() {
        // Every ordering goes negative: 1 - 2, 1 * 2 - 3, 2/3 - 4, 1/2 - 3, 3/2 - 4.
        assert!(compute_cores("1234", &[1, 2, 3, 4], "").is_empty());
    }

    #[test]
    fn nines_reduce_to_eight() {
        let found = compute_cores("9999", &[9, 9, 9, 9], "");
        let best = found.iter().min_by_key(|c| c.core).unwrap();
        assert_eq!(best.core, 8);
        assert_eq!(best.trace, "9999: 9, * 9, - 9, ÷ 9; Core = 8");
    }

    #[test]
    fn three_operands_use_two_operators() {
        let found = compute_cores("x", &[3, 1, 2], "");
        assert_eq!(cores(&found), vec![4, 1, 1, 6, 1]);
        assert_eq!(found[0].trace, "x: 3, - 1, * 2; Core = 4");
        assert_eq!(found[1].trace, "x: 3, - 1, ÷ 2; Core = 1");
    }

    #[test]
    fn pretrace_continues_with_arrow() {
        let found = compute_cores("ignored", &[9, 9, 9, 9], "prev; Core = 9999");
        assert!(found.iter().all(|c| c.trace.starts_with("prev; Core = 9999 → 9, ")));
    }

    #[test]
    fn trace_core_matches_value() {
        for c in compute_cores("5555", &[5, 5, 5, 5], "") {
            assert!(c.core > 0);
            assert!(c.trace.ends_with(&format!("; Core = {}", c.core)));
        }
    }

    #[test]
    fn too_few_operands() {
        assert!(compute_cores("x", &[], "").is_empty());
        assert!(compute_cores("x", &[5], "").is_empty());
    }

    #[test]
    fn all_ones_fail() {
        // Any subtraction of 1 from 1 hits zero.
        assert!(compute_cores("1111", &[1, 1, 1, 1], "").is_empty());
    }
}
