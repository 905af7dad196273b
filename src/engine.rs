//! Reduction engine.
//!
//! The engine is split into focused submodules under `src/engine/`, wired up
//! here with `#[path]` so the public paths stay flat (`crate::engine::compute_cores`,
//! `crate::engine::reduce_from_digits`, ...).
//!
//! ## How the parts work together
//!
//! ```text
//! token ── TokenClass::scan ──┬─ word:   letter values ─────────────┐
//!         (trigger.rs)        │                                     │
//!                             └─ number: digits ── operand_sequences│
//!                                             (chunker.rs)          │
//!                                                   │               │
//!                                                   v               v
//!                                           compute_cores (search.rs)
//!                                             - 6 operator orderings (permute.rs)
//!                                             - exact chain evaluation (evaluator.rs, rational.rs)
//!                                                   │
//!                                                   v
//!                                     minimum selection + re-reduction (driver.rs)
//!                                       - core >= 4 digits: chunk its digits again
//!                                       - bounded by Options::max_depth
//!                                                   │
//!                                                   v
//!                                           Option<Reduction>
//! ```
//!
//! ## Responsibilities by module
//!
//! - `rational.rs`: exact `i128` fractions; no floating point anywhere.
//! - `evaluator.rs`: applies one operator ordering to an operand chain and
//!   rejects zero/negative intermediates and division by zero.
//! - `permute.rs`: pure permutation generator with a fixed enumeration order.
//! - `search.rs`: `compute_cores`, one candidate per valid ordering, with traces.
//! - `chunker.rs`: 1–2 digit partitions of a digit string into four operands.
//! - `driver.rs`: the two reduction entry points and the bounded stage loop.
//! - `trigger.rs`: coarse token classification (word vs. number vs. invalid).
//! - `metrics.rs`: optional per-stage counters and timings.
//!
//! ## Determinism
//!
//! Ties between equal cores are broken by first occurrence: partitions in
//! lexicographic `{1,2}⁴` order, then operator orderings in permutation order.
//! Any change to either enumeration is observable in traces.
//!
//! ## Debugging
//!
//! The engine emits `tracing` events at `debug` (stage summaries) and `trace`
//! (individual candidates). The CLI reads its filter from `NUMCORE_LOG`.

#[path = "engine/chunker.rs"]
mod chunker;
#[path = "engine/driver.rs"]
mod driver;
#[path = "engine/evaluator.rs"]
mod evaluator;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/permute.rs"]
mod permute;
#[path = "engine/rational.rs"]
mod rational;
#[path = "engine/search.rs"]
mod search;
#[path = "engine/trigger.rs"]
mod trigger;

#[cfg(test)]
#[path = "engine/tests.rs"]
mod tests;

pub use chunker::{operand_sequences, partitions};
pub(crate) use driver::{reduce_digits_with, reduce_word_with};
pub use driver::{MIN_REDUCIBLE_DIGITS, reduce_from_digits, reduce_from_word};
pub use evaluator::{StepFailure, evaluate, terminal_core};
pub use metrics::{ReductionMetrics, StageMetrics};
pub use permute::permutations;
pub use rational::Ratio;
pub use search::compute_cores;
pub use trigger::TokenClass;
