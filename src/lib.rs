#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod letters;
mod lookup;

pub use api::{
    Options, Path, ReductionMetrics, StageMetrics, TokenResult, TokenResultVerbose, banner, reduce_line, reduce_token,
    reduce_token_verbose_with, reduce_token_with,
};
pub use engine::{
    MIN_REDUCIBLE_DIGITS, Ratio, StepFailure, TokenClass, compute_cores, evaluate, operand_sequences, partitions,
    permutations, reduce_from_digits, reduce_from_word, terminal_core,
};
pub use error::{CoreError, Result};
pub use letters::{core_letter, letter_value, word_digits, word_operands};
pub use lookup::{WordMatch, filter_wordlist, find_words_for_core, load_wordlist, parse_target};

// --- Core types -------------------------------------------------------------

/// One of the three arithmetic operators applied between operand chunks.
///
/// Every derivation uses each operator exactly once; only their order varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Canonical operator order fed into the permutation generator.
    ///
    /// Changing this order changes which derivation wins a tie.
    pub const ALL: [Operator; 3] = [Operator::Subtract, Operator::Multiply, Operator::Divide];

    /// Symbol used in derivation traces.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "÷",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A valid terminal value from one operator ordering, with its derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub core: u64,
    pub trace: String,
}

/// Final outcome of reducing one token: the minimal core and the full,
/// possibly multi-stage, derivation that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    pub core: u64,
    pub trace: String,
    /// Number of search stages that contributed to `trace` (1 when no
    /// re-reduction happened).
    pub stages: usize,
}

impl Reduction {
    /// Decimal digits of the core, the input to a further stage.
    pub fn core_digits(&self) -> String {
        self.core.to_string()
    }
}

impl From<Candidate> for Reduction {
    fn from(c: Candidate) -> Self {
        Reduction { core: c.core, trace: c.trace, stages: 1 }
    }
}
