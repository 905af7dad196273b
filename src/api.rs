use crate::engine::{self, TokenClass};
use crate::letters::{core_letter, word_digits, word_operands};
use crate::{CoreError, Reduction, Result};
use std::time::Instant;

pub use crate::engine::{ReductionMetrics, StageMetrics};

/// Options that affect reduction.
#[derive(Debug, Clone)]
pub struct Options {
    /// Maximum number of search stages for one token, counting the first.
    /// Reaching it with a core that still has four or more digits is
    /// [`CoreError::SearchExhausted`].
    pub max_depth: usize,
}

impl Options {
    pub const DEFAULT_MAX_DEPTH: usize = 10;
}

impl Default for Options {
    fn default() -> Self {
        Self { max_depth: Self::DEFAULT_MAX_DEPTH }
    }
}

/// Which reduction path a token took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Path {
    /// Four letters; their values are the operands.
    Word,
    /// Digits (after stripping everything else), chunked into operands.
    Number,
}

/// Result from [`reduce_token`] and [`reduce_token_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenResult {
    /// The token as given.
    pub token: String,
    pub path: Path,
    /// Digit string the first stage searched from.
    pub digits: String,
    /// `None` when no ordering produced a positive integer core.
    pub reduction: Option<Reduction>,
}

impl TokenResult {
    pub fn core(&self) -> Option<u64> {
        self.reduction.as_ref().map(|r| r.core)
    }

    /// Letter for the core, when it falls in `1..=26`.
    pub fn letter(&self) -> Option<char> {
        self.core().and_then(core_letter)
    }
}

/// Result from [`reduce_token_verbose_with`].
#[derive(Debug, Clone)]
pub struct TokenResultVerbose {
    pub result: TokenResult,
    pub metrics: ReductionMetrics,
}

/// Reduce one token using default [`Options`].
///
/// # Example
/// ```
/// use numcore::reduce_token;
///
/// let out = reduce_token("9999").unwrap();
/// assert_eq!(out.core(), Some(8));
/// assert_eq!(out.letter(), Some('H'));
/// ```
pub fn reduce_token(token: &str) -> Result<TokenResult> {
    reduce_token_with(token, &Options::default())
}

/// Reduce one token with the provided `options`.
pub fn reduce_token_with(token: &str, options: &Options) -> Result<TokenResult> {
    reduce_token_verbose_with(token, options).map(|v| v.result)
}

/// Reduce one token and also return per-stage metrics.
pub fn reduce_token_verbose_with(token: &str, options: &Options) -> Result<TokenResultVerbose> {
    let started = Instant::now();
    let mut metrics = ReductionMetrics::default();
    let class = TokenClass::scan(token);

    let (path, digits, reduction) = if class.is_word() {
        let operands = word_operands(token).ok_or_else(|| CoreError::invalid_token(token))?;
        let operands: [u64; 4] = operands
            .try_into()
            .map_err(|v: Vec<u64>| CoreError::WordLength { word: token.to_string(), len: v.len() })?;
        let digits = word_digits(token).ok_or_else(|| CoreError::invalid_token(token))?;
        let reduction = engine::reduce_word_with(&operands, &digits, "", options, &mut metrics)?;
        (Path::Word, digits, reduction)
    } else if class.is_numeric() {
        let digits: String = token.chars().filter(char::is_ascii_digit).collect();
        let reduction = engine::reduce_digits_with(&digits, "", options, &mut metrics)?;
        (Path::Number, digits, reduction)
    } else {
        return Err(CoreError::invalid_token(token));
    };

    metrics.total = started.elapsed();
    tracing::debug!(token, ?path, core = reduction.as_ref().map(|r| r.core), "token reduced");

    Ok(TokenResultVerbose { result: TokenResult { token: token.to_string(), path, digits, reduction }, metrics })
}

/// Reduce every whitespace-separated token in `line`, in order.
pub fn reduce_line(line: &str, options: &Options) -> Vec<Result<TokenResult>> {
    line.split_whitespace().map(|token| reduce_token_with(token, options)).collect()
}

/// Letters of every result whose core maps to one, concatenated.
pub fn banner<'a>(results: impl IntoIterator<Item = &'a TokenResult>) -> String {
    results.into_iter().filter_map(TokenResult::letter).collect()
}
