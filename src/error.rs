//! Error types.
//!
//! "No core found" is a normal outcome and is reported as `Ok(None)` by the
//! reduction entry points. Everything here is either malformed input rejected
//! before the search runs, or the depth guard tripping.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("invalid digit string '{0}': only ASCII digits are accepted")]
    InvalidDigits(String),
    #[error("invalid token '{0}': expected a word (A-Z) or a number")]
    InvalidToken(String),
    #[error("word '{word}' has {len} letters; exactly 4 are required")]
    WordLength { word: String, len: usize },
    #[error("invalid target '{0}': must be a number (1-999) or a single letter (A-Z)")]
    InvalidTarget(String),
    #[error("search exhausted after {depth} reduction stages")]
    SearchExhausted { depth: usize },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    pub fn invalid_token(token: impl Into<String>) -> Self {
        Self::InvalidToken(token.into())
    }

    pub fn invalid_target(target: impl Into<String>) -> Self {
        Self::InvalidTarget(target.into())
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
