//! Reverse lookup: which words reduce to a given core?
//!
//! Words come from a plain-text list, one per line. Only four-letter
//! alphabetic entries are kept (uppercased), since those are the only words
//! the word path accepts.

use crate::api::{Options, reduce_token_with};
use crate::letters::letter_value;
use crate::{CoreError, Result};
use std::path::Path;

/// A word whose core matched the target, with its derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMatch {
    pub word: String,
    pub trace: String,
}

/// Parse a lookup target: a number, or a single letter standing for 1–26.
pub fn parse_target(input: &str) -> Result<u64> {
    let input = input.trim();
    if regex!(r"^[0-9]+$").is_match(input) {
        return input.parse::<u64>().map_err(|_| CoreError::invalid_target(input));
    }
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => letter_value(ch).map(u64::from).ok_or_else(|| CoreError::invalid_target(input)),
        _ => Err(CoreError::invalid_target(input)),
    }
}

/// Keep trimmed, uppercased, four-letter alphabetic lines.
pub fn filter_wordlist<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| line.as_ref().trim().to_ascii_uppercase())
        .filter(|word| regex!(r"^[A-Z]{4}$").is_match(word))
        .collect()
}

/// Read and filter a word list file.
pub fn load_wordlist(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path.as_ref())?;
    let words = filter_wordlist(text.lines());
    tracing::debug!(path = %path.as_ref().display(), words = words.len(), "word list loaded");
    Ok(words)
}

/// Every word in `words` whose core equals `target`, in list order.
///
/// Words that fail to reduce (depth cap) are skipped with a warning.
pub fn find_words_for_core(target: u64, words: &[String], options: &Options) -> Vec<WordMatch> {
    let mut matches = Vec::new();
    for word in words {
        match reduce_token_with(word, options) {
            Ok(result) => {
                if let Some(reduction) = result.reduction.filter(|r| r.core == target) {
                    matches.push(WordMatch { word: word.clone(), trace: reduction.trace });
                }
            }
            Err(err) => tracing::warn!(word = %word, error = %err, "skipping word"),
        }
    }
    matches
}
