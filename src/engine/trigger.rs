//! Token classification.
//!
//! A cheap scan over the raw token decides which reduction path applies:
//!
//! - only ASCII letters: the word path (letter values are the operands)
//! - any ASCII digit: the numeric path, after non-digits are stripped
//! - neither: invalid input
//!
//! So `"2024-01"` is the number `202401` and `"R2D2"` is the number `22`,
//! while `"café"` is rejected (non-ASCII letters carry no value).

bitflags::bitflags! {
    /// Coarse character classes present in a token.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TokenClass: u8 {
        const HAS_ALPHA  = 1 << 0;
        const HAS_DIGITS = 1 << 1;
        const HAS_OTHER  = 1 << 2;
    }
}

impl TokenClass {
    pub fn scan(token: &str) -> Self {
        let mut class = TokenClass::empty();
        for ch in token.chars() {
            if ch.is_ascii_alphabetic() {
                class |= TokenClass::HAS_ALPHA;
            } else if ch.is_ascii_digit() {
                class |= TokenClass::HAS_DIGITS;
            } else {
                class |= TokenClass::HAS_OTHER;
            }
        }
        class
    }

    /// Letters and nothing else.
    pub fn is_word(self) -> bool {
        self == TokenClass::HAS_ALPHA
    }

    /// At least one digit to reduce.
    pub fn is_numeric(self) -> bool {
        self.contains(TokenClass::HAS_DIGITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_tokens() {
        assert!(TokenClass::scan("WORD").is_word());
        assert!(TokenClass::scan("word").is_word());
        assert!(TokenClass::scan("2024").is_numeric());
        assert!(TokenClass::scan("R2D2").is_numeric());
        assert!(!TokenClass::scan("R2D2").is_word());
        assert!(TokenClass::scan("555-1234").is_numeric());
    }

    #[test]
    fn rejects_empty_and_symbolic() {
        for token in ["", "--", "café", "!?"] {
            let class = TokenClass::scan(token);
            assert!(!class.is_word() && !class.is_numeric(), "{token} classified as {class:?}");
        }
    }
}
