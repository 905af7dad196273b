//! Letter ↔ value mapping (A=1 … Z=26).

/// Value of an ASCII letter, case-insensitive.
pub fn letter_value(ch: char) -> Option<u8> {
    ch.is_ascii_alphabetic().then(|| ch.to_ascii_uppercase() as u8 - b'A' + 1)
}

/// Per-letter values of `word`, or `None` if any character is not a letter.
pub fn word_operands(word: &str) -> Option<Vec<u64>> {
    word.chars().map(|ch| letter_value(ch).map(u64::from)).collect()
}

/// Letter values concatenated in decimal: `"WORD"` → `"2315184"`.
pub fn word_digits(word: &str) -> Option<String> {
    word.chars().map(|ch| letter_value(ch).map(|v| v.to_string())).collect()
}

/// Letter for a core in `1..=26`.
pub fn core_letter(core: u64) -> Option<char> {
    match core {
        1..=26 => Some(char::from(b'A' + (core as u8) - 1)),
        _ => None,
    }
}
