//! Operand chunking for digit strings.
//!
//! A digit string is split left to right into exactly four chunks of one or
//! two digits. Chunk sizes come from `{1,2}⁴` in lexicographic order, which is
//! also the order candidates are offered to minimum selection.
//!
//! ```text
//! len 4: 1111
//! len 5: 1112 1121 1211 2111
//! len 6: 1122 1212 1221 2112 2121 2211
//! len 7: 1222 2122 2212 2221
//! len 8: 2222
//! ```
//!
//! Anything shorter than four or longer than eight digits has no partition.

/// Number of chunks per operand sequence.
pub const CHUNKS: usize = 4;

/// Every 4-tuple of chunk sizes in `{1,2}` summing to `len`.
pub fn partitions(len: usize) -> Vec<[usize; CHUNKS]> {
    let mut parts = Vec::new();
    for a in 1..=2 {
        for b in 1..=2 {
            for c in 1..=2 {
                for d in 1..=2 {
                    if a + b + c + d == len {
                        parts.push([a, b, c, d]);
                    }
                }
            }
        }
    }
    parts
}

/// One operand sequence per partition of `digits`.
///
/// `digits` must be ASCII digits only; leading zeros inside a chunk are
/// dropped by the parse (`"01"` is `1`, `"00"` is `0`).
pub fn operand_sequences(digits: &str) -> Vec<[u64; CHUNKS]> {
    let bytes = digits.as_bytes();
    partitions(bytes.len())
        .into_iter()
        .map(|sizes| {
            let mut out = [0u64; CHUNKS];
            let mut at = 0;
            for (slot, size) in out.iter_mut().zip(sizes) {
                *slot = bytes[at..at + size].iter().fold(0, |acc, b| acc * 10 + u64::from(b - b'0'));
                at += size;
            }
            out
        })
        .collect()
}
