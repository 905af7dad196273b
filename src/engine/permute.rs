//! Permutation generator.
//!
//! Enumeration order is part of the tie-breaking contract, so it is fixed:
//! for each front index `i` in increasing order, element `i` is swapped to the
//! front and the remainder is permuted recursively. For `[a, b, c]`:
//!
//! ```text
//! i=0  a | b c  ->  abc, acb
//! i=1  b | a c  ->  bac, bca
//! i=2  c | b a  ->  cba, cab
//! ```
//!
//! Note the remainder for `i=2` is `b a`, not `a b`: it is the input with the
//! front and `i` swapped. The generator builds a fresh remainder for every
//! branch instead of swapping in place.

/// Every ordering of `items`. Inputs of length 0 or 1 yield the input itself.
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }

    let mut out = Vec::new();
    for i in 0..items.len() {
        let mut rest = items[1..].to_vec();
        if i > 0 {
            rest[i - 1] = items[0].clone();
        }
        for tail in permutations(&rest) {
            let mut perm = Vec::with_capacity(items.len());
            perm.push(items[i].clone());
            perm.extend(tail);
            out.push(perm);
        }
    }
    out
}
