//! Exact rational numbers.
//!
//! Chains only ever combine a running fraction with a non-negative integer
//! operand, so the arithmetic here is `Ratio ∘ integer`. Values are kept in
//! lowest terms with a strictly positive denominator, which makes equality
//! structural and `is_integer` a denominator check.
//!
//! All operations are checked: overflow yields `None` rather than wrapping.

/// A fraction `numer / denom` in lowest terms, `denom > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ratio {
    numer: i128,
    denom: i128,
}

impl Ratio {
    pub fn from_integer(n: i128) -> Self {
        Ratio { numer: n, denom: 1 }
    }

    /// Build a normalised fraction. Returns `None` for a zero denominator.
    pub fn new(numer: i128, denom: i128) -> Option<Self> {
        if denom == 0 {
            return None;
        }
        let g = gcd(numer, denom);
        let (mut numer, mut denom) = (numer / g, denom / g);
        if denom < 0 {
            numer = numer.checked_neg()?;
            denom = denom.checked_neg()?;
        }
        Some(Ratio { numer, denom })
    }

    pub fn numer(&self) -> i128 {
        self.numer
    }

    pub fn denom(&self) -> i128 {
        self.denom
    }

    pub fn is_zero(&self) -> bool {
        self.numer == 0
    }

    pub fn is_negative(&self) -> bool {
        self.numer < 0
    }

    pub fn is_integer(&self) -> bool {
        self.denom == 1
    }

    /// `self - rhs`
    pub fn checked_sub_int(self, rhs: i128) -> Option<Self> {
        let scaled = rhs.checked_mul(self.denom)?;
        Ratio::new(self.numer.checked_sub(scaled)?, self.denom)
    }

    /// `self * rhs`
    pub fn checked_mul_int(self, rhs: i128) -> Option<Self> {
        Ratio::new(self.numer.checked_mul(rhs)?, self.denom)
    }

    /// `self / rhs`; `None` when `rhs == 0` or on overflow.
    pub fn checked_div_int(self, rhs: i128) -> Option<Self> {
        if rhs == 0 {
            return None;
        }
        Ratio::new(self.numer, self.denom.checked_mul(rhs)?)
    }
}

impl std::fmt::Display for Ratio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.denom == 1 { write!(f, "{}", self.numer) } else { write!(f, "{}/{}", self.numer, self.denom) }
    }
}

fn gcd(a: i128, b: i128) -> i128 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    // Only a gcd of 2^127 (both inputs i128::MIN or zero) fails to convert;
    // such a fraction is left unreduced.
    i128::try_from(a).unwrap_or(1).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalises_sign_and_terms() {
        let r = Ratio::new(6, -4).unwrap();
        assert_eq!((r.numer(), r.denom()), (-3, 2));
        assert!(Ratio::new(1, 0).is_none());
        assert_eq!(Ratio::new(0, 7).unwrap(), Ratio::from_integer(0));
    }

    #[test]
    fn division_keeps_exact_fractions() {
        let third = Ratio::from_integer(1).checked_div_int(3).unwrap();
        assert!(!third.is_integer());
        let back = third.checked_mul_int(3).unwrap();
        assert!(back.is_integer());
        assert_eq!(back, Ratio::from_integer(1));
    }

    #[test]
    fn subtraction_on_fractions() {
        // 7/2 - 3 = 1/2
        let r = Ratio::from_integer(7).checked_div_int(2).unwrap().checked_sub_int(3).unwrap();
        assert_eq!(r.to_string(), "1/2");
        assert!(!r.is_negative());
        let r = r.checked_sub_int(1).unwrap();
        assert!(r.is_negative());
    }

    #[test]
    fn divide_by_zero_and_overflow_are_none() {
        assert!(Ratio::from_integer(5).checked_div_int(0).is_none());
        assert!(Ratio::from_integer(i128::MAX).checked_mul_int(2).is_none());
    }
}
