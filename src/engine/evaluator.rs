//! Chain evaluation for one operator ordering.
//!
//! ```text
//! t = seed
//! for (op, operand) in steps:
//!     t = op(t, operand)        // exact rational
//!     t == 0  -> ZeroIntermediate
//!     t <  0  -> NegativeIntermediate
//! ```
//!
//! A chain that survives every step is a *candidate* only when its final value
//! is a positive integer; see [`terminal_core`].

use super::rational::Ratio;
use crate::Operator;

/// Why a chain was abandoned. None of these are errors to the caller; they
/// only exclude one ordering from the candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepFailure {
    UndefinedDivision,
    ZeroIntermediate,
    NegativeIntermediate,
    Overflow,
}

/// Apply a single operator to the running value.
pub fn apply(op: Operator, t: Ratio, operand: u64) -> Result<Ratio, StepFailure> {
    let rhs = i128::from(operand);
    let next = match op {
        Operator::Subtract => t.checked_sub_int(rhs),
        Operator::Multiply => t.checked_mul_int(rhs),
        Operator::Divide => {
            if operand == 0 {
                return Err(StepFailure::UndefinedDivision);
            }
            t.checked_div_int(rhs)
        }
    }
    .ok_or(StepFailure::Overflow)?;

    if next.is_zero() {
        return Err(StepFailure::ZeroIntermediate);
    }
    if next.is_negative() {
        return Err(StepFailure::NegativeIntermediate);
    }
    Ok(next)
}

/// Evaluate `seed` through every `(operator, operand)` step, left to right.
pub fn evaluate<I>(seed: u64, steps: I) -> Result<Ratio, StepFailure>
where
    I: IntoIterator<Item = (Operator, u64)>,
{
    steps.into_iter().try_fold(Ratio::from_integer(i128::from(seed)), |t, (op, operand)| apply(op, t, operand))
}

/// The integer core of a finished chain, if it is a valid one.
pub fn terminal_core(value: &Ratio) -> Option<u64> {
    if !value.is_integer() || value.numer() <= 0 {
        return None;
    }
    u64::try_from(value.numer()).ok()
}
