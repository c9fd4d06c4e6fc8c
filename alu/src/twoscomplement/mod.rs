//! This module implements the fixed-width two's-complement signed
//! type on which the arithmetic unit operates, plus the unsigned
//! types used for magnitudes and for the division working register.

pub mod error;
pub mod signed;
pub mod unsigned;

/// The sign of a two's-complement value, which is simply its
/// most-significant bit.  Zero counts as positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// The sign of a product or quotient of values with signs `self`
    /// and `other`.
    pub const fn combine(self, other: Sign) -> Sign {
        match (self, other) {
            (Sign::Positive, Sign::Positive) | (Sign::Negative, Sign::Negative) => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}
