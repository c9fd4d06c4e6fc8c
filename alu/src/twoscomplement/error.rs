//! Error reporting for conversions and for checked arithmetic.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use super::signed::Signed8Bit;

/// Represents a failure to convert to or from one of the signed or
/// unsigned types defined in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConversionFailed {
    TooLarge,
    TooSmall,
}

impl Error for ConversionFailed {}

impl Display for ConversionFailed {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            ConversionFailed::TooLarge => f.write_str("value is too large"),
            ConversionFailed::TooSmall => f.write_str("value is too small"),
        }
    }
}

/// The ways in which a checked calculation can fail to produce a
/// representable result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithmeticError {
    /// The true result lies outside [-128, 127].  `wrapped` is what
    /// an 8-bit register would hold.
    Overflow { wrapped: Signed8Bit },
    DivisionByZero,
}

impl Error for ArithmeticError {}

impl Display for ArithmeticError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            ArithmeticError::Overflow { wrapped } => write!(
                f,
                "result does not fit in 8 bits (the register holds {wrapped:#010b}, i.e. {wrapped})"
            ),
            ArithmeticError::DivisionByZero => f.write_str("division by zero"),
        }
    }
}
