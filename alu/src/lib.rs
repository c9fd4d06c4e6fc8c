//! The `alu` crate is an 8-bit two's-complement arithmetic unit.
//! Addition, subtraction, multiplication and division are all
//! carried out by a ripple-carry adder built from full-adder stages,
//! using only AND, OR, XOR, NOT and shifts on fixed-width words.
//!
//! The raw operations live in [`arith`] and return the 8-bit result
//! together with an overflow flag.  [`unit::ArithmeticUnit`] adds a
//! configurable [`unit::Policy`] and reports overflow and division by
//! zero as errors.

mod twoscomplement;

pub mod adder;
pub mod arith;
pub mod bit;
pub mod overflow;
pub mod prelude;
pub mod subword;
pub mod unit;

pub use crate::twoscomplement::Sign;
pub use crate::twoscomplement::error::{ArithmeticError, ConversionFailed};
pub use crate::twoscomplement::signed::Signed8Bit;
pub use crate::twoscomplement::unsigned::*;

/// The width, in bits, of the operands and of the adder.
pub const BITS: u32 = 8;

#[test]
fn test_word_widths() {
    assert_eq!(Unsigned8Bit::WIDTH, BITS);
    assert_eq!(Unsigned7Bit::WIDTH, BITS - 1);
    assert_eq!(Unsigned15Bit::WIDTH, 2 * BITS - 1);
    assert_eq!(Signed8Bit::default().bits_msb_first().len(), BITS as usize);
}
