//! The prelude exports the types and operations which callers of the
//! arithmetic unit normally need.
pub use super::arith::{Rounding, add, divide, divide_with_rounding, multiply, subtract};
pub use super::bit::Bit;
pub use super::twoscomplement::Sign;
pub use super::twoscomplement::error::*;
pub use super::twoscomplement::signed::*;
pub use super::twoscomplement::unsigned::*;
pub use super::unit::{
    ArithmeticUnit, MultiplicativeOverflow, Operator, Policy, UnknownOperator, ZeroDivisor,
};
