//! The arithmetic unit: operator dispatch plus the policy which
//! decides how overflow and division by zero are reported.
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use serde::Serialize;
use test_strategy::Arbitrary;
use tracing::{Level, event, span};

use crate::arith::{self, Rounding};
use crate::bit::Bit;
use crate::twoscomplement::error::ArithmeticError;
use crate::twoscomplement::signed::Signed8Bit;

#[derive(Arbitrary, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    #[must_use]
    pub const fn all() -> [Operator; 4] {
        [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ]
    }

    /// The character which denotes this operator on the keypad.
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownOperator(pub char);

impl Display for UnknownOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "unknown operator '{}'", self.0)
    }
}

impl Error for UnknownOperator {}

impl TryFrom<char> for Operator {
    type Error = UnknownOperator;
    fn try_from(ch: char) -> Result<Operator, UnknownOperator> {
        match ch {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            other => Err(UnknownOperator(other)),
        }
    }
}

/// Whether products and quotients which don't fit in 8 bits are
/// flagged.  Sums and differences are always flagged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MultiplicativeOverflow {
    #[default]
    Report,
    /// Silently keep the low 8 bits, as a bare shift-and-add
    /// multiplier would.
    Ignore,
}

/// What [`ArithmeticUnit::calculate`] does with a zero divisor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZeroDivisor {
    #[default]
    Fail,
    YieldZero,
}

/// The configuration of an [`ArithmeticUnit`].  This is decided once,
/// when the unit is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Policy {
    pub multiplicative_overflow: MultiplicativeOverflow,
    pub zero_divisor: ZeroDivisor,
    pub rounding: Rounding,
}

/// Dispatches operators to the routines in [`crate::arith`] and
/// applies a [`Policy`] to the results.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArithmeticUnit {
    policy: Policy,
}

impl ArithmeticUnit {
    #[must_use]
    pub fn new(policy: Policy) -> ArithmeticUnit {
        ArithmeticUnit { policy }
    }

    #[must_use]
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Perform `a op b`, returning the 8-bit result and the overflow
    /// flag.  This never fails.
    pub fn evaluate(&self, op: Operator, a: Signed8Bit, b: Signed8Bit) -> (Signed8Bit, bool) {
        let span = span!(Level::DEBUG, "evaluate", %op);
        let _enter = span.enter();
        let (value, overflow) = match op {
            Operator::Add => arith::add(a, b, Bit::Zero),
            Operator::Subtract => arith::subtract(a, b),
            Operator::Multiply => {
                let (product, overflow) = arith::multiply(a, b);
                (product, overflow && self.reports_multiplicative_overflow())
            }
            Operator::Divide => {
                let (quotient, overflow) = arith::divide_with_rounding(a, b, self.policy.rounding);
                (quotient, overflow && self.reports_multiplicative_overflow())
            }
        };
        event!(
            Level::DEBUG,
            "{} {} {} = {} ({:#010b}), overflow={}",
            a,
            op,
            b,
            value,
            value,
            overflow
        );
        (value, overflow)
    }

    /// Perform `a op b`, turning overflow and division by zero into
    /// errors.
    pub fn calculate(
        &self,
        op: Operator,
        a: Signed8Bit,
        b: Signed8Bit,
    ) -> Result<Signed8Bit, ArithmeticError> {
        if op == Operator::Divide && b.is_zero() && self.policy.zero_divisor == ZeroDivisor::Fail {
            event!(Level::DEBUG, "refusing to divide {} by zero", a);
            return Err(ArithmeticError::DivisionByZero);
        }
        match self.evaluate(op, a, b) {
            (wrapped, true) => Err(ArithmeticError::Overflow { wrapped }),
            (value, false) => Ok(value),
        }
    }

    fn reports_multiplicative_overflow(&self) -> bool {
        self.policy.multiplicative_overflow == MultiplicativeOverflow::Report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    fn s(n: i8) -> Signed8Bit {
        Signed8Bit::from(n)
    }

    #[test]
    fn test_operator_symbols_round_trip() {
        for op in Operator::all() {
            assert_eq!(Operator::try_from(op.symbol()), Ok(op));
        }
        assert_eq!(Operator::try_from('%'), Err(UnknownOperator('%')));
    }

    #[test]
    fn test_calculate_ok() {
        let alu = ArithmeticUnit::default();
        assert_eq!(alu.calculate(Operator::Add, s(5), s(3)), Ok(s(8)));
        assert_eq!(alu.calculate(Operator::Subtract, s(5), s(3)), Ok(s(2)));
        assert_eq!(alu.calculate(Operator::Multiply, s(5), s(3)), Ok(s(15)));
        assert_eq!(alu.calculate(Operator::Divide, s(15), s(3)), Ok(s(5)));
        assert_eq!(alu.calculate(Operator::Divide, s(-7), s(2)), Ok(s(-3)));
    }

    #[test]
    fn test_calculate_overflow() {
        let alu = ArithmeticUnit::default();
        assert_eq!(
            alu.calculate(Operator::Add, s(127), s(1)),
            Err(ArithmeticError::Overflow { wrapped: s(-128) })
        );
        assert_eq!(
            alu.calculate(Operator::Multiply, s(-128), s(-1)),
            Err(ArithmeticError::Overflow { wrapped: s(-128) })
        );
        assert_eq!(
            alu.calculate(Operator::Divide, s(-128), s(-1)),
            Err(ArithmeticError::Overflow { wrapped: s(-128) })
        );
    }

    #[test]
    fn test_calculate_division_by_zero() {
        let alu = ArithmeticUnit::default();
        assert_eq!(
            alu.calculate(Operator::Divide, s(15), s(0)),
            Err(ArithmeticError::DivisionByZero)
        );
        let lenient = ArithmeticUnit::new(Policy {
            zero_divisor: ZeroDivisor::YieldZero,
            ..Policy::default()
        });
        assert_eq!(lenient.calculate(Operator::Divide, s(15), s(0)), Ok(s(0)));
    }

    #[test]
    fn test_ignore_multiplicative_overflow() {
        let alu = ArithmeticUnit::new(Policy {
            multiplicative_overflow: MultiplicativeOverflow::Ignore,
            ..Policy::default()
        });
        assert_eq!(alu.evaluate(Operator::Multiply, s(16), s(16)), (s(0), false));
        assert_eq!(alu.calculate(Operator::Divide, s(-128), s(-1)), Ok(s(-128)));
        // Additive overflow is not affected by this setting.
        assert_eq!(alu.evaluate(Operator::Add, s(127), s(1)), (s(-128), true));
    }

    #[test]
    fn test_floor_rounding_policy() {
        let alu = ArithmeticUnit::new(Policy {
            rounding: Rounding::TowardNegativeInfinity,
            ..Policy::default()
        });
        assert_eq!(alu.calculate(Operator::Divide, s(-7), s(2)), Ok(s(-4)));
    }

    #[proptest]
    fn calculate_agrees_with_evaluate(op: Operator, a: i8, b: i8) {
        let alu = ArithmeticUnit::default();
        let (value, overflow) = alu.evaluate(op, s(a), s(b));
        match alu.calculate(op, s(a), s(b)) {
            Ok(v) => {
                assert!(!overflow);
                assert_eq!(v, value);
            }
            Err(ArithmeticError::Overflow { wrapped }) => {
                assert!(overflow);
                assert_eq!(wrapped, value);
            }
            Err(ArithmeticError::DivisionByZero) => {
                assert_eq!(op, Operator::Divide);
                assert_eq!(b, 0);
            }
        }
    }
}
