//! The four operations of the arithmetic unit.
//!
//! Each operation takes two [`Signed8Bit`] operands and returns the
//! 8-bit result together with an overflow flag.  The result is always
//! what an 8-bit register would hold, even when the flag is set.  All
//! arithmetic is done by the ripple-carry adder; multiplication and
//! division work on magnitudes and restore the sign afterwards.

use tracing::{Level, event};

use crate::BITS;
use crate::adder::ripple_carry_add;
use crate::bit::Bit;
use crate::overflow;
use crate::subword::{join_halves, left_half, split_register};
use crate::twoscomplement::Sign;
use crate::twoscomplement::signed::Signed8Bit;
use crate::twoscomplement::unsigned::{Unsigned15Bit, Unsigned8Bit};


/// How a quotient which is not a whole number gets rounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// -7 / 2 = -3.
    #[default]
    TowardZero,
    /// -7 / 2 = -4.
    TowardNegativeInfinity,
}

/// Compute `a + b + carry_in`.
///
/// The overflow flag is set when both operands have the same sign but
/// the sum has the other sign.
pub fn add(a: Signed8Bit, b: Signed8Bit, carry_in: Bit) -> (Signed8Bit, bool) {
    let (sum, _carry) = ripple_carry_add(
        a.reinterpret_as_unsigned(),
        b.reinterpret_as_unsigned(),
        carry_in,
    );
    let sum = sum.reinterpret_as_signed();
    (sum, overflow::additive(a.sign(), b.sign(), sum.sign()))
}

/// Compute `minuend - subtrahend` as `minuend + !subtrahend + 1`.
pub fn subtract(minuend: Signed8Bit, subtrahend: Signed8Bit) -> (Signed8Bit, bool) {
    let complement = (!subtrahend.reinterpret_as_unsigned()).reinterpret_as_signed();
    // The adder's overflow flag answers the wrong question here (it
    // compares the minuend with the complement), so we apply the
    // subtraction rule instead.
    let (difference, _) = add(minuend, complement, Bit::One);
    (
        difference,
        overflow::subtractive(minuend.sign(), subtrahend.sign(), difference.sign()),
    )
}

/// Compute `multiplicand * multiplier` by shift-and-add.
///
/// The value is the low 8 bits of the product.  The high byte is
/// accumulated alongside it (by chaining the adder's carry) so that
/// overflow can be detected.
pub fn multiply(multiplicand: Signed8Bit, multiplier: Signed8Bit) -> (Signed8Bit, bool) {
    let sign = multiplicand.sign().combine(multiplier.sign());
    let m = magnitude(multiplicand);
    let q = magnitude(multiplier);

    let mut high = Unsigned8Bit::ZERO;
    let mut low = Unsigned8Bit::ZERO;
    for position in 0..BITS {
        let (partial_high, partial_low) = if q.bit(position).is_set() {
            (m >> (BITS - position), m << position)
        } else {
            (Unsigned8Bit::ZERO, Unsigned8Bit::ZERO)
        };
        let (sum_low, carry) = ripple_carry_add(low, partial_low, Bit::Zero);
        let (sum_high, _) = ripple_carry_add(high, partial_high, carry);
        event!(
            Level::TRACE,
            "multiply step {}: partial product {:#010b}:{:#010b}, total {:#010b}:{:#010b}",
            position,
            partial_high,
            partial_low,
            sum_high,
            sum_low
        );
        high = sum_high;
        low = sum_low;
    }

    let overflow = overflow::multiplicative(high, low, sign);
    (apply_sign(low, sign), overflow)
}

/// Compute `dividend / divisor`, truncating toward zero.
///
/// Division by zero yields `(0, false)`.  Callers which need to
/// distinguish that case should check the divisor first (as
/// [`crate::unit::ArithmeticUnit::calculate`] does).
pub fn divide(dividend: Signed8Bit, divisor: Signed8Bit) -> (Signed8Bit, bool) {
    divide_with_rounding(dividend, divisor, Rounding::TowardZero)
}

/// Compute `dividend / divisor`, rounding as specified.
pub fn divide_with_rounding(
    dividend: Signed8Bit,
    divisor: Signed8Bit,
    rounding: Rounding,
) -> (Signed8Bit, bool) {
    if divisor.is_zero() {
        event!(Level::DEBUG, "division of {} by zero yields zero", dividend);
        return (Signed8Bit::ZERO, false);
    }
    let sign = dividend.sign().combine(divisor.sign());
    let (mut quotient, remainder) = restoring_divide(magnitude(dividend), magnitude(divisor));
    if rounding == Rounding::TowardNegativeInfinity
        && sign == Sign::Negative
        && !remainder.is_zero()
    {
        // Moving the magnitude one step away from zero moves a
        // negative quotient one step toward negative infinity.
        (quotient, _) = ripple_carry_add(quotient, Unsigned8Bit::ZERO, Bit::One);
    }
    let overflow = overflow::multiplicative(Unsigned8Bit::ZERO, quotient, sign);
    (apply_sign(quotient, sign), overflow)
}

/// Restoring division of magnitudes.  Returns `(quotient, remainder)`.
///
/// `divisor` must be nonzero and at most 128; every magnitude of a
/// [`Signed8Bit`] satisfies the second condition.  Under those
/// conditions the trial difference always fits in 8 bits, so its top
/// bit tells us whether the divisor fitted.
fn restoring_divide(dividend: Unsigned8Bit, divisor: Unsigned8Bit) -> (Unsigned8Bit, Unsigned8Bit) {
    let not_divisor = !divisor;
    let mut register = Unsigned15Bit::from(dividend);
    let mut quotient = Unsigned8Bit::ZERO;
    for step in 0..BITS {
        if step > 0 {
            // Bring down the next dividend bit.
            register = register << 1;
        }
        let (partial, rest) = split_register(register);
        let (difference, _) = ripple_carry_add(partial, not_divisor, Bit::One);
        let fitted = !difference.msb();
        if fitted.is_set() {
            register = join_halves(difference, rest);
        }
        quotient = quotient.shift_in(fitted);
        event!(
            Level::TRACE,
            "divide step {}: partial remainder {:#010b}, quotient bit {}",
            step,
            partial,
            fitted
        );
    }
    (quotient, left_half(register))
}

/// Two's-complement negation, `0 + !n + 1`.
pub fn negate(n: Unsigned8Bit) -> Unsigned8Bit {
    let (negated, _) = ripple_carry_add(Unsigned8Bit::ZERO, !n, Bit::One);
    negated
}

/// The magnitude of `n`.  The magnitude of -128 is 128, which still
/// fits in an [`Unsigned8Bit`].
pub fn magnitude(n: Signed8Bit) -> Unsigned8Bit {
    let bits = n.reinterpret_as_unsigned();
    match n.sign() {
        Sign::Negative => negate(bits),
        Sign::Positive => bits,
    }
}

fn apply_sign(magnitude: Unsigned8Bit, sign: Sign) -> Signed8Bit {
    let bits = match sign {
        Sign::Negative => negate(magnitude),
        Sign::Positive => magnitude,
    };
    bits.reinterpret_as_signed()
}
