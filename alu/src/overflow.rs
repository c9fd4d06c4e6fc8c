//! Signed overflow rules.  There is one rule per operator family and
//! each is decided from signs (or, for the multiplicative operators,
//! from the full-width magnitude) rather than from the adder's carry.

use crate::twoscomplement::Sign;
use crate::twoscomplement::unsigned::Unsigned8Bit;

/// Overflow rule for `a + b`: the operands agree in sign and the
/// sum does not.
pub const fn additive(a: Sign, b: Sign, sum: Sign) -> bool {
    same(a, b) && !same(sum, a)
}

/// Overflow rule for `minuend - subtrahend`: the operands differ in
/// sign and the difference took the subtrahend's sign.
pub const fn subtractive(minuend: Sign, subtrahend: Sign, difference: Sign) -> bool {
    !same(minuend, subtrahend) && same(difference, subtrahend)
}

/// Overflow rule for products and quotients, which are computed as a
/// 16-bit magnitude (`high`:`low`) and then given a sign.
///
/// A positive result fits iff the magnitude is at most 127.  A
/// negative result may also be exactly 128.
pub fn multiplicative(high: Unsigned8Bit, low: Unsigned8Bit, sign: Sign) -> bool {
    if !high.is_zero() {
        return true;
    }
    match sign {
        Sign::Positive => low.msb().is_set(),
        // The only magnitude with bit 7 set that fits is 0b1000_0000.
        Sign::Negative => low.msb().is_set() && !(low & 0b0111_1111).is_zero(),
    }
}

const fn same(a: Sign, b: Sign) -> bool {
    matches!(
        (a, b),
        (Sign::Positive, Sign::Positive) | (Sign::Negative, Sign::Negative)
    )
}
