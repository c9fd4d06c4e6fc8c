//! The ripple-carry adder.  Every operation of the arithmetic unit is
//! ultimately performed by [`ripple_carry_add`].

use tracing::{Level, event};

use crate::BITS;
use crate::bit::Bit;
use crate::twoscomplement::unsigned::Unsigned8Bit;

/// One full-adder stage.  Returns `(sum, carry_out)`.
pub fn full_adder(a: Bit, b: Bit, carry_in: Bit) -> (Bit, Bit) {
    let half_sum = a ^ b;
    let sum = half_sum ^ carry_in;
    let carry_out = (a & b) | (carry_in & half_sum);
    (sum, carry_out)
}

/// Add two 8-bit patterns and a carry-in by passing them through
/// `BITS` full-adder stages, least-significant bit first.
///
/// Returns the 8-bit sum and the carry out of the most-significant
/// stage.  The carry out is the unsigned carry (useful for chaining
/// adders together); it is not the signed overflow indicator.
pub fn ripple_carry_add(a: Unsigned8Bit, b: Unsigned8Bit, carry_in: Bit) -> (Unsigned8Bit, Bit) {
    let (mut a, mut b) = (a, b);
    let mut carry = carry_in;
    let mut sum = Unsigned8Bit::ZERO;
    for stage in 0..BITS {
        let (sum_bit, carry_out) = full_adder(a.lsb(), b.lsb(), carry);
        event!(
            Level::TRACE,
            "adder stage {}: {} + {} + carry {} = {} carry {}",
            stage,
            a.lsb(),
            b.lsb(),
            carry,
            sum_bit,
            carry_out
        );
        // Prepend the new bit; after BITS stages the first bit we
        // produced has been pushed down to position 0.
        sum = (sum >> 1) | (Unsigned8Bit::from(u8::from(sum_bit)) << (BITS - 1));
        carry = carry_out;
        a = a >> 1;
        b = b >> 1;
    }
    (sum, carry)
}

#[cfg(test)]
mod tests {
    use super::{full_adder, ripple_carry_add};
    use crate::bit::Bit::{self, One, Zero};
    use crate::twoscomplement::unsigned::Unsigned8Bit;
    use test_strategy::proptest;

    #[test]
    fn test_full_adder_truth_table() {
        // (a, b, carry_in) -> (sum, carry_out)
        let table: [((Bit, Bit, Bit), (Bit, Bit)); 8] = [
            ((Zero, Zero, Zero), (Zero, Zero)),
            ((Zero, Zero, One), (One, Zero)),
            ((Zero, One, Zero), (One, Zero)),
            ((Zero, One, One), (Zero, One)),
            ((One, Zero, Zero), (One, Zero)),
            ((One, Zero, One), (Zero, One)),
            ((One, One, Zero), (Zero, One)),
            ((One, One, One), (One, One)),
        ];
        for ((a, b, c), expected) in table {
            assert_eq!(
                full_adder(a, b, c),
                expected,
                "full_adder({a}, {b}, {c}) gave the wrong answer"
            );
        }
    }

    #[test]
    fn test_ripple_carry_add_small() {
        let (sum, carry) =
            ripple_carry_add(Unsigned8Bit::from(5_u8), Unsigned8Bit::from(3_u8), Zero);
        assert_eq!(sum, 8_u8);
        assert_eq!(carry, Zero);
    }

    #[test]
    fn test_ripple_carry_add_carry_out() {
        let (sum, carry) = ripple_carry_add(Unsigned8Bit::MAX, Unsigned8Bit::ONE, Zero);
        assert_eq!(sum, Unsigned8Bit::ZERO);
        assert_eq!(carry, One);
    }

    #[test]
    fn test_ripple_carry_add_uses_carry_in() {
        let (sum, carry) = ripple_carry_add(Unsigned8Bit::ZERO, Unsigned8Bit::ZERO, One);
        assert_eq!(sum, Unsigned8Bit::ONE);
        assert_eq!(carry, Zero);
    }

    #[proptest]
    fn ripple_carry_add_matches_native_addition(a: u8, b: u8, carry_in: Bit) {
        let (sum, carry) = ripple_carry_add(Unsigned8Bit::from(a), Unsigned8Bit::from(b), carry_in);
        let expected: u16 = u16::from(a) + u16::from(b) + u16::from(carry_in);
        assert_eq!(u16::from(sum), expected & 0xFF);
        assert_eq!(carry, Bit::from(expected > 0xFF));
    }
}
