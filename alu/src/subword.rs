//! Utilities for splitting the 15-bit division working register into
//! its two halves and for joining them back together.
use std::ops::Shl;

use crate::BITS;
use crate::twoscomplement::unsigned::{Unsigned15Bit, Unsigned7Bit, Unsigned8Bit};

const RIGHT_HALF_BITS: u32 = BITS - 1;

/// Split the working register into the partial remainder (the left,
/// more-significant, 8 bits) and the dividend bits not yet brought
/// down (the right 7 bits).
pub fn split_register(register: Unsigned15Bit) -> (Unsigned8Bit, Unsigned7Bit) {
    (left_half(register), right_half(register))
}

/// Join a partial remainder and the remaining dividend bits into a
/// working register.
pub fn join_halves(left: Unsigned8Bit, right: Unsigned7Bit) -> Unsigned15Bit {
    Unsigned15Bit::from(left).shl(RIGHT_HALF_BITS) | Unsigned15Bit::from(right)
}

/// Extract the left (more-significant) 8 bits of the working register.
pub fn left_half(register: Unsigned15Bit) -> Unsigned8Bit {
    let bits: u16 = u16::from(register) >> RIGHT_HALF_BITS;
    Unsigned8Bit {
        bits: (bits & 0xFF) as u8,
    }
}

/// Extract the right (less-significant) 7 bits of the working register.
pub fn right_half(register: Unsigned15Bit) -> Unsigned7Bit {
    let bits: u16 = u16::from(register);
    Unsigned7Bit {
        bits: (bits & 0x7F) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! assert_binary_eq {
        ($left:expr, $right:expr $(,)?) => {{
            match (&$left, &$right) {
                (left_val, right_val) => {
                    if !(*left_val == *right_val) {
                        panic!(
                            "Assertion failed: {:>#017b} != {:>#017b}",
                            left_val, right_val
                        );
                    }
                }
            }
        }};
    }

    #[test]
    fn test_join_halves() {
        assert_binary_eq!(
            join_halves(
                Unsigned8Bit::from(0b1010_0101_u8),
                Unsigned7Bit::try_from(0b011_0011_u8).unwrap()
            ),
            Unsigned15Bit::try_from(0b1010_0101_011_0011_u16).unwrap()
        );
    }

    #[test]
    fn test_split_register() {
        let r = Unsigned15Bit::try_from(0b1100_0011_101_0101_u16).expect("valid test data");
        assert_eq!(
            split_register(r),
            (
                Unsigned8Bit::from(0b1100_0011_u8),
                Unsigned7Bit::try_from(0b101_0101_u8).unwrap()
            )
        );
    }

    #[test]
    fn test_dividend_starts_with_its_top_bit_in_the_left_half() {
        // A freshly-loaded register holds the dividend magnitude in its
        // low 8 bits, so only bit 7 of the dividend is in the left half.
        let r = Unsigned15Bit::from(Unsigned8Bit::from(0b1000_0001_u8));
        let (left, right) = split_register(r);
        assert_eq!(left, 1_u8);
        assert_eq!(right, 1_u8);
    }
}
