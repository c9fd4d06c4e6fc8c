//! A single binary digit, the unit the full adder works on.
use std::fmt::{self, Display, Formatter};
use std::ops::{BitAnd, BitOr, BitXor, Not};

use serde::Serialize;
use test_strategy::Arbitrary;

#[repr(u8)]
#[derive(Arbitrary, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Bit {
    #[default]
    Zero = 0,
    One = 1,
}

impl Bit {
    pub const fn from_bool(b: bool) -> Bit {
        if b { Bit::One } else { Bit::Zero }
    }

    pub const fn is_set(&self) -> bool {
        matches!(self, Bit::One)
    }
}

impl From<bool> for Bit {
    fn from(b: bool) -> Bit {
        Bit::from_bool(b)
    }
}

impl From<Bit> for bool {
    fn from(b: Bit) -> bool {
        b.is_set()
    }
}

impl From<Bit> for u8 {
    fn from(b: Bit) -> u8 {
        b as u8
    }
}

impl From<Bit> for u16 {
    fn from(b: Bit) -> u16 {
        u16::from(b as u8)
    }
}

impl Display for Bit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(match self {
            Bit::Zero => "0",
            Bit::One => "1",
        })
    }
}

impl Not for Bit {
    type Output = Bit;
    fn not(self) -> Bit {
        match self {
            Bit::Zero => Bit::One,
            Bit::One => Bit::Zero,
        }
    }
}

impl BitAnd for Bit {
    type Output = Bit;
    fn bitand(self, rhs: Bit) -> Bit {
        Bit::from_bool(self.is_set() & rhs.is_set())
    }
}

impl BitOr for Bit {
    type Output = Bit;
    fn bitor(self, rhs: Bit) -> Bit {
        Bit::from_bool(self.is_set() | rhs.is_set())
    }
}

impl BitXor for Bit {
    type Output = Bit;
    fn bitxor(self, rhs: Bit) -> Bit {
        Bit::from_bool(self.is_set() ^ rhs.is_set())
    }
}

#[cfg(test)]
mod tests {
    use super::Bit;

    #[test]
    fn test_truth_tables() {
        use Bit::{One, Zero};
        let rows = [
            // a, b, a&b, a|b, a^b
            (Zero, Zero, Zero, Zero, Zero),
            (Zero, One, Zero, One, One),
            (One, Zero, Zero, One, One),
            (One, One, One, One, Zero),
        ];
        for (a, b, and, or, xor) in rows {
            assert_eq!(a & b, and, "{a} AND {b}");
            assert_eq!(a | b, or, "{a} OR {b}");
            assert_eq!(a ^ b, xor, "{a} XOR {b}");
        }
        assert_eq!(!Zero, One);
        assert_eq!(!One, Zero);
    }

    #[test]
    fn test_native_conversions() {
        assert_eq!(u8::from(Bit::One), 1);
        assert_eq!(u16::from(Bit::Zero), 0);
        assert_eq!(Bit::from(true), Bit::One);
        assert!(!bool::from(Bit::Zero));
    }
}
