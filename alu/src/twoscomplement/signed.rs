use std::cmp::Ordering;
use std::fmt::{self, Binary, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::Sign;
use super::error::ConversionFailed;
use super::unsigned::Unsigned8Bit;
use crate::BITS;
use crate::bit::Bit;


// This macro implements conversions from Signed8Bit to native types
// which are always possible (e.g. From<Signed8Bit> for i16).
macro_rules! from_self_to_native_type {
    ($SelfT:ty, $($to:ty)*) => {
        $(
            impl From<$SelfT> for $to {
                fn from(n: $SelfT) -> $to {
                    // Reinterpreting the pattern as i8 yields the
                    // two's-complement value; widening preserves it.
                    <$to>::from(n.bits as i8)
                }
            }
        )*
    }
}

// This macro implements conversions from Signed8Bit to native types
// which may not always be possible (e.g. TryFrom<Signed8Bit> for u16).
macro_rules! try_from_self_to_native_type {
    ($SelfT:ty, $($to:ty)*) => {
        $(
            impl TryFrom<$SelfT> for $to {
                type Error = ConversionFailed;
                fn try_from(n: $SelfT) -> Result<$to, ConversionFailed> {
                    <$to>::try_from(n.bits as i8).map_err(|_| ConversionFailed::TooSmall)
                }
            }
        )*
    }
}

macro_rules! try_from_native_type_to_self {
    ($SelfT:ty, $($from:ty)*) => {
        $(
            impl TryFrom<$from> for $SelfT {
                type Error = ConversionFailed;
                fn try_from(n: $from) -> Result<$SelfT, ConversionFailed> {
                    match i8::try_from(n) {
                        Ok(value) => Ok(<$SelfT>::from(value)),
                        Err(_) if n > 0 => Err(ConversionFailed::TooLarge),
                        Err(_) => Err(ConversionFailed::TooSmall),
                    }
                }
            }
        )*
    }
}

/// An 8-bit two's-complement integer.  The value is held as a raw
/// bit pattern; bit 7 is the sign bit.
#[derive(Clone, Copy, Default, Serialize)]
pub struct Signed8Bit {
    pub(crate) bits: u8,
}

impl Signed8Bit {
    const SIGN_BIT: u8 = 1 << (BITS - 1);

    pub const MAX: Self = Self {
        bits: Self::SIGN_BIT - 1,
    };
    pub const MIN: Self = Self {
        bits: Self::SIGN_BIT,
    };
    pub const ZERO: Self = Self { bits: 0 };
    pub const ONE: Self = Self { bits: 1 };
    pub const MINUS_ONE: Self = Self { bits: u8::MAX };

    /// Build a value from its bit pattern, e.g. `0b1111_1111` is -1.
    pub const fn from_bits(bits: u8) -> Self {
        Self { bits }
    }

    pub const fn bits(&self) -> u8 {
        self.bits
    }

    pub const fn is_zero(&self) -> bool {
        self.bits == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.bits & Self::SIGN_BIT != 0
    }

    pub const fn sign(&self) -> Sign {
        if self.is_negative() {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    pub const fn reinterpret_as_unsigned(&self) -> Unsigned8Bit {
        Unsigned8Bit { bits: self.bits }
    }

    /// The bits of the value, most-significant (the sign bit) first.
    /// This is the order in which the indicator lights are laid out.
    pub fn bits_msb_first(&self) -> [Bit; BITS as usize] {
        let word = self.reinterpret_as_unsigned();
        std::array::from_fn(|i| word.bit(BITS - 1 - i as u32))
    }
}

impl From<i8> for Signed8Bit {
    fn from(n: i8) -> Self {
        Self { bits: n as u8 }
    }
}

from_self_to_native_type!(Signed8Bit, i8 i16 i32 i64 isize);
try_from_self_to_native_type!(Signed8Bit, u8 u16 u32 u64 usize);
try_from_native_type_to_self!(Signed8Bit, u8 i16 u16 i32 u32 i64 u64 isize usize);

impl Display for Signed8Bit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        Display::fmt(&i8::from(*self), f)
    }
}

impl Binary for Signed8Bit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        Binary::fmt(&self.bits, f)
    }
}

impl Debug for Signed8Bit {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Signed8Bit{{bits: {:#010b}}}", self.bits)
    }
}

impl Hash for Signed8Bit {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.bits.hash(state)
    }
}

impl PartialEq for Signed8Bit {
    fn eq(&self, other: &Signed8Bit) -> bool {
        self.bits == other.bits
    }
}

impl PartialEq<i8> for Signed8Bit {
    fn eq(&self, other: &i8) -> bool {
        i8::from(*self) == *other
    }
}

impl Eq for Signed8Bit {}

impl PartialOrd for Signed8Bit {
    fn partial_cmp(&self, other: &Signed8Bit) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialOrd<i8> for Signed8Bit {
    fn partial_cmp(&self, other: &i8) -> Option<Ordering> {
        Some(i8::from(*self).cmp(other))
    }
}

impl Ord for Signed8Bit {
    fn cmp(&self, other: &Signed8Bit) -> Ordering {
        i8::from(*self).cmp(&i8::from(*other))
    }
}
