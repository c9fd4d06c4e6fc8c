//! Unsigned fixed-width words which accompany [`Signed8Bit`].
//!
//! These hold magnitudes and the pieces of the division working
//! register.  Every bitwise operation (including shifts) is masked to
//! the width of the type, so a value never carries bits outside its
//! width.  Shifts are logical: bits shifted off either end are lost,
//! as they would be in a hardware shift register.

use std::cmp::Ordering;
use std::fmt::{self, Binary, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::error::ConversionFailed;
use super::signed::Signed8Bit;
use crate::bit::Bit;


/// This macro implements conversions from native types to
/// Unsigned*Bit which are always possible (e.g. From<u8> for
/// Unsigned15Bit).
macro_rules! from_native_type_to_self {
    ($SelfT:ty, $($from:ty)*) => {
        $(
            impl From<$from> for $SelfT {
                fn from(n: $from) -> Self {
                    Self {
                        bits: n.into(),
                    }
                }
            }
        )*
    }
}

/// This macro implements conversions from Unsigned*Bit to native
/// types which are always possible (e.g. From<Unsigned8Bit> for i16).
macro_rules! from_self_to_native_type {
    ($SelfT:ty, $($to:ty)*) => {
        $(
            impl From<$SelfT> for $to {
                fn from(n: $SelfT) -> $to {
                    // n.bits is known to fit, even though (for
                    // example) not every u8 fits in an i8; the
                    // macro is only invoked for types wide enough.
                    n.bits as $to
                }
            }
        )*
    }
}

/// This macro implements conversions from Unsigned*Bit to native
/// types where the conversion may not always fit.  For example
/// TryFrom<Unsigned8Bit> for i8.
macro_rules! try_from_self_to_native_type {
    ($SelfT:ty, $($to:ty)*) => {
        $(
            impl TryFrom<$SelfT> for $to {
                type Error = ConversionFailed;
                fn try_from(n: $SelfT) -> Result<$to, ConversionFailed> {
                    <$to>::try_from(n.bits).map_err(|_| ConversionFailed::TooLarge)
                }
            }
        )*
    }
}

/// This macro implements a conversions from native types to
/// Unsigned*Bit where the conversion may not always fit.  For example
/// TryFrom<u16> for Unsigned7Bit.
macro_rules! try_from_native_type_to_self {
    ($SelfT:ty, $InnerT:ty, $($from:ty)*) => {
        $(
            impl TryFrom<$from> for $SelfT {
                type Error = ConversionFailed;
                fn try_from(n: $from) -> Result<Self, ConversionFailed> {
                    let bits: $InnerT = match n.try_into() {
                        Err(_) => {
                            // $InnerT is unsigned, so n < 0 is
                            // always an error case.  For unsigned
                            // sources this test is useless.
                            #[allow(unused_comparisons)]
                            if n < 0 {
                                return Err(ConversionFailed::TooSmall);
                            } else {
                                return Err(ConversionFailed::TooLarge);
                            }
                        }
                        Ok(value) if value > Self::VALUE_BITS => {
                            return Err(ConversionFailed::TooLarge);
                        }
                        Ok(value) => value,
                    };
                    Ok(Self { bits })
                }
            }
        )*
    }
}

/// This macro implements the base functionality of the unsigned
/// types.  `SelfT` is the name of the type we are defining, `BITS` is
/// its width and `InnerT` is the native type which stores the bits.
macro_rules! unsigned_word_impl {
    ($SelfT:ty, $BITS:expr, $InnerT:ty) => {
        impl $SelfT {
            pub const WIDTH: u32 = $BITS;
            const VALUE_BITS: $InnerT = <$InnerT>::MAX >> (<$InnerT>::BITS - $BITS);

            pub const MAX: Self = Self {
                bits: Self::VALUE_BITS,
            };
            pub const ZERO: Self = Self { bits: 0 };
            pub const ONE: Self = Self { bits: 1 };
            pub const MIN: Self = Self::ZERO;

            pub const fn is_zero(&self) -> bool {
                self.bits == 0
            }

            /// The least-significant bit.
            pub const fn lsb(&self) -> Bit {
                Bit::from_bool(self.bits & 1 != 0)
            }

            /// The most-significant bit (bit `WIDTH - 1`).
            pub const fn msb(&self) -> Bit {
                Bit::from_bool(self.bits & (1 << ($BITS - 1)) != 0)
            }

            /// Bit `n`, counting from 0 at the least-significant end.
            /// Positions at or beyond the width read as zero.
            pub const fn bit(&self, n: u32) -> Bit {
                if n >= $BITS {
                    Bit::Zero
                } else {
                    Bit::from_bool(self.bits & (1 << n) != 0)
                }
            }

            /// Shift `bit` in at the least-significant end, losing
            /// the current most-significant bit.
            pub fn shift_in(self, bit: Bit) -> Self {
                (self << 1) | <$InnerT>::from(bit)
            }

            // std::ops::BitAnd cannot be called in a const context,
            // so we have this work-alike.
            pub const fn and(self, mask: $InnerT) -> Self {
                Self {
                    bits: self.bits & mask & Self::VALUE_BITS,
                }
            }
        }

        impl Default for $SelfT {
            fn default() -> Self {
                Self { bits: 0 }
            }
        }

        impl Display for $SelfT {
            fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
                Display::fmt(&self.bits, f)
            }
        }

        impl Binary for $SelfT {
            fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
                Binary::fmt(&self.bits, f)
            }
        }

        impl Debug for $SelfT {
            fn fmt(&self, f: &mut Formatter) -> fmt::Result {
                write!(
                    f,
                    concat!(stringify!($SelfT), "{{bits: {:#0width$b}}}"),
                    self.bits,
                    width = ($BITS + 2) as usize
                )
            }
        }

        impl Hash for $SelfT {
            fn hash<H>(&self, state: &mut H)
            where
                H: Hasher,
            {
                self.bits.hash(state)
            }
        }

        impl PartialEq for $SelfT {
            fn eq(&self, other: &$SelfT) -> bool {
                self.bits == other.bits
            }
        }

        impl PartialEq<$InnerT> for $SelfT {
            fn eq(&self, other: &$InnerT) -> bool {
                self.bits == *other
            }
        }

        impl Eq for $SelfT {}

        impl PartialOrd for $SelfT {
            fn partial_cmp(&self, other: &$SelfT) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $SelfT {
            fn cmp(&self, other: &$SelfT) -> Ordering {
                self.bits.cmp(&other.bits)
            }
        }

        impl std::ops::Not for $SelfT {
            type Output = Self;
            fn not(self) -> Self {
                Self {
                    bits: (!self.bits) & Self::VALUE_BITS,
                }
            }
        }

        impl std::ops::BitAnd<$InnerT> for $SelfT {
            type Output = Self;
            fn bitand(self, mask: $InnerT) -> Self {
                self.and(mask)
            }
        }

        impl std::ops::BitAnd for $SelfT {
            type Output = Self;
            fn bitand(self, rhs: Self) -> Self {
                self.and(rhs.bits)
            }
        }

        impl std::ops::BitOr<$InnerT> for $SelfT {
            type Output = Self;
            fn bitor(self, mask: $InnerT) -> Self {
                Self {
                    bits: (self.bits | mask) & Self::VALUE_BITS,
                }
            }
        }

        impl std::ops::BitOr for $SelfT {
            type Output = Self;
            fn bitor(self, rhs: Self) -> Self {
                self | rhs.bits
            }
        }

        impl std::ops::BitXor<$InnerT> for $SelfT {
            type Output = Self;
            fn bitxor(self, mask: $InnerT) -> Self {
                Self {
                    bits: (self.bits ^ mask) & Self::VALUE_BITS,
                }
            }
        }

        impl std::ops::BitXor for $SelfT {
            type Output = Self;
            fn bitxor(self, rhs: Self) -> Self {
                self ^ rhs.bits
            }
        }

        impl std::ops::Shr<u32> for $SelfT {
            type Output = $SelfT;
            fn shr(self, shift_by: u32) -> Self {
                // checked_shr only refuses shifts of the full native
                // width; anything at or beyond $BITS clears the word
                // anyway.
                let bits = self.bits.checked_shr(shift_by).unwrap_or(0);
                Self {
                    bits: bits & Self::VALUE_BITS,
                }
            }
        }

        impl std::ops::Shl<u32> for $SelfT {
            type Output = $SelfT;
            fn shl(self, shift_by: u32) -> Self {
                let bits = self.bits.checked_shl(shift_by).unwrap_or(0);
                Self {
                    bits: bits & Self::VALUE_BITS,
                }
            }
        }
    };
}

/// `Unsigned7Bit` is the right half of the division working
/// register: the dividend bits which have not yet been brought down
/// into the partial remainder.
#[derive(Clone, Copy, Serialize)]
pub struct Unsigned7Bit {
    pub(crate) bits: u8,
}

/// `Unsigned8Bit` is a raw 8-bit pattern with no sign.  The adder
/// works on these, and the magnitude of any [`Signed8Bit`] (including
/// 128, the magnitude of -128) fits in one.
#[derive(Clone, Copy, Serialize)]
pub struct Unsigned8Bit {
    pub(crate) bits: u8,
}

/// `Unsigned15Bit` is the working register of the restoring divider:
/// an 8-bit partial remainder (the left half) followed by a 7-bit
/// [`Unsigned7Bit`] right half.
#[derive(Clone, Copy, Serialize)]
pub struct Unsigned15Bit {
    pub(crate) bits: u16,
}

unsigned_word_impl!(Unsigned7Bit, crate::BITS - 1, u8);
unsigned_word_impl!(Unsigned8Bit, crate::BITS, u8);
unsigned_word_impl!(Unsigned15Bit, 2 * crate::BITS - 1, u16);

impl Unsigned8Bit {
    /// Reinterpret the bit pattern as a two's-complement value.  Bit 7
    /// becomes the sign bit.
    pub const fn reinterpret_as_signed(&self) -> Signed8Bit {
        Signed8Bit { bits: self.bits }
    }
}

impl From<Unsigned7Bit> for Unsigned8Bit {
    fn from(n: Unsigned7Bit) -> Self {
        Self { bits: n.bits }
    }
}

impl From<Unsigned7Bit> for Unsigned15Bit {
    fn from(n: Unsigned7Bit) -> Self {
        Self { bits: n.bits.into() }
    }
}

impl From<Unsigned8Bit> for Unsigned15Bit {
    fn from(n: Unsigned8Bit) -> Self {
        Self { bits: n.bits.into() }
    }
}

////////////////////////////////////////////////////////////////////////
// Unsigned7Bit
////////////////////////////////////////////////////////////////////////

from_self_to_native_type!(Unsigned7Bit, u8 i8 u16 i16 u32 i32 u64 i64 usize isize);
try_from_native_type_to_self!(Unsigned7Bit, u8, i8 u8 i16 u16 i32 u32 i64 u64 isize usize);

////////////////////////////////////////////////////////////////////////
// Unsigned8Bit
////////////////////////////////////////////////////////////////////////

from_native_type_to_self!(Unsigned8Bit, u8);
from_self_to_native_type!(Unsigned8Bit, u8 u16 i16 u32 i32 u64 i64 usize isize);
try_from_self_to_native_type!(Unsigned8Bit, i8);
try_from_native_type_to_self!(Unsigned8Bit, u8, i8 i16 u16 i32 u32 i64 u64 isize usize);

////////////////////////////////////////////////////////////////////////
// Unsigned15Bit
////////////////////////////////////////////////////////////////////////

from_native_type_to_self!(Unsigned15Bit, u8);
from_self_to_native_type!(Unsigned15Bit, u16 i16 u32 i32 u64 i64 usize isize);
try_from_self_to_native_type!(Unsigned15Bit, u8 i8);
try_from_native_type_to_self!(Unsigned15Bit, u16, i8 i16 u16 i32 u32 i64 u64 isize usize);
