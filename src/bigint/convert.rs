//! Conversions between big integers and native integers.

use super::math::{Word, WORD_BITS};
use super::storage::{push, WordVec};
use super::BigInt;
use crate::error::{Error, Result};

impl BigInt {
    fn from_u128(negative: bool, value: u128) -> BigInt {
        let mut data = WordVec::new();
        let mut rest = value;
        while rest != 0 {
            push(&mut data, rest as Word);
            rest >>= WORD_BITS;
        }
        BigInt::from_words(negative, data)
    }

    /// The magnitude as a `u128`, if it fits.
    pub(crate) fn magnitude_u128(&self) -> Option<u128> {
        if self.words().len() * WORD_BITS > 128 {
            return None;
        }
        let mut value: u128 = 0;
        for &word in self.words().iter().rev() {
            value = (value << WORD_BITS) | word as u128;
        }
        Some(value)
    }

    pub(crate) fn to_i128(&self) -> Option<i128> {
        let magnitude = self.magnitude_u128()?;
        if !self.is_negative() {
            i128::try_from(magnitude).ok()
        } else if magnitude > i128::MIN.unsigned_abs() {
            None
        } else {
            Some((magnitude as i128).wrapping_neg())
        }
    }
}

macro_rules! from_signed {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for BigInt {
                #[inline]
                fn from(value: $ty) -> Self {
                    BigInt::from_u128(value < 0, value.unsigned_abs() as u128)
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for BigInt {
                #[inline]
                fn from(value: $ty) -> Self {
                    BigInt::from_u128(false, value as u128)
                }
            }
        )*
    };
}

from_signed!(i8 i16 i32 i64 i128 isize);
from_unsigned!(u8 u16 u32 u64 u128 usize);

macro_rules! try_from_bigint {
    ($($ty:ty)*) => {
        $(
            impl TryFrom<BigInt> for $ty {
                type Error = Error;

                fn try_from(value: BigInt) -> Result<$ty> {
                    <$ty>::try_from(&value)
                }
            }
        )*
    };
}

macro_rules! try_into_signed {
    ($($ty:ty)*) => {
        $(
            impl TryFrom<&BigInt> for $ty {
                type Error = Error;

                fn try_from(value: &BigInt) -> Result<$ty> {
                    value
                        .to_i128()
                        .and_then(|wide| <$ty>::try_from(wide).ok())
                        .ok_or_else(Error::out_of_range)
                }
            }
        )*
        try_from_bigint!($($ty)*);
    };
}

macro_rules! try_into_unsigned {
    ($($ty:ty)*) => {
        $(
            impl TryFrom<&BigInt> for $ty {
                type Error = Error;

                fn try_from(value: &BigInt) -> Result<$ty> {
                    if value.is_negative() {
                        return Err(Error::out_of_range());
                    }
                    value
                        .magnitude_u128()
                        .and_then(|wide| <$ty>::try_from(wide).ok())
                        .ok_or_else(Error::out_of_range)
                }
            }
        )*
        try_from_bigint!($($ty)*);
    };
}

try_into_signed!(i8 i16 i32 i64 i128 isize);
try_into_unsigned!(u8 u16 u32 u64 u128 usize);
