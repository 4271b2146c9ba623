use super::math::large;
use super::BigInt;
use core::cmp::Ordering;

impl Ord for BigInt {
    fn cmp(&self, other: &BigInt) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => large::compare(self.words(), other.words()),
            (true, true) => large::compare(other.words(), self.words()),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

macro_rules! partialord_numeric {
    ($($ty:ty)*) => {
        $(
            impl PartialEq<$ty> for BigInt {
                fn eq(&self, other: &$ty) -> bool {
                    *self == BigInt::from(*other)
                }
            }

            impl PartialEq<BigInt> for $ty {
                fn eq(&self, other: &BigInt) -> bool {
                    BigInt::from(*self) == *other
                }
            }

            impl PartialOrd<$ty> for BigInt {
                fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
                    Some(self.cmp(&BigInt::from(*other)))
                }
            }

            impl PartialOrd<BigInt> for $ty {
                fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
                    Some(BigInt::from(*self).cmp(other))
                }
            }
        )*
    };
}

partialord_numeric!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);
