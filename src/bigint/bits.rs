//! Shifts and bitwise operators.
//!
//! All of these act on the magnitude only. The result keeps the sign of the
//! left operand unless it is zero, so `-5 >> 1 == -2` (truncation toward
//! zero) and `-6 & 3 == -2`. This is not two's complement behavior.

use super::math::{small, Word};
use super::storage::resize;
use super::BigInt;
use core::cmp;
use core::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Shl, ShlAssign, Shr,
    ShrAssign,
};

// SHIFTS
// ------

impl ShlAssign<usize> for BigInt {
    /// Multiply the magnitude by `2^rhs`, whole words first then the
    /// remaining bits.
    fn shl_assign(&mut self, rhs: usize) {
        small::ishl(self.data_mut(), rhs);
        self.reduce();
    }
}

impl ShrAssign<usize> for BigInt {
    /// Divide the magnitude by `2^rhs`, rounding toward zero. Shifting out
    /// every word yields zero.
    fn shr_assign(&mut self, rhs: usize) {
        small::ishr(self.data_mut(), rhs);
        self.reduce();
    }
}

impl Shl<usize> for BigInt {
    type Output = BigInt;

    fn shl(mut self, rhs: usize) -> BigInt {
        self <<= rhs;
        self
    }
}

impl Shl<usize> for &BigInt {
    type Output = BigInt;

    fn shl(self, rhs: usize) -> BigInt {
        self.clone() << rhs
    }
}

impl Shr<usize> for BigInt {
    type Output = BigInt;

    fn shr(mut self, rhs: usize) -> BigInt {
        self >>= rhs;
        self
    }
}

impl Shr<usize> for &BigInt {
    type Output = BigInt;

    fn shr(self, rhs: usize) -> BigInt {
        self.clone() >> rhs
    }
}

// BITWISE
// -------

impl BigInt {
    fn bitop_extend(&mut self, other: &[Word], op: fn(&mut Word, Word)) {
        let len = cmp::max(self.words().len(), other.len());
        let data = self.data_mut();
        resize(data, len);
        for (xi, &yi) in data.iter_mut().zip(other) {
            op(xi, yi);
        }
        self.reduce();
    }
}

impl BitAndAssign<&BigInt> for BigInt {
    fn bitand_assign(&mut self, rhs: &BigInt) {
        let other = rhs.words();
        let data = self.data_mut();
        data.truncate(other.len());
        for (xi, &yi) in data.iter_mut().zip(other) {
            *xi &= yi;
        }
        self.reduce();
    }
}

impl BitOrAssign<&BigInt> for BigInt {
    fn bitor_assign(&mut self, rhs: &BigInt) {
        self.bitop_extend(rhs.words(), |x, y| *x |= y);
    }
}

impl BitXorAssign<&BigInt> for BigInt {
    fn bitxor_assign(&mut self, rhs: &BigInt) {
        self.bitop_extend(rhs.words(), |x, y| *x ^= y);
    }
}

macro_rules! forward_bitop {
    ($($imp:ident $method:ident $assign_imp:ident $assign_method:ident)*) => {
        $(
            impl $assign_imp<BigInt> for BigInt {
                #[inline]
                fn $assign_method(&mut self, rhs: BigInt) {
                    $assign_imp::$assign_method(self, &rhs);
                }
            }

            impl $imp<BigInt> for BigInt {
                type Output = BigInt;

                #[inline]
                fn $method(mut self, rhs: BigInt) -> BigInt {
                    $assign_imp::$assign_method(&mut self, &rhs);
                    self
                }
            }

            impl $imp<&BigInt> for BigInt {
                type Output = BigInt;

                #[inline]
                fn $method(mut self, rhs: &BigInt) -> BigInt {
                    $assign_imp::$assign_method(&mut self, rhs);
                    self
                }
            }

            impl $imp<BigInt> for &BigInt {
                type Output = BigInt;

                #[inline]
                fn $method(self, rhs: BigInt) -> BigInt {
                    let mut out = self.clone();
                    $assign_imp::$assign_method(&mut out, &rhs);
                    out
                }
            }

            impl $imp<&BigInt> for &BigInt {
                type Output = BigInt;

                #[inline]
                fn $method(self, rhs: &BigInt) -> BigInt {
                    let mut out = self.clone();
                    $assign_imp::$assign_method(&mut out, rhs);
                    out
                }
            }
        )*
    };
}

forward_bitop! {
    BitAnd bitand BitAndAssign bitand_assign
    BitOr bitor BitOrAssign bitor_assign
    BitXor bitxor BitXorAssign bitxor_assign
}

// Native integers are only accepted on the right-hand side, where they act
// through their magnitude like any other operand.
macro_rules! primitive_bitop {
    ($($ty:ty)*) => {
        $(
            primitive_bitop!(@impl $ty, BitAnd bitand BitAndAssign bitand_assign);
            primitive_bitop!(@impl $ty, BitOr bitor BitOrAssign bitor_assign);
            primitive_bitop!(@impl $ty, BitXor bitxor BitXorAssign bitxor_assign);
        )*
    };
    (@impl $ty:ty, $imp:ident $method:ident $assign_imp:ident $assign_method:ident) => {
        impl $assign_imp<$ty> for BigInt {
            #[inline]
            fn $assign_method(&mut self, rhs: $ty) {
                $assign_imp::$assign_method(self, &BigInt::from(rhs));
            }
        }

        impl $imp<$ty> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(mut self, rhs: $ty) -> BigInt {
                $assign_imp::$assign_method(&mut self, &BigInt::from(rhs));
                self
            }
        }

        impl $imp<$ty> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: $ty) -> BigInt {
                let mut out = self.clone();
                $assign_imp::$assign_method(&mut out, &BigInt::from(rhs));
                out
            }
        }
    };
}

primitive_bitop!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);
