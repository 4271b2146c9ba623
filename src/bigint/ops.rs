//! Arithmetic operators.
//!
//! The compound assignment operators taking `&BigInt` do the work. Every
//! other combination of owned, borrowed and native operands forwards to them.

use super::math::{large, Word};
use super::BigInt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

impl BigInt {
    /// Add a signed magnitude to `self`.
    ///
    /// Equal signs add magnitudes and keep the sign. Otherwise the smaller
    /// magnitude is subtracted from the larger and the larger one's sign
    /// wins.
    fn add_signed(&mut self, other: &[Word], other_negative: bool) {
        if self.is_negative() == other_negative {
            large::iadd(self.data_mut(), other);
        } else if large::greater_equal(self.words(), other) {
            large::isub(self.data_mut(), other);
        } else {
            large::irsub(self.data_mut(), other);
            self.set_negative(other_negative);
        }
        self.reduce();
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        self.add_signed(rhs.words(), rhs.is_negative());
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        self.add_signed(rhs.words(), !rhs.is_negative());
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        let negative = self.is_negative() != rhs.is_negative();
        large::imul(self.data_mut(), rhs.words());
        self.reduce();
        self.set_negative(negative);
    }
}

impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &BigInt) {
        match self.checked_div(rhs) {
            Some(quot) => *self = quot,
            None => panic!("attempt to divide by zero"),
        }
    }
}

impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &BigInt) {
        match self.checked_rem(rhs) {
            Some(rem) => *self = rem,
            None => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        let negative = !self.is_negative();
        self.set_negative(negative);
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -self.clone()
    }
}

// Forward owned and borrowed operand combinations to the compound assignment
// taking `&BigInt`.
macro_rules! forward_binop {
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

forward_binop! {
    Add add AddAssign add_assign
    Sub sub SubAssign sub_assign
    Mul mul MulAssign mul_assign
    Div div DivAssign div_assign
    Rem rem RemAssign rem_assign
}

// Native integers on either side. They convert to an inline `BigInt`, so no
// heap traffic is involved beyond what the result itself needs.
macro_rules! primitive_binop {
    ($([$($ty:ty)*])*) => {
        $($(
            primitive_binop!(@impl $ty, Add add AddAssign add_assign);
            primitive_binop!(@impl $ty, Sub sub SubAssign sub_assign);
            primitive_binop!(@impl $ty, Mul mul MulAssign mul_assign);
            primitive_binop!(@impl $ty, Div div DivAssign div_assign);
            primitive_binop!(@impl $ty, Rem rem RemAssign rem_assign);
        )*)*
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

        impl $imp<BigInt> for $ty {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                let mut out = BigInt::from(self);
                $assign_imp::$assign_method(&mut out, &rhs);
                out
            }
        }

        impl $imp<&BigInt> for $ty {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: &BigInt) -> BigInt {
                let mut out = BigInt::from(self);
                $assign_imp::$assign_method(&mut out, rhs);
                out
            }
        }
    };
}

primitive_binop! {
    [i8 i16 i32 i64 i128 isize]
    [u8 u16 u32 u64 u128 usize]
}
