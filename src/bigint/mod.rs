//! The arbitrary precision signed integer type.

use core::fmt::{self, Debug};
use core::ops::Neg;

mod bits;
mod bytes;
mod cmp;
mod convert;
mod div;
mod format;
mod math;
mod num;
mod ops;
mod parse;
mod storage;

pub use self::math::Word;
use self::storage::{words_from, Storage, WordVec};

/// Sign of a [`BigInt`], as carried next to a big-endian magnitude by binary
/// codecs.
///
/// CBOR encodes a [`Sign::Minus`] bignum under tag 3 and every other bignum
/// under tag 2.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    /// Strictly negative.
    Minus,
    /// Zero.
    NoSign,
    /// Strictly positive.
    Plus,
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Minus => Sign::Plus,
            Sign::NoSign => Sign::NoSign,
            Sign::Plus => Sign::Minus,
        }
    }
}

/// An arbitrary precision signed integer.
///
/// The value is a sign and a magnitude of [`Word`]s, least significant first.
/// Magnitudes of up to 128 bits are stored inline, so converting any native
/// integer never allocates.
///
/// ```
/// use json_bigint::BigInt;
///
/// let a = BigInt::from(u64::MAX);
/// let b = &a + 1u64;
/// assert_eq!(b.to_string(), "18446744073709551616");
/// assert_eq!(-7 / BigInt::from(2), -3);
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    storage: Storage,
}

impl BigInt {
    /// Zero.
    #[inline]
    pub fn new() -> Self {
        BigInt {
            storage: Storage::new(),
        }
    }

    /// Build a value from a sign and magnitude words, least significant word
    /// first.
    ///
    /// High zero words are trimmed, and a zero magnitude is zero whatever the
    /// sign.
    ///
    /// ```
    /// use json_bigint::{BigInt, Sign};
    ///
    /// let n = BigInt::from_slice(Sign::Minus, &[0, 1, 0]);
    /// assert_eq!(n, -(BigInt::from(1) << json_bigint::Word::BITS as usize));
    /// assert_eq!(BigInt::from_slice(Sign::Minus, &[0]), 0);
    /// ```
    pub fn from_slice(sign: Sign, words: &[Word]) -> Self {
        BigInt::from_words(sign == Sign::Minus, words_from(words))
    }

    /// Magnitude words, least significant first, without high zero words.
    #[inline]
    pub fn words(&self) -> &[Word] {
        self.storage.words()
    }

    /// Number of words the value can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Whether the magnitude is stored inline rather than on the heap.
    #[inline]
    pub fn is_inline(&self) -> bool {
        !self.storage.is_allocated()
    }

    /// Ensure room for at least `words` magnitude words.
    ///
    /// The value is unchanged. Heap capacity grows in bursts of four words.
    #[inline]
    pub fn reserve(&mut self, words: usize) {
        self.storage.reserve(words);
    }

    /// Returns true if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns true if the value is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.storage.is_negative()
    }

    /// Returns true if the value is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.is_negative() && !self.is_zero()
    }

    /// The sign of the value.
    pub fn sign(&self) -> Sign {
        if self.is_zero() {
            Sign::NoSign
        } else if self.is_negative() {
            Sign::Minus
        } else {
            Sign::Plus
        }
    }

    #[inline]
    pub(crate) fn from_words(negative: bool, data: WordVec) -> Self {
        BigInt {
            storage: Storage::from_vec(negative, data),
        }
    }

    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut WordVec {
        self.storage.data_mut()
    }

    #[inline]
    pub(crate) fn set_negative(&mut self, negative: bool) {
        self.storage.set_negative(negative);
    }

    /// Restore reduced form after the magnitude was edited in place.
    #[inline]
    pub(crate) fn reduce(&mut self) {
        self.storage.reduce();
    }
}

impl Debug for BigInt {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "BigInt({})", self)
    }
}
