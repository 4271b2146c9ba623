//! Big-endian magnitude bytes, the bignum payload of binary codecs.

use super::math::{small, Word, WORD_BITS};
use super::storage::{reserve, words_from, WordVec};
use super::{BigInt, Sign};
use alloc::vec::Vec;

impl BigInt {
    /// Build a value from a sign and big-endian magnitude bytes.
    ///
    /// Only [`Sign::Minus`] produces a negative value. Leading zero bytes
    /// are allowed, and an empty slice is zero.
    ///
    /// ```
    /// use json_bigint::{BigInt, Sign};
    ///
    /// let n = BigInt::from_bytes_be(Sign::Minus, &[0x01, 0x00]);
    /// assert_eq!(n, -256);
    /// assert_eq!(BigInt::from_bytes_be(Sign::Plus, &[]), 0);
    /// ```
    pub fn from_bytes_be(sign: Sign, bytes: &[u8]) -> BigInt {
        let mut data = WordVec::new();
        reserve(&mut data, (bytes.len() * 8 + WORD_BITS - 1) / WORD_BITS);
        for &byte in bytes {
            small::imul(&mut data, 256);
            small::iadd(&mut data, byte as Word);
        }
        BigInt::from_words(sign == Sign::Minus, data)
    }

    /// Append the big-endian bytes of the magnitude to `out` and return the
    /// sign.
    ///
    /// There is never a leading zero byte, except that zero writes the single
    /// byte `0x00` and returns [`Sign::NoSign`].
    ///
    /// ```
    /// use json_bigint::{BigInt, Sign};
    ///
    /// let mut out = vec![0xC3];
    /// let sign = BigInt::from(-65536).write_bytes_be(&mut out);
    /// assert_eq!(sign, Sign::Minus);
    /// assert_eq!(out, [0xC3, 0x01, 0x00, 0x00]);
    /// ```
    pub fn write_bytes_be(&self, out: &mut Vec<u8>) -> Sign {
        let start = out.len();
        out.reserve(self.bits() / 8 + 1);

        let mut data = words_from(self.words());
        loop {
            if data.len() <= 1 && data.first().map_or(true, |&word| word < 256) {
                out.push(data.first().map_or(0, |&word| word as u8));
                break;
            }
            let rem = small::idiv(&mut data, 256);
            out.push(rem as u8);
        }
        out[start..].reverse();

        self.sign()
    }

    /// The sign and big-endian magnitude bytes.
    ///
    /// ```
    /// use json_bigint::{BigInt, Sign};
    ///
    /// assert_eq!(BigInt::from(256).to_bytes_be(), (Sign::Plus, vec![1, 0]));
    /// assert_eq!(BigInt::new().to_bytes_be(), (Sign::NoSign, vec![0]));
    /// ```
    pub fn to_bytes_be(&self) -> (Sign, Vec<u8>) {
        let mut out = Vec::new();
        let sign = self.write_bytes_be(&mut out);
        (sign, out)
    }
}
