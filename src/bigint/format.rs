//! Big integers to digit strings.
//!
//! The magnitude is divided repeatedly by the largest power of the radix that
//! fits in a word, and each remainder yields that many digits at once.

use super::math::{small, Word};
use super::storage::words_from;
use super::BigInt;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Display, LowerHex, UpperHex};

/// Largest power of ten in a word, and its number of digits.
#[cfg(limb_width_64)]
const DECIMAL_CHUNK: (Word, usize) = (10_000_000_000_000_000_000, 19);
#[cfg(limb_width_32)]
const DECIMAL_CHUNK: (Word, usize) = (1_000_000_000, 9);

/// Power of sixteen used per division step, and its number of digits.
#[cfg(limb_width_64)]
const HEX_CHUNK: (Word, usize) = (1 << 60, 15);
#[cfg(limb_width_32)]
const HEX_CHUNK: (Word, usize) = (1 << 28, 7);

const UPPER_DIGITS: &[u8; 16] = b"0123456789ABCDEF";
const LOWER_DIGITS: &[u8; 16] = b"0123456789abcdef";

impl BigInt {
    /// Upper case hexadecimal digits with a leading `-` for negative values,
    /// and no `0x` prefix.
    ///
    /// ```
    /// use json_bigint::BigInt;
    ///
    /// assert_eq!(BigInt::from(255).to_string_hex(), "FF");
    /// assert_eq!(BigInt::from(-4096).to_string_hex(), "-1000");
    /// assert_eq!(BigInt::new().to_string_hex(), "0");
    /// ```
    pub fn to_string_hex(&self) -> String {
        format!("{:X}", self)
    }
}

fn magnitude_digits(value: &BigInt, radix: Word, digits: &[u8; 16]) -> String {
    let (power, count) = if radix == 10 { DECIMAL_CHUNK } else { HEX_CHUNK };
    let mut data = words_from(value.words());
    let mut buf = Vec::new();
    if data.is_empty() {
        buf.push(b'0');
    }
    while !data.is_empty() {
        let mut rem = small::idiv(&mut data, power);
        // Every chunk but the most significant one is zero-padded.
        for _ in 0..count {
            if data.is_empty() && rem == 0 {
                break;
            }
            buf.push(digits[(rem % radix) as usize]);
            rem /= radix;
        }
    }
    buf.reverse();

    // Only ASCII digits were pushed.
    buf.into_iter().map(char::from).collect()
}

impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let is_nonnegative = !self.is_negative();
        match self.magnitude_u128() {
            Some(value) => f.pad_integral(is_nonnegative, "", itoa::Buffer::new().format(value)),
            None => f.pad_integral(
                is_nonnegative,
                "",
                &magnitude_digits(self, 10, UPPER_DIGITS),
            ),
        }
    }
}

impl UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = magnitude_digits(self, 16, UPPER_DIGITS);
        f.pad_integral(!self.is_negative(), "0x", &digits)
    }
}

impl LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = magnitude_digits(self, 16, LOWER_DIGITS);
        f.pad_integral(!self.is_negative(), "0x", &digits)
    }
}
