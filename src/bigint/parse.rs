//! Digit strings to big integers.

use super::math::{small, Word};
use super::storage::WordVec;
use super::BigInt;
use crate::error::{Error, ErrorCode, Result};
use core::str::FromStr;

impl BigInt {
    /// Parse a decimal integer with an optional leading `-`.
    ///
    /// ```
    /// use json_bigint::BigInt;
    ///
    /// let n = BigInt::parse("-340282366920938463463374607431768211456")?;
    /// assert_eq!(n, -(BigInt::from(u128::MAX) + 1i32));
    ///
    /// let err = BigInt::parse("12x4").unwrap_err();
    /// assert_eq!(err.index(), Some(2));
    /// # Ok::<(), json_bigint::Error>(())
    /// ```
    pub fn parse(s: &str) -> Result<BigInt> {
        BigInt::parse_radix(s, 10)
    }

    /// Parse an integer in the given radix with an optional leading `-`.
    ///
    /// Letters are accepted in either case for radixes above 10. There is no
    /// `+` sign and no prefix such as `0x`.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is not in the range from 2 to 16, like
    /// `u64::from_str_radix` does for radixes it does not support.
    pub fn parse_radix(s: &str, radix: u32) -> Result<BigInt> {
        check_radix(radix);
        let bytes = s.as_bytes();
        let (negative, start) = split_sign(bytes);
        if start == bytes.len() {
            return Err(Error::syntax(ErrorCode::EmptyNumber, start));
        }

        let (data, end) = parse_magnitude(bytes, start, radix);
        if end < bytes.len() {
            let digit = match s[end..].chars().next() {
                Some(ch) => ch,
                None => char::REPLACEMENT_CHARACTER,
            };
            return Err(Error::syntax(
                ErrorCode::InvalidDigit { digit, radix },
                end,
            ));
        }
        Ok(BigInt::from_words(negative, data))
    }

    /// Parse the longest prefix of `bytes` that forms an integer in `radix`.
    ///
    /// Returns the value and the number of bytes consumed, sign included.
    /// Parsing never fails: input without a leading digit consumes nothing and
    /// yields zero. A decoder uses this to lift an integer token out of a
    /// larger buffer and then checks what follows it.
    ///
    /// ```
    /// use json_bigint::BigInt;
    ///
    /// let (n, consumed) = BigInt::parse_partial(b"-1234, 5", 10);
    /// assert_eq!(n, -1234);
    /// assert_eq!(consumed, 5);
    ///
    /// assert_eq!(BigInt::parse_partial(b"-x", 10), (BigInt::new(), 0));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `radix` is not in the range from 2 to 16.
    pub fn parse_partial(bytes: &[u8], radix: u32) -> (BigInt, usize) {
        check_radix(radix);
        let (negative, start) = split_sign(bytes);
        let (data, end) = parse_magnitude(bytes, start, radix);
        if end == start {
            return (BigInt::new(), 0);
        }
        (BigInt::from_words(negative, data), end)
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<BigInt> {
        BigInt::parse(s)
    }
}

fn check_radix(radix: u32) {
    assert!(
        (2..=16).contains(&radix),
        "radix must be in the range 2..=16, got {}",
        radix
    );
}

fn split_sign(bytes: &[u8]) -> (bool, usize) {
    match bytes.first() {
        Some(b'-') => (true, 1),
        _ => (false, 0),
    }
}

/// Accumulate digits from `start` until the first byte that is not a digit.
///
/// Digits are gathered into a single word until one more would overflow it,
/// then folded into the magnitude with one multiply and one add. Returns the
/// magnitude and the index where parsing stopped.
fn parse_magnitude(bytes: &[u8], start: usize, radix: u32) -> (WordVec, usize) {
    let radix = radix as Word;
    let mut data = WordVec::new();
    let mut chunk: Word = 0;
    let mut scale: Word = 1;

    let mut index = start;
    while let Some(&byte) = bytes.get(index) {
        let digit = match (byte as char).to_digit(radix as u32) {
            Some(digit) => digit as Word,
            None => break,
        };
        if scale > Word::MAX / radix {
            small::imul(&mut data, scale);
            small::iadd(&mut data, chunk);
            chunk = 0;
            scale = 1;
        }
        chunk = chunk * radix + digit;
        scale *= radix;
        index += 1;
    }

    if scale > 1 {
        small::imul(&mut data, scale);
        small::iadd(&mut data, chunk);
    }
    (data, index)
}
