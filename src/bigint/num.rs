use super::math::{small, Word, WORD_BITS};
use super::BigInt;

impl BigInt {
    /// The absolute value.
    pub fn abs(&self) -> BigInt {
        let mut out = self.clone();
        out.set_negative(false);
        out
    }

    /// `-1`, `0` or `1` according to the sign.
    pub fn signum(&self) -> BigInt {
        if self.is_zero() {
            BigInt::new()
        } else if self.is_negative() {
            BigInt::from(-1)
        } else {
            BigInt::from(1)
        }
    }

    /// Raise to the power `exp` by repeated squaring. `x.pow(0)` is one,
    /// including for zero.
    ///
    /// ```
    /// use json_bigint::BigInt;
    ///
    /// assert_eq!(BigInt::from(-2).pow(3), -8);
    /// assert_eq!(BigInt::from(10).pow(20).to_string(), "100000000000000000000");
    /// ```
    pub fn pow(&self, exp: u32) -> BigInt {
        let mut base = self.clone();
        let mut acc = BigInt::from(1);
        let mut exp = exp;
        while exp > 0 {
            if exp & 1 == 1 {
                acc *= &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }
        acc
    }

    /// Integer square root, rounded down.
    ///
    /// Newton's iteration from a power of two above the root decreases
    /// monotonically until it reaches the floor of the root.
    ///
    /// # Panics
    ///
    /// Panics if the value is negative.
    ///
    /// ```
    /// use json_bigint::BigInt;
    ///
    /// let n = BigInt::parse("100000000000000000000000000000000000001")?;
    /// assert_eq!(n.sqrt().to_string(), "10000000000000000000");
    /// # Ok::<(), json_bigint::Error>(())
    /// ```
    pub fn sqrt(&self) -> BigInt {
        assert!(
            !self.is_negative(),
            "attempt to take the square root of a negative number"
        );
        if self.is_zero() {
            return BigInt::new();
        }

        let mut x = BigInt::from(1) << ((self.bits() + 1) / 2);
        loop {
            let y = (&x + self / &x) >> 1;
            if y >= x {
                return x;
            }
            x = y;
        }
    }

    /// Number of bits needed to represent the magnitude. Zero needs none.
    pub fn bits(&self) -> usize {
        small::bit_length(self.words())
    }

    /// Conversion to the nearest float, ties to even. Magnitudes that round
    /// past `f64::MAX` become infinite.
    pub fn to_f64(&self) -> f64 {
        let magnitude = match self.magnitude_u128() {
            Some(magnitude) => magnitude as f64,
            None => wide_to_f64(self.words(), self.bits()),
        };
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }
}

/// Round a magnitude wider than 128 bits once: keep its top 64 bits and fold
/// every discarded bit into the lowest kept one.
fn wide_to_f64(words: &[Word], bits: usize) -> f64 {
    let shift = bits - 64;
    if shift >= f64::MAX_EXP as usize {
        return f64::INFINITY;
    }

    let (lo, offset) = (shift / WORD_BITS, shift % WORD_BITS);
    let mut window: u128 = 0;
    for (i, &word) in words[lo..].iter().enumerate() {
        window |= (word as u128) << (i * WORD_BITS);
    }
    let top = (window >> offset) as u64;
    let sticky = words[..lo].iter().any(|&word| word != 0)
        || words[lo] & (((1 as Word) << offset) - 1) != 0;

    // 2^shift, exact for every exponent up to the largest finite one.
    let scale = f64::from_bits((shift as u64 + 1023) << 52);
    (top | sticky as u64) as f64 * scale
}
