//! Truncating division and remainder.
//!
//! Multi-word divisors go through Knuth's Algorithm D (TAOCP vol. 2, 4.3.1).
//! The divisor is normalized so its top word has the high bit set, which
//! bounds every quotient-word estimate to at most two too large.

use super::math::{large, scalar, small, Word};
use super::storage::{push, resize, words_from, WordVec};
use super::BigInt;
use crate::error::{Error, Result};

impl BigInt {
    /// Quotient and remainder of truncating division.
    ///
    /// The quotient is rounded toward zero and the remainder takes the sign of
    /// `self`, exactly like the `/` and `%` operators of native integers.
    ///
    /// ```
    /// use json_bigint::BigInt;
    ///
    /// let (q, r) = BigInt::from(-7).div_rem(&BigInt::from(2))?;
    /// assert_eq!((q, r), (BigInt::from(-3), BigInt::from(-1)));
    ///
    /// let err = BigInt::from(1).div_rem(&BigInt::new()).unwrap_err();
    /// assert!(err.is_arithmetic());
    /// # Ok::<(), json_bigint::Error>(())
    /// ```
    pub fn div_rem(&self, rhs: &BigInt) -> Result<(BigInt, BigInt)> {
        if rhs.is_zero() {
            return Err(Error::division_by_zero());
        }
        let (quot, rem) = div_rem_words(self.words(), rhs.words(), true);
        Ok((
            BigInt::from_words(self.is_negative() != rhs.is_negative(), quot),
            BigInt::from_words(self.is_negative(), rem),
        ))
    }

    /// Truncating quotient, or `None` if `rhs` is zero.
    pub fn checked_div(&self, rhs: &BigInt) -> Option<BigInt> {
        if rhs.is_zero() {
            return None;
        }
        let (quot, _) = div_rem_words(self.words(), rhs.words(), false);
        Some(BigInt::from_words(
            self.is_negative() != rhs.is_negative(),
            quot,
        ))
    }

    /// Remainder with the sign of `self`, or `None` if `rhs` is zero.
    pub fn checked_rem(&self, rhs: &BigInt) -> Option<BigInt> {
        self.div_rem(rhs).ok().map(|(_, rem)| rem)
    }
}

/// Divide magnitude `u` by the non-empty magnitude `v`.
///
/// Returns the (quotient, remainder) magnitudes. When `want_remainder` is
/// false the long division path skips unnormalizing the remainder and returns
/// an empty one.
pub(crate) fn div_rem_words(u: &[Word], v: &[Word], want_remainder: bool) -> (WordVec, WordVec) {
    debug_assert!(!v.is_empty());
    if large::less(u, v) {
        return (WordVec::new(), words_from(u));
    }

    if v.len() == 1 {
        let d = v[0];
        if u.len() == 1 {
            return (words_from(&[u[0] / d]), words_from(&[u[0] % d]));
        }
        let mut quot = words_from(u);
        let rem = small::idiv(&mut quot, d);
        return (quot, words_from(&[rem]));
    }

    long_div(u, v, want_remainder)
}

/// Algorithm D for `u >= v` and a divisor of at least two words.
fn long_div(u: &[Word], v: &[Word], want_remainder: bool) -> (WordVec, WordVec) {
    // D1. Normalize: shift so the top divisor word has its high bit set.
    let shift = small::leading_zeros(v);
    let mut v = words_from(v);
    let mut u = words_from(u);
    small::ishl_bits(&mut v, shift);
    small::ishl_bits(&mut u, shift);

    // A top word smaller than the word below it gives poor estimates, so
    // scale both by `B - 1`. The product keeps the same top word, one word
    // up, because `v * B - v` does not borrow past the old top word then.
    let scaled = v[v.len() - 1] < v[v.len() - 2];
    if scaled {
        small::imul(&mut v, Word::MAX);
        small::imul(&mut u, Word::MAX);
    }

    let n = v.len();
    push(&mut u, 0);
    let m = u.len() - n - 1;
    let vtop = v[n - 1];
    let vnext = v[n - 2];

    let mut quot = WordVec::new();
    resize(&mut quot, m + 1);

    for j in (0..=m).rev() {
        // D3. Estimate the quotient word from the top two remainder words.
        // The window `u[j..=j + n]` is below `v * B`, so `u[j + n] <= vtop`.
        let (mut qhat, mut rhat, mut overflow) = if u[j + n] >= vtop {
            let (rhat, overflow) = scalar::add(u[j + n - 1], vtop);
            (Word::MAX, rhat, overflow)
        } else {
            let (qhat, rhat) = scalar::div_wide(u[j + n], u[j + n - 1], vtop);
            (qhat, rhat, false)
        };

        // Correct the estimate against the second divisor word, while the
        // remainder estimate still fits a word.
        while !overflow {
            let (lo, hi) = scalar::mul_wide(qhat, vnext);
            if (hi, lo) <= (rhat, u[j + n - 2]) {
                break;
            }
            qhat -= 1;
            let (sum, carry) = scalar::add(rhat, vtop);
            rhat = sum;
            overflow = carry;
        }

        // D4. Multiply and subtract; D6. add back when it went negative.
        let window = &mut u[j..=j + n];
        if large::isub_mul(window, &v, qhat) {
            qhat -= 1;
            large::iadd_back(window, &v);
        }
        quot[j] = qhat;
    }
    small::normalize(&mut quot);

    // D8. Unnormalize the remainder.
    let mut rem = WordVec::new();
    if want_remainder {
        u.truncate(n);
        small::normalize(&mut u);
        if scaled {
            small::idiv(&mut u, Word::MAX);
        }
        small::ishr_bits(&mut u, shift);
        rem = u;
    }

    (quot, rem)
}
