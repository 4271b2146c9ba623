//! Building-blocks for arbitrary-precision math.
//!
//! These algorithms assume little-endian order for the large integer
//! buffers, so for a `[0, 1, 2, 3]` buffer, `3` is the most significant word,
//! and `0` is the least significant word.
//!
//! Double-word products and quotients are computed from half-words, so no
//! integer type wider than a word is needed.

use super::storage::{push, resize, WordVec};
use core::cmp;

// ALIASES
// -------

//  Type for a single word of the big integer.
//
//  A word is analogous to a digit in base10, except, it stores 32-bit
//  or 64-bit numbers instead. The width is picked by the build script
//  from the target architecture.

/// Unsigned machine word the magnitude of a [`BigInt`](crate::BigInt) is
/// made of.
#[cfg(limb_width_32)]
pub type Word = u32;

/// Unsigned machine word the magnitude of a [`BigInt`](crate::BigInt) is
/// made of.
#[cfg(limb_width_64)]
pub type Word = u64;

/// Number of bits in a word.
pub(crate) const WORD_BITS: usize = Word::BITS as usize;

/// Number of bits in a half-word.
pub(crate) const HALF_BITS: usize = WORD_BITS / 2;

/// Mask of the low half of a word.
pub(crate) const LOW_MASK: Word = (1 << HALF_BITS) - 1;

/// Mask of the high half of a word.
pub(crate) const HIGH_MASK: Word = !LOW_MASK;

/// The most significant bit of a word.
pub(crate) const HIGH_BIT: Word = 1 << (WORD_BITS - 1);

// SCALAR
// ------

// Scalar-to-scalar operations, for building-blocks for arbitrary-precision
// operations.

pub(crate) mod scalar {
    use super::*;

    // ADDITION

    /// Add two small integers and return the resulting value and if overflow happens.
    #[inline]
    pub fn add(x: Word, y: Word) -> (Word, bool) {
        x.overflowing_add(y)
    }

    /// AddAssign two small integers and return if overflow happens.
    #[inline]
    pub fn iadd(x: &mut Word, y: Word) -> bool {
        let t = add(*x, y);
        *x = t.0;
        t.1
    }

    // SUBTRACTION

    /// Subtract two small integers and return the resulting value and if overflow happens.
    #[inline]
    pub fn sub(x: Word, y: Word) -> (Word, bool) {
        x.overflowing_sub(y)
    }

    /// SubAssign two small integers and return if overflow happens.
    #[inline]
    pub fn isub(x: &mut Word, y: Word) -> bool {
        let t = sub(*x, y);
        *x = t.0;
        t.1
    }

    // MULTIPLICATION

    /// Multiply two words into a double word.
    ///
    /// Both words are split into half-words so each of the four partial
    /// products fits in a word. Returns the (low, high) components.
    #[inline]
    pub fn mul_wide(x: Word, y: Word) -> (Word, Word) {
        let (xh, xl) = (x >> HALF_BITS, x & LOW_MASK);
        let (yh, yl) = (y >> HALF_BITS, y & LOW_MASK);

        let mut lo = xl * yl;
        let mut hi = xh * yh;
        let mid1 = xl * yh;
        let mid2 = xh * yl;

        let carry = iadd(&mut lo, mid1 << HALF_BITS);
        hi += carry as Word + (mid1 >> HALF_BITS);
        let carry = iadd(&mut lo, mid2 << HALF_BITS);
        hi += carry as Word + (mid2 >> HALF_BITS);

        (lo, hi)
    }

    /// Multiply two small integers (with carry) (and return the overflow contribution).
    ///
    /// Returns the (low, high) components.
    #[inline]
    pub fn mul(x: Word, y: Word, carry: Word) -> (Word, Word) {
        // Cannot overflow, since the largest product leaves room for one
        // more word: `(B - 1) * (B - 1) + (B - 1) < B * B`.
        let (mut lo, hi) = mul_wide(x, y);
        let overflow = iadd(&mut lo, carry);
        (lo, hi + overflow as Word)
    }

    /// Multiply two small integers (with carry) (and return if overflow happens).
    #[inline]
    pub fn imul(x: &mut Word, y: Word, carry: Word) -> Word {
        let t = mul(*x, y, carry);
        *x = t.0;
        t.1
    }

    // DIVISION

    /// Divide the double word `(hi, lo)` by `d`.
    ///
    /// `d` must be normalized (top bit set) and `hi < d`, so the quotient
    /// fits in a word. Each quotient half-word is estimated from the top half
    /// of `d` and corrected downward against the low half, at most twice.
    ///
    /// Returns the (quotient, remainder) components.
    pub fn div_wide(hi: Word, lo: Word, d: Word) -> (Word, Word) {
        debug_assert!(d & HIGH_BIT != 0 && hi < d);
        let b: Word = 1 << HALF_BITS;
        let (dh, dl) = (d >> HALF_BITS, d & LOW_MASK);
        let (lo1, lo0) = (lo >> HALF_BITS, lo & LOW_MASK);

        let mut q1 = hi / dh;
        let mut rhat = hi - q1 * dh;
        while q1 >= b || q1 * dl > ((rhat << HALF_BITS) | lo1) {
            q1 -= 1;
            rhat += dh;
            if rhat >= b {
                break;
            }
        }

        // Wrapping is exact here: the true partial remainder is below `d`.
        let mid = ((hi << HALF_BITS) | lo1).wrapping_sub(q1.wrapping_mul(d));

        let mut q0 = mid / dh;
        let mut rhat = mid - q0 * dh;
        while q0 >= b || q0 * dl > ((rhat << HALF_BITS) | lo0) {
            q0 -= 1;
            rhat += dh;
            if rhat >= b {
                break;
            }
        }

        let rem = ((mid << HALF_BITS) | lo0).wrapping_sub(q0.wrapping_mul(d));
        ((q1 << HALF_BITS) | q0, rem)
    }
}

// SMALL
// -----

// Large-to-small operations, to modify a big integer from a native scalar.

pub(crate) mod small {
    use super::*;

    // ADDITION

    /// Implied AddAssign implementation for adding a small integer to bigint.
    ///
    /// Allows us to choose a start-index in x to store, to allow incrementing
    /// from a non-zero start.
    #[inline]
    pub fn iadd_impl(x: &mut WordVec, y: Word, xstart: usize) {
        debug_assert!(x.len() >= xstart);
        if x.len() == xstart {
            if y != 0 {
                push(x, y);
            }
        } else {
            // Initial add
            let mut carry = scalar::iadd(&mut x[xstart], y);

            // Increment until overflow stops occurring.
            let mut size = xstart + 1;
            while carry && size < x.len() {
                carry = scalar::iadd(&mut x[size], 1);
                size += 1;
            }

            // If we overflowed the buffer entirely, need to add 1 to the end
            // of the buffer.
            if carry {
                push(x, 1);
            }
        }
    }

    /// AddAssign small integer to bigint.
    #[inline]
    pub fn iadd(x: &mut WordVec, y: Word) {
        iadd_impl(x, y, 0);
    }

    // SUBTRACTION

    /// SubAssign small integer to bigint.
    /// Does not do overflowing subtraction.
    #[inline]
    pub fn isub_impl(x: &mut WordVec, y: Word, xstart: usize) {
        debug_assert!(x.len() > xstart && (x[xstart] >= y || x.len() > xstart + 1));

        // Initial subtraction
        let mut carry = scalar::isub(&mut x[xstart], y);

        // Decrement until overflow stops occurring.
        let mut size = xstart + 1;
        while carry && size < x.len() {
            carry = scalar::isub(&mut x[size], 1);
            size += 1;
        }
        normalize(x);
    }

    // MULTIPLICATION

    /// MulAssign small integer to bigint.
    #[inline]
    pub fn imul(x: &mut WordVec, y: Word) {
        if y == 0 {
            x.clear();
            return;
        }

        // Multiply iteratively over all elements, adding the carry each time.
        let mut carry: Word = 0;
        for xi in x.iter_mut() {
            carry = scalar::imul(xi, y, carry);
        }

        // Overflow of value, add to end.
        if carry != 0 {
            push(x, carry);
        }
    }

    // DIVISION

    /// DivAssign by a divisor that fits in a half-word, returning the
    /// remainder.
    ///
    /// Every word is divided as two half-word digits, so each partial
    /// dividend fits in a single word.
    pub fn idiv_half(x: &mut WordVec, y: Word) -> Word {
        debug_assert!(y != 0 && y & HIGH_MASK == 0);
        let mut rem: Word = 0;
        for xi in x.iter_mut().rev() {
            let dividend = (rem << HALF_BITS) | (*xi >> HALF_BITS);
            let q1 = dividend / y;
            let dividend = ((dividend % y) << HALF_BITS) | (*xi & LOW_MASK);
            let q0 = dividend / y;
            rem = dividend % y;
            *xi = (q1 << HALF_BITS) | q0;
        }
        normalize(x);
        rem
    }

    /// DivAssign by a single word, returning the remainder.
    pub fn idiv(x: &mut WordVec, y: Word) -> Word {
        debug_assert!(y != 0);
        if y & HIGH_MASK == 0 {
            return idiv_half(x, y);
        }

        // Normalize so the divisor has its top bit set; the quotient is
        // unchanged and the remainder comes out shifted by the same amount.
        let shift = y.leading_zeros() as usize;
        let y = y << shift;
        ishl_bits(x, shift);

        let mut rem: Word = 0;
        for xi in x.iter_mut().rev() {
            let (q, r) = scalar::div_wide(rem, *xi, y);
            *xi = q;
            rem = r;
        }
        normalize(x);
        rem >> shift
    }

    // BIT LENGTH

    /// Get number of leading zero bits in the storage.
    #[inline]
    pub fn leading_zeros(x: &[Word]) -> usize {
        match x.last() {
            Some(&hi) => hi.leading_zeros() as usize,
            None => 0,
        }
    }

    /// Calculate the bit-length of the big-integer.
    #[inline]
    pub fn bit_length(x: &[Word]) -> usize {
        // Avoid overflowing, calculate via total number of bits
        // minus leading zero bits.
        let nlz = leading_zeros(x);
        WORD_BITS
            .checked_mul(x.len())
            .map_or(usize::MAX, |v| v - nlz)
    }

    // SHL

    /// Shift-left bits inside a buffer.
    ///
    /// Assumes `n < WORD_BITS`, IE, internally shifting bits.
    #[inline]
    pub fn ishl_bits(x: &mut WordVec, n: usize) {
        // Need to shift by the number of `bits % WORD_BITS`.
        debug_assert!(n < WORD_BITS);
        if n == 0 {
            return;
        }

        // Internally, for each item, we shift left by n, and add the previous
        // right shifted word-bits.
        // For example, we transform (for u8) shifted left 2, to:
        //      b10100100 b01000010
        //      b10 b10010001 b00001000
        let rshift = WORD_BITS - n;
        let lshift = n;
        let mut prev: Word = 0;
        for xi in x.iter_mut() {
            let tmp = *xi;
            *xi <<= lshift;
            *xi |= prev >> rshift;
            prev = tmp;
        }

        let carry = prev >> rshift;
        if carry != 0 {
            push(x, carry);
        }
    }

    /// Shift-left `n` words inside a buffer.
    #[inline]
    pub fn ishl_words(x: &mut WordVec, n: usize) {
        if n == 0 || x.is_empty() {
            return;
        }
        let len = x.len();
        resize(x, len + n);
        x.copy_within(0..len, n);
        for xi in &mut x[..n] {
            *xi = 0;
        }
    }

    /// Shift-left buffer by n bits.
    #[inline]
    pub fn ishl(x: &mut WordVec, n: usize) {
        // Need to pad with zeros for the number of `bits / WORD_BITS`,
        // and shift-left with carry for `bits % WORD_BITS`.
        let rem = n % WORD_BITS;
        let div = n / WORD_BITS;
        ishl_words(x, div);
        ishl_bits(x, rem);
    }

    // SHR

    /// Shift-right bits inside a buffer.
    ///
    /// Assumes `n < WORD_BITS`, IE, internally shifting bits.
    #[inline]
    pub fn ishr_bits(x: &mut WordVec, n: usize) {
        debug_assert!(n < WORD_BITS);
        if n == 0 {
            return;
        }

        // Walk from the most significant word down, pulling the low bits of
        // each higher word into the top of the next lower one.
        let lshift = WORD_BITS - n;
        let mut prev: Word = 0;
        for xi in x.iter_mut().rev() {
            let tmp = *xi;
            *xi >>= n;
            *xi |= prev << lshift;
            prev = tmp;
        }
        normalize(x);
    }

    /// Shift-right `n` words inside a buffer, dropping the low words.
    #[inline]
    pub fn ishr_words(x: &mut WordVec, n: usize) {
        if n == 0 {
            return;
        }
        if n >= x.len() {
            x.clear();
            return;
        }
        let len = x.len();
        x.copy_within(n..len, 0);
        x.truncate(len - n);
    }

    /// Shift-right buffer by n bits.
    #[inline]
    pub fn ishr(x: &mut WordVec, n: usize) {
        ishr_words(x, n / WORD_BITS);
        ishr_bits(x, n % WORD_BITS);
    }

    // NORMALIZE

    /// Normalize the container by popping any leading zeros.
    #[inline]
    pub fn normalize(x: &mut WordVec) {
        while let Some(&0) = x.last() {
            x.pop();
        }
    }
}

// LARGE
// -----

// Large-to-large operations, to modify a big integer from another big integer.

pub(crate) mod large {
    use super::*;

    // RELATIVE OPERATORS

    /// Compare `x` to `y`, in little-endian order.
    #[inline]
    pub fn compare(x: &[Word], y: &[Word]) -> cmp::Ordering {
        if x.len() > y.len() {
            cmp::Ordering::Greater
        } else if x.len() < y.len() {
            cmp::Ordering::Less
        } else {
            let iter = x.iter().rev().zip(y.iter().rev());
            for (&xi, &yi) in iter {
                if xi > yi {
                    return cmp::Ordering::Greater;
                } else if xi < yi {
                    return cmp::Ordering::Less;
                }
            }
            // Equal case.
            cmp::Ordering::Equal
        }
    }

    /// Check if x is less than y.
    #[inline]
    pub fn less(x: &[Word], y: &[Word]) -> bool {
        compare(x, y) == cmp::Ordering::Less
    }

    /// Check if x is greater than or equal to y.
    #[inline]
    pub fn greater_equal(x: &[Word], y: &[Word]) -> bool {
        !less(x, y)
    }

    // ADDITION

    /// AddAssign bigint to bigint.
    ///
    /// The buffer only grows past the longer operand when the final carry
    /// needs a new word.
    pub fn iadd(x: &mut WordVec, y: &[Word]) {
        if y.len() > x.len() {
            resize(x, y.len());
        }

        // Iteratively add elements from y to x.
        let mut carry = false;
        for (xi, yi) in x.iter_mut().zip(y.iter()) {
            // Only one op of the two can overflow, since we added at max
            // Word::MAX + Word::MAX. Add the previous carry,
            // and store the current carry for the next.
            let mut tmp = scalar::iadd(xi, *yi);
            if carry {
                tmp |= scalar::iadd(xi, 1);
            }
            carry = tmp;
        }

        // Overflow from the previous word.
        if carry {
            small::iadd_impl(x, 1, y.len());
        }
    }

    // SUBTRACTION

    /// SubAssign bigint to bigint.
    pub fn isub(x: &mut WordVec, y: &[Word]) {
        // Basic underflow checks.
        debug_assert!(greater_equal(x, y));

        // Iteratively subtract elements of y from x.
        let mut carry = false;
        for (xi, yi) in x.iter_mut().zip(y.iter()) {
            // Only one op of the two can overflow, since we subtracted at max
            // Word::MAX + 1. Subtract the previous borrow,
            // and store the current borrow for the next.
            let mut tmp = scalar::isub(xi, *yi);
            if carry {
                tmp |= scalar::isub(xi, 1);
            }
            carry = tmp;
        }

        if carry {
            small::isub_impl(x, 1, y.len());
        } else {
            small::normalize(x);
        }
    }

    /// Reverse SubAssign, `x = y - x`, where `y >= x`.
    ///
    /// Reuses the buffer of `x`, so a smaller value absorbing a larger one of
    /// the opposite sign keeps its allocation.
    pub fn irsub(x: &mut WordVec, y: &[Word]) {
        debug_assert!(greater_equal(y, x));
        resize(x, y.len());

        let mut carry = false;
        for (xi, &yi) in x.iter_mut().zip(y.iter()) {
            let (mut value, mut tmp) = scalar::sub(yi, *xi);
            if carry {
                tmp |= scalar::isub(&mut value, 1);
            }
            *xi = value;
            carry = tmp;
        }
        debug_assert!(!carry);
        small::normalize(x);
    }

    // MULTIPLICATION

    /// Grade-school multiplication algorithm, one result column at a time.
    ///
    /// Every product `x[i] * y[j]` lands in column `i + j`. Each column is
    /// summed into a three-word accumulator: the low word becomes the result
    /// word, the upper two carry into the next column. O(n*m) word products.
    pub fn long_mul(x: &[Word], y: &[Word]) -> WordVec {
        let mut z = WordVec::new();
        if x.is_empty() || y.is_empty() {
            return z;
        }
        resize(&mut z, x.len() + y.len());

        let (mut lo, mut hi, mut top): (Word, Word, Word) = (0, 0, 0);
        for (k, zk) in z.iter_mut().enumerate() {
            let start = k.saturating_sub(y.len() - 1);
            let end = cmp::min(k + 1, x.len());
            for i in start..end {
                let (plo, phi) = scalar::mul_wide(x[i], y[k - i]);
                let carry = scalar::iadd(&mut lo, plo);
                // `phi` is at most `B - 2`, so adding the carry cannot wrap.
                if scalar::iadd(&mut hi, phi + carry as Word) {
                    top += 1;
                }
            }
            *zk = lo;
            lo = hi;
            hi = top;
            top = 0;
        }
        small::normalize(&mut z);

        z
    }

    /// MulAssign bigint to bigint.
    #[inline]
    pub fn imul(x: &mut WordVec, y: &[Word]) {
        match (x.len(), y.len()) {
            (0, _) => {}
            (_, 0) => x.clear(),
            (_, 1) => small::imul(x, y[0]),
            (1, _) => {
                let digit = x[0];
                x.clear();
                iadd(x, y);
                small::imul(x, digit);
            }
            _ => *x = long_mul(x, y),
        }
    }

    // DIVISION

    /// Subtract `q * y` from the window `x`, which is one word longer than `y`.
    ///
    /// Returns true if the subtraction borrowed out of the window, IE, `q` was
    /// too large and the window now holds `x - q * y + B^len`.
    pub fn isub_mul(x: &mut [Word], y: &[Word], q: Word) -> bool {
        debug_assert!(x.len() == y.len() + 1);
        let mut carry: Word = 0;
        let mut borrow = false;
        for (xi, &yi) in x.iter_mut().zip(y.iter()) {
            let (lo, hi) = scalar::mul(yi, q, carry);
            carry = hi;
            let mut tmp = scalar::isub(xi, lo);
            if borrow {
                tmp |= scalar::isub(xi, 1);
            }
            borrow = tmp;
        }

        let top = &mut x[y.len()];
        let mut tmp = scalar::isub(top, carry);
        if borrow {
            tmp |= scalar::isub(top, 1);
        }
        tmp
    }

    /// Add `y` back into the window `x` after an `isub_mul` that borrowed,
    /// discarding the carry out of the window.
    pub fn iadd_back(x: &mut [Word], y: &[Word]) {
        debug_assert!(x.len() == y.len() + 1);
        let mut carry = false;
        for (xi, &yi) in x.iter_mut().zip(y.iter()) {
            let mut tmp = scalar::iadd(xi, yi);
            if carry {
                tmp |= scalar::iadd(xi, 1);
            }
            carry = tmp;
        }
        let top = &mut x[y.len()];
        *top = top.wrapping_add(carry as Word);
    }
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(limb_width_32)]
    pub(crate) fn from_u32(x: &[u32]) -> WordVec {
        crate::bigint::storage::words_from(x)
    }

    #[cfg(limb_width_64)]
    pub(crate) fn from_u32(x: &[u32]) -> WordVec {
        let mut v = WordVec::new();
        for xi in x.chunks(2) {
            match xi.len() {
                1 => v.push(xi[0] as u64),
                2 => v.push(((xi[1] as u64) << 32) | (xi[0] as u64)),
                _ => unreachable!(),
            }
        }

        v
    }

    fn from_u64(x: u64) -> WordVec {
        let mut v = from_u32(&[x as u32, (x >> 32) as u32]);
        small::normalize(&mut v);
        v
    }

    #[test]
    fn mul_wide_test() {
        assert_eq!(scalar::mul_wide(0, Word::MAX), (0, 0));
        assert_eq!(scalar::mul_wide(Word::MAX, 1), (Word::MAX, 0));
        assert_eq!(scalar::mul_wide(Word::MAX, 2), (Word::MAX - 1, 1));
        // (B - 1)^2 = (B - 2) * B + 1
        assert_eq!(scalar::mul_wide(Word::MAX, Word::MAX), (1, Word::MAX - 1));
        assert_eq!(
            scalar::mul_wide(HIGH_BIT, HIGH_BIT),
            (0, 1 << (WORD_BITS - 2))
        );
    }

    #[test]
    fn div_wide_test() {
        // (B - 2) * B + 1 divided by (B - 1) is exactly (B - 1).
        assert_eq!(
            scalar::div_wide(Word::MAX - 1, 1, Word::MAX),
            (Word::MAX, 0)
        );
        assert_eq!(scalar::div_wide(0, 7, HIGH_BIT), (0, 7));
        assert_eq!(scalar::div_wide(1, 0, HIGH_BIT), (2, 0));
        assert_eq!(scalar::div_wide(1, 5, HIGH_BIT | 1), (2, 3));

        // Reconstruct the dividend from the quotient and remainder.
        let d = HIGH_BIT | 0x1234_5678;
        let (hi, lo) = (d - 1, 0x0BAD_F00D);
        let (q, r) = scalar::div_wide(hi, lo, d);
        assert!(r < d);
        let (plo, phi) = scalar::mul(q, d, r);
        assert_eq!((plo, phi), (lo, hi));
    }

    #[test]
    fn compare_test() {
        // Simple
        let x = from_u32(&[1]);
        let y = from_u32(&[2]);
        assert_eq!(large::compare(&x, &y), cmp::Ordering::Less);
        assert_eq!(large::compare(&x, &x), cmp::Ordering::Equal);
        assert_eq!(large::compare(&y, &x), cmp::Ordering::Greater);

        // Check asymmetric
        let x = from_u32(&[5, 1]);
        let y = from_u32(&[2]);
        assert_eq!(large::compare(&x, &y), cmp::Ordering::Greater);
        assert_eq!(large::compare(&x, &x), cmp::Ordering::Equal);
        assert_eq!(large::compare(&y, &x), cmp::Ordering::Less);

        // Check when we use reverse ordering properly.
        let x = from_u32(&[5, 1, 9]);
        let y = from_u32(&[6, 2, 8]);
        assert_eq!(large::compare(&x, &y), cmp::Ordering::Greater);
        assert_eq!(large::compare(&x, &x), cmp::Ordering::Equal);
        assert_eq!(large::compare(&y, &x), cmp::Ordering::Less);

        // Complex scenario, check it properly uses reverse ordering.
        let x = from_u32(&[0, 1, 9]);
        let y = from_u32(&[4294967295, 0, 9]);
        assert_eq!(large::compare(&x, &y), cmp::Ordering::Greater);
        assert_eq!(large::compare(&x, &x), cmp::Ordering::Equal);
        assert_eq!(large::compare(&y, &x), cmp::Ordering::Less);
    }

    #[test]
    fn bit_length_test() {
        let x = from_u32(&[0, 0, 0, 1]);
        assert_eq!(small::bit_length(&x), 97);

        let x = from_u32(&[0, 0, 0, 3]);
        assert_eq!(small::bit_length(&x), 98);

        let x = from_u32(&[1 << 31]);
        assert_eq!(small::bit_length(&x), 32);

        assert_eq!(small::bit_length(&[]), 0);
    }

    #[test]
    fn iadd_small_test() {
        // Overflow check (single)
        // This should set all the internal data values to 0, the top
        // value to (1<<31), and the bottom value to (4>>1).
        // This is because the max_value + 1 leads to all 0s, we set the
        // topmost bit to 1.
        let mut x = from_u32(&[4294967295]);
        small::iadd(&mut x, 5);
        assert_eq!(x, from_u32(&[4, 1]));

        // No overflow, single value
        let mut x = from_u32(&[5]);
        small::iadd(&mut x, 7);
        assert_eq!(x, from_u32(&[12]));

        // Single carry, internal overflow
        let mut x = from_u64(0x80000000FFFFFFFF);
        small::iadd(&mut x, 7);
        assert_eq!(x, from_u32(&[6, 0x80000001]));

        // Double carry, overflow
        let mut x = from_u64(0xFFFFFFFFFFFFFFFF);
        small::iadd(&mut x, 7);
        assert_eq!(x, from_u32(&[6, 0, 1]));

        // Adding zero to zero stays empty.
        let mut x = WordVec::new();
        small::iadd(&mut x, 0);
        assert!(x.is_empty());
    }

    #[test]
    fn imul_small_test() {
        // No overflow check, 1-int.
        let mut x = from_u32(&[5]);
        small::imul(&mut x, 7);
        assert_eq!(x, from_u32(&[35]));

        // No overflow check, 2-ints.
        let mut x = from_u64(0x4000000040000);
        small::imul(&mut x, 5);
        assert_eq!(x, from_u32(&[0x00140000, 0x140000]));

        // Overflow, 1 carry.
        let mut x = from_u32(&[0x33333334]);
        small::imul(&mut x, 5);
        assert_eq!(x, from_u32(&[4, 1]));

        // Overflow, 1 carry, internal.
        let mut x = from_u64(0x133333334);
        small::imul(&mut x, 5);
        assert_eq!(x, from_u32(&[4, 6]));

        // Overflow, 2 carries.
        let mut x = from_u64(0x3333333333333334);
        small::imul(&mut x, 5);
        assert_eq!(x, from_u32(&[4, 0, 1]));

        // Multiply by zero empties the buffer.
        let mut x = from_u64(0x3333333333333334);
        small::imul(&mut x, 0);
        assert!(x.is_empty());
    }

    #[test]
    fn idiv_small_test() {
        // Half-word divisor.
        let mut x = from_u32(&[4, 0, 1]);
        let rem = small::idiv(&mut x, 5);
        assert_eq!(x, from_u64(0x3333333333333334));
        assert_eq!(rem, 0);

        let mut x = from_u64(0x3333333333333339);
        let rem = small::idiv(&mut x, 5);
        assert_eq!(x, from_u64(0xA3D70A3D70A3D71));
        assert_eq!(rem, 4);

        // Full-word divisor, needs normalization.
        let mut x = from_u32(&[0, 0, 0, 1]);
        let rem = small::idiv(&mut x, Word::MAX);
        let mut back = x.clone();
        small::imul(&mut back, Word::MAX);
        small::iadd(&mut back, rem);
        assert_eq!(back, from_u32(&[0, 0, 0, 1]));
        assert!(rem < Word::MAX);
    }

    #[test]
    fn isub_test() {
        // Borrow through every word.
        let mut x = from_u32(&[0, 0, 1]);
        large::isub(&mut x, &from_u32(&[1]));
        assert_eq!(x, from_u32(&[4294967295, 4294967295]));

        // Equal operands reduce to nothing.
        let mut x = from_u32(&[5, 1, 9]);
        large::isub(&mut x, &from_u32(&[5, 1, 9]));
        assert!(x.is_empty());
    }

    #[test]
    fn irsub_test() {
        // 2^64 - 1
        let mut x = from_u32(&[1]);
        large::irsub(&mut x, &from_u32(&[0, 0, 1]));
        assert_eq!(x, from_u32(&[4294967295, 4294967295]));

        let mut x = from_u32(&[9, 9]);
        large::irsub(&mut x, &from_u32(&[9, 9]));
        assert!(x.is_empty());
    }

    #[test]
    fn iadd_large_test() {
        // Carry creates a new word.
        let mut x = from_u32(&[4294967295, 4294967295]);
        large::iadd(&mut x, &from_u32(&[1]));
        assert_eq!(x, from_u32(&[0, 0, 1]));

        // Longer right-hand side.
        let mut x = from_u32(&[7]);
        large::iadd(&mut x, &from_u32(&[1, 2, 3]));
        assert_eq!(x, from_u32(&[8, 2, 3]));

        // Longer right-hand side, carry ripples past its top word.
        let mut x = WordVec::from_slice(&[Word::MAX]);
        large::iadd(&mut x, &[1, Word::MAX]);
        assert_eq!(&x[..], &[0, 0, 1]);
    }

    #[test]
    fn long_mul_test() {
        // (2^128 - 1)^2 = 2^256 - 2^129 + 1
        let x = from_u32(&[4294967295, 4294967295, 4294967295, 4294967295]);
        let z = large::long_mul(&x, &x);
        assert_eq!(
            z,
            from_u32(&[1, 0, 0, 0, 4294967294, 4294967295, 4294967295, 4294967295])
        );

        let x = from_u32(&[1, 2, 3, 4]);
        let y = from_u32(&[5, 6, 7, 8]);
        let mut z = x.clone();
        large::imul(&mut z, &y);
        assert_eq!(z, large::long_mul(&y, &x));
    }

    #[test]
    fn isub_mul_test() {
        // Window holds exactly 3 * y.
        let y = from_u32(&[2, 4294967295, 1, 2]);
        let mut window = y.clone();
        small::imul(&mut window, 3);
        let len = y.len() + 1;
        window.resize(len, 0);
        assert!(!large::isub_mul(&mut window, &y, 3));
        assert!(window.iter().all(|&w| w == 0));

        // Overestimated quotient borrows; adding back restores `x - (q - 1) * y`.
        let mut window = y.clone();
        small::imul(&mut window, 3);
        window.resize(len, 0);
        assert!(large::isub_mul(&mut window, &y, 4));
        large::iadd_back(&mut window, &y);
        assert!(window.iter().all(|&w| w == 0));
    }

    #[test]
    fn shl_test() {
        // Pattern generated via `''.join(["1" +"0"*i for i in range(20)])`
        let mut big = from_u32(&[0xD2210408]);
        small::ishl(&mut big, 5);
        assert_eq!(big, from_u32(&[0x44208100, 0x1A]));
        small::ishl(&mut big, 32);
        assert_eq!(big, from_u32(&[0, 0x44208100, 0x1A]));
        small::ishl(&mut big, 27);
        assert_eq!(big, from_u32(&[0, 0, 0xD2210408]));

        // 96-bits of previous pattern
        let mut big = from_u32(&[0x20020010, 0x8040100, 0xD2210408]);
        small::ishl(&mut big, 5);
        assert_eq!(big, from_u32(&[0x400200, 0x802004, 0x44208101, 0x1A]));
        small::ishl(&mut big, 32);
        assert_eq!(big, from_u32(&[0, 0x400200, 0x802004, 0x44208101, 0x1A]));
        small::ishl(&mut big, 27);
        assert_eq!(big, from_u32(&[0, 0, 0x20020010, 0x8040100, 0xD2210408]));
    }

    #[test]
    fn shr_test() {
        let mut big = from_u32(&[0, 0, 0x20020010, 0x8040100, 0xD2210408]);
        small::ishr(&mut big, 27);
        assert_eq!(big, from_u32(&[0, 0x400200, 0x802004, 0x44208101, 0x1A]));
        small::ishr(&mut big, 32);
        assert_eq!(big, from_u32(&[0x400200, 0x802004, 0x44208101, 0x1A]));
        small::ishr(&mut big, 5);
        assert_eq!(big, from_u32(&[0x20020010, 0x8040100, 0xD2210408]));

        small::ishr(&mut big, 96);
        assert!(big.is_empty());
    }
}
