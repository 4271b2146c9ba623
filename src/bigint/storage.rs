//! Sign and word storage for a big integer.
//!
//! Magnitudes of up to 128 bits are kept inline in the value itself. Larger
//! magnitudes are promoted to a heap buffer the first time the storage must
//! grow past the inline capacity, and the heap buffer then grows in bursts of
//! `WORD_BURST` words. Nothing here ever shrinks the capacity.

use super::math::{Word, WORD_BITS};
use smallvec::SmallVec;

/// Number of words that fit inline, enough for any native integer.
pub(crate) const INLINE_CAPACITY: usize = 128 / WORD_BITS;

/// Heap capacity is always a multiple of this many words.
const WORD_BURST: usize = 4;

/// Little-endian word buffer with inline storage for small magnitudes.
pub(crate) type WordVec = SmallVec<[Word; INLINE_CAPACITY]>;

// GROWTH
// ------

/// Find a suitable block size for `len` words.
#[inline]
fn round_up(len: usize) -> usize {
    (len / WORD_BURST + 1) * WORD_BURST
}

/// Ensure `vec` can hold at least `len` words without reallocating.
#[inline]
pub(crate) fn reserve(vec: &mut WordVec, len: usize) {
    if vec.capacity() < len {
        let additional = round_up(len) - vec.len();
        vec.reserve_exact(additional);
    }
}

/// Set the number of words to `len`, zero-filling any new high words.
#[inline]
pub(crate) fn resize(vec: &mut WordVec, len: usize) {
    reserve(vec, len);
    vec.resize(len, 0);
}

/// Append a new most significant word.
#[inline]
pub(crate) fn push(vec: &mut WordVec, word: Word) {
    reserve(vec, vec.len() + 1);
    vec.push(word);
}

/// Copy words into a fresh buffer that follows the growth policy.
#[inline]
pub(crate) fn words_from(words: &[Word]) -> WordVec {
    let mut vec = WordVec::new();
    reserve(&mut vec, words.len());
    vec.extend_from_slice(words);
    vec
}

// STORAGE
// -------

/// Sign flag plus magnitude words, least significant word first.
///
/// Outside of an operation in progress the storage is reduced: the most
/// significant word is non-zero and an empty magnitude is never negative.
#[derive(Default, PartialEq, Eq, Hash)]
pub(crate) struct Storage {
    negative: bool,
    data: WordVec,
}

impl Storage {
    #[inline]
    pub(crate) fn new() -> Self {
        Storage::default()
    }

    /// Take ownership of a word buffer, reducing it.
    #[inline]
    pub(crate) fn from_vec(negative: bool, data: WordVec) -> Self {
        let mut storage = Storage { negative, data };
        storage.reduce();
        storage
    }

    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut WordVec {
        &mut self.data
    }

    #[inline]
    pub(crate) fn words(&self) -> &[Word] {
        &self.data
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the words live in a heap buffer rather than inline.
    #[inline]
    pub(crate) fn is_allocated(&self) -> bool {
        self.data.spilled()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.data.capacity()
    }

    #[inline]
    pub(crate) fn is_negative(&self) -> bool {
        self.negative
    }

    /// Set the sign. Zero stays non-negative whatever the request.
    #[inline]
    pub(crate) fn set_negative(&mut self, negative: bool) {
        self.negative = negative && !self.data.is_empty();
    }

    /// Ensure capacity for `len` words, promoting inline storage to the heap
    /// if needed. Words and sign are preserved.
    #[inline]
    pub(crate) fn reserve(&mut self, len: usize) {
        reserve(&mut self.data, len);
    }

    /// Trim high zero words and clear the sign of an empty magnitude.
    #[inline]
    pub(crate) fn reduce(&mut self) {
        while let Some(&0) = self.data.last() {
            self.data.pop();
        }
        if self.data.is_empty() {
            self.negative = false;
        }
    }
}

impl Clone for Storage {
    fn clone(&self) -> Self {
        Storage {
            negative: self.negative,
            data: words_from(&self.data),
        }
    }
}

// TESTS
// -----
