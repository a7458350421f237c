use crate::bit::{BitLength, BitWords, BitWordsMut, Word, word_count};
use crate::error::{Error, Result};
use crate::vec::{BitView, BitViewMut};

/// An owned, fixed-length sequence of bits packed into [`Word`]s.
///
/// A `BitVec` is a single bit-plane: construction fixes its length, and the
/// word buffer is never reallocated afterwards. Bit access goes through the
/// [`Bitwise`](crate::Bitwise) and [`BitwiseMut`](crate::BitwiseMut) traits.
///
/// # Construction
///
/// Constructors replicate a full-width fill pattern across every word, so a
/// sparse pattern such as `1 << k` only populates the lanes of each word it
/// covers; composing multi-word patterns is the caller's job.
///
/// ```
/// use planar::{BitVec, Bitwise};
///
/// let zeros = BitVec::zeros(100).unwrap();
/// assert!(zeros.is_zero());
///
/// // Bit 0 of the first word only; a 100-bit vector spans two words.
/// let unit = BitVec::filled(100, 1).unwrap();
/// assert_eq!(unit.support().collect::<Vec<_>>(), vec![0, 64]);
/// ```
///
/// Zero-length vectors are rejected:
///
/// ```
/// use planar::{BitVec, Error};
///
/// assert_eq!(BitVec::zeros(0).unwrap_err(), Error::InvalidArgument { name: "length" });
/// ```
///
/// # Trailing lanes
///
/// Lanes of the final word beyond `len()` may hold arbitrary values (a fill
/// pattern is replicated full-width). Every read operation masks them out;
/// equality compares meaningful bits only.
#[must_use]
#[derive(Clone, Debug)]
pub struct BitVec {
    pub(crate) words: Vec<Word>,
    pub(crate) bit_length: usize,
}

impl BitVec {
    /// Creates a vector of `length` bits with every word set to `pattern`.
    pub fn filled(length: usize, pattern: Word) -> Result<BitVec> {
        if length == 0 {
            return Err(Error::InvalidArgument { name: "length" });
        }
        Ok(BitVec {
            words: vec![pattern; word_count(length)],
            bit_length: length,
        })
    }

    /// Creates a vector with all bits set to zero.
    pub fn zeros(length: usize) -> Result<BitVec> {
        Self::filled(length, 0)
    }

    /// Creates a vector with all bits set to one.
    pub fn ones(length: usize) -> Result<BitVec> {
        Self::filled(length, Word::MAX)
    }

    /// Creates a vector from a slice of booleans, one bit per element.
    pub fn from_bools(bits: &[bool]) -> Result<BitVec> {
        use crate::bit::BitwiseMut;

        let mut vec = Self::zeros(bits.len())?;
        for (index, bit) in bits.iter().enumerate() {
            vec.assign_index(index, *bit);
        }
        Ok(vec)
    }

    /// Number of meaningful bits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bit_length
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bit_length == 0
    }

    /// The packed storage, trailing lanes included.
    #[must_use]
    pub fn as_words(&self) -> &[Word] {
        &self.words
    }

    /// A non-owning view of this vector.
    pub fn as_view(&self) -> BitView<'_> {
        BitView {
            words: &self.words,
            bit_length: self.bit_length,
        }
    }

    /// A mutable non-owning view of this vector.
    pub fn as_view_mut(&mut self) -> BitViewMut<'_> {
        BitViewMut {
            words: &mut self.words,
            bit_length: self.bit_length,
        }
    }
}

impl BitLength for BitVec {
    fn bit_len(&self) -> usize {
        self.bit_length
    }
}

impl BitWords for BitVec {
    fn words(&self) -> &[Word] {
        &self.words
    }
}

impl BitWordsMut for BitVec {
    fn words_mut(&mut self) -> &mut [Word] {
        &mut self.words
    }
}

impl PartialEq for BitVec {
    fn eq(&self, other: &Self) -> bool {
        self.as_view() == other.as_view()
    }
}

impl Eq for BitVec {}

impl PartialEq<BitView<'_>> for BitVec {
    fn eq(&self, other: &BitView<'_>) -> bool {
        self.as_view() == *other
    }
}

impl PartialEq<BitVec> for BitView<'_> {
    fn eq(&self, other: &BitVec) -> bool {
        *self == other.as_view()
    }
}
