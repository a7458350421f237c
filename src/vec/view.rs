use crate::bit::{BitLength, BitWords, BitWordsMut, WORD_BIT_LEN, Word, tail_mask, word_count};
use crate::vec::BitVec;

/// A non-owning view of packed bits, typically one matrix column.
///
/// A view borrows its word slice from the owner (a [`BitVec`] or a
/// [`BitSliceMatrix`](crate::BitSliceMatrix) column), so its lifetime is
/// bounded by that owner and no copy is made.
#[must_use]
#[derive(Clone, Debug)]
pub struct BitView<'life> {
    pub(crate) words: &'life [Word],
    pub(crate) bit_length: usize,
}

/// The mutable counterpart of [`BitView`]; writes land in the owner's storage.
#[must_use]
#[derive(Debug)]
pub struct BitViewMut<'life> {
    pub(crate) words: &'life mut [Word],
    pub(crate) bit_length: usize,
}

impl<'life> BitView<'life> {
    /// Wraps a word slice as a view of `bit_length` bits.
    ///
    /// # Panics
    ///
    /// Panics if `words` is not exactly `word_count(bit_length)` long.
    pub fn new(words: &'life [Word], bit_length: usize) -> Self {
        assert_eq!(words.len(), word_count(bit_length));
        Self { words, bit_length }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bit_length
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bit_length == 0
    }

    /// Materializes the viewed bits into an owned [`BitVec`].
    pub fn copied(&self) -> BitVec {
        BitVec {
            words: self.words.to_vec(),
            bit_length: self.bit_length,
        }
    }
}

impl<'life> BitViewMut<'life> {
    /// Wraps a mutable word slice as a view of `bit_length` bits.
    ///
    /// # Panics
    ///
    /// Panics if `words` is not exactly `word_count(bit_length)` long.
    pub fn new(words: &'life mut [Word], bit_length: usize) -> Self {
        assert_eq!(words.len(), word_count(bit_length));
        Self { words, bit_length }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bit_length
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bit_length == 0
    }

    pub fn copied(&self) -> BitVec {
        BitVec {
            words: self.words.to_vec(),
            bit_length: self.bit_length,
        }
    }

    /// Reborrows as a read-only view.
    pub fn as_view(&self) -> BitView<'_> {
        BitView {
            words: &*self.words,
            bit_length: self.bit_length,
        }
    }
}

impl BitLength for BitView<'_> {
    fn bit_len(&self) -> usize {
        self.bit_length
    }
}

impl BitWords for BitView<'_> {
    fn words(&self) -> &[Word] {
        self.words
    }
}

impl BitLength for BitViewMut<'_> {
    fn bit_len(&self) -> usize {
        self.bit_length
    }
}

impl BitWords for BitViewMut<'_> {
    fn words(&self) -> &[Word] {
        &*self.words
    }
}

impl BitWordsMut for BitViewMut<'_> {
    fn words_mut(&mut self) -> &mut [Word] {
        &mut *self.words
    }
}

/// Word-wise equality over the first `bit_length` bits, trailing lanes masked.
fn truncated_eq(left: &[Word], right: &[Word], bit_length: usize) -> bool {
    let whole = bit_length / WORD_BIT_LEN;
    if left[..whole] != right[..whole] {
        return false;
    }
    let partial = bit_length % WORD_BIT_LEN;
    partial == 0 || ((left[whole] ^ right[whole]) & tail_mask(partial)) == 0
}

impl PartialEq for BitView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.bit_length == other.bit_length && truncated_eq(self.words, other.words, self.bit_length)
    }
}

impl Eq for BitView<'_> {}

impl PartialEq for BitViewMut<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.bit_length == other.bit_length && truncated_eq(self.words, other.words, self.bit_length)
    }
}

impl Eq for BitViewMut<'_> {}
