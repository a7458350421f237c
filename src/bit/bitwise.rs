use sorted_iter::assume::AssumeSortedByItemExt;

use crate::bit::word::{BitAddress, WORD_BIT_LEN, Word, tail_mask};

pub trait BitLength {
    fn bit_len(&self) -> usize;
}

/// The storage seam: any fixed-length run of bits packed into words.
///
/// Lanes of the final word beyond [`BitLength::bit_len`] may hold arbitrary
/// values; the blanket [`Bitwise`] implementation masks them out of every
/// read, so they are never observable.
pub trait BitWords: BitLength {
    fn words(&self) -> &[Word];
}

pub trait BitWordsMut: BitWords {
    fn words_mut(&mut self) -> &mut [Word];
}

/// Read-only bit operations. See also [`BitwiseMut`].
pub trait Bitwise: BitLength {
    fn index(&self, index: usize) -> bool;

    fn iter_bits(&self) -> impl Iterator<Item = bool> {
        (0..self.bit_len()).map(|index| self.index(index))
    }

    fn support(&self) -> impl sorted_iter::SortedIterator<Item = usize> {
        (0..self.bit_len())
            .filter(|index| self.index(*index))
            .assume_sorted_by_item()
    }

    #[inline]
    fn weight(&self) -> usize {
        self.support().count()
    }

    #[inline]
    fn parity(&self) -> bool {
        (self.weight() % 2) == 1
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.weight() == 0
    }
}

/// Mutable bit operations. See also [`Bitwise`].
pub trait BitwiseMut: Bitwise {
    fn assign_index(&mut self, index: usize, to: bool);
    fn negate_index(&mut self, index: usize);

    /// Overwrite every storage word with `pattern`, trailing lanes included.
    fn fill(&mut self, pattern: Word);

    #[inline]
    fn clear_bits(&mut self) {
        self.fill(0);
    }

    fn assign_random(&mut self, bit_count: usize, random_number_generator: &mut impl rand::Rng) {
        for index in 0..bit_count {
            self.assign_index(index, random_number_generator.r#gen());
        }
    }
}

impl<Bits> Bitwise for Bits
where
    Bits: BitWords + ?Sized,
{
    #[inline]
    fn index(&self, index: usize) -> bool {
        let address = BitAddress::for_index(index);
        (self.words()[address.word_index] & address.mask) != 0
    }

    fn weight(&self) -> usize {
        let words = self.words();
        let whole = self.bit_len() / WORD_BIT_LEN;
        let mut total: usize = words[..whole].iter().map(|word| word.count_ones() as usize).sum();
        let partial = self.bit_len() % WORD_BIT_LEN;
        if partial != 0 {
            total += (words[whole] & tail_mask(partial)).count_ones() as usize;
        }
        total
    }
}

impl<Bits> BitwiseMut for Bits
where
    Bits: BitWordsMut + ?Sized,
{
    #[inline]
    fn assign_index(&mut self, index: usize, to: bool) {
        let address = BitAddress::for_index(index);
        let word = &mut self.words_mut()[address.word_index];
        if to {
            *word |= address.mask;
        } else {
            *word &= !address.mask;
        }
    }

    #[inline]
    fn negate_index(&mut self, index: usize) {
        let address = BitAddress::for_index(index);
        self.words_mut()[address.word_index] ^= address.mask;
    }

    fn fill(&mut self, pattern: Word) {
        self.words_mut().fill(pattern);
    }
}

impl BitLength for [Word] {
    fn bit_len(&self) -> usize {
        self.len() * WORD_BIT_LEN
    }
}

impl BitWords for [Word] {
    fn words(&self) -> &[Word] {
        self
    }
}

impl BitWordsMut for [Word] {
    fn words_mut(&mut self) -> &mut [Word] {
        self
    }
}
