pub type Word = u64;

/// Number of bits in a [`Word`].
pub const WORD_BIT_LEN: usize = Word::BITS as usize;

/// Number of words needed to hold `bit_length` bits.
#[must_use]
pub fn word_count(bit_length: usize) -> usize {
    bit_length.div_ceil(WORD_BIT_LEN)
}

/// Mask selecting the low `bits` lanes of a word, `0 < bits < WORD_BIT_LEN`.
#[must_use]
pub fn tail_mask(bits: usize) -> Word {
    debug_assert!(0 < bits && bits < WORD_BIT_LEN);
    (1 << bits) - 1
}

/// Word index and single-bit mask addressing one bit of a packed word slice.
///
/// `WORD_BIT_LEN` is a power of two, so the division and remainder below
/// compile to a shift and a mask.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitAddress {
    pub word_index: usize,
    pub mask: Word,
}

impl BitAddress {
    #[inline]
    pub fn for_index(index: usize) -> Self {
        Self {
            word_index: index / WORD_BIT_LEN,
            mask: 1 << (index % WORD_BIT_LEN),
        }
    }
}
