use std::ops::Index;

use crate::bit::{BitAddress, BitWords, WORD_BIT_LEN, Word, tail_mask, word_count};
use crate::error::{Error, Result};
use crate::vec::{BitVec, BitView, BitViewMut};

/// A bit-sliced matrix: `row_count` counters of `column_count` bits each,
/// stored as `column_count` parallel bit-planes.
///
/// Row `i`'s integer has its bit `j` stored in plane `j` (plane 0 is the
/// least significant). The planes live in one contiguous, column-major word
/// buffer, so a whole plane is a plain subslice and can be handed out as a
/// zero-copy [`BitView`]. The buffer is never reallocated after
/// construction; only the single supported bulk mutation,
/// [`increment_rows`](Self::increment_rows), changes row values.
///
/// The payoff of this layout is that adding a 0/1 column into every row's
/// counter costs `O(column_count * words_per_column)` word operations,
/// independent of how many rows are actually selected.
///
/// # Construction
///
/// ```
/// use planar::BitSliceMatrix;
///
/// let matrix = BitSliceMatrix::zeros(40, 15).unwrap();
/// assert_eq!(matrix.shape(), (40, 15));
/// ```
///
/// # Incrementing rows
///
/// ```
/// use planar::{BitSliceMatrix, BitVec};
///
/// let mut matrix = BitSliceMatrix::zeros(40, 15).unwrap();
/// // Select rows 0 and 5.
/// let mask = BitVec::filled(40, (1 << 0) | (1 << 5)).unwrap();
/// for _ in 0..4 {
///     matrix.increment_rows(&mask).unwrap();
/// }
/// assert_eq!(matrix.row_value(0), 4);
/// assert_eq!(matrix.row_value(5), 4);
/// assert_eq!(matrix.row_value(1), 0);
/// ```
#[must_use]
#[derive(Clone, Debug)]
pub struct BitSliceMatrix {
    pub(super) words: Vec<Word>,
    pub(super) row_count: usize,
    pub(super) column_count: usize,
    pub(super) words_per_column: usize,
}

impl BitSliceMatrix {
    /// Creates a matrix with every storage word set to `pattern`.
    ///
    /// The whole buffer is filled in one linear pass; a per-column fill
    /// would be observably equivalent.
    pub fn filled(row_count: usize, column_count: usize, pattern: Word) -> Result<Self> {
        if row_count == 0 {
            return Err(Error::InvalidArgument { name: "row_count" });
        }
        if column_count == 0 {
            return Err(Error::InvalidArgument { name: "column_count" });
        }
        let words_per_column = word_count(row_count);
        Ok(Self {
            words: vec![pattern; column_count * words_per_column],
            row_count,
            column_count,
            words_per_column,
        })
    }

    /// Creates a matrix with all counters zero.
    pub fn zeros(row_count: usize, column_count: usize) -> Result<Self> {
        Self::filled(row_count, column_count, 0)
    }

    /// Creates a matrix with all counters at their maximum, `2^column_count - 1`.
    pub fn ones(row_count: usize, column_count: usize) -> Result<Self> {
        Self::filled(row_count, column_count, Word::MAX)
    }

    /// Overwrites every storage word with `pattern` in place.
    pub fn fill(&mut self, pattern: Word) {
        self.words.fill(pattern);
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count, self.column_count)
    }

    /// Words per bit-plane, `ceil(row_count / 64)`.
    #[must_use]
    pub fn words_per_column(&self) -> usize {
        self.words_per_column
    }

    #[inline]
    fn word_offset(&self, index: (usize, usize)) -> (usize, Word) {
        let (row, column) = index;
        let address = BitAddress::for_index(row);
        (column * self.words_per_column + address.word_index, address.mask)
    }

    /// Gets the bit at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: (usize, usize)) -> bool {
        assert!(
            index.0 < self.row_count && index.1 < self.column_count,
            "index {index:?} out of bounds for shape {:?}",
            self.shape()
        );
        let (offset, mask) = self.word_offset(index);
        (self.words[offset] & mask) != 0
    }

    /// Gets the bit at `(row, column)` without bounds checking.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the index is within bounds.
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: (usize, usize)) -> bool {
        let (offset, mask) = self.word_offset(index);
        (unsafe { *self.words.get_unchecked(offset) } & mask) != 0
    }

    /// Sets the bit at `(row, column)`; all other bits are untouched.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn set(&mut self, index: (usize, usize), to: bool) {
        assert!(
            index.0 < self.row_count && index.1 < self.column_count,
            "index {index:?} out of bounds for shape {:?}",
            self.shape()
        );
        let (offset, mask) = self.word_offset(index);
        if to {
            self.words[offset] |= mask;
        } else {
            self.words[offset] &= !mask;
        }
    }

    /// Sets the bit at `(row, column)` without bounds checking.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the index is within bounds.
    pub unsafe fn set_unchecked(&mut self, index: (usize, usize), to: bool) {
        let (offset, mask) = self.word_offset(index);
        let word = unsafe { self.words.get_unchecked_mut(offset) };
        if to {
            *word |= mask;
        } else {
            *word &= !mask;
        }
    }

    /// Returns a zero-copy view of bit-plane `column`, `row_count` bits long.
    ///
    /// Mutations made through [`column_mut`](Self::column_mut) are visible
    /// through the matrix and vice versa; the borrow checker keeps any view
    /// from outliving the matrix.
    #[must_use]
    pub fn column(&self, column: usize) -> BitView<'_> {
        let start = column * self.words_per_column;
        BitView {
            words: &self.words[start..start + self.words_per_column],
            bit_length: self.row_count,
        }
    }

    /// Returns a mutable zero-copy view of bit-plane `column`.
    #[must_use]
    pub fn column_mut(&mut self, column: usize) -> BitViewMut<'_> {
        let start = column * self.words_per_column;
        BitViewMut {
            words: &mut self.words[start..start + self.words_per_column],
            bit_length: self.row_count,
        }
    }

    /// Iterates over all bit-planes, least significant first.
    #[must_use]
    pub fn columns(&self) -> impl ExactSizeIterator<Item = BitView<'_>> {
        (0..self.column_count).map(|column| self.column(column))
    }

    /// Adds the 0/1 column `mask` into every row's counter.
    ///
    /// Row `i` gains `mask[i]` (0 or 1), with binary carry rippling from
    /// plane 0 upward; a carry out of the last plane is discarded, so a row
    /// at `2^column_count - 1` wraps to zero with no error surfaced. Rows
    /// whose mask bit is clear are untouched.
    ///
    /// Runs word-slot by word-slot: the mask word is the initial carry, and
    /// each plane absorbs it with `carried = plane & carry; plane ^= carry`.
    ///
    /// # Errors
    ///
    /// [`Error::IncompatibleShape`] if `mask.bit_len() != row_count`.
    pub fn increment_rows<Mask>(&mut self, mask: &Mask) -> Result<()>
    where
        Mask: BitWords + ?Sized,
    {
        self.check_mask(mask)?;
        for slot in 0..self.words_per_column {
            let mut carry = mask.words()[slot];
            for column in 0..self.column_count {
                let word = &mut self.words[column * self.words_per_column + slot];
                let carried = *word & carry;
                *word ^= carry;
                carry = carried;
            }
            // Residual carry is the wrap out of the last plane; dropped.
        }
        Ok(())
    }

    /// Like [`increment_rows`](Self::increment_rows), but reports which rows
    /// wrapped: the returned vector has bit `i` set iff row `i`'s counter
    /// overflowed past `2^column_count - 1` during this addition.
    ///
    /// # Errors
    ///
    /// [`Error::IncompatibleShape`] if `mask.bit_len() != row_count`.
    pub fn increment_rows_checked<Mask>(&mut self, mask: &Mask) -> Result<BitVec>
    where
        Mask: BitWords + ?Sized,
    {
        self.check_mask(mask)?;
        let mut wrapped = BitVec {
            words: vec![0; self.words_per_column],
            bit_length: self.row_count,
        };
        for slot in 0..self.words_per_column {
            let mut carry = mask.words()[slot];
            for column in 0..self.column_count {
                let word = &mut self.words[column * self.words_per_column + slot];
                let carried = *word & carry;
                *word ^= carry;
                carry = carried;
            }
            // Lanes past row_count may carry garbage from the mask's tail;
            // mask them so phantom rows are never reported.
            if slot == self.words_per_column - 1 {
                carry &= self.live_lanes_mask();
            }
            wrapped.words[slot] = carry;
        }
        Ok(wrapped)
    }

    fn check_mask<Mask>(&self, mask: &Mask) -> Result<()>
    where
        Mask: BitWords + ?Sized,
    {
        if mask.bit_len() != self.row_count {
            return Err(Error::IncompatibleShape {
                mask_bits: mask.bit_len(),
                row_count: self.row_count,
            });
        }
        Ok(())
    }

    /// Lanes of the final word slot that map to real rows.
    pub(super) fn live_lanes_mask(&self) -> Word {
        let partial = self.row_count % WORD_BIT_LEN;
        if partial == 0 { Word::MAX } else { tail_mask(partial) }
    }
}

impl Index<(usize, usize)> for BitSliceMatrix {
    type Output = bool;

    fn index(&self, index: (usize, usize)) -> &bool {
        if self.get(index) { &true } else { &false }
    }
}

impl PartialEq for BitSliceMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.columns().eq(other.columns())
    }
}

impl Eq for BitSliceMatrix {}
