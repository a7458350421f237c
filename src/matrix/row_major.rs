use std::fmt;
use std::ops::Index;

use derive_more::{From, Into};

use crate::bit::{BitAddress, WORD_BIT_LEN};
use crate::matrix::BitSliceMatrix;

/// The row-major readout of a [`BitSliceMatrix`]: one integer per row.
///
/// This is the transposed, diagnostic-friendly form of the matrix; building
/// it copies, unlike the zero-copy plane views.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, From, Into)]
pub struct RowValues(Vec<u64>);

impl RowValues {
    #[must_use]
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Index<usize> for RowValues {
    type Output = u64;

    fn index(&self, row: usize) -> &u64 {
        &self.0[row]
    }
}

impl BitSliceMatrix {
    /// Reads row `row`'s counter by gathering its bit from every plane.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds or the matrix has more than 64
    /// columns.
    #[must_use]
    pub fn row_value(&self, row: usize) -> u64 {
        assert!(row < self.row_count, "row {row} out of bounds for {} rows", self.row_count);
        assert!(
            self.column_count <= u64::BITS as usize,
            "row readout supports at most 64 columns, matrix has {}",
            self.column_count
        );
        let address = BitAddress::for_index(row);
        let mut value = 0u64;
        for column in 0..self.column_count {
            if (self.words[column * self.words_per_column + address.word_index] & address.mask) != 0 {
                value |= 1 << column;
            }
        }
        value
    }

    /// Transposes the whole matrix into per-row integers, walking each word
    /// slot once per plane rather than re-deriving the address per bit.
    ///
    /// # Panics
    ///
    /// Panics if the matrix has more than 64 columns.
    pub fn row_values(&self) -> RowValues {
        assert!(
            self.column_count <= u64::BITS as usize,
            "row readout supports at most 64 columns, matrix has {}",
            self.column_count
        );
        let mut values = vec![0u64; self.row_count];
        for slot in 0..self.words_per_column {
            for lane in 0..WORD_BIT_LEN {
                let row = slot * WORD_BIT_LEN + lane;
                if row >= self.row_count {
                    break;
                }
                let row_mask = 1 << lane;
                let mut value = 0u64;
                for (column, plane) in self.words.chunks_exact(self.words_per_column).enumerate() {
                    if (plane[slot] & row_mask) != 0 {
                        value |= 1 << column;
                    }
                }
                values[row] = value;
            }
        }
        values.into()
    }
}

/// One line per row: the row index, the row's bits from plane 0 upward, and
/// (when the counters fit in 64 bits) the decimal value.
impl fmt::Display for BitSliceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = (self.column_count <= u64::BITS as usize).then(|| self.row_values());
        for row in 0..self.row_count {
            write!(f, "{row:4}: ")?;
            for column in 0..self.column_count {
                write!(f, "{}", u8::from(self.get((row, column))))?;
            }
            if let Some(values) = &values {
                write!(f, " ({})", values[row])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
