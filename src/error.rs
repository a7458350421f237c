use thiserror::Error;

/// Errors reported by fallible constructors and shape-checked operations.
///
/// Carry overflow during [`increment_rows`](crate::BitSliceMatrix::increment_rows)
/// is not an error: counters wrap modulo `2^column_count` by contract. Passing
/// an out-of-range bit index to an accessor is a programming error and panics
/// rather than surfacing here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A construction count (`length`, `row_count`, `column_count`) was zero.
    #[error("{name} must be nonzero")]
    InvalidArgument { name: &'static str },

    /// The mask handed to a row-increment operation does not have one bit
    /// per matrix row.
    #[error("mask has {mask_bits} bits but the matrix has {row_count} rows")]
    IncompatibleShape { mask_bits: usize, row_count: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
