mod bitslice;
mod row_major;

pub use bitslice::BitSliceMatrix;
pub use row_major::RowValues;
