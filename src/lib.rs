pub mod bit;
pub use bit::{BitLength, BitWords, BitWordsMut, Bitwise, BitwiseMut, WORD_BIT_LEN, Word};

pub mod error;
pub use error::{Error, Result};

pub mod vec;
pub use vec::{BitVec, BitView, BitViewMut};

pub mod matrix;
pub use matrix::{BitSliceMatrix, RowValues};
