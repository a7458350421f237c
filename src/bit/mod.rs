pub mod bitwise;
pub mod word;

pub use bitwise::{BitLength, BitWords, BitWordsMut, Bitwise, BitwiseMut};
pub use word::{BitAddress, WORD_BIT_LEN, Word, tail_mask, word_count};
