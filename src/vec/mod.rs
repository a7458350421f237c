mod bitvec;
mod view;

pub use bitvec::BitVec;
pub use view::{BitView, BitViewMut};
