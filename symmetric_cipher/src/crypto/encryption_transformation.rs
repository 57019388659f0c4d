use bitvec::prelude::{BitSlice, BitVec};

/// Round function `F` of a Feistel network: maps a half block and a round key to a value
/// of the half block's width.
pub trait EncryptionTransformation {
    fn transform(&self, half_block: &BitSlice, round_key: &BitSlice) -> BitVec;
}
