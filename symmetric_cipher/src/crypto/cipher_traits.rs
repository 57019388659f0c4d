use crate::crypto::error::Result;

/// Single-block transform. Blocks are independent: no chaining state is carried over.
pub trait CipherAlgorithm {
    fn block_size(&self) -> usize;
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>>;
    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>>;
}

pub trait SymmetricCipher: CipherAlgorithm + Sized {
    /// Significant key bits, i.e. what a hex key has to decode to.
    const KEY_BITS: usize;

    fn new(key: &[u8]) -> Result<Self>;
}
