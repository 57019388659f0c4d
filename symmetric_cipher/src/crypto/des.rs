use crate::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use crate::crypto::des_key_expansion::{DES_KEY_BITS, DES_ROUNDS, DesKeyExpansion, DesKeySchedule};
use crate::crypto::des_tables::{FP, IP};
use crate::crypto::des_transformation::DesTransformation;
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::Result;
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::permutation::{permute_bits, TABLE_BIAS};
use crate::crypto::utils::{bits_to_bytes, bytes_to_bits, to_block};
use bitvec::prelude::BitSlice;
use std::sync::Arc;

pub const DES_BLOCK_SIZE: usize = 8;

pub struct DES {
    feistel_network: FeistelNetwork,
    round_keys: DesKeySchedule,
}

impl DES {
    pub fn with_transformation(
        key: &[u8],
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Result<Self> {
        Ok(DES {
            feistel_network: FeistelNetwork::new(DES_ROUNDS, transformation),
            round_keys: DesKeyExpansion.generate_round_keys(key)?,
        })
    }

    pub fn round_keys(&self) -> &DesKeySchedule {
        &self.round_keys
    }

    pub fn encrypt(&self, block: &[u8; DES_BLOCK_SIZE]) -> [u8; DES_BLOCK_SIZE] {
        let permuted = permute_bits(&bytes_to_bits(block), &IP, TABLE_BIAS);
        let result = self
            .feistel_network
            .encrypt_with_round_keys(&permuted, self.round_keys.subkeys());
        Self::finish(&result)
    }

    pub fn decrypt(&self, block: &[u8; DES_BLOCK_SIZE]) -> [u8; DES_BLOCK_SIZE] {
        let permuted = permute_bits(&bytes_to_bits(block), &IP, TABLE_BIAS);
        let result = self
            .feistel_network
            .decrypt_with_round_keys(&permuted, self.round_keys.subkeys());
        Self::finish(&result)
    }

    fn finish(preoutput: &BitSlice) -> [u8; DES_BLOCK_SIZE] {
        let output = bits_to_bytes(&permute_bits(preoutput, &FP, TABLE_BIAS));
        let mut block = [0u8; DES_BLOCK_SIZE];
        block.copy_from_slice(&output);
        block
    }
}

impl SymmetricCipher for DES {
    const KEY_BITS: usize = DES_KEY_BITS;

    fn new(key: &[u8]) -> Result<Self> {
        DES::with_transformation(key, Arc::new(DesTransformation::standard()))
    }
}

impl CipherAlgorithm for DES {
    fn block_size(&self) -> usize {
        DES_BLOCK_SIZE
    }

    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        Ok(self.encrypt(&to_block(block)?).to_vec())
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        Ok(self.decrypt(&to_block(block)?).to_vec())
    }
}
