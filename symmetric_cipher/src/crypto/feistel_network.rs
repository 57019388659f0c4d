use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::utils::xor_bits;
use bitvec::prelude::{BitSlice, BitVec};
use std::sync::Arc;

pub struct FeistelNetwork {
    num_round: usize,
    transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
}

impl FeistelNetwork {
    pub fn new(
        num_round: usize,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        Self {
            num_round,
            transformation,
        }
    }

    pub fn num_round(&self) -> usize {
        self.num_round
    }

    pub fn encrypt_with_round_keys(&self, block: &BitSlice, round_keys: &[BitVec]) -> BitVec {
        self.run_rounds(block, round_keys.iter().map(BitVec::as_bitslice))
    }

    /// Same rounds as encryption, with the schedule consumed back to front.
    pub fn decrypt_with_round_keys(&self, block: &BitSlice, round_keys: &[BitVec]) -> BitVec {
        self.run_rounds(block, round_keys.iter().rev().map(BitVec::as_bitslice))
    }

    fn run_rounds<'a, I>(&self, block: &BitSlice, round_keys: I) -> BitVec
    where
        I: ExactSizeIterator<Item = &'a BitSlice>,
    {
        assert_eq!(block.len() % 2, 0, "Block size must be even");
        assert_eq!(
            round_keys.len(),
            self.num_round,
            "Feistel network expects one round key per round"
        );

        let (left, right) = block.split_at(block.len() / 2);
        let mut left = left.to_bitvec();
        let mut right = right.to_bitvec();

        // (L, R) -> (R, L ^ F(R, K))
        for round_key in round_keys {
            let feistel_out = self.transformation.transform(&right, round_key);
            let new_right = xor_bits(&left, &feistel_out);
            left = std::mem::replace(&mut right, new_right);
        }

        // The per-round update already swaps, so the halves leave as R ++ L.
        let mut output = right;
        output.extend_from_bitslice(&left);
        output
    }
}
