use crate::crypto::des_tables::{E, P, S_BOXES};
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::permutation::{permute_bits, TABLE_BIAS};
use crate::crypto::utils::xor_bits;
use bitvec::prelude::{BitSlice, BitVec};

const S_BOX_INPUT_BITS: usize = 6;
const S_BOX_OUTPUT_BITS: usize = 4;

/// The DES round function, bound to the tables it is built from.
#[derive(Debug, Clone, Copy)]
pub struct DesTransformation {
    expansion: &'static [usize],
    s_boxes: &'static [[[u8; 16]; 4]],
    permutation: &'static [usize],
}

impl DesTransformation {
    pub const fn new(
        expansion: &'static [usize],
        s_boxes: &'static [[[u8; 16]; 4]],
        permutation: &'static [usize],
    ) -> Self {
        Self {
            expansion,
            s_boxes,
            permutation,
        }
    }

    pub const fn standard() -> Self {
        Self::new(&E, &S_BOXES, &P)
    }

    fn substitute(&self, mixed: &BitSlice) -> BitVec {
        debug_assert_eq!(mixed.len(), self.s_boxes.len() * S_BOX_INPUT_BITS);

        let mut output = BitVec::with_capacity(self.s_boxes.len() * S_BOX_OUTPUT_BITS);
        for (s_box, group) in self.s_boxes.iter().zip(mixed.chunks(S_BOX_INPUT_BITS)) {
            let row = (usize::from(group[0]) << 1) | usize::from(group[S_BOX_INPUT_BITS - 1]);
            let column = group[1..S_BOX_INPUT_BITS - 1]
                .iter()
                .by_vals()
                .fold(0usize, |acc, bit| (acc << 1) | usize::from(bit));
            let value = s_box[row][column];
            output.extend((0..S_BOX_OUTPUT_BITS).rev().map(|shift| (value >> shift) & 1 == 1));
        }
        output
    }
}

impl Default for DesTransformation {
    fn default() -> Self {
        Self::standard()
    }
}

impl EncryptionTransformation for DesTransformation {
    fn transform(&self, half_block: &BitSlice, round_key: &BitSlice) -> BitVec {
        // 1. Expansion
        let expanded = permute_bits(half_block, self.expansion, TABLE_BIAS);

        // 2. XOR
        let mixed = xor_bits(&expanded, round_key);

        // 3. S-boxes
        let substituted = self.substitute(&mixed);

        // 4. P-permutation
        permute_bits(&substituted, self.permutation, TABLE_BIAS)
    }
}
