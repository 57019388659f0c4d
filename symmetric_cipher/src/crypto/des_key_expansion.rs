use crate::crypto::des_tables::{PC1, PC2, SHIFT_BITS};
use crate::crypto::error::{CipherError, Result};
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::permutation::{permute_bits, TABLE_BIAS};
use crate::crypto::utils::{bits_to_bytes, bytes_to_bits, insert_filler_bits};
use bitvec::prelude::{BitSlice, BitVec};
use log::debug;

pub const DES_ROUNDS: usize = 16;
pub const DES_KEY_BITS: usize = 56;

const HALF_BITS: usize = 28;
const FILLER_GROUP: usize = 7;
// Sits where a parity bit would be; PC-1 never reads it.
const FILLER_BIT: bool = false;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesKeySchedule {
    subkeys: [BitVec; DES_ROUNDS],
}

impl DesKeySchedule {
    /// Subkeys in encryption order.
    pub fn subkeys(&self) -> &[BitVec] {
        &self.subkeys
    }

    pub fn subkey(&self, round: usize) -> &BitSlice {
        &self.subkeys[round]
    }

    pub fn subkey_bytes(&self, round: usize) -> Vec<u8> {
        bits_to_bytes(&self.subkeys[round])
    }
}

pub struct DesKeyExpansion;

impl DesKeyExpansion {
    /// Widens a key to the 64-bit form PC-1 expects.
    ///
    /// A 7-byte key gets a filler bit after every 7 bits. An 8-byte key is taken as is,
    /// its every 8th bit is ignored by PC-1 anyway.
    pub fn widen_key(key: &[u8]) -> Result<BitVec> {
        match key.len() {
            7 => Ok(insert_filler_bits(
                &bytes_to_bits(key),
                FILLER_GROUP,
                FILLER_BIT,
            )),
            8 => Ok(bytes_to_bits(key)),
            other => Err(CipherError::InvalidKeyLength {
                expected_bits: DES_KEY_BITS,
                actual_bits: other * 8,
            }),
        }
    }

    pub fn schedule_from_bits(key: &BitSlice) -> DesKeySchedule {
        assert_eq!(key.len(), 64, "PC-1 operates on a 64-bit key");

        let permuted = permute_bits(key, &PC1, TABLE_BIAS);
        let (c, d) = permuted.split_at(HALF_BITS);

        let subkeys = std::array::from_fn(|round| {
            let shift = SHIFT_BITS[..=round].iter().sum::<usize>() % HALF_BITS;

            let mut cd = BitVec::with_capacity(2 * HALF_BITS);
            cd.extend_from_bitslice(c);
            cd[..HALF_BITS].rotate_left(shift);
            cd.extend_from_bitslice(d);
            cd[HALF_BITS..].rotate_left(shift);

            permute_bits(&cd, &PC2, TABLE_BIAS)
        });

        DesKeySchedule { subkeys }
    }
}

impl KeyExpansion for DesKeyExpansion {
    type Schedule = DesKeySchedule;

    fn generate_round_keys(&self, key: &[u8]) -> Result<DesKeySchedule> {
        let wide = Self::widen_key(key)?;
        let schedule = Self::schedule_from_bits(&wide);
        debug!("derived {DES_ROUNDS} DES subkeys from a {}-byte key", key.len());
        Ok(schedule)
    }
}
