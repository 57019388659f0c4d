use crate::rijndael::sbox::{substitute, S_BOX};
use log::debug;
use symmetric_cipher::crypto::error::{CipherError, Result};
use symmetric_cipher::crypto::key_expansion::KeyExpansion;

pub type Word = [u8; 4];

/// Words per block.
pub const NB: usize = 4;
/// Words per key.
pub const NK: usize = 4;
/// Rounds for a 128-bit key.
pub const NR: usize = 10;
pub const KEY_BITS: usize = NK * 32;
pub const SCHEDULE_WORDS: usize = NB * (NR + 1);

pub const RCON: [Word; NR] = [
    [0x01, 0x00, 0x00, 0x00],
    [0x02, 0x00, 0x00, 0x00],
    [0x04, 0x00, 0x00, 0x00],
    [0x08, 0x00, 0x00, 0x00],
    [0x10, 0x00, 0x00, 0x00],
    [0x20, 0x00, 0x00, 0x00],
    [0x40, 0x00, 0x00, 0x00],
    [0x80, 0x00, 0x00, 0x00],
    [0x1b, 0x00, 0x00, 0x00],
    [0x36, 0x00, 0x00, 0x00],
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AesKeySchedule {
    words: [Word; SCHEDULE_WORDS],
}

impl AesKeySchedule {
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// The four words mixed in at `round`, `0..=NR`.
    pub fn round_key(&self, round: usize) -> &[Word] {
        &self.words[round * NB..(round + 1) * NB]
    }

    pub fn round_key_bytes(&self, round: usize) -> Vec<u8> {
        self.round_key(round).iter().flatten().copied().collect()
    }
}

fn xor_words(a: &Word, b: &Word) -> Word {
    std::array::from_fn(|i| a[i] ^ b[i])
}

/// Generates all NR + 1 round keys.
pub fn expand_key(key: &[u8]) -> Result<AesKeySchedule> {
    if key.len() * 8 != KEY_BITS {
        return Err(CipherError::InvalidKeyLength {
            expected_bits: KEY_BITS,
            actual_bits: key.len() * 8,
        });
    }

    let mut words = [[0u8; 4]; SCHEDULE_WORDS];
    for (word, bytes) in words.iter_mut().zip(key.chunks_exact(4)) {
        word.copy_from_slice(bytes);
    }

    for i in NK..SCHEDULE_WORDS {
        let mut temp = words[i - 1];
        if i % NK == 0 {
            // RotWord, SubWord, Rcon
            temp.rotate_left(1);
            for byte in temp.iter_mut() {
                *byte = substitute(*byte, &S_BOX);
            }
            temp = xor_words(&temp, &RCON[i / NK - 1]);
        }
        words[i] = xor_words(&temp, &words[i - NK]);
    }

    debug!("expanded AES key into {} round keys", NR + 1);
    Ok(AesKeySchedule { words })
}

pub struct AesKeyExpansion;

impl KeyExpansion for AesKeyExpansion {
    type Schedule = AesKeySchedule;

    fn generate_round_keys(&self, key: &[u8]) -> Result<AesKeySchedule> {
        expand_key(key)
    }
}
