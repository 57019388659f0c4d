use crate::gf::arithmetic::dot_product;
use crate::rijndael::key_schedule::{expand_key, AesKeySchedule, Word, KEY_BITS as AES_KEY_BITS, NR};
use crate::rijndael::sbox::{substitute, INV_S_BOX, S_BOX};
use symmetric_cipher::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use symmetric_cipher::crypto::error::Result;
use symmetric_cipher::crypto::utils::to_block;

pub const BLOCK_SIZE: usize = 16;

/// Column-major 4x4 byte matrix: `state[column][row]`, each column one word.
pub type State = [[u8; 4]; 4];

pub const MIX_COLUMN_MATRIX: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

pub const INV_MIX_COLUMN_MATRIX: [[u8; 4]; 4] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

/// Row `r` is rotated by `ROW_SHIFTS[r]` positions.
pub const ROW_SHIFTS: [usize; 4] = [0, 1, 2, 3];

pub fn block_to_state(block: &[u8; BLOCK_SIZE]) -> State {
    std::array::from_fn(|c| std::array::from_fn(|r| block[c * 4 + r]))
}

pub fn state_to_block(state: &State) -> [u8; BLOCK_SIZE] {
    std::array::from_fn(|i| state[i / 4][i % 4])
}

pub fn add_round_key(state: &mut State, round_key: &[Word]) {
    for (column, word) in state.iter_mut().zip(round_key) {
        for (byte, key_byte) in column.iter_mut().zip(word) {
            *byte ^= key_byte;
        }
    }
}

pub fn sub_bytes(state: &mut State, table: &[[u8; 16]; 16]) {
    for byte in state.iter_mut().flatten() {
        *byte = substitute(*byte, table);
    }
}

pub fn shift_rows(state: &mut State) {
    rotate_rows(state, |row, shift| row.rotate_left(shift));
}

pub fn inv_shift_rows(state: &mut State) {
    rotate_rows(state, |row, shift| row.rotate_right(shift));
}

fn rotate_rows(state: &mut State, rotate: impl Fn(&mut [u8; 4], usize)) {
    for (r, &shift) in ROW_SHIFTS.iter().enumerate() {
        let mut row: [u8; 4] = std::array::from_fn(|c| state[c][r]);
        rotate(&mut row, shift);
        for (column, byte) in state.iter_mut().zip(row) {
            column[r] = byte;
        }
    }
}

/// Replaces every column with its product by `matrix`.
pub fn mix_columns(state: &mut State, matrix: &[[u8; 4]; 4]) {
    for column in state.iter_mut() {
        let input = *column;
        *column = std::array::from_fn(|i| dot_product(&matrix[i], &input));
    }
}

pub fn encrypt_block(block: &[u8; BLOCK_SIZE], round_keys: &AesKeySchedule) -> [u8; BLOCK_SIZE] {
    let mut state = block_to_state(block);

    add_round_key(&mut state, round_keys.round_key(0));
    for round in 1..NR {
        sub_bytes(&mut state, &S_BOX);
        shift_rows(&mut state);
        mix_columns(&mut state, &MIX_COLUMN_MATRIX);
        add_round_key(&mut state, round_keys.round_key(round));
    }
    sub_bytes(&mut state, &S_BOX);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.round_key(NR));

    state_to_block(&state)
}

/// Inverse cipher. InvMixColumns follows AddRoundKey inside each round, so the round keys
/// are used exactly as the schedule produced them.
pub fn decrypt_block(block: &[u8; BLOCK_SIZE], round_keys: &AesKeySchedule) -> [u8; BLOCK_SIZE] {
    let mut state = block_to_state(block);

    add_round_key(&mut state, round_keys.round_key(NR));
    for round in (1..NR).rev() {
        inv_shift_rows(&mut state);
        sub_bytes(&mut state, &INV_S_BOX);
        add_round_key(&mut state, round_keys.round_key(round));
        mix_columns(&mut state, &INV_MIX_COLUMN_MATRIX);
    }
    inv_shift_rows(&mut state);
    sub_bytes(&mut state, &INV_S_BOX);
    add_round_key(&mut state, round_keys.round_key(0));

    state_to_block(&state)
}

/// AES-128: 16-byte blocks, 16-byte key, 10 rounds.
pub struct Rijndael {
    round_keys: AesKeySchedule,
}

impl Rijndael {
    pub fn round_keys(&self) -> &AesKeySchedule {
        &self.round_keys
    }

    pub fn encrypt(&self, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        encrypt_block(block, &self.round_keys)
    }

    pub fn decrypt(&self, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        decrypt_block(block, &self.round_keys)
    }
}

impl SymmetricCipher for Rijndael {
    const KEY_BITS: usize = AES_KEY_BITS;

    fn new(key: &[u8]) -> Result<Self> {
        Ok(Self {
            round_keys: expand_key(key)?,
        })
    }
}

impl CipherAlgorithm for Rijndael {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        Ok(self.encrypt(&to_block(block)?).to_vec())
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        Ok(self.decrypt(&to_block(block)?).to_vec())
    }
}
