use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::Aes128;
use hex_literal::hex;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rijndael::rijndael::cipher::{
    block_to_state, inv_shift_rows, mix_columns, shift_rows, state_to_block, BLOCK_SIZE,
    INV_MIX_COLUMN_MATRIX, MIX_COLUMN_MATRIX,
};
use rijndael::Rijndael;
use symmetric_cipher::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use symmetric_cipher::crypto::error::CipherError;

#[test]
fn test_aes128_appendix_c_vector() {
    let cipher = Rijndael::new(&hex!("000102030405060708090a0b0c0d0e0f")).unwrap();
    let plaintext = hex!("00112233445566778899aabbccddeeff");

    let ciphertext = cipher.encrypt(&plaintext);
    assert_eq!(ciphertext, hex!("69c4e0d86a7b0430d8cdb78070b4c55a"));
    assert_eq!(cipher.decrypt(&ciphertext), plaintext);
}

#[test]
fn test_aes128_appendix_b_vector() {
    let cipher = Rijndael::new(&hex!("2b7e151628aed2a6abf7158809cf4f3c")).unwrap();
    let plaintext = hex!("3243f6a8885a308d313198a2e0370734");

    let ciphertext = cipher.encrypt(&plaintext);
    assert_eq!(ciphertext, hex!("3925841d02dc09fbdc118597196a0b32"));
    assert_eq!(cipher.decrypt(&ciphertext), plaintext);
}

#[test]
fn test_matches_reference_implementation() {
    let mut rng = StdRng::seed_from_u64(0xdead_beef);

    for _ in 0..64 {
        let mut key = [0u8; 16];
        let mut block = [0u8; BLOCK_SIZE];
        rng.fill_bytes(&mut key);
        rng.fill_bytes(&mut block);

        let reference = Aes128::new(GenericArray::from_slice(&key));
        let mut expected = GenericArray::clone_from_slice(&block);
        reference.encrypt_block(&mut expected);

        let cipher = Rijndael::new(&key).unwrap();
        let ciphertext = cipher.encrypt(&block);
        assert_eq!(ciphertext.as_slice(), expected.as_slice());
        assert_eq!(cipher.decrypt(&ciphertext), block, "random encrypt/decrypt failed");
    }
}

#[test]
fn test_shift_rows_rotates_row_r_by_r() {
    let block: [u8; 16] = std::array::from_fn(|i| i as u8);
    let mut state = block_to_state(&block);

    shift_rows(&mut state);
    assert_eq!(
        state_to_block(&state),
        [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11]
    );

    inv_shift_rows(&mut state);
    assert_eq!(state_to_block(&state), block);
}

#[test]
fn test_mix_columns_example_and_inverse() {
    let mut state = block_to_state(&hex!("db135345 f20a225c 01010101 c6c6c6c6"));
    mix_columns(&mut state, &MIX_COLUMN_MATRIX);
    assert_eq!(
        state_to_block(&state),
        hex!("8e4da1bc 9fdc589d 01010101 c6c6c6c6")
    );

    mix_columns(&mut state, &INV_MIX_COLUMN_MATRIX);
    assert_eq!(
        state_to_block(&state),
        hex!("db135345 f20a225c 01010101 c6c6c6c6")
    );
}

#[test]
fn test_block_api() {
    let cipher = Rijndael::new(&[0u8; 16]).unwrap();
    assert_eq!(cipher.block_size(), 16);
    assert_eq!(
        cipher.encrypt_block(&[0u8; 15]).unwrap_err(),
        CipherError::MalformedBlock {
            expected: 16,
            actual: 15
        }
    );

    let encrypted = cipher.encrypt_block(&[7u8; 16]).unwrap();
    assert_eq!(cipher.decrypt_block(&encrypted).unwrap(), vec![7u8; 16]);
}

#[test]
fn test_rejects_short_key() {
    assert!(matches!(
        Rijndael::new(&[0u8; 8]),
        Err(CipherError::InvalidKeyLength {
            expected_bits: 128,
            actual_bits: 64
        })
    ));
}
