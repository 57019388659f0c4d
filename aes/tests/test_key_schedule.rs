use hex_literal::hex;
use rijndael::rijndael::key_schedule::{expand_key, AesKeyExpansion, NR, SCHEDULE_WORDS};
use symmetric_cipher::crypto::error::CipherError;
use symmetric_cipher::crypto::key_expansion::KeyExpansion;

const FIPS_KEY: [u8; 16] = hex!("2b7e151628aed2a6abf7158809cf4f3c");

#[test]
fn test_aes128_schedule_length_and_first() {
    let schedule = expand_key(&FIPS_KEY).unwrap();

    assert_eq!(schedule.words().len(), SCHEDULE_WORDS);
    assert_eq!(SCHEDULE_WORDS, 44);
    // The first round key is the key itself
    assert_eq!(schedule.round_key_bytes(0), FIPS_KEY.to_vec());
}

#[test]
fn test_aes128_round1_matches_fips() {
    // FIPS-197, Appendix A.1
    let schedule = expand_key(&FIPS_KEY).unwrap();
    assert_eq!(
        schedule.round_key_bytes(1),
        hex!("a0fafe17 88542cb1 23a33939 2a6c7605").to_vec()
    );
}

#[test]
fn test_aes128_last_round_matches_fips() {
    let schedule = expand_key(&FIPS_KEY).unwrap();
    assert_eq!(
        schedule.round_key_bytes(NR),
        hex!("d014f9a8 c9ee2589 e13f0cc8 b6630ca6").to_vec()
    );
    assert_eq!(schedule.words()[43], hex!("b6630ca6"));
}

#[test]
fn test_round_keys_are_four_words() {
    let schedule = AesKeyExpansion.generate_round_keys(&[0u8; 16]).unwrap();
    for round in 0..=NR {
        assert_eq!(schedule.round_key(round).len(), 4);
        assert_eq!(schedule.round_key_bytes(round).len(), 16);
    }
}

#[test]
fn test_schedule_is_deterministic_and_key_dependent() {
    let mut other_key = FIPS_KEY;
    other_key[15] ^= 1;

    assert_eq!(expand_key(&FIPS_KEY).unwrap(), expand_key(&FIPS_KEY).unwrap());
    assert_ne!(expand_key(&FIPS_KEY).unwrap(), expand_key(&other_key).unwrap());
}

#[test]
fn test_rejects_other_key_sizes() {
    for len in [0usize, 15, 17, 24, 32] {
        assert_eq!(
            expand_key(&vec![0u8; len]).unwrap_err(),
            CipherError::InvalidKeyLength {
                expected_bits: 128,
                actual_bits: len * 8
            }
        );
    }
}
