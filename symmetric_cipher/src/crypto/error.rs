use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    #[error("key must be {expected_bits} bits long, got {actual_bits}")]
    InvalidKeyLength {
        expected_bits: usize,
        actual_bits: usize,
    },

    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("hex input has an odd number of digits ({digits})")]
    OddHexLength { digits: usize },

    #[error("malformed block: expected a multiple of {expected} bytes, got {actual}")]
    MalformedBlock { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, CipherError>;
