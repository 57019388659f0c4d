//! Block-cipher engine: DES (Feistel network) and AES-128 (substitution-permutation
//! network) over independent fixed-size blocks.
//!
//! The string entry points take already validated hex keys and report problems as
//! [`CipherError`]. Block-level machinery lives in the `symmetric_cipher` and `rijndael`
//! crates.

pub mod config;
pub mod driver;

pub use config::EngineConfig;
pub use driver::{
    feistel_decrypt, feistel_decrypt_with_config, feistel_encrypt, feistel_encrypt_with_config,
    spn_decrypt, spn_decrypt_bytes, spn_decrypt_bytes_with_config, spn_decrypt_with_config,
    spn_encrypt, spn_encrypt_bytes, spn_encrypt_bytes_with_config, spn_encrypt_with_config,
};
pub use symmetric_cipher::{CipherError, Result};
