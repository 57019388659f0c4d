use crate::config::EngineConfig;
use log::debug;
use rijndael::Rijndael;
use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::cipher_traits::SymmetricCipher;
use symmetric_cipher::crypto::cipher_types::ContextConfig;
use symmetric_cipher::crypto::des::DES;
use symmetric_cipher::crypto::error::{CipherError, Result};
use symmetric_cipher::crypto::utils::{
    bytes_to_hex, bytes_to_spaced_hex, bytes_to_text, hex_to_bytes, normalize_hex, text_to_bytes,
};

/// Decodes a hex key that must carry exactly `expected_bits`.
fn decode_key(key_hex: &str, expected_bits: usize) -> Result<Vec<u8>> {
    let digits = normalize_hex(key_hex)?;
    let actual_bits = digits.len() * 4;
    if actual_bits != expected_bits {
        return Err(CipherError::InvalidKeyLength {
            expected_bits,
            actual_bits,
        });
    }
    hex_to_bytes(&digits)
}

/// Builds the cipher once; its key schedule serves every block of the call.
fn context<C>(key_hex: &str, config: ContextConfig) -> Result<CipherContext>
where
    C: SymmetricCipher + Send + Sync + 'static,
{
    let key = decode_key(key_hex, C::KEY_BITS)?;
    Ok(CipherContext::new(Box::new(C::new(&key)?), config))
}

/// Encrypts ASCII `plaintext` with DES under a 14-digit hex key, returns contiguous hex.
pub fn feistel_encrypt(plaintext: &str, key_hex: &str) -> Result<String> {
    feistel_encrypt_with_config(plaintext, key_hex, &EngineConfig::default())
}

pub fn feistel_encrypt_with_config(
    plaintext: &str,
    key_hex: &str,
    config: &EngineConfig,
) -> Result<String> {
    let data = text_to_bytes(plaintext)?;
    let ctx = context::<DES>(key_hex, config.feistel)?;
    debug!("feistel encrypt: {} bytes", data.len());
    Ok(bytes_to_hex(&ctx.encrypt(&data)?))
}

/// Reverses [`feistel_encrypt`]; trailing pad units of the final block are dropped.
///
/// Decrypted bytes must be ASCII. A wrong key usually yields non-ASCII output, reported as
/// [`CipherError::InvalidCharacter`] at its position in the decrypted text rather than returned
/// as raw characters.
pub fn feistel_decrypt(ciphertext_hex: &str, key_hex: &str) -> Result<String> {
    feistel_decrypt_with_config(ciphertext_hex, key_hex, &EngineConfig::default())
}

pub fn feistel_decrypt_with_config(
    ciphertext_hex: &str,
    key_hex: &str,
    config: &EngineConfig,
) -> Result<String> {
    let data = hex_to_bytes(ciphertext_hex)?;
    let ctx = context::<DES>(key_hex, config.feistel)?;
    debug!("feistel decrypt: {} bytes", data.len());
    bytes_to_text(&ctx.decrypt(&data)?)
}

/// Encrypts hex `plaintext` (spaces allowed) with AES-128 under a 32-digit hex key.
/// The result is space-delimited uppercase hex bytes.
pub fn spn_encrypt(plaintext_hex: &str, key_hex: &str) -> Result<String> {
    spn_encrypt_with_config(plaintext_hex, key_hex, &EngineConfig::default())
}

pub fn spn_encrypt_with_config(
    plaintext_hex: &str,
    key_hex: &str,
    config: &EngineConfig,
) -> Result<String> {
    let data = hex_to_bytes(plaintext_hex)?;
    let ciphertext = spn_encrypt_bytes_with_config(&data, key_hex, config)?;
    Ok(bytes_to_spaced_hex(&ciphertext))
}

pub fn spn_decrypt(ciphertext_hex: &str, key_hex: &str) -> Result<String> {
    spn_decrypt_with_config(ciphertext_hex, key_hex, &EngineConfig::default())
}

pub fn spn_decrypt_with_config(
    ciphertext_hex: &str,
    key_hex: &str,
    config: &EngineConfig,
) -> Result<String> {
    let data = hex_to_bytes(ciphertext_hex)?;
    let plaintext = spn_decrypt_bytes_with_config(&data, key_hex, config)?;
    Ok(bytes_to_spaced_hex(&plaintext))
}

pub fn spn_encrypt_bytes(plaintext: &[u8], key_hex: &str) -> Result<Vec<u8>> {
    spn_encrypt_bytes_with_config(plaintext, key_hex, &EngineConfig::default())
}

pub fn spn_decrypt_bytes(ciphertext: &[u8], key_hex: &str) -> Result<Vec<u8>> {
    spn_decrypt_bytes_with_config(ciphertext, key_hex, &EngineConfig::default())
}

pub fn spn_encrypt_bytes_with_config(
    plaintext: &[u8],
    key_hex: &str,
    config: &EngineConfig,
) -> Result<Vec<u8>> {
    let ctx = context::<Rijndael>(key_hex, config.spn)?;
    debug!("spn encrypt: {} bytes", plaintext.len());
    ctx.encrypt(plaintext)
}

pub fn spn_decrypt_bytes_with_config(
    ciphertext: &[u8],
    key_hex: &str,
    config: &EngineConfig,
) -> Result<Vec<u8>> {
    let ctx = context::<Rijndael>(key_hex, config.spn)?;
    debug!("spn decrypt: {} bytes", ciphertext.len());
    ctx.decrypt(ciphertext)
}

