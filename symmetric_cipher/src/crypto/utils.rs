use crate::crypto::error::{CipherError, Result};
use bitvec::prelude::{BitSlice, BitVec};

pub fn bytes_to_bits(input: &[u8]) -> BitVec {
    let mut bits = BitVec::with_capacity(input.len() * 8);
    for &byte in input {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1 != 0);
        }
    }
    bits
}

pub fn bits_to_bytes(bits: &BitSlice) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(bits.len().div_ceil(8));

    for chunk in bits.chunks(8) {
        let mut byte = 0;
        for (i, bit) in chunk.iter().by_vals().enumerate() {
            if bit {
                byte |= 1 << (7 - i);
            }
        }
        bytes.push(byte);
    }
    bytes
}

pub fn xor_bits(a: &BitSlice, b: &BitSlice) -> BitVec {
    assert_eq!(a.len(), b.len(), "xor operands must have equal bit length");
    a.iter()
        .by_vals()
        .zip(b.iter().by_vals())
        .map(|(x, y)| x ^ y)
        .collect()
}

/// Appends `filler` after every `group` bits, e.g. 56 key bits become 64.
pub fn insert_filler_bits(bits: &BitSlice, group: usize, filler: bool) -> BitVec {
    let mut result = BitVec::with_capacity(bits.len() + bits.len().div_ceil(group));
    for chunk in bits.chunks(group) {
        result.extend_from_bitslice(chunk);
        result.push(filler);
    }
    result
}

/// Splits `sequence` into groups of `chunk_length`.
///
/// With a `pad_unit`, a short trailing group is filled up with copies of it. An input whose
/// length is already a multiple of `chunk_length` is never padded.
pub fn chunk<T: Clone>(sequence: &[T], chunk_length: usize, pad_unit: Option<T>) -> Vec<Vec<T>> {
    assert!(chunk_length > 0, "chunk length must be positive");

    sequence
        .chunks(chunk_length)
        .map(|group| {
            let mut group = group.to_vec();
            if let Some(pad) = &pad_unit {
                group.resize(chunk_length, pad.clone());
            }
            group
        })
        .collect()
}

/// Removes at most `max_units` trailing bytes equal to `pad_unit`, returns how many went.
pub fn strip_trailing_pad(data: &mut Vec<u8>, pad_unit: u8, max_units: usize) -> usize {
    let removable = data
        .iter()
        .rev()
        .take(max_units)
        .take_while(|&&byte| byte == pad_unit)
        .count();
    data.truncate(data.len() - removable);
    removable
}

pub fn to_block<const N: usize>(block: &[u8]) -> Result<[u8; N]> {
    block.try_into().map_err(|_| CipherError::MalformedBlock {
        expected: N,
        actual: block.len(),
    })
}

/// Strips whitespace and checks that every remaining character is a hex digit.
pub fn normalize_hex(input: &str) -> Result<String> {
    let mut digits = String::with_capacity(input.len());
    for (position, character) in input.chars().enumerate() {
        if character.is_whitespace() {
            continue;
        }
        if !character.is_ascii_hexdigit() {
            return Err(CipherError::InvalidCharacter {
                character,
                position,
            });
        }
        digits.push(character);
    }
    Ok(digits)
}

pub fn hex_to_bytes(input: &str) -> Result<Vec<u8>> {
    let digits = normalize_hex(input)?;
    hex::decode(&digits).map_err(|err| match err {
        hex::FromHexError::InvalidHexCharacter { c, index } => CipherError::InvalidCharacter {
            character: c,
            position: index,
        },
        _ => CipherError::OddHexLength {
            digits: digits.len(),
        },
    })
}

pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

pub fn bytes_to_spaced_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{byte:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn text_to_bytes(text: &str) -> Result<Vec<u8>> {
    if let Some((position, character)) = text.chars().enumerate().find(|(_, c)| !c.is_ascii()) {
        return Err(CipherError::InvalidCharacter {
            character,
            position,
        });
    }
    Ok(text.as_bytes().to_vec())
}

pub fn bytes_to_text(bytes: &[u8]) -> Result<String> {
    if let Some((position, &byte)) = bytes.iter().enumerate().find(|(_, b)| !b.is_ascii()) {
        return Err(CipherError::InvalidCharacter {
            character: char::from(byte),
            position,
        });
    }
    Ok(bytes.iter().map(|&byte| char::from(byte)).collect())
}
