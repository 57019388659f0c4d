//! GF(2^8) arithmetic modulo the AES polynomial x^8 + x^4 + x^3 + x + 1.

use crate::gf::irreducible::is_irreducible;
use log::debug;
use std::sync::LazyLock;

pub const AES_MODULUS: u16 = 0x11B;
/// Primitive element the log/antilog tables are built from.
pub const GENERATOR: u8 = 0x03;

/// Multiplication by `x`.
pub const fn xtime(a: u8) -> u8 {
    let shifted = (a as u16) << 1;
    if shifted & 0x100 != 0 {
        (shifted ^ AES_MODULUS) as u8
    } else {
        shifted as u8
    }
}

/// Shift-and-add multiplication, no tables involved.
pub const fn gf_mul(a: u8, b: u8) -> u8 {
    let mut result = 0u8;
    let mut a = a;
    let mut b = b;
    while b != 0 {
        if b & 1 != 0 {
            result ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    result
}

const fn build_exp_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut value = 1u8;
    let mut i = 0;
    while i < 255 {
        table[i] = value;
        value = gf_mul(value, GENERATOR);
        i += 1;
    }
    // g^255 = 1
    table[255] = table[0];
    table
}

const fn build_log_table(exp: &[u8; 256]) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 255 {
        table[exp[i] as usize] = i as u8;
        i += 1;
    }
    table
}

const EXP: [u8; 256] = build_exp_table();

/// `EXP_TABLE[i] = GENERATOR^i`.
pub static EXP_TABLE: [u8; 256] = EXP;
/// Discrete log base `GENERATOR`; entry 0 is unused.
pub static LOG_TABLE: [u8; 256] = build_log_table(&EXP);

/// Full product table, `GALOIS_MUL[a][b] = a * b`.
pub static GALOIS_MUL: LazyLock<Vec<[u8; 256]>> = LazyLock::new(build_product_table);

fn build_product_table() -> Vec<[u8; 256]> {
    assert!(
        is_irreducible(AES_MODULUS),
        "field modulus {AES_MODULUS:#x} is reducible"
    );
    debug!("building GF(2^8) product table");

    (0..=255u8)
        .map(|a| {
            let mut row = [0u8; 256];
            for (b, product) in row.iter_mut().enumerate() {
                *product = log_mul(a, b as u8);
            }
            row
        })
        .collect()
}

fn log_mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    let log_sum = LOG_TABLE[a as usize] as usize + LOG_TABLE[b as usize] as usize;
    EXP_TABLE[log_sum % 255]
}

/// Table-driven product. `a` is the matrix coefficient; the identity entries skip the lookup.
pub fn galois_multiply(a: u8, b: u8) -> u8 {
    if a == 1 {
        return b;
    }
    GALOIS_MUL[a as usize][b as usize]
}

/// Inner product over GF(2^8): element-wise products, summed with XOR.
pub fn dot_product(vector_a: &[u8], vector_b: &[u8]) -> u8 {
    debug_assert_eq!(vector_a.len(), vector_b.len());
    vector_a
        .iter()
        .zip(vector_b)
        .map(|(&a, &b)| galois_multiply(a, b))
        .fold(0, |acc, term| acc ^ term)
}

/// Multiplicative inverse, with 0 mapped to 0 as the S-box construction requires.
pub fn gf_inverse(a: u8) -> u8 {
    if a == 0 {
        return 0;
    }
    EXP_TABLE[(255 - LOG_TABLE[a as usize] as usize) % 255]
}
