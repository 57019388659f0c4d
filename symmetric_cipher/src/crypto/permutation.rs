use bitvec::prelude::{BitSlice, BitVec};

/// Tables are written 1-indexed, so every lookup is shifted by this bias.
pub const TABLE_BIAS: isize = -1;

/// Builds a sequence of `table.len()` elements where element `i` is
/// `sequence[table[i] + bias]`.
///
/// The ciphers run on bit vectors and go through [`permute_bits`] instead.
///
/// # Panics
///
/// If a biased position falls outside `sequence`. Tables are fixed at compile time, so this
/// is a broken table, not bad input.
pub fn permute<T: Clone>(sequence: &[T], table: &[usize], bias: isize) -> Vec<T> {
    table
        .iter()
        .map(|&position| sequence[resolve_index(position, bias, sequence.len())].clone())
        .collect()
}

/// Bit-level variant of [`permute`].
pub fn permute_bits(bits: &BitSlice, table: &[usize], bias: isize) -> BitVec {
    table
        .iter()
        .map(|&position| bits[resolve_index(position, bias, bits.len())])
        .collect()
}

fn resolve_index(position: usize, bias: isize, len: usize) -> usize {
    match position.checked_add_signed(bias) {
        Some(index) if index < len => index,
        _ => panic!(
            "permutation position {position} with bias {bias} is outside a sequence of length {len}"
        ),
    }
}
