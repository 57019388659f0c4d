#[cfg(test)]
mod tests {
    use bitvec::prelude::*;
    use symmetric_cipher::crypto::error::CipherError;
    use symmetric_cipher::crypto::utils::*;

    #[test]
    fn test_bytes_to_bits() {
        let input = vec![0b10101010, 0b11001100];
        let expected = bitvec![1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 0, 0, 1, 1, 0, 0];
        assert_eq!(bytes_to_bits(&input), expected);
    }

    #[test]
    fn test_bits_to_bytes() {
        let bits = bitvec![1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 0, 0, 1, 1, 0, 0];
        let expected = vec![0b10101010, 0b11001100];
        assert_eq!(bits_to_bytes(&bits), expected);
    }

    #[test]
    fn test_bits_to_bytes_partial_byte_is_left_aligned() {
        let bits = bitvec![1, 1, 0, 1];
        assert_eq!(bits_to_bytes(&bits), vec![0b11010000]);
    }

    #[test]
    fn test_xor_bits() {
        let a = bitvec![1, 1, 0, 0];
        let b = bitvec![1, 0, 1, 0];
        assert_eq!(xor_bits(&a, &b), bitvec![0, 1, 1, 0]);
    }

    #[test]
    #[should_panic(expected = "equal bit length")]
    fn test_xor_bits_length_mismatch_panics() {
        xor_bits(&bitvec![1, 0], &bitvec![1]);
    }

    #[test]
    fn test_insert_filler_bits_after_every_seven() {
        let key = bytes_to_bits(&[0xFF; 7]);
        let widened = insert_filler_bits(&key, 7, false);

        assert_eq!(widened.len(), 64);
        assert_eq!(bits_to_bytes(&widened), vec![0xFE; 8]);
    }

    #[test]
    fn test_chunk_without_padding_keeps_short_tail() {
        let chunks = chunk(&[1, 2, 3, 4, 5], 2, None);
        assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[test]
    fn test_chunk_pads_short_tail_with_pad_unit() {
        let chunks = chunk(&[1u8, 2, 3, 4, 5, 6, 7], 8, Some(0xAA));
        assert_eq!(chunks, vec![vec![1, 2, 3, 4, 5, 6, 7, 0xAA]]);
    }

    #[test]
    fn test_chunk_exact_multiple_gets_no_pad_block() {
        let data = [7u8; 16];
        let chunks = chunk(&data, 8, Some(0));
        assert_eq!(chunks.len(), 2);
        assert!(chunks.iter().all(|c| c == &vec![7u8; 8]));
    }

    #[test]
    fn test_chunk_empty_input() {
        let chunks = chunk::<u8>(&[], 8, Some(0));
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_chunk_works_on_letters() {
        let letters: Vec<char> = "abcde".chars().collect();
        let chunks = chunk(&letters, 4, Some('x'));
        assert_eq!(chunks[1], vec!['e', 'x', 'x', 'x']);
    }

    #[test]
    fn test_strip_trailing_pad_is_bounded() {
        let mut data = vec![1, 0, 0, 0, 0];
        let removed = strip_trailing_pad(&mut data, 0, 3);
        assert_eq!(removed, 3);
        assert_eq!(data, vec![1, 0]);
    }

    #[test]
    fn test_strip_trailing_pad_leaves_inner_pad_bytes() {
        let mut data = vec![0, 5, 0, 5];
        assert_eq!(strip_trailing_pad(&mut data, 0, 7), 0);
        assert_eq!(data, vec![0, 5, 0, 5]);
    }

    #[test]
    fn test_to_block_rejects_wrong_size() {
        let err = to_block::<8>(&[0u8; 5]).unwrap_err();
        assert_eq!(
            err,
            CipherError::MalformedBlock {
                expected: 8,
                actual: 5
            }
        );
        assert_eq!(to_block::<2>(&[1, 2]).unwrap(), [1, 2]);
    }

    #[test]
    fn test_hex_to_bytes_accepts_spaces_and_case() {
        assert_eq!(hex_to_bytes("0a FF 1b").unwrap(), vec![0x0A, 0xFF, 0x1B]);
        assert_eq!(hex_to_bytes("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_hex_to_bytes_reports_position_of_bad_character() {
        let err = hex_to_bytes("00 1g").unwrap_err();
        assert_eq!(
            err,
            CipherError::InvalidCharacter {
                character: 'g',
                position: 4
            }
        );
    }

    #[test]
    fn test_hex_to_bytes_odd_length() {
        assert_eq!(
            hex_to_bytes("ABC").unwrap_err(),
            CipherError::OddHexLength { digits: 3 }
        );
    }

    #[test]
    fn test_hex_rendering() {
        let bytes = [0x69, 0xC4, 0x0a];
        assert_eq!(bytes_to_hex(&bytes), "69C40A");
        assert_eq!(bytes_to_spaced_hex(&bytes), "69 C4 0A");
        assert_eq!(bytes_to_spaced_hex(&[]), "");
    }

    #[test]
    fn test_text_conversion_is_ascii_only() {
        assert_eq!(text_to_bytes("Hi!").unwrap(), b"Hi!".to_vec());
        assert_eq!(
            text_to_bytes("naïve").unwrap_err(),
            CipherError::InvalidCharacter {
                character: 'ï',
                position: 2
            }
        );
        assert_eq!(bytes_to_text(b"ok").unwrap(), "ok");
        assert!(matches!(
            bytes_to_text(&[b'o', 0xC3]),
            Err(CipherError::InvalidCharacter { position: 1, .. })
        ));
    }
}
