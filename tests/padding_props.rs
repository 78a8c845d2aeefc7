use hashforge::core::padding::{pad_message, padded_len, PaddedBlocks, BLOCK_BYTES};

#[test]
fn padded_form_is_always_a_block_multiple() {
    for len in 0..260usize {
        let message = vec![0x42u8; len];
        let padded = pad_message(&message).expect("padding ok");
        assert_eq!(padded.len() % BLOCK_BYTES, 0, "len {len}");
    }
}

#[test]
fn trailer_decodes_to_message_bit_length() {
    for len in [0usize, 1, 17, 55, 56, 63, 64, 65, 119, 120, 255] {
        let message = vec![0x42u8; len];
        let padded = pad_message(&message).expect("padding ok");
        let trailer: [u8; 8] = padded[padded.len() - 8..].try_into().unwrap();
        assert_eq!(u64::from_be_bytes(trailer), (len as u64) * 8, "len {len}");
    }
}

#[test]
fn padding_is_never_empty() {
    // Even when the message already sits at the modular boundary, the 0x80
    // marker forces at least one extra byte.
    for len in [0usize, 55, 56, 64, 128] {
        let message = vec![0x42u8; len];
        let padded = pad_message(&message).expect("padding ok");
        assert!(padded.len() > len, "len {len}");
        assert_eq!(padded[len], 0x80, "len {len}");
    }
}

#[test]
fn streamed_blocks_equal_materialized_padding() {
    for len in 0..200usize {
        let message: Vec<u8> = (0..len).map(|i| (i * 7 % 256) as u8).collect();
        let streamed: Vec<u8> = PaddedBlocks::new(&message)
            .expect("padding ok")
            .flat_map(|b| b.to_vec())
            .collect();
        assert_eq!(streamed, pad_message(&message).expect("padding ok"), "len {len}");
    }
}

#[test]
fn block_count_matches_padded_len() {
    for (len, expected_blocks) in [(0usize, 1usize), (55, 1), (56, 2), (64, 2), (119, 2), (120, 3)] {
        let message = vec![0u8; len];
        let blocks = PaddedBlocks::new(&message).expect("padding ok").count();
        assert_eq!(blocks, expected_blocks, "len {len}");
        assert_eq!(padded_len(len), expected_blocks * BLOCK_BYTES, "len {len}");
    }
}
