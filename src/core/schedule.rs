//! Message-schedule expansion (FIPS 180-4 §6.2.2 step 1): one 64-byte
//! block becomes the 64 words W[0..63] fed to the compression rounds.

use super::ops::{small_sigma0, small_sigma1};
use super::padding::BLOCK_BYTES;

/// Words in one expanded schedule.
pub const SCHEDULE_WORDS: usize = 64;

/// Expand one block into its message schedule. Pure function of the block;
/// the schedule is scoped to that block's compression and then discarded.
pub fn expand_block(block: &[u8; BLOCK_BYTES]) -> [u32; SCHEDULE_WORDS] {
    let mut w = [0u32; SCHEDULE_WORDS];
    // W[0..16]: the block reinterpreted as big-endian words.
    for (i, chunk) in block.chunks_exact(4).enumerate() {
        w[i] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    // W[16..64]: recurrence over earlier words, wrapping mod 2^32.
    for i in 16..SCHEDULE_WORDS {
        w[i] = w[i - 16]
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma1(w[i - 2]));
    }
    w
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::padding::pad_message;

    fn abc_block() -> [u8; BLOCK_BYTES] {
        pad_message(b"abc")
            .expect("padding ok")
            .try_into()
            .expect("one block")
    }

    #[test]
    fn first_sixteen_words_are_big_endian_block_words() {
        let w = expand_block(&abc_block());
        assert_eq!(w[0], 0x6162_6380); // 'a' 'b' 'c' 0x80
        for word in &w[1..15] {
            assert_eq!(*word, 0);
        }
        assert_eq!(w[15], 24); // bit length of "abc"
    }

    #[test]
    fn recurrence_matches_hand_computation() {
        let w = expand_block(&abc_block());
        // W[16] = W[0] + σ0(W[1]) + W[9] + σ1(W[14]); the σ terms vanish.
        assert_eq!(w[16], 0x6162_6380);
        // W[17] = W[1] + σ0(W[2]) + W[10] + σ1(W[15]) = σ1(24).
        assert_eq!(w[17], 0x000f_0000);
    }

    #[test]
    fn expansion_is_deterministic() {
        let block = [0x5au8; BLOCK_BYTES];
        assert_eq!(expand_block(&block), expand_block(&block));
    }
}
