//! Message padding (FIPS 180-4 §5.1.1): append 0x80, zero-fill until the
//! length is ≡ 56 (mod 64), then append the original bit length as a
//! big-endian u64. At least one byte of padding is always added.

use super::error::HashError;

/// One 512-bit block.
pub const BLOCK_BYTES: usize = 64;
/// Width of the trailing bit-length field.
pub const LENGTH_BYTES: usize = 8;

/// Bit length of a message of `len` bytes, or [`HashError::LengthOverflow`]
/// when it does not fit in the 64-bit length field.
pub fn bit_length(len: usize) -> Result<u64, HashError> {
    (len as u64)
        .checked_mul(8)
        .ok_or(HashError::LengthOverflow)
}

/// Total padded length for a message of `len` bytes. Always a multiple of
/// [`BLOCK_BYTES`] and strictly greater than `len`.
pub fn padded_len(len: usize) -> usize {
    let with_trailer = len + 1 + LENGTH_BYTES;
    (with_trailer + BLOCK_BYTES - 1) / BLOCK_BYTES * BLOCK_BYTES
}

/// Materialized padded message. Tests and the trace engine use this form;
/// the plain hash path streams [`PaddedBlocks`] instead so it never holds
/// the whole padded message.
pub fn pad_message(message: &[u8]) -> Result<Vec<u8>, HashError> {
    let bits = bit_length(message.len())?;
    let mut padded = Vec::with_capacity(padded_len(message.len()));
    padded.extend_from_slice(message);
    padded.push(0x80);
    while padded.len() % BLOCK_BYTES != BLOCK_BYTES - LENGTH_BYTES {
        padded.push(0x00);
    }
    padded.extend_from_slice(&bits.to_be_bytes());
    debug_assert_eq!(padded.len(), padded_len(message.len()));
    Ok(padded)
}

enum TailState {
    /// Still consuming raw message bytes.
    Body,
    /// The marker block was full; one more block carries the length field.
    LengthBlock,
    Done,
}

/// Lazy block view of the padded message: yields the message's whole
/// 64-byte chunks first, then one or two synthesized tail blocks with the
/// 0x80 marker, zero fill, and the bit-length trailer. Byte-for-byte
/// identical to [`pad_message`], but holds a single block at a time.
pub struct PaddedBlocks<'a> {
    message: &'a [u8],
    bit_len: u64,
    offset: usize,
    state: TailState,
}

impl<'a> PaddedBlocks<'a> {
    pub fn new(message: &'a [u8]) -> Result<Self, HashError> {
        Ok(PaddedBlocks {
            message,
            bit_len: bit_length(message.len())?,
            offset: 0,
            state: TailState::Body,
        })
    }
}

impl<'a> Iterator for PaddedBlocks<'a> {
    type Item = [u8; BLOCK_BYTES];

    fn next(&mut self) -> Option<Self::Item> {
        let mut block = [0u8; BLOCK_BYTES];
        match self.state {
            TailState::Body => {
                let rem = self.message.len() - self.offset;
                if rem >= BLOCK_BYTES {
                    block.copy_from_slice(&self.message[self.offset..self.offset + BLOCK_BYTES]);
                    self.offset += BLOCK_BYTES;
                    return Some(block);
                }
                block[..rem].copy_from_slice(&self.message[self.offset..]);
                self.offset = self.message.len();
                block[rem] = 0x80;
                if rem < BLOCK_BYTES - LENGTH_BYTES {
                    // Marker and length fit together in the final block.
                    block[BLOCK_BYTES - LENGTH_BYTES..]
                        .copy_from_slice(&self.bit_len.to_be_bytes());
                    self.state = TailState::Done;
                } else {
                    self.state = TailState::LengthBlock;
                }
                Some(block)
            }
            TailState::LengthBlock => {
                block[BLOCK_BYTES - LENGTH_BYTES..].copy_from_slice(&self.bit_len.to_be_bytes());
                self.state = TailState::Done;
                Some(block)
            }
            TailState::Done => None,
        }
    }
}
