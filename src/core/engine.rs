//! Top-level hash pipeline: pad, then per block schedule + compress, then
//! format. The state is owned by one computation and threaded by `&mut`;
//! nothing global is touched, so independent hashes parallelize freely.

use super::compress::compress_block;
use super::constants::INITIAL_HASH;
use super::digest::Digest;
use super::error::HashError;
use super::padding::PaddedBlocks;
use super::schedule::expand_block;

/// Hash an arbitrary byte message.
///
/// Blocks stream out of the padder one at a time, so peak memory stays at
/// a single block no matter how large the message is.
pub fn sha256(message: &[u8]) -> Result<Digest, HashError> {
    let mut state = INITIAL_HASH;
    let mut blocks = 0usize;
    for block in PaddedBlocks::new(message)? {
        compress_block(&mut state, &expand_block(&block));
        blocks += 1;
    }
    crate::debug_log!(
        "sha256: folded {} message bytes through {} blocks",
        message.len(),
        blocks
    );
    Ok(Digest::from_state(&state))
}

/// Hash and render as the 64-character lowercase hex form.
pub fn sha256_hex(message: &[u8]) -> Result<String, HashError> {
    Ok(sha256(message)?.to_hex())
}

/// UTF-8 boundary for callers holding text; the encoding step to bytes
/// happens here, at the edge.
pub fn sha256_str(message: &str) -> Result<Digest, HashError> {
    sha256(message.as_bytes())
}
