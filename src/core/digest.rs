//! Digest value type: the final 8-word state serialized big-endian, with
//! hex rendering/parsing and a bit-distance helper for avalanche analysis.

use std::fmt;
use std::str::FromStr;

use super::constants::State;
use super::error::HashError;

/// Bytes in a SHA-256 digest.
pub const DIGEST_BYTES: usize = 32;

/// A 256-bit digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest(pub [u8; DIGEST_BYTES]);

impl Digest {
    /// Serialize the final state: each word big-endian, words in order.
    pub fn from_state(state: &State) -> Self {
        let mut out = [0u8; DIGEST_BYTES];
        for (chunk, word) in out.chunks_exact_mut(4).zip(state) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Digest(out)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_BYTES] {
        &self.0
    }

    /// The 64-character lowercase hex form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a 64-character hex digest.
    pub fn from_hex(text: &str) -> Result<Self, HashError> {
        let bytes = hex::decode(text)
            .map_err(|e| HashError::invalid_encoding(&format!("digest is not valid hex: {e}")))?;
        if bytes.len() != DIGEST_BYTES {
            return Err(HashError::invalid_encoding(
                "digest must be 64 hex characters",
            ));
        }
        let mut out = [0u8; DIGEST_BYTES];
        out.copy_from_slice(&bytes);
        Ok(Digest(out))
    }

    /// Number of bit positions at which two digests differ.
    pub fn bit_distance(&self, other: &Digest) -> u32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a ^ b).count_ones())
            .sum()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Digest {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Digest::from_hex(s)
    }
}
