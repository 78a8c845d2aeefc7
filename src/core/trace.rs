//! Instrumented hashing: the same pipeline replayed through the shared
//! round body while recording per-round and per-block snapshots. Records
//! are serde types so a frontend or a test harness can consume them as
//! JSON. The plain [`sha256`](super::engine::sha256) path records nothing
//! and never pays for any of this.

use serde::{Deserialize, Serialize};

use super::compress::{absorb, round, Working};
use super::constants::{State, INITIAL_HASH, K};
use super::digest::Digest;
use super::error::HashError;
use super::padding::{pad_message, BLOCK_BYTES};
use super::schedule::{expand_block, SCHEDULE_WORDS};

/// Snapshot of the eight working registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterSnapshot {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
    pub e: u32,
    pub f: u32,
    pub g: u32,
    pub h: u32,
}

impl RegisterSnapshot {
    pub fn to_words(self) -> State {
        [
            self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h,
        ]
    }
}

impl From<Working> for RegisterSnapshot {
    fn from(vars: Working) -> Self {
        RegisterSnapshot {
            a: vars.a,
            b: vars.b,
            c: vars.c,
            d: vars.d,
            e: vars.e,
            f: vars.f,
            g: vars.g,
            h: vars.h,
        }
    }
}

/// One compression round as seen by the recorder.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: usize,
    pub before: RegisterSnapshot,
    pub after: RegisterSnapshot,
    pub schedule_word: u32,
    pub round_constant: u32,
    pub temp1: u32,
    pub temp2: u32,
    /// Register-major bit indices (0..256) that flipped this round.
    pub changed_bits: Vec<u16>,
}

/// One 64-byte block: its expanded schedule and the state it folds into.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlockRecord {
    pub index: usize,
    pub schedule: Vec<u32>,
    pub state_in: State,
    pub state_out: State,
    pub rounds: Vec<RoundRecord>,
}

/// Full record of one hash computation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HashTrace {
    pub message_len: usize,
    pub padded_len: usize,
    pub blocks: Vec<BlockRecord>,
    /// Final digest, 64 lowercase hex characters.
    pub digest_hex: String,
}

impl HashTrace {
    pub fn digest(&self) -> Result<Digest, HashError> {
        Digest::from_hex(&self.digest_hex)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Bit positions where two register snapshots differ, register-major with
/// 32 bit positions per register.
pub fn changed_bits(before: &RegisterSnapshot, after: &RegisterSnapshot) -> Vec<u16> {
    let mut changed = Vec::new();
    for (word_idx, (b, a)) in before
        .to_words()
        .iter()
        .zip(after.to_words().iter())
        .enumerate()
    {
        let diff = b ^ a;
        for bit in 0..32u16 {
            if diff & (1 << bit) != 0 {
                changed.push(word_idx as u16 * 32 + bit);
            }
        }
    }
    changed
}

/// Run the full pipeline while recording every round of every block.
///
/// Materializes the padded message and one record per round, so memory is
/// proportional to message size; when only the digest matters, use
/// [`sha256`](super::engine::sha256).
pub fn trace_sha256(message: &[u8]) -> Result<HashTrace, HashError> {
    let padded = pad_message(message)?;
    let mut state = INITIAL_HASH;
    let mut blocks = Vec::with_capacity(padded.len() / BLOCK_BYTES);

    for (index, chunk) in padded.chunks_exact(BLOCK_BYTES).enumerate() {
        let mut block = [0u8; BLOCK_BYTES];
        block.copy_from_slice(chunk);
        let w = expand_block(&block);
        let state_in = state;

        let mut vars = Working::from_state(&state);
        let mut rounds = Vec::with_capacity(SCHEDULE_WORDS);
        for i in 0..SCHEDULE_WORDS {
            let before = RegisterSnapshot::from(vars);
            let (temp1, temp2) = round(&mut vars, K[i], w[i]);
            let after = RegisterSnapshot::from(vars);
            rounds.push(RoundRecord {
                round: i,
                before,
                after,
                schedule_word: w[i],
                round_constant: K[i],
                temp1,
                temp2,
                changed_bits: changed_bits(&before, &after),
            });
        }
        absorb(&mut state, vars);

        blocks.push(BlockRecord {
            index,
            schedule: w.to_vec(),
            state_in,
            state_out: state,
            rounds,
        });
    }

    let digest = Digest::from_state(&state);
    Ok(HashTrace {
        message_len: message.len(),
        padded_len: padded.len(),
        blocks,
        digest_hex: digest.to_hex(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_bits_indexes_register_major() {
        let before = RegisterSnapshot {
            a: 0, b: 0, c: 0, d: 0, e: 0, f: 0, g: 0, h: 0,
        };
        let mut after = before;
        after.a = 1; // bit 0
        after.b = 1 << 31; // bit 63
        after.h = 1 << 4; // bit 7*32 + 4
        assert_eq!(changed_bits(&before, &after), vec![0, 63, 228]);
    }

    #[test]
    fn unchanged_snapshot_reports_nothing() {
        let snap = RegisterSnapshot {
            a: 0xdead_beef, b: 1, c: 2, d: 3, e: 4, f: 5, g: 6, h: 7,
        };
        assert!(changed_bits(&snap, &snap).is_empty());
    }
}
