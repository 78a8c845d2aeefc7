//! SHA-256 computed from first principles: padding, message-schedule
//! expansion, the 64-round compression function, and digest formatting,
//! plus an instrumented trace path that records every round.
pub mod core;

pub use crate::core::digest::Digest;
pub use crate::core::engine::{sha256, sha256_hex, sha256_str};
pub use crate::core::error::HashError;
pub use crate::core::trace::{trace_sha256, BlockRecord, HashTrace, RoundRecord};
