//! Core hash pipeline: padding, schedule expansion, compression, digest
//! formatting, and the instrumented trace path.

pub mod compress;
pub mod constants;
pub mod digest;
pub mod engine;
pub mod error;
pub mod ops;
pub mod padding;
pub mod schedule;
pub mod trace;

#[macro_use]
pub mod debug; // gated debug logging (HASHFORGE_DEBUG=1) provides debug_log! macro
