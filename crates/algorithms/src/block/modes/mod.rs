//! Block cipher modes of operation
//!
//! Only Counter (CTR) mode is provided; it needs no padding and turns the
//! block cipher into a stream cipher.

pub mod ctr;

// Re-exports
pub use ctr::{Counter, Ctr, KeystreamState, OverflowPolicy};
