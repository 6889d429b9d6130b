//! Block cipher primitives
//!
//! This crate provides the AES block cipher and the counter (CTR) mode built
//! on top of it. Round tables are generated at compile time and round keys are
//! zeroized when a cipher is dropped.
//!
//! The AES round network is table driven and is not constant-time.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block cipher implementations
pub mod block;
pub use block::aes::{Aes, KeySchedule, KeySize, RoundKeys};
pub use block::modes::{Counter, Ctr, KeystreamState, OverflowPolicy};
pub use block::BlockCipher;
