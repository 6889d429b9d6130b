//! AES-CTR encryption handlers for the sbcrypt library
//!
//! This crate provides the high-level façade over the primitives in
//! `sbcrypt-algorithms`: handlers that own an AES key schedule, draw fresh
//! nonces, drive the CTR engine and package the results for transport.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

pub mod config;
pub mod ctr;
pub mod error;

// Re-export main types for convenience
pub use config::CtrConfig;
pub use ctr::{AesCtrHandler, CtrCiphertext, CtrNonce, FixedNonceCtr};
pub use sbcrypt_algorithms::{KeySize, OverflowPolicy};
pub use sbcrypt_api::traits::SymmetricCipher;

// Re-export the API error system instead of custom error types
pub use error::{validate, Error, Result};
