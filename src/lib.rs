//! # sbcrypt
//!
//! AES (FIPS-197) and Counter mode, built from primitives with precomputed
//! lookup tables.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! sbcrypt = "0.3"
//! ```
//!
//! ```
//! use sbcrypt::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let mut handler = AesCtrHandler::new(&[0x11u8; 32])?;
//! let package = handler.encrypt(b"attack at dawn")?;
//! assert_eq!(handler.decrypt_package(&package)?, b"attack at dawn");
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `symmetric` (default): the nonce-managing AES-CTR handlers
//! - `serde`: `Serialize`/`Deserialize` for configuration and packages
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`sbcrypt-api`]: error type and cipher traits
//! - [`sbcrypt-params`]: size constants
//! - [`sbcrypt-algorithms`]: the AES block cipher and the CTR engine
//! - [`sbcrypt-symmetric`]: AES-CTR handlers and the ciphertext package
//!
//! The AES round network uses table lookups indexed by secret state and is
//! not constant-time.

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use sbcrypt_algorithms as algorithms;
pub use sbcrypt_api as api;
pub use sbcrypt_params as params;

// Feature-gated re-exports
#[cfg(feature = "symmetric")]
pub use sbcrypt_symmetric as symmetric;

#[cfg(feature = "symmetric")]
pub use rand;
pub use zeroize;

/// Common imports for sbcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{BlockCipher, StreamCipher, SymmetricCipher};

    // Primitives
    pub use crate::algorithms::{Aes, Counter, Ctr, KeySize, OverflowPolicy};

    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{AesCtrHandler, CtrCiphertext, CtrConfig, CtrNonce, FixedNonceCtr};
}
