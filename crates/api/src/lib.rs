//! Public API traits and error types for the sbcrypt library
//!
//! This crate provides the API surface shared by every sbcrypt crate: the
//! error taxonomy, boundary validation helpers, and the traits implemented
//! by block ciphers, stream engines and high-level handlers.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result};
pub use traits::{BlockCipher, StreamCipher, SymmetricCipher};
