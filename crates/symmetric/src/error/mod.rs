//! Error handling for the CTR handlers
//!
//! The handlers share the API error type with the primitives, so errors raised
//! by the key schedule or the stream engine pass through unchanged.

pub use sbcrypt_api::error::{validate, Error, Result};

/// Validate a decoded package with consistent context
pub fn validate_format(condition: bool, reason: &'static str) -> Result<()> {
    validate::package(condition, reason)
}
