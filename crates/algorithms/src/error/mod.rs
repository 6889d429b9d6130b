//! Error handling for cipher primitives
//!
//! The primitives share the API error taxonomy so that failures surface to
//! callers unchanged; this module re-exports it under the crate's namespace.

pub use sbcrypt_api::error::{validate, Error, Result};
