//! Error type definitions for cipher operations

use thiserror::Error as ThisError;

/// Primary error type for cipher operations
///
/// Every variant is raised at a call boundary before any output is produced.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// No key was supplied to a constructor
    #[error("a key is required to construct the cipher")]
    KeyMissing,

    /// Key length not in {16, 24, 32}
    #[error("invalid key size: expected 16, 24 or 32 bytes, got {actual}")]
    KeySizeInvalid {
        /// Length of the rejected key in bytes
        actual: usize,
    },

    /// Nonce length is not 12 bytes
    #[error("invalid nonce size: expected {expected} bytes, got {actual}")]
    NonceSizeInvalid {
        /// Required nonce length
        expected: usize,
        /// Length of the rejected nonce
        actual: usize,
    },

    /// Counter seed outside the representable range
    #[error("invalid counter value {value}: {reason}")]
    CounterValueInvalid {
        /// The rejected seed, widened to u64
        value: u64,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// Input to a direct block transform is not exactly one block
    #[error("invalid block length for {context}: expected {expected} bytes, got {actual}")]
    BlockLengthInvalid {
        /// Where the block was being used
        context: &'static str,
        /// Required length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Zero-length input to the stream engine
    #[error("input for {context} must not be empty")]
    EmptyInputInvalid {
        /// Operation that received the empty input
        context: &'static str,
    },

    /// The counter has no keystream blocks left; the key or nonce must change
    #[error("counter exhausted: re-keying or a fresh nonce is required")]
    CounterExhausted,

    /// A serialized ciphertext package could not be decoded
    #[error("invalid ciphertext package: {reason}")]
    InvalidPackage {
        /// What was wrong with the package
        reason: &'static str,
    },
}

/// Result type for cipher operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Stable machine-readable code for this error kind
    pub fn code(&self) -> &'static str {
        match self {
            Error::KeyMissing => "AES_KEY_MISSING",
            Error::KeySizeInvalid { .. } => "AES_KEY_SIZE_INVALID",
            Error::NonceSizeInvalid { .. } => "AES_NONCE_INVALID",
            Error::CounterValueInvalid { .. } => "AES_INVALID_COUNTER_VALUE",
            Error::BlockLengthInvalid { .. } => "AES_TEXT_INVALID",
            Error::EmptyInputInvalid { .. } => "CTR_EMPTY_INPUT",
            Error::CounterExhausted => "CTR_COUNTER_ERROR",
            Error::InvalidPackage { .. } => "CTR_PACKAGE_INVALID",
        }
    }
}
