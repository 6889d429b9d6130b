//! Block cipher trait

use crate::error::Result;

/// A keyed permutation over fixed-size blocks
///
/// Implementations validate the buffer length and fail with
/// [`Error::BlockLengthInvalid`](crate::Error::BlockLengthInvalid) rather than
/// truncating or padding.
pub trait BlockCipher {
    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Returns the block size in bytes
    fn block_size() -> usize {
        Self::BLOCK_SIZE
    }

    /// Encrypts exactly one block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts exactly one block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Human-readable algorithm name, e.g. "AES-128"
    fn name(&self) -> &'static str;
}
