//! CTR nonce type

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{validate, Result};
use sbcrypt_params::utils::symmetric::CTR_NONCE_SIZE;

/// The 12-byte nonce prefix of a CTR counter block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CtrNonce([u8; CTR_NONCE_SIZE]);

impl CtrNonce {
    /// Wraps raw nonce bytes
    pub fn new(bytes: [u8; CTR_NONCE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Copies a nonce from a slice, which must be exactly 12 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::nonce_size(bytes.len(), CTR_NONCE_SIZE)?;
        let mut nonce = [0u8; CTR_NONCE_SIZE];
        nonce.copy_from_slice(bytes);
        Ok(Self(nonce))
    }

    /// Draws a nonce from the operating system RNG
    pub fn generate() -> Self {
        Self::generate_with_rng(&mut OsRng)
    }

    /// Draws a nonce from a caller-supplied cryptographic RNG
    pub fn generate_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut nonce = [0u8; CTR_NONCE_SIZE];
        rng.fill_bytes(&mut nonce);
        Self(nonce)
    }

    /// Raw nonce bytes
    pub fn as_bytes(&self) -> &[u8; CTR_NONCE_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for CtrNonce {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
