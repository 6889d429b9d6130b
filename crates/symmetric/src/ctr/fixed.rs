//! Handler bound to a caller-supplied nonce

use alloc::vec::Vec;

use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use sbcrypt_algorithms::Aes;

use super::{log_construction, process_message, CtrNonce};
use crate::config::CtrConfig;
use crate::error::Result;

/// AES-CTR with a fixed nonce
///
/// Every call restarts the counter at the configured initial value, so equal
/// plaintexts give equal ciphertexts. Callers that encrypt more than one
/// message must supply a distinct nonce per message themselves.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct FixedNonceCtr {
    cipher: Aes,
    #[zeroize(skip)]
    nonce: CtrNonce,
    #[zeroize(skip)]
    config: CtrConfig,
}

impl FixedNonceCtr {
    /// Creates a handler from a key and a 12-byte nonce
    pub fn new(key: &[u8], nonce: &[u8]) -> Result<Self> {
        Self::with_config(key, nonce, CtrConfig::default())
    }

    /// Creates a handler with explicit counter settings
    pub fn with_config(key: &[u8], nonce: &[u8], config: CtrConfig) -> Result<Self> {
        let nonce = CtrNonce::from_slice(nonce)?;
        let cipher = Aes::new(key)?;
        log_construction(&cipher, &config);

        Ok(Self {
            cipher,
            nonce,
            config,
        })
    }

    /// The bound nonce
    pub fn nonce(&self) -> &CtrNonce {
        &self.nonce
    }

    /// Counter settings of this handler
    pub fn config(&self) -> &CtrConfig {
        &self.config
    }

    /// Encrypts a message, returning the ciphertext only
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let ciphertext = process_message(
            &self.cipher,
            &self.config,
            self.nonce.as_bytes(),
            self.config.initial_counter,
            plaintext,
        )?;
        debug!(len = plaintext.len(), "encrypted message under fixed nonce");
        Ok(ciphertext)
    }

    /// Decrypts a message produced by [`FixedNonceCtr::encrypt`]
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.decrypt_with_nonce(ciphertext, self.nonce.as_bytes(), self.config.initial_counter)
    }

    /// Decrypts a message encrypted under another nonce and initial counter
    pub fn decrypt_with_nonce(
        &self,
        ciphertext: &[u8],
        nonce: &[u8],
        initial: u32,
    ) -> Result<Vec<u8>> {
        let plaintext = process_message(&self.cipher, &self.config, nonce, initial, ciphertext)?;
        debug!(len = ciphertext.len(), initial_counter = initial, "decrypted message");
        Ok(plaintext)
    }
}
