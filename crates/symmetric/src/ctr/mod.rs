//! AES in counter mode
//!
//! [`AesCtrHandler`] owns an AES key schedule and draws a fresh 12-byte nonce
//! for every message it encrypts. The nonce must travel with the ciphertext;
//! [`CtrCiphertext`] bundles both for storage or transmission.
//!
//! # Examples
//!
//! ```
//! use sbcrypt_symmetric::{AesCtrHandler, CtrCiphertext, Result};
//!
//! fn example() -> Result<()> {
//!     let key = [0x2bu8; 16];
//!     let mut handler = AesCtrHandler::new(&key)?;
//!
//!     let package = handler.encrypt(b"Hello, World!")?;
//!     let decrypted = handler.decrypt(&package.ciphertext, package.nonce.as_bytes())?;
//!     assert_eq!(decrypted, b"Hello, World!");
//!
//!     // The package can be serialized for storage or transmission
//!     let serialized = package.to_string();
//!     let parsed: CtrCiphertext = serialized.parse()?;
//!     assert_eq!(handler.decrypt_package(&parsed)?, b"Hello, World!");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! CTR mode provides confidentiality only. Ciphertexts can be modified without
//! detection, and reusing a (nonce, counter) pair under one key leaks the XOR
//! of the plaintexts.

use alloc::vec::Vec;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace, warn};
use zeroize::{Zeroize, ZeroizeOnDrop};

use sbcrypt_algorithms::block::modes::ctr::apply_keystream;
use sbcrypt_algorithms::{Aes, Counter, KeySize, KeystreamState, OverflowPolicy};
use sbcrypt_api::traits::SymmetricCipher;
use sbcrypt_params::utils::symmetric::{AES_BLOCK_SIZE, CTR_DEFAULT_INITIAL_COUNTER};

use crate::config::CtrConfig;
use crate::error::{validate, Error, Result};

mod fixed;
mod nonce;
mod package;

pub use fixed::FixedNonceCtr;
pub use nonce::CtrNonce;
pub use package::CtrCiphertext;

/// Runs one complete message through a fresh counter and keystream buffer
fn process_message(
    cipher: &Aes,
    config: &CtrConfig,
    nonce: &[u8],
    initial: u32,
    data: &[u8],
) -> Result<Vec<u8>> {
    let mut counter = config.counter_at(nonce, initial)?;
    let mut state = KeystreamState::new();
    apply_keystream(cipher, data, &mut counter, &mut state)
}

fn log_construction(cipher: &Aes, config: &CtrConfig) {
    debug!(
        key_size = cipher.key_size().name(),
        initial_counter = config.initial_counter,
        "AES-CTR handler created"
    );
    if config.overflow_policy == OverflowPolicy::Wrap {
        warn!("counter overflow set to wrap; keystream repeats after 2^32 blocks");
    }
}

/// AES-CTR handler that generates a fresh nonce for every message
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct AesCtrHandler {
    cipher: Aes,
    #[zeroize(skip)]
    config: CtrConfig,
    counter: Option<Counter>,
    state: KeystreamState,
}

impl AesCtrHandler {
    /// Creates a handler from a 16, 24 or 32 byte key with default settings
    pub fn new(key: &[u8]) -> Result<Self> {
        Self::with_config(key, CtrConfig::default())
    }

    /// Creates a handler from a key that may be absent
    pub fn from_optional_key(key: Option<&[u8]>) -> Result<Self> {
        Self::new(key.ok_or(Error::KeyMissing)?)
    }

    /// Creates a handler with explicit counter settings
    pub fn with_config(key: &[u8], config: CtrConfig) -> Result<Self> {
        let cipher = Aes::new(key)?;
        log_construction(&cipher, &config);

        Ok(Self {
            cipher,
            config,
            counter: None,
            state: KeystreamState::new(),
        })
    }

    /// Key size of the underlying cipher
    pub fn key_size(&self) -> KeySize {
        self.cipher.key_size()
    }

    /// Counter settings of this handler
    pub fn config(&self) -> &CtrConfig {
        &self.config
    }

    /// Nonce of the most recent encryption, if any
    pub fn last_nonce(&self) -> Option<&[u8]> {
        self.counter.as_ref().map(Counter::nonce)
    }

    /// Counter of the most recent encryption, positioned after its last block
    pub fn counter(&self) -> Option<&Counter> {
        self.counter.as_ref()
    }

    /// Encrypts a message under a fresh nonce from the operating system RNG
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<CtrCiphertext> {
        self.encrypt_with_rng(&mut OsRng, plaintext)
    }

    /// Encrypts a message under a fresh nonce drawn from `rng`
    pub fn encrypt_with_rng<R: RngCore + CryptoRng>(
        &mut self,
        rng: &mut R,
        plaintext: &[u8],
    ) -> Result<CtrCiphertext> {
        validate::non_empty("AES-CTR plaintext", plaintext.len())?;

        let nonce = CtrNonce::generate_with_rng(rng);
        let mut counter = self.config.counter(nonce.as_bytes())?;
        let mut state = KeystreamState::new();
        trace!("fresh counter and keystream state");

        // Handler state only moves forward once the whole message is encrypted
        let ciphertext = apply_keystream(&self.cipher, plaintext, &mut counter, &mut state)?;
        self.counter = Some(counter);
        self.state = state;
        debug!(
            len = plaintext.len(),
            initial_counter = self.config.initial_counter,
            "encrypted message"
        );

        Ok(CtrCiphertext::new(
            nonce,
            self.config.initial_counter,
            ciphertext,
        ))
    }

    /// Decrypts a message encrypted with the counter starting at 1
    pub fn decrypt(&self, ciphertext: &[u8], nonce: &[u8]) -> Result<Vec<u8>> {
        self.decrypt_with_counter(ciphertext, nonce, CTR_DEFAULT_INITIAL_COUNTER)
    }

    /// Decrypts a message given the nonce and initial counter it was encrypted with
    pub fn decrypt_with_counter(
        &self,
        ciphertext: &[u8],
        nonce: &[u8],
        initial: u32,
    ) -> Result<Vec<u8>> {
        let plaintext = process_message(&self.cipher, &self.config, nonce, initial, ciphertext)?;
        debug!(len = ciphertext.len(), initial_counter = initial, "decrypted message");
        Ok(plaintext)
    }

    /// Decrypts a package produced by [`AesCtrHandler::encrypt`]
    pub fn decrypt_package(&self, package: &CtrCiphertext) -> Result<Vec<u8>> {
        self.decrypt_with_counter(
            &package.ciphertext,
            package.nonce.as_bytes(),
            package.initial_counter,
        )
    }

    /// Encrypts exactly one 16-byte block with the raw cipher
    pub fn block_encrypt(&self, block: &[u8]) -> Result<[u8; AES_BLOCK_SIZE]> {
        self.cipher.encrypt_to_block(block)
    }

    /// Decrypts exactly one 16-byte block with the raw cipher
    pub fn block_decrypt(&self, block: &[u8]) -> Result<[u8; AES_BLOCK_SIZE]> {
        self.cipher.decrypt_to_block(block)
    }
}

impl SymmetricCipher for AesCtrHandler {
    type Key = [u8];

    fn new(key: &Self::Key) -> Result<Self> {
        AesCtrHandler::new(key)
    }

    fn name() -> &'static str {
        "AES-CTR"
    }
}
