//! AES block cipher implementation
//!
//! This module implements the Advanced Encryption Standard (AES) block cipher
//! as specified in FIPS 197, for 128, 192 and 256-bit keys.
//!
//! ## Structure
//!
//! - [`tables`]: compile-time S-boxes, round tables and round constants
//! - [`key_schedule`]: key expansion into encryption and decryption round keys
//! - [`transform`]: the round network shared by both directions
//!
//! ## Side channels
//!
//! The round network uses table lookups indexed by state bytes. It is not
//! constant-time and offers no protection against cache-timing attacks.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::BlockCipher;
use crate::error::{validate, Result};
use sbcrypt_params::utils::symmetric::AES_BLOCK_SIZE;

pub mod key_schedule;
pub mod tables;
pub mod transform;

pub use key_schedule::{KeySchedule, KeySize, RoundKeys};
pub use tables::{TableSet, FORWARD, INVERSE};
pub use transform::transform_block;

/// AES block cipher for any supported key size
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes {
    schedule: KeySchedule,
}

impl Aes {
    /// Creates a cipher from a 16, 24 or 32 byte key
    pub fn new(key: &[u8]) -> Result<Self> {
        Ok(Self {
            schedule: KeySchedule::expand(key)?,
        })
    }

    /// Key size of this instance
    pub fn key_size(&self) -> KeySize {
        self.schedule.size()
    }

    /// Number of rounds (10, 12 or 14)
    pub fn rounds(&self) -> usize {
        self.schedule.rounds()
    }

    /// The expanded key schedule
    pub fn schedule(&self) -> &KeySchedule {
        &self.schedule
    }

    /// Encrypts one block, returning the result
    pub fn encrypt_to_block(&self, block: &[u8]) -> Result<[u8; AES_BLOCK_SIZE]> {
        transform_block(block, self.schedule.encryption_keys(), &FORWARD)
    }

    /// Decrypts one block, returning the result
    pub fn decrypt_to_block(&self, block: &[u8]) -> Result<[u8; AES_BLOCK_SIZE]> {
        transform_block(block, self.schedule.decryption_keys(), &INVERSE)
    }
}

impl BlockCipher for Aes {
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::block_length("AES block", block.len(), AES_BLOCK_SIZE)?;
        let out = self.encrypt_to_block(block)?;
        block.copy_from_slice(&out);
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::block_length("AES block", block.len(), AES_BLOCK_SIZE)?;
        let out = self.decrypt_to_block(block)?;
        block.copy_from_slice(&out);
        Ok(())
    }

    fn name(&self) -> &'static str {
        self.schedule.size().name()
    }
}
