//! The CTR counter block: 12-byte nonce followed by a 4-byte big-endian counter

use byteorder::{BigEndian, ByteOrder};
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{validate, Error, Result};
use sbcrypt_params::utils::symmetric::{AES_BLOCK_SIZE, CTR_COUNTER_SIZE, CTR_NONCE_SIZE};

/// What happens when the counter suffix passes `0xFFFFFFFF`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OverflowPolicy {
    /// Refuse to produce keystream past the last counter value
    #[default]
    Fail,
    /// Wrap the suffix to zero and keep going
    ///
    /// This repeats (nonce, counter) pairs after 2³² blocks and reuses keystream.
    Wrap,
}

/// Counter block for CTR mode
///
/// Bytes `0..12` hold the nonce and never change for the lifetime of the
/// counter; only bytes `12..16` are incremented or set.
#[derive(Debug, Clone, Zeroize, ZeroizeOnDrop)]
pub struct Counter {
    block: [u8; AES_BLOCK_SIZE],
    #[zeroize(skip)]
    policy: OverflowPolicy,
    #[zeroize(skip)]
    exhausted: bool,
}

impl Counter {
    /// Creates a counter from a 12-byte nonce and an initial counter value
    pub fn new(nonce: &[u8], initial: u64) -> Result<Self> {
        validate::nonce_size(nonce.len(), CTR_NONCE_SIZE)?;
        validate::counter_value(initial, u32::MAX as u64)?;

        let mut block = [0u8; AES_BLOCK_SIZE];
        block[..CTR_NONCE_SIZE].copy_from_slice(nonce);
        BigEndian::write_u32(&mut block[CTR_NONCE_SIZE..], initial as u32);

        Ok(Self {
            block,
            policy: OverflowPolicy::default(),
            exhausted: false,
        })
    }

    /// Creates a counter from a full 16-byte counter block
    pub fn from_block(block: &[u8]) -> Result<Self> {
        validate::block_length("CTR counter block", block.len(), AES_BLOCK_SIZE)?;

        let mut data = [0u8; AES_BLOCK_SIZE];
        data.copy_from_slice(block);

        Ok(Self {
            block: data,
            policy: OverflowPolicy::default(),
            exhausted: false,
        })
    }

    /// Sets the overflow policy
    pub fn with_policy(mut self, policy: OverflowPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The active overflow policy
    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Sets the counter suffix from an integer
    pub fn set_value(&mut self, value: u64) -> Result<()> {
        validate::counter_value(value, u32::MAX as u64)?;
        BigEndian::write_u32(&mut self.block[CTR_NONCE_SIZE..], value as u32);
        self.exhausted = false;
        Ok(())
    }

    /// Sets the counter suffix from 4 big-endian bytes
    pub fn set_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        validate::block_length("CTR counter suffix", bytes.len(), CTR_COUNTER_SIZE)?;
        self.block[CTR_NONCE_SIZE..].copy_from_slice(bytes);
        self.exhausted = false;
        Ok(())
    }

    /// Adds one to the counter suffix, carrying from byte 15 toward byte 12
    ///
    /// Under [`OverflowPolicy::Fail`], stepping past `0xFFFFFFFF` leaves the
    /// value at its maximum and marks the counter exhausted; the next call
    /// returns [`Error::CounterExhausted`].
    pub fn increment(&mut self) -> Result<()> {
        if self.exhausted {
            return Err(Error::CounterExhausted);
        }

        for i in (CTR_NONCE_SIZE..AES_BLOCK_SIZE).rev() {
            if self.block[i] != 0xff {
                self.block[i] += 1;
                return Ok(());
            }
            self.block[i] = 0;
        }

        // Every suffix byte carried out
        match self.policy {
            OverflowPolicy::Wrap => {}
            OverflowPolicy::Fail => {
                self.block[CTR_NONCE_SIZE..].fill(0xff);
                self.exhausted = true;
            }
        }
        Ok(())
    }

    /// Numeric value of the counter suffix
    pub fn value(&self) -> u32 {
        BigEndian::read_u32(&self.block[CTR_NONCE_SIZE..])
    }

    /// The fixed nonce prefix
    pub fn nonce(&self) -> &[u8] {
        &self.block[..CTR_NONCE_SIZE]
    }

    /// The full 16-byte counter block
    pub fn as_block(&self) -> &[u8; AES_BLOCK_SIZE] {
        &self.block
    }

    /// Whether the counter has stepped past its last value
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// How many keystream blocks can still be drawn, including the current value
    pub fn remaining_blocks(&self) -> u64 {
        if self.exhausted {
            return 0;
        }
        match self.policy {
            OverflowPolicy::Wrap => u64::MAX,
            OverflowPolicy::Fail => u32::MAX as u64 - self.value() as u64 + 1,
        }
    }
}
