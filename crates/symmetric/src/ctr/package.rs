//! Self-contained ciphertext package
//!
//! Binary layout: `nonce (12) ∥ initial counter (4, big-endian) ∥ ciphertext`.
//! The text form is standard base64 of the binary layout.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use byteorder::{BigEndian, ByteOrder};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::CtrNonce;
use crate::error::{validate_format, Error, Result};
use sbcrypt_params::utils::symmetric::{CTR_COUNTER_SIZE, CTR_NONCE_SIZE};

const HEADER_LEN: usize = CTR_NONCE_SIZE + CTR_COUNTER_SIZE;

/// Everything needed to decrypt a CTR message other than the key
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CtrCiphertext {
    /// Encrypted bytes, same length as the plaintext
    pub ciphertext: Vec<u8>,
    /// Nonce the message was encrypted under
    pub nonce: CtrNonce,
    /// Counter value of the first keystream block
    pub initial_counter: u32,
}

impl CtrCiphertext {
    /// Creates a new package
    pub fn new(nonce: CtrNonce, initial_counter: u32, ciphertext: Vec<u8>) -> Self {
        Self {
            ciphertext,
            nonce,
            initial_counter,
        }
    }

    /// Serializes to the binary layout
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.ciphertext.len());
        out.extend_from_slice(self.nonce.as_bytes());
        let mut counter = [0u8; CTR_COUNTER_SIZE];
        BigEndian::write_u32(&mut counter, self.initial_counter);
        out.extend_from_slice(&counter);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Parses the binary layout
    ///
    /// A package must carry at least one ciphertext byte, since empty
    /// messages are never encrypted.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate_format(bytes.len() > HEADER_LEN, "package shorter than its header")?;

        let nonce = CtrNonce::from_slice(&bytes[..CTR_NONCE_SIZE])?;
        let initial_counter = BigEndian::read_u32(&bytes[CTR_NONCE_SIZE..HEADER_LEN]);

        Ok(Self::new(nonce, initial_counter, bytes[HEADER_LEN..].to_vec()))
    }

    /// Parses the base64 text form
    pub fn from_string(s: &str) -> Result<Self> {
        let bytes = STANDARD
            .decode(s.trim())
            .map_err(|_| Error::InvalidPackage {
                reason: "invalid base64",
            })?;
        Self::from_bytes(&bytes)
    }

    /// Encodes to the base64 text form
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }
}

impl fmt::Display for CtrCiphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

impl FromStr for CtrCiphertext {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}
