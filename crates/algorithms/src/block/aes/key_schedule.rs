//! AES key expansion (FIPS-197 §5.2) and the equivalent inverse schedule (§5.3.5)

use byteorder::{BigEndian, ByteOrder};
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::tables::{inv_mix_word, sub_word, RCON};
use crate::error::{validate, Result};
use sbcrypt_params::utils::symmetric::{
    AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE, AES_MAX_ROUNDS, AES_STATE_COLUMNS,
};

/// Supported AES key sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeySize {
    /// 16-byte key, 10 rounds
    Aes128,
    /// 24-byte key, 12 rounds
    Aes192,
    /// 32-byte key, 14 rounds
    Aes256,
}

impl KeySize {
    /// Infers the key size from a key length in bytes
    pub fn from_key_len(len: usize) -> Result<Self> {
        validate::key_size(len)?;
        Ok(match len {
            AES128_KEY_SIZE => KeySize::Aes128,
            AES192_KEY_SIZE => KeySize::Aes192,
            _ => KeySize::Aes256,
        })
    }

    /// Key length in bytes
    pub const fn key_len(self) -> usize {
        match self {
            KeySize::Aes128 => AES128_KEY_SIZE,
            KeySize::Aes192 => AES192_KEY_SIZE,
            KeySize::Aes256 => AES256_KEY_SIZE,
        }
    }

    /// Number of 32-bit words in the key (Nk)
    pub const fn key_words(self) -> usize {
        self.key_len() / 4
    }

    /// Number of rounds (Nr = Nk + 6)
    pub const fn rounds(self) -> usize {
        self.key_words() + 6
    }

    /// Algorithm name for this key size
    pub const fn name(self) -> &'static str {
        match self {
            KeySize::Aes128 => "AES-128",
            KeySize::Aes192 => "AES-192",
            KeySize::Aes256 => "AES-256",
        }
    }
}

/// One direction's round keys, `rounds + 1` rows of four words
///
/// Storage is sized for AES-256; rows past `rounds` stay zero and are never
/// exposed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys {
    words: [[u32; AES_STATE_COLUMNS]; AES_MAX_ROUNDS + 1],
    rounds: usize,
}

impl RoundKeys {
    fn zeroed(rounds: usize) -> Self {
        Self {
            words: [[0u32; AES_STATE_COLUMNS]; AES_MAX_ROUNDS + 1],
            rounds,
        }
    }

    /// Number of rounds (Nr)
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Exactly `Nr + 1` round keys in application order
    pub fn rows(&self) -> &[[u32; AES_STATE_COLUMNS]] {
        &self.words[..=self.rounds]
    }

    /// Round key `round` as 16 big-endian bytes
    pub fn round_bytes(&self, round: usize) -> [u8; 16] {
        let mut out = [0u8; 16];
        BigEndian::write_u32_into(&self.rows()[round], &mut out);
        out
    }
}

/// Expanded key material for both directions
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeySchedule {
    #[zeroize(skip)]
    size: KeySize,
    encryption: RoundKeys,
    decryption: RoundKeys,
}

impl KeySchedule {
    /// Expands a 16, 24 or 32 byte key
    pub fn expand(key: &[u8]) -> Result<Self> {
        let size = KeySize::from_key_len(key.len())?;
        let nk = size.key_words();
        let nr = size.rounds();
        let total = AES_STATE_COLUMNS * (nr + 1);

        let mut w = [0u32; AES_STATE_COLUMNS * (AES_MAX_ROUNDS + 1)];
        BigEndian::read_u32_into(key, &mut w[..nk]);

        for t in nk..total {
            let mut temp = w[t - 1];
            if t % nk == 0 {
                temp = sub_word(temp.rotate_left(8)) ^ ((RCON[t / nk] as u32) << 24);
            } else if nk > 6 && t % nk == 4 {
                // AES-256 only
                temp = sub_word(temp);
            }
            w[t] = w[t - nk] ^ temp;
        }

        let mut encryption = RoundKeys::zeroed(nr);
        let mut decryption = RoundKeys::zeroed(nr);
        for round in 0..=nr {
            let row = &w[round * AES_STATE_COLUMNS..(round + 1) * AES_STATE_COLUMNS];
            encryption.words[round].copy_from_slice(row);
            decryption.words[nr - round].copy_from_slice(row);
        }

        // Middle rounds of the inverse schedule go through InvMixColumns so the
        // inverse network can share the forward round shape.
        for round in 1..nr {
            for word in decryption.words[round].iter_mut() {
                *word = inv_mix_word(*word);
            }
        }

        w.zeroize();

        Ok(Self {
            size,
            encryption,
            decryption,
        })
    }

    /// Key size this schedule was built for
    pub fn size(&self) -> KeySize {
        self.size
    }

    /// Number of rounds (Nr)
    pub fn rounds(&self) -> usize {
        self.size.rounds()
    }

    /// Round keys for the forward transform
    pub fn encryption_keys(&self) -> &RoundKeys {
        &self.encryption
    }

    /// Round keys for the inverse transform
    pub fn decryption_keys(&self) -> &RoundKeys {
        &self.decryption
    }
}
