//! Counter (CTR) mode
//!
//! Counter mode turns a block cipher into a stream cipher by encrypting
//! successive values of a counter block and XORing the result with the data.
//! The same pass serves encryption and decryption.
//!
//! The counter block layout follows NIST SP 800-38A with a 96-bit nonce and a
//! 32-bit big-endian counter. Keystream bytes left over from a partially used
//! block are kept in a [`KeystreamState`] so that calls with lengths that are
//! not multiples of the block size compose correctly.

use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::BlockCipher;
use crate::error::{validate, Error, Result};
use sbcrypt_api::traits::StreamCipher;
use sbcrypt_params::utils::symmetric::{AES_BLOCK_SIZE, CTR_DEFAULT_INITIAL_COUNTER};

pub mod counter;

pub use counter::{Counter, OverflowPolicy};

/// Buffered keystream block and read cursor
///
/// `cursor == 16` means the buffer is used up and the next byte needs a fresh
/// block.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeystreamState {
    remainder: [u8; AES_BLOCK_SIZE],
    cursor: usize,
}

impl Default for KeystreamState {
    fn default() -> Self {
        Self::new()
    }
}

impl KeystreamState {
    /// Creates an empty state
    pub fn new() -> Self {
        Self {
            remainder: [0u8; AES_BLOCK_SIZE],
            cursor: AES_BLOCK_SIZE,
        }
    }

    /// Discards any buffered keystream
    pub fn reset(&mut self) {
        self.remainder.zeroize();
        self.cursor = AES_BLOCK_SIZE;
    }

    /// Current read position within the buffered block
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of keystream bytes still buffered
    pub fn buffered(&self) -> usize {
        AES_BLOCK_SIZE - self.cursor
    }

    /// True when the next byte requires a new keystream block
    pub fn is_exhausted(&self) -> bool {
        self.cursor == AES_BLOCK_SIZE
    }

    /// Fresh blocks needed to cover `len` more bytes
    fn blocks_needed(&self, len: usize) -> u64 {
        let buffered = self.buffered();
        if len <= buffered {
            0
        } else {
            (len - buffered).div_ceil(AES_BLOCK_SIZE) as u64
        }
    }

    /// Encrypts the current counter block into the buffer and advances the counter
    fn refill<B: BlockCipher>(&mut self, cipher: &B, counter: &mut Counter) -> Result<()> {
        self.remainder.copy_from_slice(counter.as_block());
        // Keystream always comes from the forward direction
        cipher.encrypt_block(&mut self.remainder)?;
        self.cursor = 0;
        counter.increment()
    }
}

/// XORs the CTR keystream into `data` in place
///
/// Fails with [`Error::EmptyInputInvalid`] on empty input and with
/// [`Error::CounterExhausted`] when the counter cannot cover the whole input;
/// in both cases `data`, `counter` and `state` are left untouched.
pub fn apply_keystream_in_place<B: BlockCipher>(
    cipher: &B,
    data: &mut [u8],
    counter: &mut Counter,
    state: &mut KeystreamState,
) -> Result<()> {
    validate::non_empty("CTR keystream", data.len())?;
    if state.blocks_needed(data.len()) > counter.remaining_blocks() {
        return Err(Error::CounterExhausted);
    }

    for byte in data.iter_mut() {
        if state.is_exhausted() {
            state.refill(cipher, counter)?;
        }
        *byte ^= state.remainder[state.cursor];
        state.cursor += 1;
    }

    Ok(())
}

/// XORs the CTR keystream against `data`, returning a new buffer
pub fn apply_keystream<B: BlockCipher>(
    cipher: &B,
    data: &[u8],
    counter: &mut Counter,
    state: &mut KeystreamState,
) -> Result<Vec<u8>> {
    let mut output = data.to_vec();
    apply_keystream_in_place(cipher, &mut output, counter, state)?;
    Ok(output)
}

/// Counter mode bound to a cipher, a counter and its keystream buffer
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ctr<B: BlockCipher + Zeroize> {
    cipher: B,
    counter: Counter,
    state: KeystreamState,
    #[zeroize(skip)]
    initial: u32,
}

impl<B: BlockCipher + Zeroize> Ctr<B> {
    /// Creates a CTR instance with the counter starting at 1
    pub fn new(cipher: B, nonce: &[u8]) -> Result<Self> {
        Self::with_counter(cipher, nonce, CTR_DEFAULT_INITIAL_COUNTER)
    }

    /// Creates a CTR instance with an explicit initial counter value
    pub fn with_counter(cipher: B, nonce: &[u8], initial: u32) -> Result<Self> {
        let counter = Counter::new(nonce, initial as u64)?;
        Ok(Self::from_counter(cipher, counter))
    }

    /// Creates a CTR instance from a prepared counter
    pub fn from_counter(cipher: B, counter: Counter) -> Self {
        let initial = counter.value();
        Self {
            cipher,
            counter,
            state: KeystreamState::new(),
            initial,
        }
    }

    /// Process data in place (encrypt or decrypt)
    pub fn process(&mut self, data: &mut [u8]) -> Result<()> {
        apply_keystream_in_place(&self.cipher, data, &mut self.counter, &mut self.state)
    }

    /// Encrypts a message using CTR mode
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        apply_keystream(&self.cipher, plaintext, &mut self.counter, &mut self.state)
    }

    /// Decrypts a message using CTR mode
    /// In CTR mode, encryption and decryption are the same operation
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.encrypt(ciphertext)
    }

    /// Generate keystream directly into an output buffer
    ///
    /// Output starts on a block boundary; leftover bytes of a partially used
    /// block are discarded.
    pub fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        output.fill(0);
        self.state.reset();
        self.process(output)
    }

    /// Positions the stream at the start of block `block_offset`
    ///
    /// Block 0 uses the initial counter value.
    pub fn seek(&mut self, block_offset: u32) -> Result<()> {
        self.counter
            .set_value(self.initial as u64 + block_offset as u64)?;
        self.state.reset();
        Ok(())
    }

    /// Set the counter value directly and drop any buffered keystream
    pub fn set_counter(&mut self, value: u32) -> Result<()> {
        self.counter.set_value(value as u64)?;
        self.state.reset();
        Ok(())
    }

    /// Rewinds to the initial counter value
    pub fn reset(&mut self) -> Result<()> {
        self.set_counter(self.initial)
    }

    /// The current counter
    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    /// Buffered keystream state
    pub fn state(&self) -> &KeystreamState {
        &self.state
    }
}

impl<B: BlockCipher + Zeroize> StreamCipher for Ctr<B> {
    fn process(&mut self, data: &mut [u8]) -> Result<()> {
        Ctr::process(self, data)
    }

    fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        Ctr::keystream(self, output)
    }
}
