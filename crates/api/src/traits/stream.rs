//! Stream cipher trait

use crate::error::Result;

/// A stateful keystream generator
///
/// Successive calls continue the same keystream, so splitting input into
/// chunks must produce the same output as a single call.
pub trait StreamCipher {
    /// XORs the keystream into `data` in place
    fn process(&mut self, data: &mut [u8]) -> Result<()>;

    /// Writes raw keystream bytes into `output`
    fn keystream(&mut self, output: &mut [u8]) -> Result<()>;
}
