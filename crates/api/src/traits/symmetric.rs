//! High-level symmetric cipher trait

use crate::error::Result;

/// Common trait for keyed symmetric ciphers exposed to collaborators
pub trait SymmetricCipher {
    /// The key type used by this cipher
    type Key: ?Sized;

    /// Creates a new cipher instance with the given key
    fn new(key: &Self::Key) -> Result<Self>
    where
        Self: Sized;

    /// Returns the name of this cipher
    fn name() -> &'static str;
}
