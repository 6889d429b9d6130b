//! Trait definitions for cipher seams

pub mod block;
pub mod stream;
pub mod symmetric;

pub use block::BlockCipher;
pub use stream::StreamCipher;
pub use symmetric::SymmetricCipher;
