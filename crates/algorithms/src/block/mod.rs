//! Block cipher implementations and modes of operation

pub mod aes;
pub mod modes;

pub use sbcrypt_api::traits::BlockCipher;

// Re-exports
pub use aes::{Aes, KeySchedule, KeySize};
pub use modes::Ctr;
