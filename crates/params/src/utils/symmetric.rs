//! Constants for symmetric encryption algorithms

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Number of 32-bit columns in the AES state (Nb)
pub const AES_STATE_COLUMNS: usize = 4;

/// Largest round count (AES-256)
pub const AES_MAX_ROUNDS: usize = 14;

/// CTR nonce size in bytes
pub const CTR_NONCE_SIZE: usize = 12;

/// CTR counter suffix size in bytes
pub const CTR_COUNTER_SIZE: usize = AES_BLOCK_SIZE - CTR_NONCE_SIZE;

/// Initial counter value used when the caller supplies none
pub const CTR_DEFAULT_INITIAL_COUNTER: u32 = 1;
