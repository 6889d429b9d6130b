//! Handler configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use sbcrypt_algorithms::{Counter, OverflowPolicy};
use sbcrypt_params::utils::symmetric::CTR_DEFAULT_INITIAL_COUNTER;

use crate::error::Result;

/// Counter settings shared by every message a handler processes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CtrConfig {
    /// Counter value used for the first keystream block of each message
    pub initial_counter: u32,
    /// Behavior when the 32-bit counter suffix runs out
    pub overflow_policy: OverflowPolicy,
}

impl Default for CtrConfig {
    fn default() -> Self {
        Self {
            initial_counter: CTR_DEFAULT_INITIAL_COUNTER,
            overflow_policy: OverflowPolicy::default(),
        }
    }
}

impl CtrConfig {
    /// Sets the initial counter value
    pub fn with_initial_counter(mut self, initial_counter: u32) -> Self {
        self.initial_counter = initial_counter;
        self
    }

    /// Sets the overflow policy
    pub fn with_overflow_policy(mut self, overflow_policy: OverflowPolicy) -> Self {
        self.overflow_policy = overflow_policy;
        self
    }

    /// Builds a counter for `nonce` starting at `initial`
    pub(crate) fn counter_at(&self, nonce: &[u8], initial: u32) -> Result<Counter> {
        Ok(Counter::new(nonce, initial as u64)?.with_policy(self.overflow_policy))
    }

    /// Builds a counter for `nonce` starting at the configured initial value
    pub(crate) fn counter(&self, nonce: &[u8]) -> Result<Counter> {
        self.counter_at(nonce, self.initial_counter)
    }
}
