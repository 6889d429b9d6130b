//! Validation utilities shared by every sbcrypt crate

use super::{Error, Result};

/// Validate an AES key length (16, 24 or 32 bytes)
#[inline(always)]
pub fn key_size(actual: usize) -> Result<()> {
    match actual {
        16 | 24 | 32 => Ok(()),
        _ => Err(Error::KeySizeInvalid { actual }),
    }
}

/// Validate a nonce length
#[inline(always)]
pub fn nonce_size(actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::NonceSizeInvalid { expected, actual });
    }
    Ok(())
}

/// Validate that a buffer is exactly one block long
#[inline(always)]
pub fn block_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::BlockLengthInvalid {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that stream input is non-empty
#[inline(always)]
pub fn non_empty(context: &'static str, len: usize) -> Result<()> {
    if len == 0 {
        return Err(Error::EmptyInputInvalid { context });
    }
    Ok(())
}

/// Validate a counter seed against the largest value the counter can hold
#[inline(always)]
pub fn counter_value(value: u64, max: u64) -> Result<()> {
    if value > max {
        return Err(Error::CounterValueInvalid {
            value,
            reason: "exceeds the maximum counter value",
        });
    }
    Ok(())
}

/// Validate a package decoding condition
#[inline(always)]
pub fn package(condition: bool, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidPackage { reason });
    }
    Ok(())
}
