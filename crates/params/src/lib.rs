//! Constant values for sbcrypt cipher operations
//!
//! This library provides the sizes and defaults shared across the sbcrypt project.

#![no_std]

pub mod utils;
