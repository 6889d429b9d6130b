//! The table-driven AES round network
//!
//! Forward and inverse transforms share [`transform_block`]; the direction is
//! selected entirely by the [`TableSet`] passed in.

use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

use super::key_schedule::RoundKeys;
use super::tables::TableSet;
use crate::error::{validate, Result};
use sbcrypt_params::utils::symmetric::{AES_BLOCK_SIZE, AES_STATE_COLUMNS};

#[inline(always)]
fn byte(word: u32, shift: u32) -> usize {
    ((word >> shift) & 0xff) as usize
}

/// Runs one 16-byte block through the round network
///
/// `keys` must be the round-key set matching `set`: encryption keys with
/// [`FORWARD`](super::tables::FORWARD), decryption keys with
/// [`INVERSE`](super::tables::INVERSE).
pub fn transform_block(
    block: &[u8],
    keys: &RoundKeys,
    set: &TableSet,
) -> Result<[u8; AES_BLOCK_SIZE]> {
    validate::block_length("AES block", block.len(), AES_BLOCK_SIZE)?;

    let rows = keys.rows();
    let rounds = keys.rounds();
    let t = set.tables;
    let [_, s1, s2, s3] = set.shifts;

    let mut state = [0u32; AES_STATE_COLUMNS];
    BigEndian::read_u32_into(block, &mut state);

    // Initial AddRoundKey
    for (word, key) in state.iter_mut().zip(rows[0].iter()) {
        *word ^= *key;
    }

    let mut scratch = [0u32; AES_STATE_COLUMNS];
    for round_key in &rows[1..rounds] {
        for i in 0..AES_STATE_COLUMNS {
            scratch[i] = t[0][byte(state[i], 24)]
                ^ t[1][byte(state[(i + s1) % 4], 16)]
                ^ t[2][byte(state[(i + s2) % 4], 8)]
                ^ t[3][byte(state[(i + s3) % 4], 0)]
                ^ round_key[i];
        }
        state = scratch;
    }

    // Final round: S-box only, no column mixing
    let last = &rows[rounds];
    let sbox = set.sbox;
    let mut out = [0u8; AES_BLOCK_SIZE];
    for i in 0..AES_STATE_COLUMNS {
        let k = last[i];
        out[4 * i] = sbox[byte(state[i], 24)] ^ (k >> 24) as u8;
        out[4 * i + 1] = sbox[byte(state[(i + s1) % 4], 16)] ^ (k >> 16) as u8;
        out[4 * i + 2] = sbox[byte(state[(i + s2) % 4], 8)] ^ (k >> 8) as u8;
        out[4 * i + 3] = sbox[byte(state[(i + s3) % 4], 0)] ^ k as u8;
    }

    state.zeroize();
    scratch.zeroize();

    Ok(out)
}
