//! Precomputed AES lookup tables
//!
//! Every table is produced by `const fn` evaluation from GF(2⁸) arithmetic,
//! so the contents are fixed at compile time and live in read-only statics.
//! The round tables pack one column of SubBytes ∘ MixColumns (or the inverse
//! pair) into a big-endian `u32`, which lets a full round be expressed as
//! four lookups and XORs per output word.
//!
//! Table lookups are indexed by secret data and are therefore not
//! constant-time.

/// Round constants for AES key expansion (index 0 is unused)
pub static RCON: [u8; 11] = [
    0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36,
];

/// Multiply by x in GF(2⁸) with AES's reduction poly x⁸ + x⁴ + x³ + x + 1
#[inline(always)]
const fn xtime(b: u8) -> u8 {
    (b << 1) ^ (((b >> 7) & 1) * 0x1b)
}

/// Multiply two bytes in GF(2⁸)
const fn gf_mul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    let mut i = 0;
    while i < 8 {
        if b & 1 != 0 {
            p ^= a;
        }
        a = xtime(a);
        b >>= 1;
        i += 1;
    }
    p
}

/// Multiplicative inverse as x²⁵⁴; maps 0 to 0
const fn gf_inv(x: u8) -> u8 {
    let x2 = gf_mul(x, x);
    let x4 = gf_mul(x2, x2);
    let x8 = gf_mul(x4, x4);
    let x16 = gf_mul(x8, x8);
    let x32 = gf_mul(x16, x16);
    let x64 = gf_mul(x32, x32);
    let x128 = gf_mul(x64, x64);
    let mut y = gf_mul(x128, x64);
    y = gf_mul(y, x32);
    y = gf_mul(y, x16);
    y = gf_mul(y, x8);
    y = gf_mul(y, x4);
    gf_mul(y, x2)
}

const fn generate_sbox() -> [u8; 256] {
    let mut sbox = [0u8; 256];
    let mut x = 0;
    while x < 256 {
        let i = gf_inv(x as u8);
        sbox[x] = i
            ^ i.rotate_left(1)
            ^ i.rotate_left(2)
            ^ i.rotate_left(3)
            ^ i.rotate_left(4)
            ^ 0x63;
        x += 1;
    }
    sbox
}

const fn invert_sbox(sbox: &[u8; 256]) -> [u8; 256] {
    let mut inv = [0u8; 256];
    let mut x = 0;
    while x < 256 {
        inv[sbox[x] as usize] = x as u8;
        x += 1;
    }
    inv
}

#[inline(always)]
const fn pack(b0: u8, b1: u8, b2: u8, b3: u8) -> u32 {
    ((b0 as u32) << 24) | ((b1 as u32) << 16) | ((b2 as u32) << 8) | (b3 as u32)
}

/// Expands a first table into the four byte-rotated variants
const fn rotations(first: [u32; 256]) -> [[u32; 256]; 4] {
    let mut tables = [[0u32; 256]; 4];
    let mut x = 0;
    while x < 256 {
        tables[0][x] = first[x];
        tables[1][x] = first[x].rotate_right(8);
        tables[2][x] = first[x].rotate_right(16);
        tables[3][x] = first[x].rotate_right(24);
        x += 1;
    }
    tables
}

/// Te0[x] = (2·S[x], S[x], S[x], 3·S[x])
const fn forward_tables(sbox: &[u8; 256]) -> [[u32; 256]; 4] {
    let mut first = [0u32; 256];
    let mut x = 0;
    while x < 256 {
        let s = sbox[x];
        first[x] = pack(gf_mul(s, 2), s, s, gf_mul(s, 3));
        x += 1;
    }
    rotations(first)
}

/// InvMixColumns applied to the column (v, 0, 0, 0)
#[inline(always)]
const fn inv_mix_column(v: u8) -> u32 {
    pack(gf_mul(v, 14), gf_mul(v, 9), gf_mul(v, 13), gf_mul(v, 11))
}

/// Td0[x] = InvMixColumns column of S⁻¹[x]
const fn inverse_tables(inv_sbox: &[u8; 256]) -> [[u32; 256]; 4] {
    let mut first = [0u32; 256];
    let mut x = 0;
    while x < 256 {
        first[x] = inv_mix_column(inv_sbox[x]);
        x += 1;
    }
    rotations(first)
}

/// U0[x] = InvMixColumns column of x, used on decryption round keys
const fn key_schedule_tables() -> [[u32; 256]; 4] {
    let mut first = [0u32; 256];
    let mut x = 0;
    while x < 256 {
        first[x] = inv_mix_column(x as u8);
        x += 1;
    }
    rotations(first)
}

const SBOX_DATA: [u8; 256] = generate_sbox();
const INV_SBOX_DATA: [u8; 256] = invert_sbox(&SBOX_DATA);

/// AES forward S-box
pub static SBOX: [u8; 256] = SBOX_DATA;

/// AES inverse S-box
pub static INV_SBOX: [u8; 256] = INV_SBOX_DATA;

/// Forward round tables (SubBytes + MixColumns)
pub static TE: [[u32; 256]; 4] = forward_tables(&SBOX_DATA);

/// Inverse round tables (InvSubBytes + InvMixColumns)
pub static TD: [[u32; 256]; 4] = inverse_tables(&INV_SBOX_DATA);

/// Inverse key-schedule tables (InvMixColumns on a raw word)
pub static TU: [[u32; 256]; 4] = key_schedule_tables();

/// One direction's parameters for the shared round network
///
/// `shifts[j]` is the word offset that byte position `j` of an output word is
/// read from, which encodes ShiftRows (forward) or InvShiftRows (inverse).
pub struct TableSet {
    /// Round tables indexed by byte position
    pub tables: &'static [[u32; 256]; 4],
    /// S-box applied in the final round
    pub sbox: &'static [u8; 256],
    /// Word offsets per byte position
    pub shifts: [usize; 4],
}

/// Encryption parameters
pub static FORWARD: TableSet = TableSet {
    tables: &TE,
    sbox: &SBOX,
    shifts: [0, 1, 2, 3],
};

/// Decryption parameters
pub static INVERSE: TableSet = TableSet {
    tables: &TD,
    sbox: &INV_SBOX,
    shifts: [0, 3, 2, 1],
};

/// Substitutes each byte of a word through the S-box
#[inline(always)]
pub(crate) fn sub_word(word: u32) -> u32 {
    let b = word.to_be_bytes();
    pack(
        SBOX[b[0] as usize],
        SBOX[b[1] as usize],
        SBOX[b[2] as usize],
        SBOX[b[3] as usize],
    )
}

/// Applies InvMixColumns to one round-key word
#[inline(always)]
pub(crate) fn inv_mix_word(word: u32) -> u32 {
    TU[0][(word >> 24) as usize]
        ^ TU[1][((word >> 16) & 0xff) as usize]
        ^ TU[2][((word >> 8) & 0xff) as usize]
        ^ TU[3][(word & 0xff) as usize]
}
