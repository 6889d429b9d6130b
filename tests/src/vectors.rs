//! Published known-answer vectors
//!
//! Block vectors come from FIPS-197 Appendix C, CTR vectors from
//! NIST SP 800-38A Appendix F.5. All values are hex.

/// A single-block cipher vector
#[derive(Debug, Clone, Copy)]
pub struct BlockVector {
    /// Source of the vector
    pub name: &'static str,
    /// Cipher key
    pub key: &'static str,
    /// One plaintext block
    pub plaintext: &'static str,
    /// Expected ciphertext block
    pub ciphertext: &'static str,
}

/// A multi-block CTR vector
#[derive(Debug, Clone, Copy)]
pub struct CtrVector {
    /// Source of the vector
    pub name: &'static str,
    /// Cipher key
    pub key: &'static str,
    /// Full 16-byte initial counter block
    pub counter_block: &'static str,
    /// Plaintext
    pub plaintext: &'static str,
    /// Expected ciphertext
    pub ciphertext: &'static str,
}

/// FIPS-197 Appendix C example vectors
pub const FIPS197_BLOCKS: [BlockVector; 3] = [
    BlockVector {
        name: "FIPS-197 C.1 AES-128",
        key: "000102030405060708090a0b0c0d0e0f",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "69c4e0d86a7b0430d8cdb78070b4c55a",
    },
    BlockVector {
        name: "FIPS-197 C.2 AES-192",
        key: "000102030405060708090a0b0c0d0e0f1011121314151617",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "dda97ca4864cdfe06eaf70a0ec0d7191",
    },
    BlockVector {
        name: "FIPS-197 C.3 AES-256",
        key: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "8ea2b7ca516745bfeafc49904b496089",
    },
];

const SP800_38A_PLAINTEXT: &str = "6bc1bee22e409f96e93d7e117393172a\
                                   ae2d8a571e03ac9c9eb76fac45af8e51\
                                   30c81c46a35ce411e5fbc1191a0a52ef\
                                   f69f2445df4f9b17ad2b417be66c3710";

/// NIST SP 800-38A CTR-AES vectors
pub const SP800_38A_CTR: [CtrVector; 2] = [
    CtrVector {
        name: "SP 800-38A F.5.1 CTR-AES128",
        key: "2b7e151628aed2a6abf7158809cf4f3c",
        counter_block: "f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff",
        plaintext: SP800_38A_PLAINTEXT,
        ciphertext: "874d6191b620e3261bef6864990db6ce\
                     9806f66b7970fdff8617187bb9fffdff\
                     5ae4df3edbd5d35e5b4f09020db03eab\
                     1e031dda2fbe03d1792170a0f3009cee",
    },
    CtrVector {
        name: "SP 800-38A F.5.5 CTR-AES256",
        key: "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
        counter_block: "f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff",
        plaintext: SP800_38A_PLAINTEXT,
        ciphertext: "601ec313775789a5b7a7f504bbf3d228\
                     f443e3ca4d62b59aca84e990cacaf5c5\
                     2b0930daa23de94ce87017ba2d84988d\
                     dfc9c58db67aada613c2dd08457941a6",
    },
];

/// Decodes a vector field
pub fn decode(field: &str) -> Vec<u8> {
    hex::decode(field).expect("invalid hex in test vector")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_decode() {
        for v in FIPS197_BLOCKS.iter() {
            assert_eq!(decode(v.plaintext).len(), 16, "{}", v.name);
            assert_eq!(decode(v.ciphertext).len(), 16, "{}", v.name);
        }
        for v in SP800_38A_CTR.iter() {
            assert_eq!(decode(v.counter_block).len(), 16, "{}", v.name);
            assert_eq!(decode(v.plaintext).len(), decode(v.ciphertext).len(), "{}", v.name);
        }
    }

    #[test]
    #[should_panic(expected = "invalid hex in test vector")]
    fn test_malformed_field_panics() {
        decode("00zz");
    }
}
