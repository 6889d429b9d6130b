//! Known-answer tests against FIPS-197 and NIST SP 800-38A

use sbcrypt_algorithms::block::BlockCipher;
use sbcrypt_algorithms::{Aes, Counter, Ctr};
use sbcrypt_symmetric::{AesCtrHandler, CtrConfig, FixedNonceCtr};
use sbcrypt_tests::vectors::{decode, FIPS197_BLOCKS, SP800_38A_CTR};

#[test]
fn test_fips197_block_vectors() {
    for v in FIPS197_BLOCKS {
        let cipher = Aes::new(&decode(v.key)).unwrap();
        let plaintext = decode(v.plaintext);
        let expected = decode(v.ciphertext);

        let mut block = plaintext.clone();
        cipher.encrypt_block(&mut block).unwrap();
        assert_eq!(block, expected, "{} encrypt", v.name);

        cipher.decrypt_block(&mut block).unwrap();
        assert_eq!(block, plaintext, "{} decrypt", v.name);
    }
}

#[test]
fn test_fips197_through_handler() {
    for v in FIPS197_BLOCKS {
        let handler = AesCtrHandler::new(&decode(v.key)).unwrap();
        let ciphertext = handler.block_encrypt(&decode(v.plaintext)).unwrap();
        assert_eq!(ciphertext.to_vec(), decode(v.ciphertext), "{}", v.name);
        assert_eq!(
            handler.block_decrypt(&ciphertext).unwrap().to_vec(),
            decode(v.plaintext),
            "{}",
            v.name
        );
    }
}

#[test]
fn test_sp800_38a_ctr_engine() {
    for v in SP800_38A_CTR {
        let cipher = Aes::new(&decode(v.key)).unwrap();
        let counter = Counter::from_block(&decode(v.counter_block)).unwrap();

        let mut ctr = Ctr::from_counter(cipher.clone(), counter.clone());
        assert_eq!(ctr.encrypt(&decode(v.plaintext)).unwrap(), decode(v.ciphertext), "{}", v.name);

        let mut ctr = Ctr::from_counter(cipher, counter);
        assert_eq!(ctr.decrypt(&decode(v.ciphertext)).unwrap(), decode(v.plaintext), "{}", v.name);
    }
}

#[test]
fn test_sp800_38a_byte_at_a_time() {
    for v in SP800_38A_CTR {
        let cipher = Aes::new(&decode(v.key)).unwrap();
        let counter = Counter::from_block(&decode(v.counter_block)).unwrap();
        let mut ctr = Ctr::from_counter(cipher, counter);

        let mut data = decode(v.plaintext);
        for byte in data.chunks_mut(1) {
            ctr.process(byte).unwrap();
        }
        assert_eq!(data, decode(v.ciphertext), "{}", v.name);
    }
}

#[test]
fn test_sp800_38a_fixed_nonce_handler() {
    for v in SP800_38A_CTR {
        let block = decode(v.counter_block);
        let initial = u32::from_be_bytes([block[12], block[13], block[14], block[15]]);
        let config = CtrConfig::default().with_initial_counter(initial);
        let handler = FixedNonceCtr::with_config(&decode(v.key), &block[..12], config).unwrap();

        let ciphertext = handler.encrypt(&decode(v.plaintext)).unwrap();
        assert_eq!(ciphertext, decode(v.ciphertext), "{}", v.name);
        let plaintext = handler.decrypt(&ciphertext).unwrap();
        assert_eq!(plaintext, decode(v.plaintext), "{}", v.name);
    }
}
