//! End-to-end behavior of the AES-CTR handlers

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sbcrypt_algorithms::Aes;
use sbcrypt_api::Error;
use sbcrypt_params::utils::symmetric::CTR_NONCE_SIZE;
use sbcrypt_symmetric::{AesCtrHandler, CtrCiphertext, CtrConfig, OverflowPolicy};

const KEY: [u8; 16] = [
    0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
];

#[test]
fn test_boundary_lengths() {
    let mut handler = AesCtrHandler::new(&KEY).unwrap();

    assert!(matches!(
        handler.encrypt(&[]),
        Err(Error::EmptyInputInvalid { .. })
    ));

    for len in [1usize, 15, 16, 17, 33] {
        let plaintext = vec![0xa5u8; len];
        let package = handler.encrypt(&plaintext).unwrap();
        assert_eq!(package.ciphertext.len(), len);
        assert_eq!(package.nonce.as_bytes().len(), CTR_NONCE_SIZE);
        assert_eq!(handler.decrypt_package(&package).unwrap(), plaintext);
    }
}

#[test]
fn test_nonces_are_fresh() {
    let mut handler = AesCtrHandler::new(&KEY).unwrap();
    let nonces: HashSet<_> = (0..100)
        .map(|_| handler.encrypt(b"same message").unwrap().nonce)
        .collect();
    assert_eq!(nonces.len(), 100);
}

#[test]
fn test_deterministic_with_seeded_rng() {
    let run = || {
        let mut handler = AesCtrHandler::new(&KEY).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(2024);
        (0..3)
            .map(|i| handler.encrypt_with_rng(&mut rng, &vec![i as u8; 40]).unwrap())
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_keystream_matches_counter_blocks() {
    // Counter 0xff carries into 0x100 inside the message
    let config = CtrConfig::default().with_initial_counter(0xff);
    let mut handler = AesCtrHandler::with_config(&KEY, config).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let package = handler.encrypt_with_rng(&mut rng, &[0u8; 32]).unwrap();

    let cipher = Aes::new(&KEY).unwrap();
    let mut block = [0u8; 16];
    block[..12].copy_from_slice(package.nonce.as_bytes());
    block[12..].copy_from_slice(&0xffu32.to_be_bytes());
    assert_eq!(package.ciphertext[..16], cipher.encrypt_to_block(&block).unwrap());
    block[12..].copy_from_slice(&0x100u32.to_be_bytes());
    assert_eq!(package.ciphertext[16..], cipher.encrypt_to_block(&block).unwrap());
}

#[test]
fn test_wrong_nonce_or_counter_does_not_decrypt() {
    let mut handler = AesCtrHandler::new(&KEY).unwrap();
    let plaintext = b"only the right nonce recovers this";
    let package = handler.encrypt(plaintext).unwrap();

    let mut nonce = *package.nonce.as_bytes();
    nonce[0] ^= 1;
    assert_ne!(handler.decrypt(&package.ciphertext, &nonce).unwrap(), plaintext);
    assert_ne!(
        handler
            .decrypt_with_counter(&package.ciphertext, package.nonce.as_bytes(), 2)
            .unwrap(),
        plaintext
    );
}

#[test]
fn test_error_codes() {
    let cases = [
        (AesCtrHandler::from_optional_key(None).err(), "AES_KEY_MISSING"),
        (AesCtrHandler::new(&[0u8; 20]).err(), "AES_KEY_SIZE_INVALID"),
        (
            AesCtrHandler::new(&KEY).unwrap().decrypt(b"x", &[0u8; 4]).err(),
            "AES_NONCE_INVALID",
        ),
        (
            AesCtrHandler::new(&KEY).unwrap().block_encrypt(&[0u8; 4]).err(),
            "AES_TEXT_INVALID",
        ),
        (CtrCiphertext::from_bytes(&[0u8; 3]).err(), "CTR_PACKAGE_INVALID"),
    ];
    for (err, code) in cases {
        assert_eq!(err.map(|e| e.code()), Some(code));
    }
}

#[test]
fn test_exhaustion_is_reported_before_output() {
    let config = CtrConfig::default().with_initial_counter(u32::MAX - 1);
    let mut handler = AesCtrHandler::with_config(&KEY, config).unwrap();

    assert!(handler.encrypt(&[0u8; 32]).is_ok());
    let err = handler.encrypt(&[0u8; 33]).unwrap_err();
    assert_eq!(err, Error::CounterExhausted);
    assert_eq!(err.code(), "CTR_COUNTER_ERROR");

    let wrapping = config.with_overflow_policy(OverflowPolicy::Wrap);
    let mut handler = AesCtrHandler::with_config(&KEY, wrapping).unwrap();
    let package = handler.encrypt(&[0u8; 33]).unwrap();
    assert_eq!(handler.decrypt_package(&package).unwrap(), vec![0u8; 33]);
}
