//! Property-based tests for AES-CTR

use proptest::prelude::*;
use sbcrypt_algorithms::{Aes, Ctr};
use sbcrypt_symmetric::{AesCtrHandler, CtrCiphertext};

fn key_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 16),
        prop::collection::vec(any::<u8>(), 24),
        prop::collection::vec(any::<u8>(), 32),
    ]
}

proptest! {
    #[test]
    fn handler_roundtrip(
        key in key_strategy(),
        data in prop::collection::vec(any::<u8>(), 1..=300)
    ) {
        let mut handler = AesCtrHandler::new(&key).unwrap();
        let package = handler.encrypt(&data).unwrap();
        prop_assert_eq!(package.ciphertext.len(), data.len());

        let decrypted = handler.decrypt(&package.ciphertext, package.nonce.as_bytes()).unwrap();
        prop_assert_eq!(decrypted, data);
    }

    #[test]
    fn chunked_matches_one_shot(
        key in any::<[u8; 16]>(),
        nonce in any::<[u8; 12]>(),
        data in prop::collection::vec(any::<u8>(), 2..=200),
        splits in prop::collection::vec(1usize..40, 1..8)
    ) {
        let cipher = Aes::new(&key).unwrap();
        let mut one_shot = Ctr::new(cipher.clone(), &nonce).unwrap();
        let expected = one_shot.encrypt(&data).unwrap();

        let mut ctr = Ctr::new(cipher, &nonce).unwrap();
        let mut output = Vec::with_capacity(data.len());
        let mut rest = &data[..];
        for len in splits {
            if rest.is_empty() {
                break;
            }
            let take = len.min(rest.len());
            output.extend(ctr.encrypt(&rest[..take]).unwrap());
            rest = &rest[take..];
        }
        if !rest.is_empty() {
            output.extend(ctr.encrypt(rest).unwrap());
        }
        prop_assert_eq!(output, expected);
    }

    #[test]
    fn block_roundtrip(key in key_strategy(), block in any::<[u8; 16]>()) {
        let handler = AesCtrHandler::new(&key).unwrap();
        let ciphertext = handler.block_encrypt(&block).unwrap();
        prop_assert_eq!(handler.block_decrypt(&ciphertext).unwrap(), block);
    }

    #[test]
    fn package_text_roundtrip(
        key in any::<[u8; 32]>(),
        data in prop::collection::vec(any::<u8>(), 1..=100)
    ) {
        let mut handler = AesCtrHandler::new(&key).unwrap();
        let package = handler.encrypt(&data).unwrap();
        let parsed: CtrCiphertext = package.to_string().parse().unwrap();
        prop_assert_eq!(handler.decrypt_package(&parsed).unwrap(), data);
    }
}
