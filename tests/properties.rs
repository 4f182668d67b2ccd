//! Property tests for round-trips and passphrase sizing.

mod support;
use support::*;

use agewrap::core::passphrase::passphrase_len;
use agewrap::{from_format, to_format, Bytes, Format};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn format_roundtrip(raw in proptest::collection::vec(any::<u8>(), 0..512)) {
        for target in [Format::Encoded, Format::Raw] {
            let out = to_format(raw.clone(), target);
            prop_assert_eq!(out.format(), target);
            prop_assert_eq!(from_format(out).unwrap(), raw.clone());
        }
    }

    #[test]
    fn encoded_reencodes_identically(raw in proptest::collection::vec(any::<u8>(), 0..256)) {
        let encoded = Bytes::encode(&raw);
        let decoded = from_format(encoded.clone()).unwrap();
        prop_assert_eq!(to_format(decoded, Format::Encoded).into_encoded(), Some(encoded));
    }

    #[test]
    fn passphrase_never_empty(bits in -1024.0f64..1024.0) {
        let passphrase = agewrap::generate_passphrase(bits).unwrap();
        prop_assert!(!passphrase.is_empty());

        let decoded = bs58::decode(&passphrase).into_vec().unwrap();
        prop_assert_eq!(decoded.len(), passphrase_len(bits));
        prop_assert_eq!(decoded.len(), ((bits / 8.0).trunc() as i64).max(1) as usize);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn passphrase_roundtrip(
        plaintext in proptest::collection::vec(any::<u8>(), 0..1024),
        passphrase in "[ -~]{1,40}",
        raw in any::<bool>(),
    ) {
        let crypter = fast_crypter();
        let target = if raw { Format::Raw } else { Format::Encoded };

        let encrypted = crypter.encrypt_data(&plaintext, Some(passphrase.as_str()), Some(target)).unwrap();
        prop_assert_eq!(encrypted.format(), target);
        prop_assert_eq!(crypter.decrypt_data(encrypted, &passphrase).unwrap(), plaintext);
    }

    #[test]
    fn public_key_roundtrip(plaintext in proptest::collection::vec(any::<u8>(), 0..1024)) {
        let (identity, recipient) = keypair();

        let encrypted = agewrap::encrypt_data_public_key(&plaintext, recipient, None).unwrap();
        prop_assert_eq!(agewrap::decrypt_data_public_key(encrypted, identity).unwrap(), plaintext);
    }
}

#[test]
fn test_entropy_floor_examples() {
    for bits in [0.0, -5.0, 1.0, 7.99] {
        let passphrase = agewrap::generate_passphrase(bits).unwrap();
        assert_eq!(bs58::decode(&passphrase).into_vec().unwrap().len(), 1);
    }
}
