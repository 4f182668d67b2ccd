//! Test support utilities for agewrap integration tests.

#![allow(dead_code)]

use age::x25519;
use agewrap::{Config, Crypter};

/// scrypt work factor low enough to keep passphrase tests fast.
pub const FAST_WORK_FACTOR: u8 = 2;

/// A crypter with a cheap scrypt work factor.
pub fn fast_crypter() -> Crypter {
    crypter_with(Config::default())
}

/// A crypter built from `config` with the cheap work factor applied.
pub fn crypter_with(config: Config) -> Crypter {
    Crypter::new(Config {
        work_factor: Some(FAST_WORK_FACTOR),
        ..config
    })
    .expect("valid test config")
}

/// A fresh identity and its recipient.
pub fn keypair() -> (x25519::Identity, x25519::Recipient) {
    let identity = agewrap::generate_identity();
    let recipient = agewrap::identity_to_recipient(&identity);
    (identity, recipient)
}
