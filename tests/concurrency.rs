//! Independent calls from many threads share nothing.

mod support;
use support::*;

use std::thread;

#[test]
fn test_parallel_calls_are_independent() {
    let crypter = fast_crypter();

    thread::scope(|s| {
        let handles: Vec<_> = (0..8u8)
            .map(|i| {
                let crypter = &crypter;
                s.spawn(move || {
                    let plaintext = vec![i; 64 + i as usize];
                    let passphrase = format!("passphrase-{}", i);

                    let encrypted = crypter
                        .encrypt_data(&plaintext, Some(passphrase.as_str()), None)
                        .unwrap();
                    let decrypted = crypter.decrypt_data(encrypted, &passphrase).unwrap();
                    assert_eq!(decrypted, plaintext);

                    let (identity, recipient) = keypair();
                    let encrypted = crypter
                        .encrypt_data_public_key(&plaintext, recipient, None)
                        .unwrap();
                    let decrypted = crypter.decrypt_data_public_key(encrypted, identity).unwrap();
                    assert_eq!(decrypted, plaintext);
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    });
}

#[test]
fn test_crypter_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<agewrap::Crypter>();
    assert_send_sync::<agewrap::Ciphertext>();
}
