//! Encryption engine interface.
//!
//! The dispatchers only talk to an engine through [`Encryptable`] and
//! [`Decryptable`]; the actual transform, key derivation and ciphertext
//! framing belong to the implementation.
//!
//! ## Backends
//!
//! - **age**: x25519 recipients/identities and scrypt passphrases.
//!
//! ## Adding a New Backend
//!
//! 1. Implement `Encryptable` and `Decryptable`
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use ::age::x25519;

use crate::error::{CipherError, Result};

mod age;

pub use age::{AgeDecrypter, AgeEncrypter};

/// Encrypting half of an engine.
///
/// An instance is configured either with one passphrase or with any
/// number of recipients, never both.
pub trait Encryptable {
    /// Type representing a recipient public key.
    type Recipient;

    /// Encrypt to a passphrase.
    ///
    /// # Errors
    ///
    /// Fails if a passphrase or a recipient is already registered.
    fn set_passphrase(&mut self, passphrase: &str) -> Result<()>;

    /// Add a recipient.
    ///
    /// # Errors
    ///
    /// Fails if a passphrase is already registered.
    fn add_recipient(&mut self, recipient: Self::Recipient) -> Result<()>;

    /// Encrypt plaintext for everything registered so far.
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Backend name for display.
    fn name(&self) -> &'static str;
}

/// Decrypting half of an engine.
///
/// Passphrases and identities are candidates; decryption succeeds if any
/// of them unlocks the ciphertext.
pub trait Decryptable {
    /// Type representing a private identity/key.
    type Identity;

    /// Add a passphrase candidate.
    fn add_passphrase(&mut self, passphrase: &str);

    /// Add an identity candidate.
    fn add_identity(&mut self, identity: Self::Identity);

    /// Decrypt a raw ciphertext with the registered candidates.
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>>;

    /// Backend name for display.
    fn name(&self) -> &'static str;
}

/// Generate a fresh x25519 identity.
pub fn generate_identity() -> x25519::Identity {
    x25519::Identity::generate()
}

/// Public recipient matching an identity.
pub fn identity_to_recipient(identity: &x25519::Identity) -> x25519::Recipient {
    identity.to_public()
}

/// Parse a public key string into an age recipient
///
/// # Errors
///
/// Returns `CipherError::InvalidPublicKey` if the key format is invalid.
pub fn parse_recipient(key: &str) -> Result<x25519::Recipient> {
    key.trim()
        .parse::<x25519::Recipient>()
        .map_err(|_| CipherError::InvalidPublicKey(key.to_string()).into())
}

/// Parse an `AGE-SECRET-KEY-1...` string into an identity.
///
/// # Errors
///
/// Returns `CipherError::InvalidIdentity` if the key format is invalid.
/// The rejected key itself is never echoed back.
pub fn parse_identity(key: &str) -> Result<x25519::Identity> {
    key.trim()
        .parse::<x25519::Identity>()
        .map_err(|e: &str| CipherError::InvalidIdentity(e.to_string()).into())
}
