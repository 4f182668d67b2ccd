//! Encryption and decryption dispatch.
//!
//! Each call builds a fresh engine, registers the passphrase or the
//! recipients/identities in order, runs it once and drops it. Nothing is
//! shared between calls, so a [`Crypter`] can be used from many threads.

use ::age::x25519;
use tracing::{debug, trace, warn};

use super::cipher::{parse_identity, parse_recipient, Decryptable, Encryptable};
use super::config::Config;
use super::format::{from_format, to_format};
use super::passphrase::generate_passphrase;
use super::types::{Ciphertext, Format, OneOrMany};
use crate::error::Result;

/// Ciphertext together with the passphrase generated for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sealed {
    pub ciphertext: Ciphertext,
    pub passphrase: String,
}

/// Run an encrypter once and normalize its output.
pub fn seal<E: Encryptable>(engine: &E, plaintext: &[u8], target: Format) -> Result<Ciphertext> {
    trace!(engine = engine.name(), format = %target, "sealing");
    let raw = engine.encrypt(plaintext)?;
    Ok(to_format(raw, target))
}

/// Normalize a ciphertext and run a decrypter once.
pub fn open<D: Decryptable>(engine: &D, ciphertext: impl Into<Ciphertext>) -> Result<Vec<u8>> {
    let raw = from_format(ciphertext)?;
    trace!(engine = engine.name(), ciphertext_len = raw.len(), "opening");
    engine.decrypt(&raw)
}

/// Encryption facade bound to a [`Config`].
#[derive(Debug, Clone, Default)]
pub struct Crypter {
    config: Config,
}

impl Crypter {
    /// Create a crypter, validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the configuration is out of range.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate a passphrase with the configured entropy.
    pub fn generate_passphrase(&self) -> Result<String> {
        generate_passphrase(self.config.passphrase_bits)
    }

    /// Encrypt with a passphrase.
    ///
    /// Without a passphrase one is generated and then discarded, leaving
    /// the ciphertext unrecoverable. Use
    /// [`Crypter::encrypt_data_with_new_passphrase`] to keep it.
    pub fn encrypt_data(
        &self,
        data: &[u8],
        passphrase: Option<&str>,
        target: Option<Format>,
    ) -> Result<Ciphertext> {
        match passphrase {
            Some(passphrase) => self.encrypt_passphrase(data, passphrase, target),
            None => {
                warn!("encrypting with a generated passphrase that is not returned");
                let generated = self.generate_passphrase()?;
                self.encrypt_passphrase(data, &generated, target)
            }
        }
    }

    /// Encrypt with a freshly generated passphrase and return both.
    pub fn encrypt_data_with_new_passphrase(
        &self,
        data: &[u8],
        target: Option<Format>,
    ) -> Result<Sealed> {
        let passphrase = self.generate_passphrase()?;
        let ciphertext = self.encrypt_passphrase(data, &passphrase, target)?;
        Ok(Sealed {
            ciphertext,
            passphrase,
        })
    }

    /// Decrypt a passphrase-encrypted ciphertext in either representation.
    pub fn decrypt_data(
        &self,
        ciphertext: impl Into<Ciphertext>,
        passphrase: &str,
    ) -> Result<Vec<u8>> {
        let mut engine = self.config.decrypter();
        engine.add_passphrase(passphrase);

        debug!("decrypting with passphrase");
        open(&engine, ciphertext)
    }

    /// Encrypt to one or more recipients.
    pub fn encrypt_data_public_key(
        &self,
        data: &[u8],
        recipients: impl Into<OneOrMany<x25519::Recipient>>,
        target: Option<Format>,
    ) -> Result<Ciphertext> {
        let recipients = recipients.into();
        let target = target.unwrap_or(self.config.format);
        debug!(recipients = recipients.len(), format = %target, "encrypting to recipients");

        let mut engine = self.config.encrypter();
        for recipient in recipients {
            engine.add_recipient(recipient)?;
        }

        seal(&engine, data, target)
    }

    /// Decrypt with one or more identities.
    pub fn decrypt_data_public_key(
        &self,
        ciphertext: impl Into<Ciphertext>,
        identities: impl Into<OneOrMany<x25519::Identity>>,
    ) -> Result<Vec<u8>> {
        let identities = identities.into();
        debug!(identities = identities.len(), "decrypting with identities");

        let mut engine = self.config.decrypter();
        for identity in identities {
            engine.add_identity(identity);
        }

        open(&engine, ciphertext)
    }

    /// Encrypt to one or more `age1...` public key strings.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidPublicKey` for the first string that
    /// does not parse; nothing is encrypted in that case.
    pub fn encrypt_data_public_key_str<'a>(
        &self,
        data: &[u8],
        recipients: impl Into<OneOrMany<&'a str>>,
        target: Option<Format>,
    ) -> Result<Ciphertext> {
        let recipients: OneOrMany<&str> = recipients.into();
        let recipients = recipients.try_map(parse_recipient)?;
        self.encrypt_data_public_key(data, recipients, target)
    }

    /// Decrypt with one or more `AGE-SECRET-KEY-1...` strings.
    pub fn decrypt_data_public_key_str<'a>(
        &self,
        ciphertext: impl Into<Ciphertext>,
        identities: impl Into<OneOrMany<&'a str>>,
    ) -> Result<Vec<u8>> {
        let identities: OneOrMany<&str> = identities.into();
        let identities = identities.try_map(parse_identity)?;
        self.decrypt_data_public_key(ciphertext, identities)
    }

    fn encrypt_passphrase(
        &self,
        data: &[u8],
        passphrase: &str,
        target: Option<Format>,
    ) -> Result<Ciphertext> {
        let target = target.unwrap_or(self.config.format);
        debug!(plaintext_len = data.len(), format = %target, "encrypting with passphrase");

        let mut engine = self.config.encrypter();
        engine.set_passphrase(passphrase)?;

        seal(&engine, data, target)
    }
}

/// Encrypt with a passphrase using the default configuration.
///
/// See [`Crypter::encrypt_data`].
pub fn encrypt_data(
    data: &[u8],
    passphrase: Option<&str>,
    target: Option<Format>,
) -> Result<Ciphertext> {
    Crypter::default().encrypt_data(data, passphrase, target)
}

/// Encrypt with a generated passphrase using the default configuration.
pub fn encrypt_data_with_new_passphrase(data: &[u8], target: Option<Format>) -> Result<Sealed> {
    Crypter::default().encrypt_data_with_new_passphrase(data, target)
}

/// Decrypt with a passphrase using the default configuration.
pub fn decrypt_data(ciphertext: impl Into<Ciphertext>, passphrase: &str) -> Result<Vec<u8>> {
    Crypter::default().decrypt_data(ciphertext, passphrase)
}

/// Encrypt to recipients using the default configuration.
pub fn encrypt_data_public_key(
    data: &[u8],
    recipients: impl Into<OneOrMany<x25519::Recipient>>,
    target: Option<Format>,
) -> Result<Ciphertext> {
    Crypter::default().encrypt_data_public_key(data, recipients, target)
}

/// Decrypt with identities using the default configuration.
pub fn decrypt_data_public_key(
    ciphertext: impl Into<Ciphertext>,
    identities: impl Into<OneOrMany<x25519::Identity>>,
) -> Result<Vec<u8>> {
    Crypter::default().decrypt_data_public_key(ciphertext, identities)
}

/// Encrypt to public key strings using the default configuration.
pub fn encrypt_data_public_key_str<'a>(
    data: &[u8],
    recipients: impl Into<OneOrMany<&'a str>>,
    target: Option<Format>,
) -> Result<Ciphertext> {
    Crypter::default().encrypt_data_public_key_str(data, recipients, target)
}

/// Decrypt with identity strings using the default configuration.
pub fn decrypt_data_public_key_str<'a>(
    ciphertext: impl Into<Ciphertext>,
    identities: impl Into<OneOrMany<&'a str>>,
) -> Result<Vec<u8>> {
    Crypter::default().decrypt_data_public_key_str(ciphertext, identities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    /// XOR engine that records the order recipients and identities arrive in.
    #[derive(Default)]
    struct Recording {
        key: u8,
        seen: Vec<u8>,
    }

    impl Encryptable for Recording {
        type Recipient = u8;

        fn set_passphrase(&mut self, passphrase: &str) -> Result<()> {
            self.key = passphrase.len() as u8;
            Ok(())
        }

        fn add_recipient(&mut self, recipient: u8) -> Result<()> {
            self.seen.push(recipient);
            self.key ^= recipient;
            Ok(())
        }

        fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
            Ok(plaintext.iter().map(|b| b ^ self.key).collect())
        }

        fn name(&self) -> &'static str {
            "recording"
        }
    }

    impl Decryptable for Recording {
        type Identity = u8;

        fn add_passphrase(&mut self, passphrase: &str) {
            self.key = passphrase.len() as u8;
        }

        fn add_identity(&mut self, identity: u8) {
            self.seen.push(identity);
            self.key ^= identity;
        }

        fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
            Ok(ciphertext.iter().map(|b| b ^ self.key).collect())
        }

        fn name(&self) -> &'static str {
            "recording"
        }
    }

    #[test]
    fn test_seal_open_generic_engine() {
        let mut e = Recording::default();
        for r in OneOrMany::<u8>::from(vec![0x0f, 0xf0]) {
            Encryptable::add_recipient(&mut e, r).unwrap();
        }
        assert_eq!(e.seen, vec![0x0f, 0xf0]);

        let sealed = seal(&e, b"abc", Format::Encoded).unwrap();
        assert!(sealed.as_encoded().is_some());

        let mut d = Recording::default();
        Decryptable::add_identity(&mut d, 0xff);
        assert_eq!(open(&d, sealed).unwrap(), b"abc");
    }

    #[test]
    fn test_open_propagates_format_errors() {
        let d = Recording::default();
        let result = open(&d, crate::core::types::Bytes::from_base64("%%%"));
        assert!(matches!(result, Err(Error::Format(_))));
    }

    #[test]
    fn test_crypter_rejects_invalid_config() {
        let config = Config {
            work_factor: Some(0),
            ..Config::default()
        };
        assert!(Crypter::new(config).is_err());
    }

    #[test]
    fn test_config_format_is_default_target() {
        let crypter = Crypter::new(Config {
            format: Format::Raw,
            ..Config::default()
        })
        .unwrap();
        let identity = x25519::Identity::generate();

        let ciphertext = crypter
            .encrypt_data_public_key(b"raw please", identity.to_public(), None)
            .unwrap();
        assert_eq!(ciphertext.format(), Format::Raw);

        let explicit = crypter
            .encrypt_data_public_key(b"encoded", identity.to_public(), Some(Format::Encoded))
            .unwrap();
        assert_eq!(explicit.format(), Format::Encoded);
    }
}
