//! Age encryption backend implementation.
//!
//! Passphrases go through age's scrypt recipient/identity, public keys
//! through x25519. Output is binary unless armor is enabled; input may be
//! either, the armored reader detects which.

use std::io::{Read, Write};

use ::age::armor::{ArmoredReader, ArmoredWriter, Format as ArmorFormat};
use ::age::secrecy::SecretString;
use ::age::{scrypt, x25519};
use tracing::trace;

use super::{Decryptable, Encryptable};
use crate::error::{CipherError, Result};

/// Age encrypter. Create one per operation.
#[derive(Default)]
pub struct AgeEncrypter {
    passphrase: Option<SecretString>,
    recipients: Vec<x25519::Recipient>,
    armor: bool,
    work_factor: Option<u8>,
}

impl AgeEncrypter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit ASCII-armored ciphertext instead of binary.
    pub fn with_armor(mut self, armor: bool) -> Self {
        self.armor = armor;
        self
    }

    /// Fix the scrypt work factor (log2 N) used for passphrases.
    ///
    /// `None` lets age calibrate it to roughly one second.
    pub fn with_work_factor(mut self, work_factor: Option<u8>) -> Self {
        self.work_factor = work_factor;
        self
    }

    fn wrap(&self, plaintext: &[u8], recipients: &[&dyn ::age::Recipient]) -> Result<Vec<u8>> {
        let encryptor = ::age::Encryptor::with_recipients(recipients.iter().copied())
            .map_err(CipherError::from)?;

        let format = if self.armor {
            ArmorFormat::AsciiArmor
        } else {
            ArmorFormat::Binary
        };

        let mut encrypted = Vec::new();
        let mut writer = encryptor.wrap_output(ArmoredWriter::wrap_output(&mut encrypted, format)?)?;
        writer.write_all(plaintext)?;
        let armored = writer.finish()?;
        armored
            .finish()
            .map_err(|e| CipherError::ArmorFailed(format!("{}", e)))?;

        Ok(encrypted)
    }
}

impl Encryptable for AgeEncrypter {
    type Recipient = x25519::Recipient;

    fn set_passphrase(&mut self, passphrase: &str) -> Result<()> {
        if self.passphrase.is_some() {
            return Err(CipherError::PassphraseAlreadySet.into());
        }
        if !self.recipients.is_empty() {
            return Err(CipherError::MixedPassphraseAndRecipients.into());
        }
        self.passphrase = Some(SecretString::from(passphrase.to_owned()));
        Ok(())
    }

    fn add_recipient(&mut self, recipient: x25519::Recipient) -> Result<()> {
        if self.passphrase.is_some() {
            return Err(CipherError::MixedPassphraseAndRecipients.into());
        }
        self.recipients.push(recipient);
        Ok(())
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        trace!(
            recipients = self.recipients.len(),
            passphrase = self.passphrase.is_some(),
            plaintext_len = plaintext.len(),
            "encrypting"
        );

        let encrypted = match &self.passphrase {
            Some(passphrase) => {
                let mut recipient = scrypt::Recipient::new(passphrase.clone());
                if let Some(log_n) = self.work_factor {
                    recipient.set_work_factor(log_n);
                }
                self.wrap(plaintext, &[&recipient as &dyn ::age::Recipient])?
            }
            None => {
                let recipients: Vec<&dyn ::age::Recipient> = self
                    .recipients
                    .iter()
                    .map(|r| r as &dyn ::age::Recipient)
                    .collect();
                self.wrap(plaintext, &recipients)?
            }
        };

        trace!(ciphertext_len = encrypted.len(), "encrypted");
        Ok(encrypted)
    }

    fn name(&self) -> &'static str {
        "age"
    }
}

/// A registered decryption candidate, kept in registration order.
enum Candidate {
    Passphrase(SecretString),
    Identity(x25519::Identity),
}

/// Age decrypter. Create one per operation.
#[derive(Default)]
pub struct AgeDecrypter {
    candidates: Vec<Candidate>,
    max_work_factor: Option<u8>,
}

impl AgeDecrypter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the scrypt work factor accepted from a ciphertext header.
    pub fn with_max_work_factor(mut self, max_work_factor: Option<u8>) -> Self {
        self.max_work_factor = max_work_factor;
        self
    }

    fn identities(&self) -> Vec<Box<dyn ::age::Identity>> {
        self.candidates
            .iter()
            .map(|candidate| -> Box<dyn ::age::Identity> {
                match candidate {
                    Candidate::Passphrase(passphrase) => {
                        let mut identity = scrypt::Identity::new(passphrase.clone());
                        if let Some(max) = self.max_work_factor {
                            identity.set_max_work_factor(max);
                        }
                        Box::new(identity)
                    }
                    Candidate::Identity(identity) => Box::new(identity.clone()),
                }
            })
            .collect()
    }
}

impl Decryptable for AgeDecrypter {
    type Identity = x25519::Identity;

    fn add_passphrase(&mut self, passphrase: &str) {
        self.candidates
            .push(Candidate::Passphrase(SecretString::from(passphrase.to_owned())));
    }

    fn add_identity(&mut self, identity: x25519::Identity) {
        self.candidates.push(Candidate::Identity(identity));
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        trace!(
            candidates = self.candidates.len(),
            ciphertext_len = ciphertext.len(),
            "decrypting"
        );

        let decryptor =
            ::age::Decryptor::new(ArmoredReader::new(ciphertext)).map_err(CipherError::from)?;

        let identities = self.identities();
        let mut reader = decryptor
            .decrypt(identities.iter().map(|i| i.as_ref() as &dyn ::age::Identity))
            .map_err(CipherError::from)?;

        let mut decrypted = Vec::new();
        reader.read_to_end(&mut decrypted)?;

        trace!(plaintext_len = decrypted.len(), "decrypted");
        Ok(decrypted)
    }

    fn name(&self) -> &'static str {
        "age"
    }
}
