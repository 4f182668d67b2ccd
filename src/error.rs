//! Error types.
//!
//! Engine errors from `age` are kept as sources so callers can inspect
//! the exact failure kind.

use thiserror::Error;

/// Top-level error for all facade operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("passphrase of {bytes} bytes exceeds the {max} byte limit")]
    PassphraseTooLong { bytes: usize, max: usize },

    #[error("random source failure: {0}")]
    Random(#[from] rand::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the encryption engine.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("encryption failed: {0}")]
    Encrypt(#[from] age::EncryptError),

    #[error("decryption failed: {0}")]
    Decrypt(#[from] age::DecryptError),

    #[error("armor failed: {0}")]
    ArmorFailed(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid identity: {0}")]
    InvalidIdentity(String),

    #[error("can't encrypt to both recipients and passphrases")]
    MixedPassphraseAndRecipients,

    #[error("can encrypt to at most one passphrase")]
    PassphraseAlreadySet,
}

/// Errors converting between byte representations.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("invalid encoded bytes: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

/// Errors loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to write config: {0}")]
    WriteFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
