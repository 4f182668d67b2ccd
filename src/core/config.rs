//! Facade configuration.
//!
//! Every field has a default, so an empty TOML document is a valid
//! configuration. Files are only read when the caller asks for it.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::cipher::{AgeDecrypter, AgeEncrypter};
use crate::core::constants::{DEFAULT_PASSPHRASE_BITS, MAX_PASSPHRASE_BYTES, WORK_FACTOR_LIMIT};
use crate::core::passphrase::passphrase_len;
use crate::core::types::Format;
use crate::error::{ConfigError, Result};

/// Tunables applied to every call made through a [`Crypter`](crate::core::crypt::Crypter).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Entropy of generated passphrases, in bits.
    pub passphrase_bits: f64,
    /// Output representation when a call does not pick one.
    pub format: Format,
    /// ASCII-armor the engine output.
    pub armor: bool,
    /// scrypt work factor (log2 N) for passphrase encryption.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_factor: Option<u8>,
    /// Highest scrypt work factor accepted when decrypting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_work_factor: Option<u8>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            passphrase_bits: DEFAULT_PASSPHRASE_BITS,
            format: Format::Encoded,
            armor: false,
            work_factor: None,
            max_work_factor: None,
        }
    }
}

impl Config {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML is malformed, or
    /// `ConfigError::InvalidValue` if a field is out of range.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file can't be read, plus the
    /// errors of [`Config::from_toml`].
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config = Self::from_toml(&contents)?;

        debug!(
            format = %config.format,
            armor = config.armor,
            "config loaded"
        );

        Ok(config)
    }

    /// Save configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "saving config");

        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, contents).map_err(ConfigError::WriteFile)?;

        Ok(())
    }

    /// Validate field ranges.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if !self.passphrase_bits.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "passphrase_bits",
                reason: format!("must be finite, got {}", self.passphrase_bits),
            }
            .into());
        }

        if passphrase_len(self.passphrase_bits) > MAX_PASSPHRASE_BYTES {
            return Err(ConfigError::InvalidValue {
                field: "passphrase_bits",
                reason: format!(
                    "must be at most {}, got {}",
                    MAX_PASSPHRASE_BYTES * 8,
                    self.passphrase_bits
                ),
            }
            .into());
        }

        for (field, value) in [
            ("work_factor", self.work_factor),
            ("max_work_factor", self.max_work_factor),
        ] {
            if let Some(log_n) = value {
                if log_n == 0 || log_n >= WORK_FACTOR_LIMIT {
                    return Err(ConfigError::InvalidValue {
                        field,
                        reason: format!("must be between 1 and {}, got {}", WORK_FACTOR_LIMIT - 1, log_n),
                    }
                    .into());
                }
            }
        }

        Ok(())
    }

    /// A fresh encrypter carrying these settings.
    pub(crate) fn encrypter(&self) -> AgeEncrypter {
        AgeEncrypter::new()
            .with_armor(self.armor)
            .with_work_factor(self.work_factor)
    }

    /// A fresh decrypter carrying these settings.
    pub(crate) fn decrypter(&self) -> AgeDecrypter {
        AgeDecrypter::new().with_max_work_factor(self.max_work_factor)
    }
}
