//! Constants used throughout agewrap.
//!
//! Centralizes defaults and magic strings.

/// Default passphrase entropy in bits.
pub const DEFAULT_PASSPHRASE_BITS: f64 = 128.0;

/// Largest random buffer drawn for one passphrase.
pub const MAX_PASSPHRASE_BYTES: usize = 65536;

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "AGEWRAP_LOG";

/// Upper bound (exclusive) accepted for scrypt work factors.
pub const WORK_FACTOR_LIMIT: u8 = 64;
