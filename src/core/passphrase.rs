//! Passphrase generation.
//!
//! Passphrases are random bytes from the OS CSPRNG rendered in the
//! base58btc alphabet (no padding, no ambiguous characters).

use rand::rngs::OsRng;
use rand::RngCore;
use tracing::trace;
use zeroize::Zeroize;

use crate::core::constants::MAX_PASSPHRASE_BYTES;
use crate::error::{Error, Result};

/// Number of random bytes drawn for a requested entropy.
///
/// Truncates `bits / 8` toward zero and never returns less than one
/// byte, so zero, negative, fractional and NaN requests all yield a
/// non-empty passphrase. Huge and infinite requests saturate at
/// `usize::MAX`.
pub fn passphrase_len(bits: f64) -> usize {
    let bytes = (bits / 8.0).trunc();
    if bytes.is_nan() || bytes < 1.0 {
        1
    } else {
        bytes as usize
    }
}

/// Generate a random passphrase carrying `bits` of entropy.
///
/// # Errors
///
/// Returns `Error::PassphraseTooLong` above `MAX_PASSPHRASE_BYTES`, or
/// `Error::Random` if the OS random source fails.
pub fn generate_passphrase(bits: f64) -> Result<String> {
    let len = passphrase_len(bits);
    if len > MAX_PASSPHRASE_BYTES {
        return Err(Error::PassphraseTooLong {
            bytes: len,
            max: MAX_PASSPHRASE_BYTES,
        });
    }
    trace!(bits, bytes = len, "generating passphrase");

    let mut buf = vec![0u8; len];
    OsRng.try_fill_bytes(&mut buf)?;
    let passphrase = bs58::encode(&buf).into_string();
    buf.zeroize();

    Ok(passphrase)
}
