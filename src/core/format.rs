//! Byte-format normalization.
//!
//! Converts engine output into the caller's chosen representation and
//! accepts either representation back on the decrypt path.

use tracing::trace;

use super::types::{Bytes, Ciphertext, Format};
use crate::error::Result;

/// Wrap raw engine output in the requested representation.
///
/// `Format::Raw` passes the buffer through untouched.
pub fn to_format(raw: Vec<u8>, target: Format) -> Ciphertext {
    trace!(len = raw.len(), format = %target, "normalizing output");
    match target {
        Format::Encoded => Ciphertext::Encoded(Bytes::encode(&raw)),
        Format::Raw => Ciphertext::Raw(raw),
    }
}

/// Unwrap either representation into raw bytes.
///
/// # Errors
///
/// Returns `FormatError::InvalidBase64` if an encoded value carries a
/// malformed payload.
pub fn from_format(input: impl Into<Ciphertext>) -> Result<Vec<u8>> {
    match input.into() {
        Ciphertext::Raw(raw) => Ok(raw),
        Ciphertext::Encoded(bytes) => {
            let raw = bytes.decode()?;
            trace!(len = raw.len(), "decoded encoded input");
            Ok(raw)
        }
    }
}
