//! Value types shared by the dispatchers.
//!
//! A ciphertext travels in one of two interchangeable shapes: the encoded
//! form ([`Bytes`], a `{"$bytes": "..."}` object that embeds cleanly in
//! JSON/CBOR documents) or raw untagged bytes.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, FormatError};

/// Output shape selected for an encryption call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Tagged `{"$bytes": base64}` form.
    #[default]
    #[serde(alias = "bytes")]
    Encoded,
    /// Untagged binary buffer.
    #[serde(alias = "uint8array")]
    Raw,
}

impl Format {
    /// Lowercase name used in config files and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Encoded => "encoded",
            Self::Raw => "raw",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "encoded" | "bytes" => Ok(Self::Encoded),
            "raw" | "uint8array" => Ok(Self::Raw),
            other => Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("unknown format: {}. Supported: encoded, raw", other),
            }),
        }
    }
}

/// Encoded byte representation.
///
/// Serializes as `{"$bytes": "<base64>"}` using the standard alphabet
/// without padding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bytes {
    #[serde(rename = "$bytes")]
    encoded: String,
}

impl Bytes {
    /// Wrap raw bytes into the encoded form.
    pub fn encode(raw: &[u8]) -> Self {
        Self {
            encoded: STANDARD_NO_PAD.encode(raw),
        }
    }

    /// Build from an already-encoded base64 payload.
    ///
    /// The payload is not checked until [`Bytes::decode`].
    pub fn from_base64(encoded: impl Into<String>) -> Self {
        Self {
            encoded: encoded.into(),
        }
    }

    /// The base64 payload.
    pub fn as_base64(&self) -> &str {
        &self.encoded
    }

    /// Unwrap into the underlying raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::InvalidBase64` for padded, non-canonical or
    /// otherwise malformed payloads.
    pub fn decode(&self) -> Result<Vec<u8>, FormatError> {
        Ok(STANDARD_NO_PAD.decode(&self.encoded)?)
    }
}

/// Ciphertext in either representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ciphertext {
    Encoded(Bytes),
    Raw(Vec<u8>),
}

impl Ciphertext {
    /// Which representation this value holds.
    pub fn format(&self) -> Format {
        match self {
            Self::Encoded(_) => Format::Encoded,
            Self::Raw(_) => Format::Raw,
        }
    }

    /// The encoded form, if that is what this holds.
    pub fn as_encoded(&self) -> Option<&Bytes> {
        match self {
            Self::Encoded(b) => Some(b),
            Self::Raw(_) => None,
        }
    }

    /// The raw bytes, if that is what this holds.
    pub fn as_raw(&self) -> Option<&[u8]> {
        match self {
            Self::Raw(r) => Some(r),
            Self::Encoded(_) => None,
        }
    }

    /// Take the encoded form, if present.
    pub fn into_encoded(self) -> Option<Bytes> {
        match self {
            Self::Encoded(b) => Some(b),
            Self::Raw(_) => None,
        }
    }

    /// Take the raw bytes, if present.
    pub fn into_raw(self) -> Option<Vec<u8>> {
        match self {
            Self::Raw(r) => Some(r),
            Self::Encoded(_) => None,
        }
    }
}

impl From<Bytes> for Ciphertext {
    fn from(bytes: Bytes) -> Self {
        Self::Encoded(bytes)
    }
}

impl From<Vec<u8>> for Ciphertext {
    fn from(raw: Vec<u8>) -> Self {
        Self::Raw(raw)
    }
}

impl From<&[u8]> for Ciphertext {
    fn from(raw: &[u8]) -> Self {
        Self::Raw(raw.to_vec())
    }
}

/// A single value or an ordered sequence of values.
///
/// Recipients and identities are accepted in either shape and registered
/// on the engine in iteration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Apply a fallible conversion to every value, keeping the shape.
    pub fn try_map<U, E>(self, mut f: impl FnMut(T) -> Result<U, E>) -> Result<OneOrMany<U>, E> {
        Ok(match self {
            Self::One(t) => OneOrMany::One(f(t)?),
            Self::Many(v) => OneOrMany::Many(v.into_iter().map(f).collect::<Result<_, _>>()?),
        })
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(t) => vec![t],
            Self::Many(v) => v,
        }
    }
}

impl<T> IntoIterator for OneOrMany<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(value: T) -> Self {
        Self::One(value)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Many(values)
    }
}

impl<T, const N: usize> From<[T; N]> for OneOrMany<T> {
    fn from(values: [T; N]) -> Self {
        Self::Many(Vec::from(values))
    }
}

impl<T: Clone> From<&[T]> for OneOrMany<T> {
    fn from(values: &[T]) -> Self {
        Self::Many(values.to_vec())
    }
}
