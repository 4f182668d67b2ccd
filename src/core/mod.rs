//! Core library components.
//!
//! Passphrase generation, byte-format normalization, the engine
//! interface and the dispatchers built on top of it.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod crypt;
pub mod format;
pub mod passphrase;
pub mod types;
