//! agewrap - a uniform encryption facade over age.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── core/             # Core library components
//! │   ├── cipher/       # Engine traits
//! │   │   ├── mod       # Encryptable / Decryptable
//! │   │   └── age       # age implementation
//! │   ├── config        # Facade tunables (TOML)
//! │   ├── crypt         # Encryption/decryption dispatch
//! │   ├── format        # Encoded <-> raw normalization
//! │   ├── passphrase    # Random base58 passphrases
//! │   └── types         # Ciphertext, Bytes, Format, OneOrMany
//! ├── error             # Error types
//! └── logging           # tracing subscriber setup
//! ```
//!
//! # Features
//!
//! - Passphrase (scrypt) and public-key (x25519) encryption
//! - One or many recipients/identities per call
//! - Output as `{"$bytes": ...}` encoded form or raw bytes
//! - High-entropy base58 passphrase generation
//!
//! # Example
//!
//! ```no_run
//! use agewrap::{decrypt_data_public_key, encrypt_data_public_key, generate_identity, identity_to_recipient};
//!
//! let identity = generate_identity();
//! let recipient = identity_to_recipient(&identity);
//!
//! let ciphertext = encrypt_data_public_key(b"hello", recipient, None)?;
//! let plaintext = decrypt_data_public_key(ciphertext, identity)?;
//! assert_eq!(plaintext, b"hello");
//! # Ok::<(), agewrap::error::Error>(())
//! ```

pub mod core;
pub mod error;
pub mod logging;

pub use crate::core::cipher::{
    generate_identity, identity_to_recipient, parse_identity, parse_recipient, AgeDecrypter,
    AgeEncrypter, Decryptable, Encryptable,
};
pub use crate::core::config::Config;
pub use crate::core::crypt::{
    decrypt_data, decrypt_data_public_key, decrypt_data_public_key_str, encrypt_data,
    encrypt_data_public_key, encrypt_data_public_key_str, encrypt_data_with_new_passphrase,
    Crypter, Sealed,
};
pub use crate::core::format::{from_format, to_format};
pub use crate::core::passphrase::generate_passphrase;
pub use crate::core::types::{Bytes, Ciphertext, Format, OneOrMany};
pub use crate::error::{Error, Result};
