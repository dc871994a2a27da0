//! Cryptographic primitives for the tourid ledger.
//!
//! - **SHA-256** over a canonical JSON serialization for block and record hashes
//! - **Ed25519** for the key pair issued alongside each digital ID

pub mod error;
pub mod hash;
pub mod keys;

pub use error::CryptoError;
pub use hash::{canonical_json, canonical_sha256, record_hash, sha256};
pub use keys::{generate_keypair, public_key_pem, IssuedKeyPair};
