//! SHA-256 hashing over canonical JSON.
//!
//! Canonical means: serialize through `serde_json::Value`, whose object map
//! keeps keys in sorted order, so the same data always hashes identically
//! regardless of struct field or map insertion order.

use serde::Serialize;
use sha2::{Digest, Sha256};
use tourid_types::RecordHash;

use crate::error::CryptoError;

/// SHA-256 of a byte slice.
pub fn sha256(bytes: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher.finalize().into()
}

/// Canonical JSON rendering of any serializable value.
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String, CryptoError> {
    let value = serde_json::to_value(value)?;
    Ok(serde_json::to_string(&value)?)
}

/// SHA-256 over the canonical JSON rendering of a value.
pub fn canonical_sha256<T: Serialize>(value: &T) -> Result<[u8; 32], CryptoError> {
    Ok(sha256(canonical_json(value)?.as_bytes()))
}

/// Hash an identity record (or any serializable view of one).
pub fn record_hash<T: Serialize>(value: &T) -> Result<RecordHash, CryptoError> {
    canonical_sha256(value).map(RecordHash::new)
}
