//! The identity record held for each issued digital ID.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tourid_types::{DigitalId, IdStatus, Timestamp, VerificationLevel};

/// A credential record identifying a registered visitor.
///
/// `user_data` is an open bag of profile attributes; the rest of the fields
/// are fixed. Optional fields are omitted from serialization until set, so
/// the canonical hash of an active record never covers them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IdentityRecord {
    pub digital_id: DigitalId,
    pub user_data: BTreeMap<String, String>,
    pub id_type: String,
    pub public_key_pem: String,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
    pub status: IdStatus,
    pub verification_level: VerificationLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoked_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revocation_reason: Option<String>,
}

impl IdentityRecord {
    pub fn is_revoked(&self) -> bool {
        self.status == IdStatus::Revoked
    }

    /// Expiry is computed at read time, never written back.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        now > self.expires_at
    }
}
