//! Registry operations: create, revoke, lookup.

use rand::Rng;
use std::collections::{BTreeMap, HashMap, HashSet};
use tourid_types::{DigitalId, IdStatus, Timestamp, VerificationLevel};
use tracing::info;

use crate::error::RegistryError;
use crate::record::IdentityRecord;

/// User-data fields every issuance must carry.
pub const REQUIRED_FIELDS: [&str; 3] = ["firstName", "lastName", "email"];

/// Attempts at generating an unused id before giving up.
const MAX_ID_ATTEMPTS: usize = 16;

const SUFFIX_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const SUFFIX_LEN: usize = 8;

/// Outcome of a revocation.
///
/// `already_revoked` marks the idempotent path: the record kept its original
/// revocation fields and no new lifecycle event should be recorded.
pub struct RevokeResult {
    pub record: IdentityRecord,
    pub already_revoked: bool,
}

/// Owner of all identity records, keyed by digital id.
///
/// The revoked set is a derived index and always equals the set of records
/// whose status is `Revoked`.
pub struct IdentityRegistry {
    records: HashMap<DigitalId, IdentityRecord>,
    revoked: HashSet<DigitalId>,
    id_validity_secs: u64,
}

impl IdentityRegistry {
    pub fn new(id_validity_secs: u64) -> Self {
        Self {
            records: HashMap::new(),
            revoked: HashSet::new(),
            id_validity_secs,
        }
    }

    /// Issue a new record: `Active`, `Verified` level, expiring after the
    /// configured validity window.
    pub fn create(
        &mut self,
        user_data: BTreeMap<String, String>,
        id_type: impl Into<String>,
        public_key_pem: String,
        now: Timestamp,
    ) -> Result<IdentityRecord, RegistryError> {
        for field in REQUIRED_FIELDS {
            if !user_data.contains_key(field) {
                return Err(RegistryError::MissingField(field));
            }
        }

        let digital_id = self.generate_digital_id(now)?;
        let record = IdentityRecord {
            digital_id: digital_id.clone(),
            user_data,
            id_type: id_type.into(),
            public_key_pem,
            created_at: now,
            expires_at: now.add_secs(self.id_validity_secs),
            status: IdStatus::Active,
            verification_level: VerificationLevel::Verified,
            revoked_at: None,
            revocation_reason: None,
        };
        self.records.insert(digital_id.clone(), record.clone());
        info!(%digital_id, "issued digital id");
        Ok(record)
    }

    /// Revoke a record. Revoking an already-revoked id is a success no-op
    /// that preserves the original revocation fields.
    pub fn revoke(
        &mut self,
        digital_id: &str,
        reason: &str,
        now: Timestamp,
    ) -> Result<RevokeResult, RegistryError> {
        let record = self
            .records
            .get_mut(digital_id)
            .ok_or_else(|| RegistryError::NotFound(digital_id.to_owned()))?;

        if record.is_revoked() {
            return Ok(RevokeResult {
                record: record.clone(),
                already_revoked: true,
            });
        }

        record.status = IdStatus::Revoked;
        record.revoked_at = Some(now);
        record.revocation_reason = Some(reason.to_owned());
        self.revoked.insert(record.digital_id.clone());
        info!(digital_id, reason, "revoked digital id");
        Ok(RevokeResult {
            record: record.clone(),
            already_revoked: false,
        })
    }

    /// Read-only lookup; absence is data, not an error.
    pub fn get(&self, digital_id: &str) -> Option<&IdentityRecord> {
        self.records.get(digital_id)
    }

    pub fn is_revoked(&self, digital_id: &str) -> bool {
        self.revoked.contains(digital_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.records.len() - self.revoked.len()
    }

    pub fn revoked_count(&self) -> usize {
        self.revoked.len()
    }

    /// Records issued on the same UTC day as `now`.
    pub fn created_on_day(&self, now: Timestamp) -> usize {
        self.records
            .values()
            .filter(|r| r.created_at.same_day(now))
            .count()
    }

    /// `TID-<6 timestamp digits>-<8 random alphanumerics>`, retried until
    /// unused so issued ids are unique.
    fn generate_digital_id(&self, now: Timestamp) -> Result<DigitalId, RegistryError> {
        let digits = now.as_secs() % 1_000_000;
        let mut rng = rand::thread_rng();
        for _ in 0..MAX_ID_ATTEMPTS {
            let suffix: String = (0..SUFFIX_LEN)
                .map(|_| SUFFIX_CHARSET[rng.gen_range(0..SUFFIX_CHARSET.len())] as char)
                .collect();
            let candidate =
                DigitalId::new(format!("{}-{:06}-{}", DigitalId::PREFIX, digits, suffix));
            if !self.records.contains_key(candidate.as_str()) {
                return Ok(candidate);
            }
        }
        Err(RegistryError::IdSpaceExhausted)
    }
}
