//! The verification decision ladder.

use std::collections::BTreeMap;
use tourid_crypto::record_hash;
use tourid_registry::IdentityRegistry;
use tourid_types::Timestamp;
use tracing::warn;

use crate::confidence::confidence_score;
use crate::outcome::{FailureReason, VerifyMetadata, VerifyOutcome};

/// Issuer name echoed in successful verification metadata.
pub const ISSUER: &str = "Visitor Identity Authority";

/// Computes verification outcomes against the registry.
///
/// Reads only: verification never touches the chain, it reports the
/// record's current canonical hash instead.
pub struct VerificationEngine;

impl VerificationEngine {
    /// Each step is terminal on failure: unknown id, revoked, expired, then
    /// the confidence computation over the live record.
    pub fn verify(
        &self,
        registry: &IdentityRegistry,
        digital_id: &str,
        claimed: Option<&BTreeMap<String, String>>,
        now: Timestamp,
    ) -> VerifyOutcome {
        let Some(record) = registry.get(digital_id) else {
            return VerifyOutcome::failure(FailureReason::NotFound, now);
        };
        if registry.is_revoked(digital_id) {
            return VerifyOutcome::failure(FailureReason::Revoked, now);
        }
        if record.is_expired(now) {
            return VerifyOutcome::failure(FailureReason::Expired, now);
        }

        let confidence = confidence_score(record, claimed, now);
        match record_hash(record) {
            Ok(hash) => VerifyOutcome::success(
                confidence,
                hash,
                record.verification_level,
                VerifyMetadata {
                    created_at: record.created_at,
                    id_type: record.id_type.clone(),
                    issuer: ISSUER.to_owned(),
                },
                now,
            ),
            Err(err) => {
                warn!(digital_id, %err, "record hashing failed during verification");
                VerifyOutcome::failure(FailureReason::InternalError, now)
            }
        }
    }
}
