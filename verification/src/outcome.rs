//! Verification outcomes.

use serde::{Deserialize, Serialize};
use tourid_types::{RecordHash, Timestamp, VerificationLevel};

/// Why a verification did not pass.
///
/// `Internal` covers unexpected hashing/serialization failures, recovered
/// into an outcome rather than propagated, because callers need a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    NotFound,
    Revoked,
    Expired,
    InternalError,
}

/// Issuance context echoed back with a successful verification.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyMetadata {
    pub created_at: Timestamp,
    pub id_type: String,
    pub issuer: String,
}

/// The result of verifying one digital ID.
///
/// Failures carry a reason and confidence 0.0; successes carry a confidence
/// in [0.1, 1.0] and a freshly recomputed record hash.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyOutcome {
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<FailureReason>,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockchain_hash: Option<RecordHash>,
    pub timestamp: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_level: Option<VerificationLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<VerifyMetadata>,
}

impl VerifyOutcome {
    pub fn failure(reason: FailureReason, now: Timestamp) -> Self {
        Self {
            verified: false,
            reason: Some(reason),
            confidence: 0.0,
            blockchain_hash: None,
            timestamp: now,
            verification_level: None,
            metadata: None,
        }
    }

    pub fn success(
        confidence: f64,
        blockchain_hash: RecordHash,
        verification_level: VerificationLevel,
        metadata: VerifyMetadata,
        now: Timestamp,
    ) -> Self {
        Self {
            verified: true,
            reason: None,
            confidence,
            blockchain_hash: Some(blockchain_hash),
            timestamp: now,
            verification_level: Some(verification_level),
            metadata: Some(metadata),
        }
    }
}
