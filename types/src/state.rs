//! Lifecycle and verification-tier enums for identity records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of an identity record.
///
/// `Revoked` is terminal: no operation returns a revoked record to `Active`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStatus {
    Active,
    Revoked,
}

impl fmt::Display for IdStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => f.write_str("active"),
            Self::Revoked => f.write_str("revoked"),
        }
    }
}

/// Verification tier, weighting the confidence score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationLevel {
    Basic,
    Verified,
    Enhanced,
}

impl VerificationLevel {
    /// Multiplier applied to the base confidence.
    pub fn confidence_factor(&self) -> f64 {
        match self {
            Self::Basic => 0.6,
            Self::Verified => 0.8,
            Self::Enhanced => 1.0,
        }
    }
}

impl fmt::Display for VerificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => f.write_str("basic"),
            Self::Verified => f.write_str("verified"),
            Self::Enhanced => f.write_str("enhanced"),
        }
    }
}
