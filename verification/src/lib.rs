//! Verification of digital IDs.
//!
//! A verification is a decision, not an exception: every path (unknown id,
//! revoked, expired, or a live record) lands in a structured
//! [`VerifyOutcome`] that callers can act on directly.

pub mod confidence;
pub mod engine;
pub mod outcome;

pub use confidence::{confidence_score, BASE_CONFIDENCE};
pub use engine::{VerificationEngine, ISSUER};
pub use outcome::{FailureReason, VerifyMetadata, VerifyOutcome};
