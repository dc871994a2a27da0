//! Multi-factor confidence scoring.
//!
//! `confidence = base × time_factor × level_factor × data_match_factor`,
//! clamped to [0.1, 1.0]. Record age decays confidence mildly, the
//! verification tier weights it, and an optional claimed-data comparison
//! scales it by the fraction of matching fields.

use std::collections::BTreeMap;
use tourid_registry::IdentityRecord;
use tourid_types::Timestamp;

pub const BASE_CONFIDENCE: f64 = 0.8;

/// Score a live record against optionally claimed user data.
pub fn confidence_score(
    record: &IdentityRecord,
    claimed: Option<&BTreeMap<String, String>>,
    now: Timestamp,
) -> f64 {
    let age_days = record.created_at.age_days(now);
    let time_factor = (1.0 - (age_days / 365.0) * 0.2).max(0.1);
    let level_factor = record.verification_level.confidence_factor();
    let data_match = match claimed {
        Some(claimed) if !claimed.is_empty() => data_match_factor(&record.user_data, claimed),
        _ => 1.0,
    };

    (BASE_CONFIDENCE * time_factor * level_factor * data_match).clamp(0.1, 1.0)
}

/// Ratio of case-insensitively matching field values among the claimed
/// fields the record also stores; 1.0 when nothing overlaps.
fn data_match_factor(stored: &BTreeMap<String, String>, claimed: &BTreeMap<String, String>) -> f64 {
    let mut matches = 0usize;
    let mut compared = 0usize;
    for (key, value) in claimed {
        if let Some(stored_value) = stored.get(key) {
            compared += 1;
            if stored_value.eq_ignore_ascii_case(value) {
                matches += 1;
            }
        }
    }
    if compared == 0 {
        1.0
    } else {
        matches as f64 / compared as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourid_types::{DigitalId, IdStatus, VerificationLevel};

    fn record(level: VerificationLevel, created_at: u64) -> IdentityRecord {
        IdentityRecord {
            digital_id: DigitalId::from("TID-123456-ABCD1234"),
            user_data: BTreeMap::from([
                ("firstName".to_owned(), "John".to_owned()),
                ("lastName".to_owned(), "Tourist".to_owned()),
                ("email".to_owned(), "j@x.com".to_owned()),
            ]),
            id_type: "visitor_id".into(),
            public_key_pem: "PEM".into(),
            created_at: Timestamp::new(created_at),
            expires_at: Timestamp::new(created_at + 365 * 86_400),
            status: IdStatus::Active,
            verification_level: level,
            revoked_at: None,
            revocation_reason: None,
        }
    }

    #[test]
    fn fresh_verified_record_scores_base_times_level() {
        let score = confidence_score(&record(VerificationLevel::Verified, 0), None, Timestamp::new(0));
        assert!((score - 0.64).abs() < 1e-9); // 0.8 * 1.0 * 0.8
    }

    #[test]
    fn age_decays_the_score() {
        let r = record(VerificationLevel::Enhanced, 0);
        let fresh = confidence_score(&r, None, Timestamp::new(0));
        let year_old = confidence_score(&r, None, Timestamp::new(365 * 86_400));
        assert!(year_old < fresh);
        assert!((year_old - 0.8 * 0.8).abs() < 1e-9); // time factor 0.8 after one year
    }

    #[test]
    fn case_insensitive_field_matching() {
        let r = record(VerificationLevel::Enhanced, 0);
        let claimed = BTreeMap::from([("firstName".to_owned(), "JOHN".to_owned())]);
        let score = confidence_score(&r, Some(&claimed), Timestamp::new(0));
        assert!((score - 0.8).abs() < 1e-9); // full match, enhanced, fresh
    }

    #[test]
    fn partial_match_scales_proportionally() {
        let r = record(VerificationLevel::Enhanced, 0);
        let claimed = BTreeMap::from([
            ("firstName".to_owned(), "John".to_owned()),
            ("lastName".to_owned(), "Impostor".to_owned()),
        ]);
        let score = confidence_score(&r, Some(&claimed), Timestamp::new(0));
        assert!((score - 0.4).abs() < 1e-9); // 0.8 * 1.0 * 1.0 * 0.5
    }

    #[test]
    fn unknown_claimed_fields_are_not_compared() {
        let r = record(VerificationLevel::Verified, 0);
        let claimed = BTreeMap::from([("passport".to_owned(), "X123".to_owned())]);
        let score = confidence_score(&r, Some(&claimed), Timestamp::new(0));
        assert!((score - 0.64).abs() < 1e-9); // no overlap => factor 1.0
    }

    #[test]
    fn score_is_clamped_to_lower_bound() {
        let r = record(VerificationLevel::Basic, 0);
        let claimed = BTreeMap::from([("firstName".to_owned(), "Someone".to_owned())]);
        let score = confidence_score(&r, Some(&claimed), Timestamp::new(0));
        assert_eq!(score, 0.1); // total mismatch floors at the clamp
    }

    #[test]
    fn score_never_leaves_the_interval() {
        for level in [
            VerificationLevel::Basic,
            VerificationLevel::Verified,
            VerificationLevel::Enhanced,
        ] {
            for age_days in [0u64, 30, 365, 3650] {
                let r = record(level, 0);
                let score = confidence_score(&r, None, Timestamp::new(age_days * 86_400));
                assert!((0.1..=1.0).contains(&score), "score {score} out of range");
            }
        }
    }
}
