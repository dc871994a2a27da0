use std::collections::BTreeMap;

use tourid_node::{LedgerService, ServiceError};
use tourid_types::{DigitalId, ServiceParams};
use tourid_verification::FailureReason;

fn params(difficulty: u32, auto_mine_threshold: usize) -> ServiceParams {
    ServiceParams {
        difficulty,
        auto_mine_threshold,
        ..Default::default()
    }
}

fn service(difficulty: u32, auto_mine_threshold: usize) -> LedgerService {
    LedgerService::new(params(difficulty, auto_mine_threshold)).unwrap()
}

fn user_data() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("firstName".to_owned(), "John".to_owned()),
        ("lastName".to_owned(), "Tourist".to_owned()),
        ("email".to_owned(), "j@x.com".to_owned()),
    ])
}

#[test]
fn create_issues_an_id_and_enqueues_a_transaction() {
    let service = service(1, 100);
    let issued = service.create_digital_id(user_data(), None).unwrap();

    assert!(DigitalId::is_well_formed(issued.digital_id.as_str()));
    assert!(issued.public_key_pem.starts_with("-----BEGIN PUBLIC KEY-----"));

    let stats = service.stats();
    assert_eq!(stats.total_ids, 1);
    assert_eq!(stats.active_ids, 1);
    assert_eq!(stats.pending_transactions, 1);
    assert_eq!(stats.total_blocks, 1); // genesis only, below threshold
    assert_eq!(stats.ids_created_today, 1);
}

#[test]
fn create_without_required_fields_is_rejected() {
    let service = service(1, 100);
    let mut data = user_data();
    data.remove("email");
    let err = service.create_digital_id(data, None).unwrap_err();
    assert!(matches!(err, ServiceError::Registry(_)));
    assert_eq!(service.stats().total_ids, 0);
}

#[test]
fn five_creates_mine_exactly_one_block() {
    let service = service(1, 5);
    for _ in 0..5 {
        service.create_digital_id(user_data(), None).unwrap();
    }

    let stats = service.stats();
    assert_eq!(stats.total_blocks, 2);
    assert_eq!(stats.blockchain_height, 1);
    assert_eq!(stats.pending_transactions, 0);
    service.chain_integrity().unwrap();
}

#[test]
fn created_id_verifies_with_partial_user_data() {
    let service = service(1, 100);
    let issued = service.create_digital_id(user_data(), None).unwrap();

    let claimed = BTreeMap::from([("firstName".to_owned(), "John".to_owned())]);
    let outcome = service.verify_digital_id(issued.digital_id.as_str(), Some(&claimed));

    assert!(outcome.verified);
    assert!((0.6..=1.0).contains(&outcome.confidence));
    assert!(outcome.blockchain_hash.is_some());
}

#[test]
fn unknown_id_verifies_as_not_found() {
    let service = service(1, 100);
    let outcome = service.verify_digital_id("TID-000000-NOSUCHID", None);
    assert!(!outcome.verified);
    assert_eq!(outcome.reason, Some(FailureReason::NotFound));
    assert_eq!(outcome.confidence, 0.0);
}

#[test]
fn revocation_is_terminal_and_only_recorded_once() {
    let service = service(1, 100);
    let issued = service.create_digital_id(user_data(), None).unwrap();
    let id = issued.digital_id.as_str().to_owned();

    let receipt = service.revoke_digital_id(&id, "test", "officer-7").unwrap();
    assert_eq!(receipt.reason, "test");
    assert_eq!(service.stats().pending_transactions, 2); // create + revoke

    let outcome = service.verify_digital_id(&id, None);
    assert!(!outcome.verified);
    assert_eq!(outcome.reason, Some(FailureReason::Revoked));
    assert_eq!(outcome.confidence, 0.0);

    // idempotent repeat: original receipt fields, no new transaction
    let again = service.revoke_digital_id(&id, "another reason", "officer-8").unwrap();
    assert_eq!(again.revoked_at, receipt.revoked_at);
    assert_eq!(again.reason, "test");
    assert_eq!(service.stats().pending_transactions, 2);
    assert_eq!(service.stats().revoked_ids, 1);
}

#[test]
fn revoking_an_unknown_id_fails() {
    let service = service(1, 100);
    assert!(matches!(
        service.revoke_digital_id("TID-000000-NOSUCHID", "x", "y"),
        Err(ServiceError::Registry(_))
    ));
}

#[test]
fn mine_now_drains_the_pool() {
    let service = service(1, 100);
    assert!(service.mine_now().unwrap().is_none());

    service.create_digital_id(user_data(), None).unwrap();
    service.create_digital_id(user_data(), None).unwrap();

    let block = service.mine_now().unwrap().expect("a block");
    assert_eq!(block.index, 1);
    assert_eq!(block.transactions.len(), 2);
    assert!(block.hash.leading_zero_digits() >= 1);

    assert_eq!(service.stats().pending_transactions, 0);
    assert!(service.mine_now().unwrap().is_none());
    service.chain_integrity().unwrap();
}

#[test]
fn batch_verify_validates_its_input_size() {
    let service = service(1, 100);

    assert!(matches!(
        service.batch_verify(&[]),
        Err(ServiceError::Validation(_))
    ));

    let too_many: Vec<String> = (0..11).map(|i| format!("TID-{:06}-AAAA0000", i)).collect();
    assert!(matches!(
        service.batch_verify(&too_many),
        Err(ServiceError::Validation(_))
    ));
}

#[test]
fn batch_verify_does_not_short_circuit() {
    let service = service(1, 100);
    let issued = service.create_digital_id(user_data(), None).unwrap();

    let ids = vec![
        "TID-000000-NOSUCHID".to_owned(),
        issued.digital_id.as_str().to_owned(),
    ];
    let batch = service.batch_verify(&ids).unwrap();

    assert_eq!(batch.results.len(), 2);
    assert_eq!(batch.verified_count, 1);
    assert_eq!(batch.failed_count, 1);
    assert!(!batch.results[0].outcome.verified);
    assert!(batch.results[1].outcome.verified);
}

#[test]
fn stats_track_the_latest_block() {
    let service = service(1, 2);
    service.create_digital_id(user_data(), None).unwrap();
    service.create_digital_id(user_data(), None).unwrap(); // threshold 2: mines

    let stats = service.stats();
    assert_eq!(stats.total_blocks, 2);
    assert_eq!(stats.network_id.as_str(), "tourid_testnet");
    assert!(stats.latest_block_hash.leading_zero_digits() >= 1);
}
