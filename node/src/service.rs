//! Orchestration of identity lifecycle, mining, and verification.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Mutex, RwLock};
use std::time::Instant;

use tourid_crypto::{generate_keypair, public_key_pem, record_hash};
use tourid_ledger::{Block, HashChain, Transaction};
use tourid_registry::{IdentityRecord, IdentityRegistry};
use tourid_types::{DigitalId, RecordHash, ServiceParams, Timestamp, VerificationLevel};
use tourid_utils::format_duration;
use tourid_verification::{VerificationEngine, VerifyOutcome};
use tourid_work::{MineControl, WorkGenerator};
use tracing::{error, info};

use crate::error::ServiceError;
use crate::pool::TransactionPool;
use crate::stats::LedgerStats;

const DEFAULT_ID_TYPE: &str = "visitor_id";

/// The issuance artifact returned for a freshly created digital ID.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IssuedId {
    pub digital_id: DigitalId,
    pub public_key_pem: String,
    pub blockchain_hash: RecordHash,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
    pub verification_level: VerificationLevel,
}

/// Receipt for a revocation. For an already-revoked id the original
/// revocation timestamp and reason are echoed back.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RevocationReceipt {
    pub digital_id: DigitalId,
    pub revoked_at: Timestamp,
    pub reason: String,
    pub revoked_by: String,
}

/// One entry of a batch verification.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BatchEntry {
    pub digital_id: String,
    #[serde(flatten)]
    pub outcome: VerifyOutcome,
}

/// Aggregate of a batch verification.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub results: Vec<BatchEntry>,
    pub verified_count: usize,
    pub failed_count: usize,
    pub elapsed_secs: f64,
}

/// The ledger service: exclusive owner of chain, pool, and registry.
///
/// Lock discipline: mining cycles serialize on `mine_gate`; the pool and the
/// chain are each locked only briefly (drain, snapshot, append) so that
/// verification and statistics never wait on a proof-of-work search.
pub struct LedgerService {
    params: ServiceParams,
    chain: RwLock<HashChain>,
    pool: Mutex<TransactionPool>,
    registry: RwLock<IdentityRegistry>,
    engine: VerificationEngine,
    miner: WorkGenerator,
    mine_gate: Mutex<()>,
    mine_control: MineControl,
}

impl LedgerService {
    pub fn new(params: ServiceParams) -> Result<Self, ServiceError> {
        let chain = HashChain::with_genesis(params.genesis_previous_hash, Timestamp::now())?;
        let registry = IdentityRegistry::new(params.id_validity_secs);
        let mine_control = match params.max_mine_iterations {
            Some(cap) => MineControl::with_iteration_cap(cap),
            None => MineControl::new(),
        };
        Ok(Self {
            params,
            chain: RwLock::new(chain),
            pool: Mutex::new(TransactionPool::new()),
            registry: RwLock::new(registry),
            engine: VerificationEngine,
            miner: WorkGenerator,
            mine_gate: Mutex::new(()),
            mine_control,
        })
    }

    pub fn params(&self) -> &ServiceParams {
        &self.params
    }

    /// Issue a digital ID: key pair, registry record, and a `CreateId`
    /// transaction enqueued for the next block.
    pub fn create_digital_id(
        &self,
        user_data: BTreeMap<String, String>,
        id_type: Option<String>,
    ) -> Result<IssuedId, ServiceError> {
        let now = Timestamp::now();
        let keypair = generate_keypair();
        let pem = public_key_pem(&keypair.verifying)?;

        let record = self.registry.write().unwrap().create(
            user_data,
            id_type.unwrap_or_else(|| DEFAULT_ID_TYPE.to_owned()),
            pem.clone(),
            now,
        )?;

        let data_hash = record_hash(&record)?;
        self.enqueue_and_maybe_mine(Transaction::CreateId {
            digital_id: record.digital_id.clone(),
            data_hash,
            timestamp: now,
        });

        Ok(IssuedId {
            digital_id: record.digital_id,
            public_key_pem: pem,
            blockchain_hash: data_hash,
            created_at: record.created_at,
            expires_at: record.expires_at,
            verification_level: record.verification_level,
        })
    }

    /// Revoke a digital ID. Only the first revocation emits a `RevokeId`
    /// transaction; repeats are success no-ops.
    pub fn revoke_digital_id(
        &self,
        digital_id: &str,
        reason: &str,
        revoked_by: &str,
    ) -> Result<RevocationReceipt, ServiceError> {
        let now = Timestamp::now();
        let result = self
            .registry
            .write()
            .unwrap()
            .revoke(digital_id, reason, now)?;

        if !result.already_revoked {
            self.enqueue_and_maybe_mine(Transaction::RevokeId {
                digital_id: result.record.digital_id.clone(),
                reason: reason.to_owned(),
                revoked_by: revoked_by.to_owned(),
                timestamp: now,
            });
        }

        Ok(RevocationReceipt {
            revoked_at: result.record.revoked_at.unwrap_or(now),
            reason: result
                .record
                .revocation_reason
                .clone()
                .unwrap_or_else(|| reason.to_owned()),
            digital_id: result.record.digital_id,
            revoked_by: revoked_by.to_owned(),
        })
    }

    /// Verify one digital ID against a consistent registry snapshot.
    pub fn verify_digital_id(
        &self,
        digital_id: &str,
        claimed: Option<&BTreeMap<String, String>>,
    ) -> VerifyOutcome {
        let registry = self.registry.read().unwrap();
        self.engine
            .verify(&registry, digital_id, claimed, Timestamp::now())
    }

    /// Verify up to `max_batch_verify` ids independently; one id failing
    /// does not short-circuit the rest.
    pub fn batch_verify(&self, digital_ids: &[String]) -> Result<BatchOutcome, ServiceError> {
        if digital_ids.is_empty() {
            return Err(ServiceError::Validation(
                "digital_ids must be a non-empty list".into(),
            ));
        }
        if digital_ids.len() > self.params.max_batch_verify {
            return Err(ServiceError::Validation(format!(
                "at most {} ids per batch",
                self.params.max_batch_verify
            )));
        }

        let started = Instant::now();
        let now = Timestamp::now();
        let registry = self.registry.read().unwrap();
        let mut verified_count = 0;
        let mut failed_count = 0;
        let results = digital_ids
            .iter()
            .map(|id| {
                let outcome = self.engine.verify(&registry, id, None, now);
                if outcome.verified {
                    verified_count += 1;
                } else {
                    failed_count += 1;
                }
                BatchEntry {
                    digital_id: id.clone(),
                    outcome,
                }
            })
            .collect();

        Ok(BatchOutcome {
            results,
            verified_count,
            failed_count,
            elapsed_secs: started.elapsed().as_secs_f64(),
        })
    }

    /// A record plus its current canonical hash, for the public lookup.
    pub fn record_with_hash(
        &self,
        digital_id: &str,
    ) -> Result<Option<(IdentityRecord, RecordHash)>, ServiceError> {
        let registry = self.registry.read().unwrap();
        match registry.get(digital_id) {
            None => Ok(None),
            Some(record) => Ok(Some((record.clone(), record_hash(record)?))),
        }
    }

    /// Manually drain and mine; `None` when there is nothing to mine.
    pub fn mine_now(&self) -> Result<Option<Block>, ServiceError> {
        self.mine_pending()
    }

    pub fn stats(&self) -> LedgerStats {
        let now = Timestamp::now();
        let (total_blocks, height, latest_hash, last_block_time) = {
            let chain = self.chain.read().unwrap();
            (
                chain.len(),
                chain.height(),
                chain.latest_hash(),
                chain.latest().timestamp,
            )
        };
        let (total_ids, active_ids, revoked_ids, ids_created_today) = {
            let registry = self.registry.read().unwrap();
            (
                registry.len(),
                registry.active_count(),
                registry.revoked_count(),
                registry.created_on_day(now),
            )
        };
        LedgerStats {
            total_blocks,
            blockchain_height: height,
            total_ids,
            active_ids,
            revoked_ids,
            pending_transactions: self.pool.lock().unwrap().len(),
            latest_block_hash: latest_hash,
            network_id: self.params.network.clone(),
            ids_created_today,
            last_block_time,
        }
    }

    /// Full-chain integrity walk (diagnostics, used by the health check).
    pub fn chain_integrity(&self) -> Result<(), ServiceError> {
        self.chain
            .read()
            .unwrap()
            .verify(self.params.difficulty)
            .map_err(Into::into)
    }

    /// Cancel any in-flight proof-of-work search.
    pub fn shutdown(&self) {
        self.mine_control.cancel();
    }

    fn enqueue_and_maybe_mine(&self, tx: Transaction) {
        let pending = {
            let mut pool = self.pool.lock().unwrap();
            pool.enqueue(tx);
            pool.len()
        };
        if pending >= self.params.auto_mine_threshold {
            if let Err(err) = self.mine_pending() {
                error!(%err, "automatic mining failed");
            }
        }
    }

    fn mine_pending(&self) -> Result<Option<Block>, ServiceError> {
        let _gate = self.mine_gate.lock().unwrap();
        let transactions = self.pool.lock().unwrap().drain_all();
        if transactions.is_empty() {
            return Ok(None);
        }

        let count = transactions.len();
        let started = Instant::now();
        match self.seal_and_append(transactions.clone()) {
            Ok(block) => {
                info!(
                    index = block.index,
                    transactions = count,
                    hash = %block.hash,
                    elapsed = %format_duration(started.elapsed().as_secs()),
                    "mined block"
                );
                Ok(Some(block))
            }
            Err(err) => {
                // keep the lifecycle events; they belong in a future block
                self.pool.lock().unwrap().requeue_front(transactions);
                Err(err)
            }
        }
    }

    fn seal_and_append(&self, transactions: Vec<Transaction>) -> Result<Block, ServiceError> {
        let (index, previous_hash) = {
            let chain = self.chain.read().unwrap();
            (chain.next_index(), chain.latest_hash())
        };
        let candidate = Block::new(index, transactions, Timestamp::now(), previous_hash)?;
        let sealed = self
            .miner
            .mine(candidate, self.params.difficulty, &self.mine_control)?;
        self.chain.write().unwrap().append(sealed.clone())?;
        Ok(sealed)
    }
}
