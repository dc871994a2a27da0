//! Request handlers and their wire types.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use tourid_ledger::Block;
use tourid_node::{BatchOutcome, IssuedId, LedgerService, LedgerStats, RevocationReceipt};
use tourid_registry::IdentityRecord;
use tourid_types::{IdStatus, RecordHash, Timestamp, VerificationLevel};
use tourid_verification::VerifyOutcome;

use crate::error::RpcError;

pub type AppState = Arc<LedgerService>;

/// Run a blocking service call off the async runtime.
async fn blocking<T, F>(task: F) -> Result<T, RpcError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, RpcError> + Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| RpcError::Internal(e.to_string()))?
}

// ── Create ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateIdRequest {
    #[serde(default)]
    pub user_data: BTreeMap<String, String>,
    #[serde(default)]
    pub id_type: Option<String>,
}

/// POST /create-id
pub async fn create_id(
    State(service): State<AppState>,
    Json(req): Json<CreateIdRequest>,
) -> Result<(StatusCode, Json<IssuedId>), RpcError> {
    let issued = blocking(move || {
        service
            .create_digital_id(req.user_data, req.id_type)
            .map_err(RpcError::from)
    })
    .await?;
    Ok((StatusCode::CREATED, Json(issued)))
}

// ── Verify ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VerifyRequest {
    #[serde(default)]
    pub digital_id: Option<String>,
    #[serde(default)]
    pub user_data: Option<BTreeMap<String, String>>,
}

/// POST /verify
pub async fn verify(
    State(service): State<AppState>,
    Json(req): Json<VerifyRequest>,
) -> Result<Json<VerifyOutcome>, RpcError> {
    let digital_id = req
        .digital_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| RpcError::Validation("digital_id is required".into()))?;
    Ok(Json(
        service.verify_digital_id(&digital_id, req.user_data.as_ref()),
    ))
}

// ── Public record lookup ─────────────────────────────────────────────────

/// Public projection of an identity record (no user data, no key material).
#[derive(Serialize, Deserialize)]
pub struct PublicRecord {
    pub exists: bool,
    pub digital_id: String,
    pub id_type: String,
    pub status: IdStatus,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
    pub verification_level: VerificationLevel,
    pub blockchain_hash: RecordHash,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoked_at: Option<Timestamp>,
}

impl PublicRecord {
    fn from_parts(record: IdentityRecord, hash: RecordHash) -> Self {
        Self {
            exists: true,
            digital_id: record.digital_id.as_str().to_owned(),
            id_type: record.id_type,
            status: record.status,
            created_at: record.created_at,
            expires_at: record.expires_at,
            verification_level: record.verification_level,
            blockchain_hash: hash,
            revoked_at: record.revoked_at,
        }
    }
}

/// GET /id/:digital_id
pub async fn get_id(
    State(service): State<AppState>,
    Path(digital_id): Path<String>,
) -> Result<Json<PublicRecord>, RpcError> {
    match service.record_with_hash(&digital_id)? {
        None => Err(RpcError::NotFound(digital_id)),
        Some((record, hash)) => Ok(Json(PublicRecord::from_parts(record, hash))),
    }
}

// ── Revoke ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RevokeRequest {
    #[serde(default)]
    pub digital_id: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub revoked_by: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct RevokeResponse {
    pub revoked: bool,
    #[serde(flatten)]
    pub receipt: RevocationReceipt,
}

/// POST /revoke
pub async fn revoke(
    State(service): State<AppState>,
    Json(req): Json<RevokeRequest>,
) -> Result<Json<RevokeResponse>, RpcError> {
    let (Some(digital_id), Some(reason), Some(revoked_by)) =
        (req.digital_id, req.reason, req.revoked_by)
    else {
        return Err(RpcError::Validation(
            "digital_id, reason, and revoked_by are required".into(),
        ));
    };

    let receipt = blocking(move || {
        service
            .revoke_digital_id(&digital_id, &reason, &revoked_by)
            .map_err(RpcError::from)
    })
    .await?;
    Ok(Json(RevokeResponse {
        revoked: true,
        receipt,
    }))
}

// ── Batch verify ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct BatchVerifyRequest {
    #[serde(default)]
    pub digital_ids: Vec<String>,
}

/// POST /batch-verify
pub async fn batch_verify(
    State(service): State<AppState>,
    Json(req): Json<BatchVerifyRequest>,
) -> Result<Json<BatchOutcome>, RpcError> {
    Ok(Json(service.batch_verify(&req.digital_ids)?))
}

// ── Stats ────────────────────────────────────────────────────────────────

/// GET /stats
pub async fn stats(State(service): State<AppState>) -> Json<LedgerStats> {
    Json(service.stats())
}

// ── Mine ─────────────────────────────────────────────────────────────────

#[derive(Serialize, Deserialize)]
pub struct MinedBlockSummary {
    pub index: u64,
    pub hash: String,
    pub transactions: usize,
    pub timestamp: Timestamp,
}

impl From<Block> for MinedBlockSummary {
    fn from(block: Block) -> Self {
        Self {
            index: block.index,
            hash: block.hash.to_string(),
            transactions: block.transactions.len(),
            timestamp: block.timestamp,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct MineResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<MinedBlockSummary>,
}

/// POST /mine
pub async fn mine(State(service): State<AppState>) -> Result<Json<MineResponse>, RpcError> {
    let mined = blocking(move || service.mine_now().map_err(RpcError::from)).await?;
    Ok(Json(match mined {
        Some(block) => MineResponse {
            message: "block mined".into(),
            block: Some(block.into()),
        },
        None => MineResponse {
            message: "nothing to mine".into(),
            block: None,
        },
    }))
}

// ── Health ───────────────────────────────────────────────────────────────

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: Timestamp,
    pub version: String,
    pub stats: LedgerStats,
}

/// GET /health reports chain integrity alongside the statistics.
pub async fn health(State(service): State<AppState>) -> Json<HealthResponse> {
    let status = match service.chain_integrity() {
        Ok(()) => "healthy",
        Err(_) => "degraded",
    };
    Json(HealthResponse {
        status: status.into(),
        timestamp: Timestamp::now(),
        version: env!("CARGO_PKG_VERSION").into(),
        stats: service.stats(),
    })
}
