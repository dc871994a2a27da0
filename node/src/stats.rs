//! Ledger statistics snapshot.

use serde::{Deserialize, Serialize};
use tourid_types::{BlockHash, NetworkId, Timestamp};

/// Point-in-time statistics across chain, registry, and pool.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LedgerStats {
    pub total_blocks: usize,
    pub blockchain_height: u64,
    pub total_ids: usize,
    pub active_ids: usize,
    pub revoked_ids: usize,
    pub pending_transactions: usize,
    pub latest_block_hash: BlockHash,
    pub network_id: NetworkId,
    pub ids_created_today: usize,
    pub last_block_time: Timestamp,
}
