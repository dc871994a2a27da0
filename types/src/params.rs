//! Service parameters for the ledger subsystem.

use crate::hash::BlockHash;
use crate::network::NetworkId;
use serde::{Deserialize, Serialize};

/// Parameters governing the ledger, the miner, and the registry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceParams {
    /// Required count of leading zero hex digits in a valid block hash.
    pub difficulty: u32,

    /// Previous-hash of the genesis block (default: 64 hex zeros).
    pub genesis_previous_hash: BlockHash,

    /// Pending-pool size at which a block is mined automatically.
    pub auto_mine_threshold: usize,

    /// Lifetime of a freshly issued digital ID in seconds.
    pub id_validity_secs: u64,

    /// Maximum number of ids accepted by a single batch verification.
    pub max_batch_verify: usize,

    /// Optional hard cap on proof-of-work iterations per block.
    /// `None` leaves the search unbounded.
    pub max_mine_iterations: Option<u64>,

    /// Network tag reported in statistics.
    pub network: NetworkId,
}

impl ServiceParams {
    /// One year, the issuance validity window.
    pub const ID_VALIDITY_SECS: u64 = 365 * 24 * 3600;
}

impl Default for ServiceParams {
    fn default() -> Self {
        Self {
            difficulty: 4,
            genesis_previous_hash: BlockHash::ZERO,
            auto_mine_threshold: 5,
            id_validity_secs: Self::ID_VALIDITY_SECS,
            max_batch_verify: 10,
            max_mine_iterations: None,
            network: NetworkId::default(),
        }
    }
}
