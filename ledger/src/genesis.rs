//! Genesis block creation.
//!
//! The genesis block carries no transactions and links to a configurable
//! fixed previous-hash (64 hex zeros by default). It is not mined.

use tourid_types::{BlockHash, Timestamp};

use crate::block::Block;
use crate::error::ChainError;

/// Create the genesis block for a chain.
pub fn create_genesis_block(
    previous_hash: BlockHash,
    timestamp: Timestamp,
) -> Result<Block, ChainError> {
    Block::new(0, Vec::new(), timestamp, previous_hash)
}
