//! Block structure and hash computation.

use serde::{Deserialize, Serialize};
use tourid_crypto::canonical_sha256;
use tourid_types::{BlockHash, Timestamp};

use crate::error::ChainError;
use crate::transaction::Transaction;

/// An immutable, hash-linked container of transactions, sealed by
/// proof-of-work once appended to the chain.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,
    pub transactions: Vec<Transaction>,
    pub timestamp: Timestamp,
    pub previous_hash: BlockHash,
    pub nonce: u64,
    pub hash: BlockHash,
}

/// The hashed view of a block: every field except `hash` itself, in a
/// deterministic canonical-JSON ordering.
#[derive(Serialize)]
struct BlockHeader<'a> {
    index: u64,
    transactions: &'a [Transaction],
    timestamp: Timestamp,
    previous_hash: BlockHash,
    nonce: u64,
}

impl Block {
    /// Build a candidate block with nonce 0 and its hash computed.
    pub fn new(
        index: u64,
        transactions: Vec<Transaction>,
        timestamp: Timestamp,
        previous_hash: BlockHash,
    ) -> Result<Self, ChainError> {
        let mut block = Self {
            index,
            transactions,
            timestamp,
            previous_hash,
            nonce: 0,
            hash: BlockHash::ZERO,
        };
        block.hash = block.compute_hash()?;
        Ok(block)
    }

    /// Compute the hash of this block from its contents.
    ///
    /// The `hash` field is excluded from its own input.
    pub fn compute_hash(&self) -> Result<BlockHash, ChainError> {
        let digest = canonical_sha256(&BlockHeader {
            index: self.index,
            transactions: &self.transactions,
            timestamp: self.timestamp,
            previous_hash: self.previous_hash,
            nonce: self.nonce,
        })?;
        Ok(BlockHash::new(digest))
    }
}
