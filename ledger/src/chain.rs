//! The append-only chain and its integrity checks.

use tourid_types::{BlockHash, Timestamp};
use tracing::error;

use crate::block::Block;
use crate::error::ChainError;
use crate::genesis::create_genesis_block;

/// An ordered, append-only sequence of hash-linked blocks.
///
/// Always holds at least the genesis block. Owned exclusively by the
/// ledger service; appended blocks are never mutated.
pub struct HashChain {
    blocks: Vec<Block>,
}

impl HashChain {
    /// Start a chain from a fresh genesis block.
    pub fn with_genesis(
        genesis_previous_hash: BlockHash,
        timestamp: Timestamp,
    ) -> Result<Self, ChainError> {
        let genesis = create_genesis_block(genesis_previous_hash, timestamp)?;
        Ok(Self {
            blocks: vec![genesis],
        })
    }

    /// The most recent block. O(1).
    pub fn latest(&self) -> &Block {
        self.blocks.last().expect("chain holds at least genesis")
    }

    pub fn latest_hash(&self) -> BlockHash {
        self.latest().hash
    }

    /// Total number of blocks, genesis included.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Index of the latest block.
    pub fn height(&self) -> u64 {
        self.latest().index
    }

    /// Index the next appended block must carry.
    pub fn next_index(&self) -> u64 {
        self.blocks.len() as u64
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Append a sealed block, enforcing index and previous-hash linkage.
    ///
    /// A violation indicates corruption, is logged at `error` level, and
    /// aborts the mutation.
    pub fn append(&mut self, block: Block) -> Result<(), ChainError> {
        let latest = self.latest();
        if block.index != latest.index + 1 {
            let err = ChainError::IndexGap {
                expected: latest.index + 1,
                got: block.index,
            };
            error!(%err, "rejecting block append");
            return Err(err);
        }
        if block.previous_hash != latest.hash {
            let err = ChainError::PreviousHashMismatch { index: block.index };
            error!(%err, "rejecting block append");
            return Err(err);
        }
        self.blocks.push(block);
        Ok(())
    }

    /// Recompute every block hash and check linkage across the full chain.
    ///
    /// Diagnostics only, not on the hot path. The genesis block is exempt
    /// from the difficulty requirement because it is never mined.
    pub fn verify(&self, difficulty: u32) -> Result<(), ChainError> {
        for (i, block) in self.blocks.iter().enumerate() {
            if block.compute_hash()? != block.hash {
                return Err(ChainError::HashMismatch { index: block.index });
            }
            if i == 0 {
                continue;
            }
            let prev = &self.blocks[i - 1];
            if block.index != prev.index + 1 {
                return Err(ChainError::IndexGap {
                    expected: prev.index + 1,
                    got: block.index,
                });
            }
            if block.previous_hash != prev.hash {
                return Err(ChainError::PreviousHashMismatch { index: block.index });
            }
            if block.hash.leading_zero_digits() < difficulty {
                return Err(ChainError::DifficultyNotMet {
                    index: block.index,
                    difficulty,
                });
            }
        }
        Ok(())
    }
}
