//! Sequential nonce search.

use tourid_ledger::Block;

use crate::validator::meets_difficulty;
use crate::{MineControl, WorkError};

/// Iterations between cancellation checks.
const BATCH_SIZE: u64 = 4096;

/// Seals candidate blocks by scanning nonces from zero.
pub struct WorkGenerator;

impl WorkGenerator {
    /// Find the lowest nonce whose block hash carries at least `difficulty`
    /// leading zero hex digits; returns the block with nonce and hash set.
    ///
    /// The cancel flag is consulted every [`BATCH_SIZE`] iterations, the
    /// iteration cap on every step.
    pub fn mine(
        &self,
        mut block: Block,
        difficulty: u32,
        control: &MineControl,
    ) -> Result<Block, WorkError> {
        block.nonce = 0;
        let mut iterations: u64 = 0;
        loop {
            if control.is_cancelled() {
                return Err(WorkError::Cancelled);
            }
            let batch_end = iterations.saturating_add(BATCH_SIZE);
            while iterations < batch_end {
                if let Some(cap) = control.iteration_cap() {
                    if iterations >= cap {
                        return Err(WorkError::IterationLimit { cap });
                    }
                }
                block.hash = block.compute_hash()?;
                if meets_difficulty(&block.hash, difficulty) {
                    return Ok(block);
                }
                block.nonce = block.nonce.wrapping_add(1);
                iterations += 1;
            }
        }
    }
}
