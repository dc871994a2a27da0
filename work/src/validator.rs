//! Difficulty validation (single-shot, not hot loop).

use tourid_ledger::Block;
use tourid_types::BlockHash;

use crate::WorkError;

/// Whether a hash carries at least `difficulty` leading zero hex digits.
pub fn meets_difficulty(hash: &BlockHash, difficulty: u32) -> bool {
    hash.leading_zero_digits() >= difficulty
}

/// Whether a sealed block's stored hash is honest and meets the difficulty.
pub fn validate_sealed(block: &Block, difficulty: u32) -> Result<bool, WorkError> {
    let recomputed = block.compute_hash()?;
    Ok(recomputed == block.hash && meets_difficulty(&block.hash, difficulty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MineControl, WorkGenerator};
    use tourid_types::Timestamp;

    #[test]
    fn zero_difficulty_always_passes() {
        assert!(meets_difficulty(&BlockHash::new([0xff; 32]), 0));
    }

    #[test]
    fn sealed_block_validates_and_tampering_fails() {
        let candidate =
            Block::new(1, Vec::new(), Timestamp::new(3), BlockHash::ZERO).unwrap();
        let mut sealed = WorkGenerator
            .mine(candidate, 1, &MineControl::new())
            .unwrap();
        assert!(validate_sealed(&sealed, 1).unwrap());

        sealed.nonce += 1;
        assert!(!validate_sealed(&sealed, 1).unwrap());
    }
}
