use proptest::prelude::*;

use tourid_ledger::Block;
use tourid_types::{BlockHash, Timestamp};
use tourid_work::{meets_difficulty, validate_sealed, MineControl, WorkGenerator};

fn candidate(seed: u8, timestamp: u64) -> Block {
    Block::new(1, Vec::new(), Timestamp::new(timestamp), BlockHash::new([seed; 32])).unwrap()
}

proptest! {
    /// Generated work always passes validation.
    #[test]
    fn generated_work_always_valid(
        seed in 0u8..=255,
        timestamp in 0u64..1_000_000,
        difficulty in 0u32..=1,
    ) {
        let sealed = WorkGenerator
            .mine(candidate(seed, timestamp), difficulty, &MineControl::new())
            .unwrap();
        prop_assert!(validate_sealed(&sealed, difficulty).unwrap());
    }

    /// Zero difficulty accepts any hash.
    #[test]
    fn zero_difficulty_always_passes(bytes in prop::array::uniform32(0u8..)) {
        prop_assert!(meets_difficulty(&BlockHash::new(bytes), 0));
    }

    /// If a hash is valid at difficulty d, it is valid at every lower one.
    #[test]
    fn lower_difficulty_is_easier(
        bytes in prop::array::uniform32(0u8..),
        difficulty in 1u32..=64,
    ) {
        let hash = BlockHash::new(bytes);
        if meets_difficulty(&hash, difficulty) {
            prop_assert!(meets_difficulty(&hash, difficulty - 1));
        }
    }

    /// The search is reproducible: same candidate, same lowest nonce.
    #[test]
    fn search_is_reproducible(
        seed in 0u8..=255,
        timestamp in 0u64..1_000_000,
    ) {
        let a = WorkGenerator
            .mine(candidate(seed, timestamp), 1, &MineControl::new())
            .unwrap();
        let b = WorkGenerator
            .mine(candidate(seed, timestamp), 1, &MineControl::new())
            .unwrap();
        prop_assert_eq!(a.nonce, b.nonce);
        prop_assert_eq!(a.hash, b.hash);
    }
}
