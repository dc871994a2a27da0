use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("index gap: expected {expected}, got {got}")]
    IndexGap { expected: u64, got: u64 },

    #[error("previous-hash mismatch at index {index}")]
    PreviousHashMismatch { index: u64 },

    #[error("stored hash does not match recomputation at index {index}")]
    HashMismatch { index: u64 },

    #[error("block {index} does not meet difficulty {difficulty}")]
    DifficultyNotMet { index: u64, difficulty: u32 },

    #[error(transparent)]
    Canonicalize(#[from] tourid_crypto::CryptoError),
}
