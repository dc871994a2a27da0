use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkError {
    #[error("mining cancelled")]
    Cancelled,

    #[error("iteration limit {cap} reached without a valid nonce")]
    IterationLimit { cap: u64 },

    #[error(transparent)]
    Chain(#[from] tourid_ledger::ChainError),
}
