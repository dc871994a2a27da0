use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Registry(#[from] tourid_registry::RegistryError),

    #[error(transparent)]
    Chain(#[from] tourid_ledger::ChainError),

    #[error(transparent)]
    Work(#[from] tourid_work::WorkError),

    #[error(transparent)]
    Crypto(#[from] tourid_crypto::CryptoError),
}
