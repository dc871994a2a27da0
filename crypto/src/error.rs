use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("canonical serialization failed: {0}")]
    Canonicalize(#[from] serde_json::Error),

    #[error("public key encoding failed: {0}")]
    Pem(String),
}
