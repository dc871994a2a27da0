use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("missing required user-data field: {0}")]
    MissingField(&'static str),

    #[error("digital id not found: {0}")]
    NotFound(String),

    #[error("exhausted digital-id generation attempts")]
    IdSpaceExhausted,
}
