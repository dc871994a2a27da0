//! RPC error types and their status-code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use tourid_node::ServiceError;
use tourid_registry::RegistryError;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("invalid request: {0}")]
    Validation(String),

    #[error("digital id not found: {0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("server error: {0}")]
    Server(String),
}

impl From<ServiceError> for RpcError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => Self::Validation(msg),
            ServiceError::Registry(RegistryError::MissingField(field)) => {
                Self::Validation(format!("missing required field: {field}"))
            }
            ServiceError::Registry(RegistryError::NotFound(id)) => Self::NotFound(id),
            other => Self::Internal(other.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) | Self::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
