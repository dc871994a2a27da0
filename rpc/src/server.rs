//! Router assembly and serving.

use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use tourid_node::LedgerService;

use crate::error::RpcError;
use crate::handlers;

pub fn create_router(service: Arc<LedgerService>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/create-id", post(handlers::create_id))
        .route("/verify", post(handlers::verify))
        .route("/id/:digital_id", get(handlers::get_id))
        .route("/revoke", post(handlers::revoke))
        .route("/batch-verify", post(handlers::batch_verify))
        .route("/stats", get(handlers::stats))
        .route("/mine", post(handlers::mine))
        .layer(CorsLayer::permissive())
        .with_state(service)
}

/// Serve the HTTP surface until ctrl-c, then cancel any in-flight mining.
pub async fn run(service: Arc<LedgerService>, port: u16) -> Result<(), RpcError> {
    let app = create_router(service.clone());
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| RpcError::Server(e.to_string()))?;
    tracing::info!("tourid service listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(service))
        .await
        .map_err(|e| RpcError::Server(e.to_string()))
}

async fn shutdown_signal(service: Arc<LedgerService>) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("shutdown signal received");
    service.shutdown();
}
