//! HTTP surface for the tourid service.
//!
//! Thin boundary layer: handlers parse requests, delegate to the
//! [`tourid_node::LedgerService`], and map errors onto status codes.
//! CPU-bound calls (create, revoke, mine) hop through `spawn_blocking` so a
//! proof-of-work search never stalls the async runtime.

pub mod error;
pub mod handlers;
pub mod server;

pub use error::RpcError;
pub use server::{create_router, run};
