//! The tourid ledger service.
//!
//! One service object owns the chain, the pending-transaction pool, and the
//! identity registry; it is constructed once at process start and handed to
//! request handlers by reference. There are no ambient globals.

pub mod config;
pub mod error;
pub mod pool;
pub mod service;
pub mod stats;

pub use config::ServiceConfig;
pub use error::ServiceError;
pub use pool::TransactionPool;
pub use service::{BatchEntry, BatchOutcome, IssuedId, LedgerService, RevocationReceipt};
pub use stats::LedgerStats;
