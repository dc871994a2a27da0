//! Append-only hash-linked ledger.
//!
//! Every digital-ID lifecycle event (creation, revocation) is recorded as a
//! transaction; transactions are sealed into blocks by proof-of-work and the
//! blocks form a single chain owned by the service. The chain is in-memory
//! only; state does not survive a restart.

pub mod block;
pub mod chain;
pub mod error;
pub mod genesis;
pub mod transaction;

pub use block::Block;
pub use chain::HashChain;
pub use error::ChainError;
pub use genesis::create_genesis_block;
pub use transaction::Transaction;
