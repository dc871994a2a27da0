//! Proof-of-work sealing for candidate blocks.
//!
//! Not a currency miner: the computational cost that seals lifecycle events
//! into the chain. The search is a sequential nonce scan so that the same
//! candidate block and difficulty always yield the same lowest-nonce
//! solution, which keeps mining reproducible.

pub mod error;
pub mod generator;
pub mod validator;

pub use error::WorkError;
pub use generator::WorkGenerator;
pub use validator::{meets_difficulty, validate_sealed};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared handle bounding a proof-of-work search.
///
/// The search itself has no timeout; the cancel flag and the optional
/// iteration cap are the escape hatches so a slow search never becomes an
/// unkillable critical section.
#[derive(Clone, Debug, Default)]
pub struct MineControl {
    cancelled: Arc<AtomicBool>,
    iteration_cap: Option<u64>,
}

impl MineControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_iteration_cap(cap: u64) -> Self {
        Self {
            cancelled: Arc::default(),
            iteration_cap: Some(cap),
        }
    }

    /// Ask any in-flight search holding a clone of this control to stop.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    pub fn iteration_cap(&self) -> Option<u64> {
        self.iteration_cap
    }
}
