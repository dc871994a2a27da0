//! The pending-transaction pool.

use std::collections::VecDeque;
use tourid_ledger::Transaction;

/// Ordered, unbounded buffer of lifecycle events awaiting inclusion in a
/// block. Auto-mining at a threshold is the service's policy, not the pool's.
#[derive(Default)]
pub struct TransactionPool {
    pending: VecDeque<Transaction>,
}

impl TransactionPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append in caller order.
    pub fn enqueue(&mut self, tx: Transaction) {
        self.pending.push_back(tx);
    }

    /// Atomically remove and return the full buffer, leaving the pool empty.
    pub fn drain_all(&mut self) -> Vec<Transaction> {
        std::mem::take(&mut self.pending).into()
    }

    /// Put transactions back at the head, preserving their original order.
    /// Used when a mining cycle fails after draining.
    pub fn requeue_front(&mut self, transactions: Vec<Transaction>) {
        for tx in transactions.into_iter().rev() {
            self.pending.push_front(tx);
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourid_types::{DigitalId, RecordHash, Timestamp};

    fn tx(n: u64) -> Transaction {
        Transaction::CreateId {
            digital_id: DigitalId::from(format!("TID-{:06}-AAAA0000", n).as_str()),
            data_hash: RecordHash::new([n as u8; 32]),
            timestamp: Timestamp::new(n),
        }
    }

    #[test]
    fn drain_returns_in_caller_order() {
        let mut pool = TransactionPool::new();
        pool.enqueue(tx(1));
        pool.enqueue(tx(2));
        pool.enqueue(tx(3));
        assert_eq!(pool.len(), 3);

        let drained = pool.drain_all();
        assert_eq!(drained, vec![tx(1), tx(2), tx(3)]);
    }

    #[test]
    fn drain_is_idempotent() {
        let mut pool = TransactionPool::new();
        pool.enqueue(tx(1));
        assert_eq!(pool.drain_all().len(), 1);
        assert!(pool.drain_all().is_empty());
        assert!(pool.is_empty());
    }

    #[test]
    fn requeue_front_restores_original_order() {
        let mut pool = TransactionPool::new();
        pool.enqueue(tx(1));
        pool.enqueue(tx(2));
        let drained = pool.drain_all();

        pool.enqueue(tx(3));
        pool.requeue_front(drained);
        assert_eq!(pool.drain_all(), vec![tx(1), tx(2), tx(3)]);
    }
}
