use std::sync::{Arc, Mutex};

use crate::util::lock;

use super::transaction::Transaction;

pub type TransactionVec = Vec<Transaction>;

type SyncedTransactionVec = Arc<Mutex<TransactionVec>>;

/// Transactions waiting for the next mined block.
#[derive(Debug, Clone, Default)]
pub struct TransactionPool {
    transactions: SyncedTransactionVec,
}

impl TransactionPool {
    pub fn new() -> TransactionPool {
        TransactionPool::default()
    }

    pub fn add_transaction(&self, transaction: Transaction) {
        let mut transactions = lock(&self.transactions);

        info!(
            "Transaction added: {} -> {} ({})",
            transaction.sender, transaction.recipient, transaction.amount
        );
        transactions.push(transaction);
    }

    pub fn len(&self) -> usize {
        lock(&self.transactions).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drains every pending transaction, oldest first.
    pub fn pop(&self) -> TransactionVec {
        std::mem::take(&mut *lock(&self.transactions))
    }

    /// Puts transactions back ahead of anything added since they were popped.
    pub fn requeue(&self, transactions: TransactionVec) {
        if transactions.is_empty() {
            return;
        }

        info!("Requeued {} transactions", transactions.len());

        let mut pending = lock(&self.transactions);
        let newer = std::mem::replace(&mut *pending, transactions);
        pending.extend(newer);
    }
}
