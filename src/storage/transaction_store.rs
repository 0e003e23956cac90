use std::sync::Arc;

use dashmap::DashMap;
use dashmap::iter::Iter;
use dashmap::mapref::entry::Entry;

use crate::models::Transaction;
use crate::storage::Storage;
use crate::types::TransactionId;

pub struct TransactionStore {
    entries: Arc<DashMap<TransactionId, Transaction>>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
        }
    }

    pub fn iter(&self) -> Iter<'_, TransactionId, Transaction> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for TransactionStore {
    /// The first record with a given id wins; later duplicates are dropped
    /// and `false` is returned.
    fn insert(&self, transaction: Transaction) -> bool {
        match self.entries.entry(transaction.id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(vacant) => {
                vacant.insert(transaction);
                true
            }
        }
    }

    fn get(&self, transaction_id: TransactionId) -> Option<Transaction> {
        self.entries
            .get(&transaction_id)
            .map(|entry| entry.value().clone())
    }
}
