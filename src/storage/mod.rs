mod transaction_store;
#[cfg(test)]
mod tests;

use crate::models::Transaction;
use crate::types::TransactionId;

pub use transaction_store::TransactionStore;

pub trait Storage: Send + Sync + 'static {
    fn insert(&self, transaction: Transaction) -> bool;
    fn get(&self, transaction_id: TransactionId) -> Option<Transaction>;
}
