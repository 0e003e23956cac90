pub type CategoryId = i64;
pub type TransactionId = i64;
