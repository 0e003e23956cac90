use super::{Storage, TransactionStore};

use std::str::FromStr;

use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::{Category, Transaction};
use crate::types::TransactionId;

fn create_transaction(id: TransactionId, amount: &str) -> Result<Transaction> {
    Ok(Transaction {
        id,
        amount: Decimal::from_str(amount)?,
        transaction_date: DateTime::parse_from_rfc3339("2025-06-13T12:00:00Z")?
            .with_timezone(&Utc),
        comment: None,
        category: Category {
            id: 1,
            name: "Зарплата".to_string(),
            emoji: "💰".to_string(),
            is_income: true,
        },
    })
}

#[test]
fn test_store_insert_and_get_roundtrip() -> Result<()> {
    let store = TransactionStore::new();

    assert!(store.get(99).is_none());

    assert!(store.insert(create_transaction(1, "500.00")?));

    let retrieved = store
        .get(1)
        .ok_or_else(|| anyhow!("Transaction not found in store"))?;

    assert_eq!(retrieved.id, 1);
    assert_eq!(retrieved.amount.to_string(), "500.00");

    Ok(())
}

#[test]
fn test_store_rejects_duplicate_id_and_keeps_original() -> Result<()> {
    let store = TransactionStore::new();

    assert!(store.insert(create_transaction(1, "10.00")?));
    assert!(!store.insert(create_transaction(1, "20.00")?));

    let retained = store
        .get(1)
        .ok_or_else(|| anyhow!("Original transaction missing"))?;

    assert_eq!(retained.amount.to_string(), "10.00");
    assert_eq!(store.len(), 1);

    Ok(())
}

#[test]
fn test_store_iterator_collects_all_transactions() -> Result<()> {
    let store = TransactionStore::new();

    assert!(store.is_empty());

    store.insert(create_transaction(1, "1.00")?);
    store.insert(create_transaction(2, "2.00")?);
    store.insert(create_transaction(3, "3.00")?);

    assert_eq!(store.iter().count(), 3);

    Ok(())
}
