use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::models::Category;
use crate::models::errors::ValidationFailure;
use crate::types::TransactionId;

/// A single validated transaction record.
///
/// The record is immutable once constructed and owns its nested [`Category`]
/// by value. Only the validating [`Transaction::parse`] path constructs it;
/// there is no partially-populated state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier, an integer in the wire format.
    pub id: TransactionId,
    /// Exact base-10 amount. Always textual on the wire (e.g. `"500.00"`)
    /// so no precision is lost to binary floating point; the textual scale
    /// is preserved.
    pub amount: Decimal,
    /// Timestamp of the transaction, normalized to UTC.
    pub transaction_date: DateTime<Utc>,
    /// Free-form note. An absent key is a valid "no comment", never an
    /// empty-string default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// The category this transaction belongs to.
    pub category: Category,
}

impl Transaction {
    /// Validates a decoded JSON value and converts it into a `Transaction`.
    ///
    /// Required fields are `id` (integer-typed), `amount` (text holding a
    /// base-10 decimal), `transactionDate` (text holding an ISO-8601
    /// timestamp with zone), and `category` (an object accepted by
    /// [`Category::parse`]). `comment` is optional, but when the key is
    /// present its value must be text. Rejection is all-or-nothing: one bad
    /// field and no `Transaction` is produced.
    pub fn parse(value: &Value) -> Result<Self, ValidationFailure> {
        let object = value.as_object().ok_or(ValidationFailure)?;

        let id = object
            .get("id")
            .and_then(Value::as_i64)
            .ok_or(ValidationFailure)?;

        let amount_text = object
            .get("amount")
            .and_then(Value::as_str)
            .ok_or(ValidationFailure)?;
        let amount = Decimal::from_str(amount_text).map_err(|_| ValidationFailure)?;

        let date_text = object
            .get("transactionDate")
            .and_then(Value::as_str)
            .ok_or(ValidationFailure)?;
        let transaction_date = DateTime::parse_from_rfc3339(date_text)
            .map(|date| date.with_timezone(&Utc))
            .map_err(|_| ValidationFailure)?;

        let comment = match object.get("comment") {
            None => None,
            Some(raw) => Some(raw.as_str().ok_or(ValidationFailure)?.to_string()),
        };

        let category = Category::parse(object.get("category").ok_or(ValidationFailure)?)?;

        Ok(Self {
            id,
            amount,
            transaction_date,
            comment,
            category,
        })
    }
}
