use serde::Serialize;
use serde_json::Value;

use crate::models::errors::ValidationFailure;
use crate::types::CategoryId;

/// An income or expense category attached to every transaction.
///
/// Instances are only ever produced by the validating [`Category::parse`]
/// path, so a constructed value always satisfies the field rules below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier, an integer in the wire format.
    pub id: CategoryId,
    /// Display name, non-empty.
    pub name: String,
    /// Display glyph, non-empty.
    pub emoji: String,
    /// Whether the category represents income rather than an expense.
    pub is_income: bool,
}

impl Category {
    /// Validates a decoded JSON value and converts it into a `Category`.
    ///
    /// All four fields are required and strictly type-checked: `id` must be
    /// an integer-typed number, `name` and `emoji` must be non-empty text,
    /// and `isIncome` must be a genuine boolean. A non-object input or any
    /// single bad field rejects the whole value.
    pub fn parse(value: &Value) -> Result<Self, ValidationFailure> {
        let object = value.as_object().ok_or(ValidationFailure)?;

        let id = object
            .get("id")
            .and_then(Value::as_i64)
            .ok_or(ValidationFailure)?;
        let name = object
            .get("name")
            .and_then(Value::as_str)
            .ok_or(ValidationFailure)?;
        let emoji = object
            .get("emoji")
            .and_then(Value::as_str)
            .ok_or(ValidationFailure)?;
        let is_income = object
            .get("isIncome")
            .and_then(Value::as_bool)
            .ok_or(ValidationFailure)?;

        if name.is_empty() || emoji.is_empty() {
            return Err(ValidationFailure);
        }

        Ok(Self {
            id,
            name: name.to_string(),
            emoji: emoji.to_string(),
            is_income,
        })
    }
}
