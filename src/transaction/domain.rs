//! Core transaction domain types.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::{
    OffsetDateTime, PrimitiveDateTime,
    format_description::well_known::{Iso8601, Rfc3339},
};

use crate::category::CategoryId;

/// Server-assigned identifier for a transaction.
pub type TransactionId = i64;

/// Whether money was spent or earned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money that was spent.
    #[default]
    Expense,
    /// Money that was earned.
    Income,
}

impl TransactionType {
    /// The value used on the wire and in HTML forms.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Expense => "expense",
            TransactionType::Income => "income",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The timestamp the backend assigned to a transaction.
///
/// The backend's string is kept exactly as received so that it can be sent
/// back unchanged when the transaction is updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionDate(String);

impl TransactionDate {
    /// Wrap a timestamp string from the backend.
    pub fn new(timestamp: &str) -> Self {
        Self(timestamp.to_owned())
    }

    /// The calendar date of the timestamp formatted as `YYYY-MM-DD`.
    ///
    /// Accepts RFC 3339 timestamps and ISO 8601 timestamps without an offset.
    /// Falls back to the raw string if the timestamp cannot be parsed.
    pub fn display_date(&self) -> String {
        if let Ok(date_time) = OffsetDateTime::parse(&self.0, &Rfc3339) {
            return date_time.date().to_string();
        }

        match PrimitiveDateTime::parse(&self.0, &Iso8601::DEFAULT) {
            Ok(date_time) => date_time.date().to_string(),
            Err(_) => self.0.clone(),
        }
    }
}

impl AsRef<str> for TransactionDate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID assigned by the backend.
    pub id: TransactionId,
    /// The amount of money spent or earned.
    pub amount: f64,
    /// Whether the money was spent or earned.
    #[serde(rename = "type")]
    pub type_: TransactionType,
    /// An optional note about what the transaction was for.
    #[serde(default)]
    pub description: Option<String>,
    /// The category the transaction belongs to.
    pub category_id: CategoryId,
    /// When the transaction was recorded.
    pub transaction_date: TransactionDate,
}

/// The request body for creating a transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTransaction {
    /// The amount of money spent or earned.
    pub amount: f64,
    /// Whether the money was spent or earned.
    #[serde(rename = "type")]
    pub type_: TransactionType,
    /// The note to attach, `None` if the user left it empty.
    pub description: Option<String>,
    /// The category to file the transaction under.
    pub category_id: CategoryId,
}

/// The request body for updating a transaction.
///
/// Unlike [NewTransaction], this carries the original `transaction_date`,
/// otherwise the backend would stamp the transaction with the current time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionUpdate {
    /// The editable fields.
    #[serde(flatten)]
    pub fields: NewTransaction,
    /// The date of the transaction being updated.
    pub transaction_date: TransactionDate,
}
