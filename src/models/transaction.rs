use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::Amount;

/// A single dated financial event read from one row of the input CSV file.
///
/// Fields are only reachable through accessors, so a transaction cannot be
/// altered once ingestion has produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date of the event, serialized as `YYYY/MM/DD`.
    #[serde(with = "crate::types::date")]
    date: NaiveDate,
    /// Positive for income, zero or negative for expenditure.
    amount: Amount,
    /// Free text label, already trimmed and never empty.
    content: String
}

impl Transaction {
    pub fn new(date: NaiveDate, amount: Amount, content: impl Into<String>) -> Self {
        Self {
            date,
            amount,
            content: content.into()
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_income(&self) -> bool {
        self.amount > 0
    }
}
