use serde::{Deserialize, Serialize};

use crate::models::Transaction;
use crate::types::{Amount, Period};

/// Income and expenditure for one period, together with the transactions behind them.
///
/// This is the value written to stdout once the whole file has been processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSummary {
    /// The requested period as `YYYY/MM`.
    pub period: String,
    /// Sum of all positive amounts.
    pub total_income: Amount,
    /// Sum of all zero or negative amounts.
    pub total_expenditure: Amount,
    /// Transactions of the period, newest first.
    pub transactions: Vec<Transaction>
}

impl TransactionSummary {
    /// Creates a summary with zero totals and no transactions.
    pub fn empty(period: Period) -> Self {
        Self {
            period: period.to_string(),
            total_income: 0,
            total_expenditure: 0,
            transactions: Vec::new()
        }
    }
}
