use crate::config::Config;
use crate::ingest::{read_transactions, IngestError};
use crate::models::{Transaction, TransactionSummary};
use crate::types::{Amount, Period};
use tracing::{error, info};

/// Runs the whole pipeline for a validated configuration: read, filter, sort and total.
pub fn process(config: &Config) -> Result<TransactionSummary, IngestError> {
    let transactions = read_transactions(&config.path)?;
    let read = transactions.len();

    let filtered = filter_by_period(transactions, config.period);

    info!("Kept [{}] of [{read}] transactions for period [{}]", filtered.len(), config.period);

    Ok(summarize(filtered, config.period))
}

/// Keeps the transactions dated within `period`, in their original order.
pub fn filter_by_period(transactions: Vec<Transaction>, period: Period) -> Vec<Transaction> {
    transactions
        .into_iter()
        .filter(|transaction| period.contains(transaction.date()))
        .collect()
}

/// Orders transactions newest first. Transactions sharing a date keep their relative order.
pub fn sort_by_date_desc(transactions: &mut [Transaction]) {
    transactions.sort_by(|left, right| right.date().cmp(&left.date()));
}

/// Sorts the transactions and totals them into income and expenditure.
///
/// Positive amounts are income; zero and negative amounts are expenditure.
pub fn summarize(mut transactions: Vec<Transaction>, period: Period) -> TransactionSummary {
    sort_by_date_desc(&mut transactions);

    let mut summary = TransactionSummary::empty(period);

    for transaction in &transactions {
        if transaction.is_income() {
            summary.total_income = accumulate(summary.total_income, transaction);
        } else {
            summary.total_expenditure = accumulate(summary.total_expenditure, transaction);
        }
    }

    summary.transactions = transactions;
    summary
}

fn accumulate(total: Amount, transaction: &Transaction) -> Amount {
    total.checked_add(transaction.amount()).unwrap_or_else(|| {
        error!("Total overflowed adding [{}] dated {}, saturating", transaction.amount(), transaction.date());
        total.saturating_add(transaction.amount())
    })
}
