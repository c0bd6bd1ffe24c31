mod summary;
mod transaction;

pub use summary::TransactionSummary;
pub use transaction::Transaction;
