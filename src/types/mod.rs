pub mod date;
mod errors;
mod period;

pub use errors::PeriodError;
pub use period::Period;

/// Signed transaction amount: positive is income, zero or negative is expenditure.
pub type Amount = i64;
