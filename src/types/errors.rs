use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeriodError {
    #[error("Period must be in YYYYMM format, got [{0}]")]
    InvalidFormat(String),
    #[error("Period [{0}] is not a valid year/month combination")]
    InvalidMonth(String)
}
