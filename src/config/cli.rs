use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::level_filters::LevelFilter;

/// Summarizes one month of transactions from a CSV file as JSON.
#[derive(Debug, Parser)]
#[command(name = "txn-summary", version)]
pub struct Cli {
    /// Period to summarize, as YYYYMM (for example 202201)
    pub period: String,

    /// CSV file with a `date,amount,content` header
    pub file: PathBuf,

    /// Verbosity of the diagnostics written to stderr
    #[arg(long, value_enum, default_value_t = LogLevel::Error)]
    pub log_level: LogLevel
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE
        }
    }
}
