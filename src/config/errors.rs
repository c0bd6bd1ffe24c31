use std::path::PathBuf;

use thiserror::Error;

use crate::types::PeriodError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid period: {0}")]
    Period(#[from] PeriodError),
    #[error("Invalid file path [{}]: file does not exist", .0.display())]
    FileNotFound(PathBuf),
    #[error("Invalid file path [{}]: path points to a directory, not a file", .0.display())]
    NotAFile(PathBuf),
    #[error("Invalid file path [{}]: file must have a .csv extension", .0.display())]
    NotCsv(PathBuf),
    #[error("Invalid file path [{}]: {source}", path.display())]
    Metadata {
        path: PathBuf,
        source: std::io::Error
    }
}
