mod cli;
mod errors;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::types::Period;

pub use cli::Cli;
pub use errors::ConfigError;

const CSV_EXTENSION: &str = "csv";

/// Validated run configuration.
///
/// Holding a `Config` means the period is a real calendar month and the path
/// names an existing `.csv` file, so the processing pipeline does not check again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub period: Period,
    pub path: PathBuf
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let period = cli.period.parse::<Period>()?;
        validate_file_path(&cli.file)?;

        debug!("Configuration accepted: period [{period}], file [{}]", cli.file.display());

        Ok(Self {
            period,
            path: cli.file.clone()
        })
    }
}

/// Checks that `path` exists, is not a directory and ends in `.csv`.
pub fn validate_file_path(path: &Path) -> Result<(), ConfigError> {
    let metadata = fs::metadata(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::Metadata { path: path.to_path_buf(), source }
    })?;

    if metadata.is_dir() {
        return Err(ConfigError::NotAFile(path.to_path_buf()));
    }

    if path.extension().and_then(|extension| extension.to_str()) != Some(CSV_EXTENSION) {
        return Err(ConfigError::NotCsv(path.to_path_buf()));
    }

    Ok(())
}
