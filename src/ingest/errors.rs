use std::path::PathBuf;

use thiserror::Error;

use crate::ingest::layout::QuoteFault;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Could not open CSV file [{}]: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error
    },
    #[error("Invalid header: expected {expected:?}, got {actual:?}")]
    Header {
        expected: Vec<String>,
        actual: Vec<String>
    },
    #[error("Line [{line}]: expected 3 fields, found {found}")]
    FieldCount {
        line: usize,
        found: usize
    },
    #[error("Line [{line}]: invalid date [{value}], expected YYYY/MM/DD")]
    DateFormat {
        line: usize,
        value: String
    },
    #[error("Line [{line}]: invalid amount [{value}]")]
    AmountFormat {
        line: usize,
        value: String
    },
    #[error("Line [{line}]: content is empty")]
    EmptyContent {
        line: usize
    },
    #[error("Line [{line}]: malformed CSV quoting, {fault}")]
    Quoting {
        line: usize,
        fault: QuoteFault
    },
    #[error("Line [{line}]: could not read CSV record: {source}")]
    Read {
        line: usize,
        source: csv::Error
    }
}

