use crate::ingest::layout::RecordLayout;
use crate::ingest::IngestError;
use crate::models::Transaction;
use crate::types::date::parse_date;
use crate::types::Amount;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Column names the first row must carry, compared case-insensitively.
pub const EXPECTED_HEADER: [&str; 3] = ["date", "amount", "content"];

const HEADER_LINE: usize = 1;

/// Opens the CSV file at `path` and reads every transaction in it.
///
/// The file handle is owned by `read_from` and closed when it returns,
/// whether it succeeds or stops at the first invalid row.
pub fn read_transactions(path: &Path) -> Result<Vec<Transaction>, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source
    })?;

    info!("Reading transactions from [{}]", path.display());

    read_from(file)
}

/// Reads a header row followed by transaction rows from any byte source.
///
/// Either every row parses and the whole sequence is returned in file order,
/// or the first failure is returned and nothing else. Errors carry the line
/// on which the offending record starts.
pub fn read_from<R: Read>(mut input: R) -> Result<Vec<Transaction>, IngestError> {
    let mut buffer = Vec::new();
    input.read_to_end(&mut buffer).map_err(|error| IngestError::Read {
        line: HEADER_LINE + buffer.iter().filter(|&&byte| byte == b'\n').count(),
        source: csv::Error::from(error)
    })?;

    //NOTE: The csv crate reads through stray quotes, so quoting is checked up front and reported when its record is reached.
    let layout = RecordLayout::scan(&buffer);

    //NOTE: Headers and field counts are checked here rather than by the csv crate so the errors carry line numbers.
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(buffer.as_slice());

    let mut records = reader.records().enumerate();

    let Some((index, header)) = records.next() else {
        return Err(layout.fault().unwrap_or_else(|| header_error(&[])));
    };

    let line = layout.line_of(index)?;
    let header = header.map_err(|source| IngestError::Read { line, source })?;
    validate_header(&header)?;

    let mut transactions = Vec::new();

    for (index, result) in records {
        let line = layout.line_of(index)?;
        let record = result.map_err(|source| IngestError::Read { line, source })?;
        let transaction = parse_record(&record, line)?;

        debug!("Line [{line}] parsed: {} {} [{}]", transaction.date(), transaction.amount(), transaction.content());

        transactions.push(transaction);
    }

    if let Some(fault) = layout.fault() {
        return Err(fault);
    }

    info!("Read [{}] transactions", transactions.len());

    Ok(transactions)
}

/// Checks that the header row is exactly `date,amount,content`, ignoring case.
pub fn validate_header(header: &StringRecord) -> Result<(), IngestError> {
    let matches = header.len() == EXPECTED_HEADER.len()
        && header.iter()
            .zip(EXPECTED_HEADER)
            .all(|(field, expected)| field.eq_ignore_ascii_case(expected));

    if matches {
        return Ok(());
    }

    Err(header_error(&header.iter().collect::<Vec<_>>()))
}

fn header_error(actual: &[&str]) -> IngestError {
    IngestError::Header {
        expected: EXPECTED_HEADER.iter().map(|field| field.to_string()).collect(),
        actual: actual.iter().map(|field| field.to_string()).collect()
    }
}

/// Converts one data row into a [`Transaction`], reporting failures against `line`.
pub fn parse_record(record: &StringRecord, line: usize) -> Result<Transaction, IngestError> {
    if record.len() != EXPECTED_HEADER.len() {
        return Err(IngestError::FieldCount { line, found: record.len() });
    }

    let raw_date = &record[0];
    let date = parse_date(raw_date).ok_or_else(|| IngestError::DateFormat {
        line,
        value: raw_date.to_string()
    })?;

    let raw_amount = &record[1];
    let amount: Amount = raw_amount.parse().map_err(|_| IngestError::AmountFormat {
        line,
        value: raw_amount.to_string()
    })?;

    let content = record[2].trim();
    if content.is_empty() {
        return Err(IngestError::EmptyContent { line });
    }

    Ok(Transaction::new(date, amount, content))
}
