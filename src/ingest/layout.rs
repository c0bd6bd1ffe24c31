use std::fmt;
use std::fmt::{Display, Formatter};

use crate::ingest::IngestError;

/// Malformed quoting the `csv` crate would otherwise read through silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteFault {
    /// A `"` inside a field that did not start with one.
    BareQuote,
    /// A closing `"` followed by something other than a delimiter or line end.
    ExtraneousQuote,
    /// A quoted field still open at the end of the input.
    UnterminatedQuote
}

impl Display for QuoteFault {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::BareQuote => write!(formatter, "bare \" in non-quoted field"),
            Self::ExtraneousQuote => write!(formatter, "extraneous \" after quoted field"),
            Self::UnterminatedQuote => write!(formatter, "quoted field is never closed")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fault {
    record: usize,
    line: usize,
    kind: QuoteFault
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    StartRecord,
    StartField,
    Unquoted,
    Quoted,
    QuoteInQuoted
}

/// Physical line on which each CSV record starts, plus the first quoting fault.
///
/// Blank lines are skipped and quoted fields may span lines, matching how the
/// `csv` reader splits records, so record `n` from that reader starts on
/// `line_of(n)`. Records up to the faulty one are split identically by both.
#[derive(Debug, Default)]
pub struct RecordLayout {
    lines: Vec<usize>,
    fault: Option<Fault>
}

impl RecordLayout {
    pub fn scan(input: &[u8]) -> Self {
        let mut layout = RecordLayout::default();
        let mut state = State::StartRecord;
        let mut line = 1;
        let mut quote_line = 1;

        for &byte in input {
            if state == State::StartRecord {
                if byte == b'\n' {
                    line += 1;
                    continue;
                }
                if byte == b'\r' {
                    continue;
                }
                layout.lines.push(line);
                state = State::StartField;
            }

            state = match (state, byte) {
                (State::Quoted, b'"') => State::QuoteInQuoted,
                (State::Quoted, _) => State::Quoted,
                (State::QuoteInQuoted, b'"') => State::Quoted,
                (State::StartField, b'"') => {
                    quote_line = line;
                    State::Quoted
                }
                (_, b',') => State::StartField,
                (_, b'\n' | b'\r') => State::StartRecord,
                (State::Unquoted, b'"') => return layout.with_fault(line, QuoteFault::BareQuote),
                (State::QuoteInQuoted, _) => return layout.with_fault(line, QuoteFault::ExtraneousQuote),
                _ => State::Unquoted
            };

            if byte == b'\n' {
                line += 1;
            }
        }

        if state == State::Quoted {
            return layout.with_fault(quote_line, QuoteFault::UnterminatedQuote);
        }

        layout
    }

    fn with_fault(mut self, line: usize, kind: QuoteFault) -> Self {
        let record = self.lines.len().saturating_sub(1);
        self.fault = Some(Fault { record, line, kind });
        self
    }

    /// Start line of record `index`, or the quoting error if that record is malformed.
    pub fn line_of(&self, index: usize) -> Result<usize, IngestError> {
        if let Some(fault) = self.fault.filter(|fault| fault.record == index) {
            return Err(IngestError::Quoting { line: fault.line, fault: fault.kind });
        }

        Ok(self.lines.get(index).copied().unwrap_or_else(|| self.lines.last().map_or(1, |last| last + 1)))
    }

    /// The quoting error, if any, for callers that ran out of records before reaching it.
    pub fn fault(&self) -> Option<IngestError> {
        self.fault.map(|fault| IngestError::Quoting { line: fault.line, fault: fault.kind })
    }
}
