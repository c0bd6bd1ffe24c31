//! `YYYY/MM/DD` calendar dates, shared by CSV ingestion and the JSON output.

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serializer};

pub const DATE_FORMAT: &str = "%Y/%m/%d";
const DATE_LEN: usize = 10;
const SEPARATORS: [usize; 2] = [4, 7];

/// Parses a strict `YYYY/MM/DD` date. Unpadded components are rejected.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let well_formed = value.len() == DATE_LEN
        && value.bytes().enumerate().all(|(index, byte)| {
            if SEPARATORS.contains(&index) { byte == b'/' } else { byte.is_ascii_digit() }
        });

    if !well_formed {
        return None;
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(DATE_FORMAT))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_date(&value).ok_or_else(|| de::Error::custom(format!("invalid date [{value}], expected YYYY/MM/DD")))
}
