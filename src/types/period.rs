use crate::types::errors::PeriodError;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const PERIOD_LEN: usize = 6;
const YEAR_LEN: usize = 4;

/// A calendar month selected on the command line as a `YYYYMM` token.
///
/// Displays as `YYYY/MM`, which is the form used in the summary output.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Period {
    year: i32,
    month: u32
}

impl Period {
    /// Returns true when the date falls in this period (same year and same month).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl Display for Period {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:04}/{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = PeriodError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.len() != PERIOD_LEN || !value.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(PeriodError::InvalidFormat(value.to_string()));
        }

        let (year, month) = value.split_at(YEAR_LEN);
        let invalid_format = || PeriodError::InvalidFormat(value.to_string());

        let year: i32 = year.parse().map_err(|_| invalid_format())?;
        let month: u32 = month.parse().map_err(|_| invalid_format())?;

        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(PeriodError::InvalidMonth(value.to_string()));
        }

        Ok(Period { year, month })
    }
}
