//! Calendar date without time of day

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CodecError, CodecResult};

/// A real calendar date (proleptic Gregorian)
///
/// Construction validates the year/month/day triple, so every value
/// denotes an existing date. `Display` renders the canonical `YYYY-MM-DD`
/// form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonthDay(NaiveDate);

impl YearMonthDay {
    /// Create a date from its components
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidValue`] if the triple is not a real date.
    pub fn new(year: i32, month: u32, day: u32) -> CodecResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(YearMonthDay)
            .ok_or_else(|| {
                CodecError::invalid_value(format!(
                    "{}-{}-{} is not a calendar date",
                    year, month, day
                ))
            })
    }

    /// Wrap a chrono date
    pub const fn from_naive(date: NaiveDate) -> Self {
        YearMonthDay(date)
    }

    /// The underlying chrono date
    pub const fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Year
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month of year (1-12)
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of month (1-31)
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl std::fmt::Display for YearMonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl From<NaiveDate> for YearMonthDay {
    fn from(date: NaiveDate) -> Self {
        YearMonthDay(date)
    }
}

impl From<YearMonthDay> for NaiveDate {
    fn from(ymd: YearMonthDay) -> Self {
        ymd.0
    }
}
