//! Column vocabulary shared by hosts and codecs
//!
//! ## SQL Types
//!
//! Codecs declare the SQL types of the columns they occupy so the host can
//! generate schema and bind typed nulls. The vocabulary is deliberately small:
//!
//! | SqlType | Code | Used by |
//! |---------|------|---------|
//! | Numeric | 2 | numeric instants, packed dates, millis-of-day, millis durations |
//! | Timestamp | 93 | datetime instants, dates and times of day |
//! | Varchar | 12 | ISO dates, `hh:mm` times of day |
//! | Time | 92 | SQL `TIME` times of day |
//! | Integer | 4 | split hour/minute durations |
//!
//! Codes match `java.sql.Types` so schemas written by other drivers line up.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// SQL column type declared by a codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SqlType {
    /// Arbitrary-precision number (stored as signed 64-bit here)
    Numeric,
    /// Wall-clock date and time without zone
    Timestamp,
    /// Variable-length text
    Varchar,
    /// Wall-clock time of day without date
    Time,
    /// 32-bit integer
    Integer,
}

impl SqlType {
    /// All SQL types (for iteration)
    pub const ALL: [SqlType; 5] = [
        SqlType::Numeric,
        SqlType::Timestamp,
        SqlType::Varchar,
        SqlType::Time,
        SqlType::Integer,
    ];

    /// Integer type tag, compatible with `java.sql.Types`
    pub const fn code(&self) -> i32 {
        match self {
            SqlType::Numeric => 2,
            SqlType::Timestamp => 93,
            SqlType::Varchar => 12,
            SqlType::Time => 92,
            SqlType::Integer => 4,
        }
    }

    /// Parse from an integer type tag
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.code() == code)
    }

    /// SQL keyword
    pub const fn name(&self) -> &'static str {
        match self {
            SqlType::Numeric => "NUMERIC",
            SqlType::Timestamp => "TIMESTAMP",
            SqlType::Varchar => "VARCHAR",
            SqlType::Time => "TIME",
            SqlType::Integer => "INTEGER",
        }
    }
}

impl std::fmt::Display for SqlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A primitive column value, as read from a row or bound to a statement
///
/// Timestamps carry wall-clock time only. The zone used to produce or
/// interpret them belongs to the codec's configuration, never to the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnValue {
    /// SQL NULL
    Null,
    /// Integral number (NUMERIC or INTEGER columns)
    Integer(i64),
    /// Zoneless date and time (TIMESTAMP columns)
    Timestamp(NaiveDateTime),
    /// Text (VARCHAR columns)
    Text(String),
    /// Zoneless time of day (TIME columns)
    Time(NaiveTime),
}

impl ColumnValue {
    /// Kind name, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            ColumnValue::Null => "null",
            ColumnValue::Integer(_) => "integer",
            ColumnValue::Timestamp(_) => "timestamp",
            ColumnValue::Text(_) => "text",
            ColumnValue::Time(_) => "time",
        }
    }

    /// Check if this is SQL NULL
    pub fn is_null(&self) -> bool {
        matches!(self, ColumnValue::Null)
    }

    /// Get as i64 if this is an Integer value
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ColumnValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as NaiveDateTime if this is a Timestamp value
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            ColumnValue::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    /// Get as &str if this is a Text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ColumnValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as NaiveTime if this is a Time value
    pub fn as_time(&self) -> Option<NaiveTime> {
        match self {
            ColumnValue::Time(t) => Some(*t),
            _ => None,
        }
    }
}

impl From<i64> for ColumnValue {
    fn from(i: i64) -> Self {
        ColumnValue::Integer(i)
    }
}

impl From<&str> for ColumnValue {
    fn from(s: &str) -> Self {
        ColumnValue::Text(s.to_string())
    }
}

impl From<String> for ColumnValue {
    fn from(s: String) -> Self {
        ColumnValue::Text(s)
    }
}

impl From<NaiveDateTime> for ColumnValue {
    fn from(ts: NaiveDateTime) -> Self {
        ColumnValue::Timestamp(ts)
    }
}

impl From<NaiveTime> for ColumnValue {
    fn from(t: NaiveTime) -> Self {
        ColumnValue::Time(t)
    }
}

impl<T: Into<ColumnValue>> From<Option<T>> for ColumnValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ColumnValue::Null, Into::into)
    }
}
