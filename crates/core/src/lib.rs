//! Core types for Chronopersist
//!
//! This crate defines the foundational types shared by every codec:
//! - Temporal values: Instant, YearMonthDay, TimeOfDay, Duration
//! - Column vocabulary: SqlType, ColumnValue
//! - Host boundary: RowReader, StatementWriter (plus in-memory implementations)
//! - Configuration: CodecProperties, StorageFormat, TimeOffset
//! - Error: CodecError, CodecResult

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod column;
pub mod config;
pub mod error;
pub mod row;
pub mod temporal;

pub use column::{ColumnValue, SqlType};
pub use config::{
    parse_zone, CodecProperties, StorageFormat, TimeOffset, DEFAULT_STORAGE_ZONE,
    DEFAULT_TIME_OF_DAY_ZONE, SECOND_COLUMN_KEY, SQLTYPE_KEY, TIMEZONE_KEY, TIME_OFFSET_KEY,
};
pub use error::{CodecError, CodecResult};
pub use row::{BoundParameter, MemoryRow, MemoryStatement, RowReader, StatementWriter};
pub use temporal::{Duration, Instant, TimeOfDay, YearMonthDay, MILLIS_PER_DAY};

// Re-export the zone type so hosts need not depend on chrono-tz directly
pub use chrono_tz::Tz;
