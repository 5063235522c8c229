//! Chronopersist - column codecs for temporal values
//!
//! Converts instants, calendar dates, times of day and durations to and from
//! the primitive column types a relational store understands (NUMERIC,
//! TIMESTAMP, VARCHAR, TIME, INTEGER).
//!
//! # Quick Start
//!
//! ```
//! use chronopersist::{
//!     CodecProperties, Configure, ImmutableValueCodec, MemoryStatement, YearMonthDay,
//!     YearMonthDayCodec,
//! };
//!
//! let props = CodecProperties::new().with("sqltype", "numeric");
//! let codec = YearMonthDayCodec::configure(&props).unwrap();
//!
//! let mut stmt = MemoryStatement::new();
//! let date = YearMonthDay::new(2006, 5, 1).unwrap();
//! codec.null_safe_set(&mut stmt, 1, Some(&date)).unwrap();
//!
//! let row = stmt.to_row(&["ymd"]);
//! assert_eq!(codec.null_safe_get(&row, &["ymd"]).unwrap(), Some(date));
//! ```
//!
//! # Architecture
//!
//! Value types, column vocabulary, configuration and errors live in
//! `chronopersist-core`; the codecs live in `chronopersist-codecs`. Both are
//! re-exported here.

pub use chronopersist_codecs::*;
pub use chronopersist_core::*;
