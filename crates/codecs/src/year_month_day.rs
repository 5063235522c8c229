//! Calendar-date codec
//!
//! Persists a [`YearMonthDay`] as one of:
//! - `numeric`: a packed `YYYYMMDD` integer
//! - `datetime`: a TIMESTAMP at midnight (or noon, with `timeOffset = "noon"`)
//!   in the configured zone; decoding keeps only the calendar date
//! - `string`: ISO `YYYY-MM-DD` text
//!
//! The format is mandatory. A codec configured without a recognized
//! `sqltype` fails at setup instead of defaulting.

use chrono_tz::Tz;
use chronopersist_core::{
    CodecError, CodecProperties, CodecResult, ColumnValue, RowReader, SqlType, StatementWriter,
    StorageFormat, TimeOffset, YearMonthDay, DEFAULT_STORAGE_ZONE,
};

use crate::immutable::{Configure, ImmutableValueCodec};
use crate::read::{column_name, read_integer, read_text, read_timestamp};
use crate::zone::{from_wall_clock, midnight, to_wall_clock};

const NOON_MILLIS: i64 = 12 * 3_600_000;

/// Pack a date as `year * 10000 + month * 100 + day`
///
/// # Errors
///
/// Returns [`CodecError::InvalidValue`] for years before 0, which the
/// packed layout cannot express.
pub fn pack(ymd: &YearMonthDay) -> CodecResult<i64> {
    if ymd.year() < 0 {
        return Err(CodecError::invalid_value(format!(
            "{} cannot be packed: negative year",
            ymd
        )));
    }
    Ok(i64::from(ymd.year()) * 10_000 + i64::from(ymd.month()) * 100 + i64::from(ymd.day()))
}

/// Unpack a `YYYYMMDD` integer (division first, then modulo)
///
/// # Errors
///
/// Returns [`CodecError::InvalidValue`] if the fields do not form a date.
pub fn unpack(packed: i64) -> CodecResult<YearMonthDay> {
    let year = packed / 10_000;
    let month = packed / 100 % 100;
    let day = packed % 100;
    match (
        i32::try_from(year),
        u32::try_from(month),
        u32::try_from(day),
    ) {
        (Ok(year), Ok(month), Ok(day)) => YearMonthDay::new(year, month, day),
        _ => Err(CodecError::invalid_value(format!(
            "{} is not a packed date",
            packed
        ))),
    }
}

/// Parse ISO `YYYY-MM-DD` text; the hyphen separator is fixed
fn parse_iso(text: &str) -> CodecResult<YearMonthDay> {
    let format_error = || CodecError::Format {
        value: text.to_string(),
        expected: "YYYY-MM-DD",
    };
    let parts: Vec<&str> = text.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        tracing::debug!(value = text, "stored date is not hyphen-separated");
        return Err(format_error());
    };
    let year = year.trim().parse::<i32>().map_err(|_| format_error())?;
    let month = month.trim().parse::<u32>().map_err(|_| format_error())?;
    let day = day.trim().parse::<u32>().map_err(|_| format_error())?;
    YearMonthDay::new(year, month, day)
}

/// Column encodings supported by [`YearMonthDayCodec`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// Packed `YYYYMMDD` in a NUMERIC column
    Numeric,
    /// Midnight or noon in a TIMESTAMP column
    Datetime,
    /// ISO text in a VARCHAR column
    String,
}

impl TryFrom<StorageFormat> for DateFormat {
    type Error = CodecError;

    fn try_from(format: StorageFormat) -> CodecResult<Self> {
        match format {
            StorageFormat::Numeric => Ok(DateFormat::Numeric),
            StorageFormat::Datetime => Ok(DateFormat::Datetime),
            StorageFormat::String => Ok(DateFormat::String),
            StorageFormat::Time => Err(CodecError::configuration(
                "YearMonthDayCodec does not support sqltype 'time'",
            )),
        }
    }
}

impl From<DateFormat> for StorageFormat {
    fn from(format: DateFormat) -> Self {
        match format {
            DateFormat::Numeric => StorageFormat::Numeric,
            DateFormat::Datetime => StorageFormat::Datetime,
            DateFormat::String => StorageFormat::String,
        }
    }
}

/// Codec for [`YearMonthDay`] values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonthDayCodec {
    format: DateFormat,
    offset: TimeOffset,
    zone: Tz,
}

impl YearMonthDayCodec {
    /// Create a codec with every setting explicit
    pub const fn new(format: DateFormat, offset: TimeOffset, zone: Tz) -> Self {
        YearMonthDayCodec {
            format,
            offset,
            zone,
        }
    }

    /// Packed-integer codec
    pub const fn numeric() -> Self {
        Self::new(DateFormat::Numeric, TimeOffset::None, DEFAULT_STORAGE_ZONE)
    }

    /// Timestamp codec in the default zone
    pub const fn datetime(offset: TimeOffset) -> Self {
        Self::new(DateFormat::Datetime, offset, DEFAULT_STORAGE_ZONE)
    }

    /// ISO text codec
    pub const fn string() -> Self {
        Self::new(DateFormat::String, TimeOffset::None, DEFAULT_STORAGE_ZONE)
    }

    /// Configure with a pinned format, ignoring any `sqltype` property
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Configuration`] for invalid `timeOffset` or `timezone`.
    pub fn configure_pinned(format: DateFormat, props: &CodecProperties) -> CodecResult<Self> {
        let offset = props.time_offset()?;
        let zone = props.time_zone(DEFAULT_STORAGE_ZONE)?;
        tracing::debug!(
            codec = "YearMonthDayCodec",
            format = %StorageFormat::from(format),
            offset = %offset,
            zone = zone.name(),
            "configured codec"
        );
        Ok(Self::new(format, offset, zone))
    }

    /// Configured column encoding
    pub fn format(&self) -> DateFormat {
        self.format
    }

    /// Time-of-day shift for TIMESTAMP columns
    pub fn offset(&self) -> TimeOffset {
        self.offset
    }

    /// Zone used for TIMESTAMP columns
    pub fn zone(&self) -> Tz {
        self.zone
    }
}

impl Configure for YearMonthDayCodec {
    fn configure(props: &CodecProperties) -> CodecResult<Self> {
        let format = props
            .storage_format()?
            .ok_or_else(|| CodecError::configuration("No valid sqltype specified!"))
            .and_then(DateFormat::try_from)?;
        Self::configure_pinned(format, props)
    }
}

impl ImmutableValueCodec for YearMonthDayCodec {
    type Value = YearMonthDay;

    fn value_type_name(&self) -> &'static str {
        "YearMonthDay"
    }

    fn sql_types(&self) -> &'static [SqlType] {
        match self.format {
            DateFormat::Numeric => &[SqlType::Numeric],
            DateFormat::Datetime => &[SqlType::Timestamp],
            DateFormat::String => &[SqlType::Varchar],
        }
    }

    fn null_sql_type(&self) -> SqlType {
        StorageFormat::from(self.format).sql_type()
    }

    fn decode(&self, row: &dyn RowReader, names: &[&str]) -> CodecResult<Option<YearMonthDay>> {
        let column = column_name(names, 0)?;
        match self.format {
            DateFormat::Numeric => read_integer(row, column, SqlType::Numeric)?
                .map(unpack)
                .transpose(),
            DateFormat::Datetime => read_timestamp(row, column)?
                .map(|ts| {
                    let instant = from_wall_clock(ts, &self.zone)?;
                    Ok(YearMonthDay::from(
                        instant.to_datetime_in(&self.zone)?.date_naive(),
                    ))
                })
                .transpose(),
            DateFormat::String => read_text(row, column)?
                .map(|text| parse_iso(&text))
                .transpose(),
        }
    }

    fn encode(
        &self,
        statement: &mut dyn StatementWriter,
        index: usize,
        value: &YearMonthDay,
    ) -> CodecResult<()> {
        let column = match self.format {
            DateFormat::Numeric => ColumnValue::Integer(pack(value)?),
            DateFormat::Datetime => {
                let mut instant = midnight(value.as_naive(), &self.zone)?;
                if self.offset == TimeOffset::Noon {
                    instant = instant.saturating_add_millis(NOON_MILLIS);
                }
                ColumnValue::Timestamp(to_wall_clock(instant, &self.zone)?)
            }
            DateFormat::String => ColumnValue::Text(value.to_string()),
        };
        statement.set_column(index, column)
    }
}
