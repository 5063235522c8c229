//! Time-of-day codec
//!
//! Persists a [`TimeOfDay`] as one of:
//! - `string`: `hh:mm` text on a 12-hour clock with no AM/PM marker (the
//!   default, see [`TimeOfDayCodec::string`])
//! - `datetime`: a TIMESTAMP on today's date in the configured zone
//! - `numeric`: milliseconds since midnight
//! - `time`: a SQL TIME column
//!
//! The zone (default `EST`) is only used to build the intermediate "today"
//! timestamp.
//!
//! ## Lossy string encoding
//!
//! `hh:mm` drops seconds and milliseconds, and without an AM/PM marker
//! 13:00 is written as `01:00` and reads back as 01:00, while both midnight
//! and noon are written as `12:xx` and read back as noon. This is the
//! established column layout, so it is kept as is.

use chrono_tz::Tz;
use chronopersist_core::{
    CodecError, CodecProperties, CodecResult, ColumnValue, RowReader, SqlType, StatementWriter,
    StorageFormat, TimeOfDay, DEFAULT_TIME_OF_DAY_ZONE,
};

use crate::immutable::{Configure, ImmutableValueCodec};
use crate::read::{column_name, read_integer, read_text, read_time, read_timestamp};
use crate::zone::{from_wall_clock, to_wall_clock, today_in};

const HOUR_MINUTE_PATTERN: &str = "%I:%M";

/// Codec for [`TimeOfDay`] values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDayCodec {
    format: StorageFormat,
    zone: Tz,
}

impl TimeOfDayCodec {
    /// Create a codec with an explicit format and zone
    pub const fn new(format: StorageFormat, zone: Tz) -> Self {
        TimeOfDayCodec { format, zone }
    }

    /// The `hh:mm` string variant in the default zone
    pub const fn string() -> Self {
        Self::new(StorageFormat::String, DEFAULT_TIME_OF_DAY_ZONE)
    }

    /// Configured column encoding
    pub fn format(&self) -> StorageFormat {
        self.format
    }

    /// Zone used for the intermediate "today" timestamp
    pub fn zone(&self) -> Tz {
        self.zone
    }

    /// Render as `hh:mm` via today's timestamp in the configured zone
    fn format_hour_minute(&self, value: &TimeOfDay) -> CodecResult<String> {
        let today = today_in(&self.zone).and_time(value.to_naive_time());
        let instant = from_wall_clock(today, &self.zone)?;
        if value.has_sub_minute_fields() {
            tracing::trace!(%value, "dropping seconds and milliseconds from time of day");
        }
        Ok(instant
            .to_datetime_in(&self.zone)?
            .format(HOUR_MINUTE_PATTERN)
            .to_string())
    }

    /// Today's wall-clock timestamp at `value` in the configured zone
    fn today_at(&self, value: &TimeOfDay) -> CodecResult<chrono::NaiveDateTime> {
        let local = today_in(&self.zone).and_time(value.to_naive_time());
        to_wall_clock(from_wall_clock(local, &self.zone)?, &self.zone)
    }
}

/// Parse `hh:mm` text into a time with zero seconds
fn parse_hour_minute(text: &str) -> CodecResult<TimeOfDay> {
    let format_error = || CodecError::Format {
        value: text.to_string(),
        expected: "hh:mm",
    };
    let pieces: Vec<&str> = text.split(':').collect();
    let [hour, minute] = pieces.as_slice() else {
        tracing::debug!(value = text, pieces = pieces.len(), "stored time is not hh:mm");
        return Err(format_error());
    };
    let hour = hour.trim().parse::<u32>().map_err(|_| format_error())?;
    let minute = minute.trim().parse::<u32>().map_err(|_| format_error())?;
    TimeOfDay::new(hour, minute)
}

impl Default for TimeOfDayCodec {
    fn default() -> Self {
        Self::string()
    }
}

impl Configure for TimeOfDayCodec {
    fn configure(props: &CodecProperties) -> CodecResult<Self> {
        let format = props.storage_format()?.unwrap_or(StorageFormat::String);
        let zone = props.time_zone(DEFAULT_TIME_OF_DAY_ZONE)?;
        tracing::debug!(
            codec = "TimeOfDayCodec",
            format = %format,
            zone = zone.name(),
            "configured codec"
        );
        Ok(Self::new(format, zone))
    }
}

impl ImmutableValueCodec for TimeOfDayCodec {
    type Value = TimeOfDay;

    fn value_type_name(&self) -> &'static str {
        "TimeOfDay"
    }

    fn sql_types(&self) -> &'static [SqlType] {
        match self.format {
            StorageFormat::Numeric => &[SqlType::Numeric],
            StorageFormat::Datetime => &[SqlType::Timestamp],
            StorageFormat::String => &[SqlType::Varchar],
            StorageFormat::Time => &[SqlType::Time],
        }
    }

    fn null_sql_type(&self) -> SqlType {
        self.format.sql_type()
    }

    fn decode(&self, row: &dyn RowReader, names: &[&str]) -> CodecResult<Option<TimeOfDay>> {
        let column = column_name(names, 0)?;
        match self.format {
            StorageFormat::String => read_text(row, column)?
                .map(|text| parse_hour_minute(&text))
                .transpose(),
            StorageFormat::Datetime => {
                Ok(read_timestamp(row, column)?.map(|ts| TimeOfDay::from_naive_time(ts.time())))
            }
            StorageFormat::Numeric => Ok(read_integer(row, column, SqlType::Numeric)?
                .map(TimeOfDay::from_millis_of_day)),
            StorageFormat::Time => Ok(read_time(row, column)?.map(TimeOfDay::from_naive_time)),
        }
    }

    fn encode(
        &self,
        statement: &mut dyn StatementWriter,
        index: usize,
        value: &TimeOfDay,
    ) -> CodecResult<()> {
        let column = match self.format {
            StorageFormat::String => ColumnValue::Text(self.format_hour_minute(value)?),
            StorageFormat::Datetime => ColumnValue::Timestamp(self.today_at(value)?),
            StorageFormat::Numeric => ColumnValue::Integer(value.millis_of_day()),
            StorageFormat::Time => ColumnValue::Time(value.to_naive_time()),
        };
        statement.set_column(index, column)
    }
}
