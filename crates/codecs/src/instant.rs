//! Instant codec
//!
//! Persists an [`Instant`] as either:
//! - `numeric`: signed 64-bit milliseconds since the epoch (the default)
//! - `datetime`: a TIMESTAMP holding wall-clock time in the configured zone
//!   (default `America/New_York`)
//!
//! Numeric decoding ignores the zone.

use chrono_tz::Tz;
use chronopersist_core::{
    CodecError, CodecProperties, CodecResult, ColumnValue, Instant, RowReader, SqlType,
    StatementWriter, StorageFormat, DEFAULT_STORAGE_ZONE,
};

use crate::immutable::{Configure, ImmutableValueCodec};
use crate::read::{column_name, read_integer, read_timestamp};
use crate::zone::{from_wall_clock, to_wall_clock};

/// Column encodings supported by [`InstantCodec`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InstantFormat {
    /// Milliseconds in a NUMERIC column
    #[default]
    Numeric,
    /// Wall-clock time in a TIMESTAMP column
    Datetime,
}

impl TryFrom<StorageFormat> for InstantFormat {
    type Error = CodecError;

    fn try_from(format: StorageFormat) -> CodecResult<Self> {
        match format {
            StorageFormat::Numeric => Ok(InstantFormat::Numeric),
            StorageFormat::Datetime => Ok(InstantFormat::Datetime),
            other => Err(CodecError::configuration(format!(
                "InstantCodec does not support sqltype '{}'. Expected \"numeric\" or \"datetime\".",
                other
            ))),
        }
    }
}

impl From<InstantFormat> for StorageFormat {
    fn from(format: InstantFormat) -> Self {
        match format {
            InstantFormat::Numeric => StorageFormat::Numeric,
            InstantFormat::Datetime => StorageFormat::Datetime,
        }
    }
}

/// Codec for [`Instant`] values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstantCodec {
    format: InstantFormat,
    zone: Tz,
}

impl InstantCodec {
    /// Create a codec with an explicit format and storage zone
    pub const fn new(format: InstantFormat, zone: Tz) -> Self {
        InstantCodec { format, zone }
    }

    /// Numeric codec
    pub const fn numeric() -> Self {
        Self::new(InstantFormat::Numeric, DEFAULT_STORAGE_ZONE)
    }

    /// Datetime codec in the default zone
    pub const fn datetime() -> Self {
        Self::new(InstantFormat::Datetime, DEFAULT_STORAGE_ZONE)
    }

    /// Configured column encoding
    pub fn format(&self) -> InstantFormat {
        self.format
    }

    /// Zone used for TIMESTAMP columns
    pub fn zone(&self) -> Tz {
        self.zone
    }
}

impl Default for InstantCodec {
    fn default() -> Self {
        Self::numeric()
    }
}

impl Configure for InstantCodec {
    fn configure(props: &CodecProperties) -> CodecResult<Self> {
        let format = props
            .storage_format()?
            .map(InstantFormat::try_from)
            .transpose()?
            .unwrap_or_default();
        let zone = props.time_zone(DEFAULT_STORAGE_ZONE)?;
        tracing::debug!(
            codec = "InstantCodec",
            format = %StorageFormat::from(format),
            zone = zone.name(),
            "configured codec"
        );
        Ok(Self::new(format, zone))
    }
}

impl ImmutableValueCodec for InstantCodec {
    type Value = Instant;

    fn value_type_name(&self) -> &'static str {
        "Instant"
    }

    fn sql_types(&self) -> &'static [SqlType] {
        match self.format {
            InstantFormat::Numeric => &[SqlType::Numeric],
            InstantFormat::Datetime => &[SqlType::Timestamp],
        }
    }

    fn null_sql_type(&self) -> SqlType {
        StorageFormat::from(self.format).sql_type()
    }

    fn decode(&self, row: &dyn RowReader, names: &[&str]) -> CodecResult<Option<Instant>> {
        let column = column_name(names, 0)?;
        match self.format {
            InstantFormat::Numeric => {
                Ok(read_integer(row, column, SqlType::Numeric)?.map(Instant::from_millis))
            }
            InstantFormat::Datetime => read_timestamp(row, column)?
                .map(|ts| from_wall_clock(ts, &self.zone))
                .transpose(),
        }
    }

    fn encode(
        &self,
        statement: &mut dyn StatementWriter,
        index: usize,
        value: &Instant,
    ) -> CodecResult<()> {
        let column = match self.format {
            InstantFormat::Numeric => ColumnValue::Integer(value.millis()),
            InstantFormat::Datetime => ColumnValue::Timestamp(to_wall_clock(*value, &self.zone)?),
        };
        statement.set_column(index, column)
    }
}
