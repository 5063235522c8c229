//! Duration codecs
//!
//! - [`SplitDurationCodec`] spreads a duration over two INTEGER columns,
//!   whole hours and a second column.
//! - [`MillisDurationCodec`] stores total milliseconds in one NUMERIC column.
//!
//! ## Split column asymmetry
//!
//! Decoding reads the second column as additional minutes. Encoding writes
//! whatever [`SecondColumn`] selects, and the established layout
//! ([`SecondColumn::Days`], the default) writes whole days there. Under that
//! layout a value read back is not the value written. Set
//! `secondColumn = "minutes"` for a symmetric pair.
//!
//! The split codec has no null representation: encoding `None` is an error.

use std::str::FromStr;

use chronopersist_core::{
    CodecError, CodecProperties, CodecResult, ColumnValue, Duration, RowReader, SqlType,
    StatementWriter, SECOND_COLUMN_KEY,
};

use crate::immutable::{Configure, ImmutableValueCodec};
use crate::read::{column_name, read_integer};

/// What [`SplitDurationCodec`] writes to its second column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SecondColumn {
    /// Whole days (established layout; does not round-trip)
    #[default]
    Days,
    /// Minutes past the whole hour (round-trips at minute precision)
    Minutes,
}

impl SecondColumn {
    /// Short identifier, as used by the `secondColumn` key
    pub const fn id(&self) -> &'static str {
        match self {
            SecondColumn::Days => "days",
            SecondColumn::Minutes => "minutes",
        }
    }
}

impl FromStr for SecondColumn {
    type Err = CodecError;

    fn from_str(s: &str) -> CodecResult<Self> {
        match s {
            "days" => Ok(SecondColumn::Days),
            "minutes" => Ok(SecondColumn::Minutes),
            other => Err(CodecError::configuration(format!(
                "Invalid secondColumn '{}'. Expected \"days\" or \"minutes\".",
                other
            ))),
        }
    }
}

impl std::fmt::Display for SecondColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Codec for [`Duration`] values split into hours and minutes columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplitDurationCodec {
    second_column: SecondColumn,
}

impl SplitDurationCodec {
    /// Create a codec writing `second_column` to the second column
    pub const fn new(second_column: SecondColumn) -> Self {
        SplitDurationCodec { second_column }
    }

    /// What the second column holds on write
    pub fn second_column(&self) -> SecondColumn {
        self.second_column
    }
}

impl Configure for SplitDurationCodec {
    fn configure(props: &CodecProperties) -> CodecResult<Self> {
        let second_column = props.parse(SECOND_COLUMN_KEY)?.unwrap_or_default();
        tracing::debug!(
            codec = "SplitDurationCodec",
            second_column = %second_column,
            "configured codec"
        );
        Ok(Self::new(second_column))
    }
}

impl ImmutableValueCodec for SplitDurationCodec {
    type Value = Duration;

    fn value_type_name(&self) -> &'static str {
        "Duration"
    }

    fn sql_types(&self) -> &'static [SqlType] {
        &[SqlType::Integer, SqlType::Integer]
    }

    fn null_sql_type(&self) -> SqlType {
        SqlType::Integer
    }

    /// Reads hours and minutes; SQL NULL in either column counts as zero
    fn decode(&self, row: &dyn RowReader, names: &[&str]) -> CodecResult<Option<Duration>> {
        let hours = read_integer(row, column_name(names, 0)?, SqlType::Integer)?.unwrap_or(0);
        let minutes = read_integer(row, column_name(names, 1)?, SqlType::Integer)?.unwrap_or(0);
        Duration::from_hours_minutes(hours, minutes).map(Some)
    }

    fn encode(
        &self,
        statement: &mut dyn StatementWriter,
        index: usize,
        value: &Duration,
    ) -> CodecResult<()> {
        let second = match self.second_column {
            SecondColumn::Days => {
                tracing::trace!(%value, "writing whole days to the minutes column");
                value.whole_days()
            }
            SecondColumn::Minutes => value.remainder_minutes(),
        };
        statement.set_column(index, ColumnValue::Integer(value.whole_hours()))?;
        statement.set_column(index + 1, ColumnValue::Integer(second))
    }

    /// Null has no split representation
    fn null_safe_set(
        &self,
        statement: &mut dyn StatementWriter,
        index: usize,
        value: Option<&Duration>,
    ) -> CodecResult<()> {
        let value = value.ok_or(CodecError::UnexpectedNull {
            codec: "SplitDurationCodec",
        })?;
        self.encode(statement, index, value)
    }
}

/// Codec for [`Duration`] values as total milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MillisDurationCodec;

impl Configure for MillisDurationCodec {
    fn configure(_props: &CodecProperties) -> CodecResult<Self> {
        Ok(MillisDurationCodec)
    }
}

impl ImmutableValueCodec for MillisDurationCodec {
    type Value = Duration;

    fn value_type_name(&self) -> &'static str {
        "Duration"
    }

    fn sql_types(&self) -> &'static [SqlType] {
        &[SqlType::Numeric]
    }

    fn null_sql_type(&self) -> SqlType {
        SqlType::Numeric
    }

    fn decode(&self, row: &dyn RowReader, names: &[&str]) -> CodecResult<Option<Duration>> {
        read_integer(row, column_name(names, 0)?, SqlType::Numeric)?
            .map(Duration::from_millis)
            .transpose()
    }

    fn encode(
        &self,
        statement: &mut dyn StatementWriter,
        index: usize,
        value: &Duration,
    ) -> CodecResult<()> {
        statement.set_column(index, ColumnValue::Integer(value.millis()))
    }
}
