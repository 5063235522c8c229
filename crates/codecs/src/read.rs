//! Typed column access shared by the codecs

use chrono::{NaiveDateTime, NaiveTime};
use chronopersist_core::{CodecError, CodecResult, ColumnValue, RowReader, SqlType};

/// Column name at `position`, or an invalid-argument error if the host passed too few
pub(crate) fn column_name<'a>(names: &[&'a str], position: usize) -> CodecResult<&'a str> {
    names.get(position).copied().ok_or_else(|| {
        CodecError::InvalidArgument(format!(
            "expected at least {} column name(s), got {}",
            position + 1,
            names.len()
        ))
    })
}

fn mismatch(column: &str, expected: SqlType, found: &ColumnValue) -> CodecError {
    CodecError::ColumnType {
        column: column.to_string(),
        expected,
        found: found.kind(),
    }
}

pub(crate) fn read_integer(
    row: &dyn RowReader,
    column: &str,
    expected: SqlType,
) -> CodecResult<Option<i64>> {
    match row.column(column)? {
        ColumnValue::Null => Ok(None),
        ColumnValue::Integer(i) => Ok(Some(i)),
        other => Err(mismatch(column, expected, &other)),
    }
}

pub(crate) fn read_timestamp(
    row: &dyn RowReader,
    column: &str,
) -> CodecResult<Option<NaiveDateTime>> {
    match row.column(column)? {
        ColumnValue::Null => Ok(None),
        ColumnValue::Timestamp(ts) => Ok(Some(ts)),
        other => Err(mismatch(column, SqlType::Timestamp, &other)),
    }
}

pub(crate) fn read_text(row: &dyn RowReader, column: &str) -> CodecResult<Option<String>> {
    match row.column(column)? {
        ColumnValue::Null => Ok(None),
        ColumnValue::Text(s) => Ok(Some(s)),
        other => Err(mismatch(column, SqlType::Varchar, &other)),
    }
}

pub(crate) fn read_time(row: &dyn RowReader, column: &str) -> CodecResult<Option<NaiveTime>> {
    match row.column(column)? {
        ColumnValue::Null => Ok(None),
        ColumnValue::Time(t) => Ok(Some(t)),
        other => Err(mismatch(column, SqlType::Time, &other)),
    }
}
