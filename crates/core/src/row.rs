//! Host boundary: reading rows and binding statement parameters
//!
//! Codecs never perform I/O. The host persistence layer hands them a
//! [`RowReader`] when materializing an entity and a [`StatementWriter`] when
//! persisting one. Rows are addressed by column name, statements by 1-based
//! parameter index.
//!
//! [`MemoryRow`] and [`MemoryStatement`] are BTreeMap-backed implementations
//! for hosts that stage rows in memory, and for tests.

use std::collections::BTreeMap;

use crate::column::{ColumnValue, SqlType};
use crate::error::{CodecError, CodecResult};

/// Read access to the current row of a result set
pub trait RowReader {
    /// Get the value of the named column
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::MissingColumn`] if the row has no such column.
    fn column(&self, name: &str) -> CodecResult<ColumnValue>;
}

/// Write access to the parameters of a prepared statement
pub trait StatementWriter {
    /// Bind a non-null value at a 1-based parameter index
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range or binding fails.
    fn set_column(&mut self, index: usize, value: ColumnValue) -> CodecResult<()>;

    /// Bind SQL NULL of the given type at a 1-based parameter index
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range or binding fails.
    fn set_null(&mut self, index: usize, sql_type: SqlType) -> CodecResult<()>;
}

/// In-memory row keyed by column name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryRow {
    columns: BTreeMap<String, ColumnValue>,
}

impl MemoryRow {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style column insertion
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ColumnValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a column
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ColumnValue>) {
        self.columns.insert(name.into(), value.into());
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if the row has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl RowReader for MemoryRow {
    fn column(&self, name: &str) -> CodecResult<ColumnValue> {
        self.columns
            .get(name)
            .cloned()
            .ok_or_else(|| CodecError::MissingColumn(name.to_string()))
    }
}

/// A parameter bound to a [`MemoryStatement`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundParameter {
    /// A non-null value
    Value(ColumnValue),
    /// SQL NULL with its declared type
    Null(SqlType),
}

impl BoundParameter {
    /// The bound value, with typed nulls collapsed to [`ColumnValue::Null`]
    pub fn value(&self) -> ColumnValue {
        match self {
            BoundParameter::Value(v) => v.clone(),
            BoundParameter::Null(_) => ColumnValue::Null,
        }
    }
}

/// In-memory statement recording bound parameters by index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStatement {
    params: BTreeMap<usize, BoundParameter>,
}

impl MemoryStatement {
    /// Create a statement with no bound parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the parameter bound at `index`
    pub fn get(&self, index: usize) -> Option<&BoundParameter> {
        self.params.get(&index)
    }

    /// Number of bound parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if nothing has been bound
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Turn the bound parameters into a row, naming parameter `i` by `names[i - 1]`
    ///
    /// Lets tests and staging hosts feed what a codec wrote back into its decoder.
    pub fn to_row(&self, names: &[&str]) -> MemoryRow {
        let mut row = MemoryRow::new();
        for (index, param) in &self.params {
            if let Some(name) = index.checked_sub(1).and_then(|i| names.get(i)) {
                row.insert(*name, param.value());
            }
        }
        row
    }

    fn check_index(index: usize) -> CodecResult<()> {
        if index == 0 {
            return Err(CodecError::Statement(
                "parameter indices are 1-based".to_string(),
            ));
        }
        Ok(())
    }
}

impl StatementWriter for MemoryStatement {
    fn set_column(&mut self, index: usize, value: ColumnValue) -> CodecResult<()> {
        Self::check_index(index)?;
        self.params.insert(index, BoundParameter::Value(value));
        Ok(())
    }

    fn set_null(&mut self, index: usize, sql_type: SqlType) -> CodecResult<()> {
        Self::check_index(index)?;
        self.params.insert(index, BoundParameter::Null(sql_type));
        Ok(())
    }
}
