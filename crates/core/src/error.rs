//! Error types for column codecs
//!
//! Every encode, decode and configuration failure surfaces as a [`CodecError`].
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::column::SqlType;
use thiserror::Error;

/// Result type alias for codec operations
pub type CodecResult<T> = std::result::Result<T, CodecError>;

/// Error types for column codecs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Missing or invalid configuration (fatal at setup time)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Stored text does not match the expected layout
    #[error("Invalid format (should be {expected}) \"{value}\"")]
    Format {
        /// The offending stored value
        value: String,
        /// Human-readable description of the expected layout
        expected: &'static str,
    },

    /// Argument the caller must not pass (e.g. hashing a null value)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Components that do not denote a real temporal value
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Column holds a primitive of the wrong kind
    #[error("Column '{column}' holds {found}, expected {expected}")]
    ColumnType {
        /// Column name
        column: String,
        /// Declared SQL type of the codec
        expected: SqlType,
        /// Kind of primitive actually found
        found: &'static str,
    },

    /// Row has no column with the requested name
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Null passed to a codec that does not accept null
    #[error("Null value passed to {codec}, which does not accept null")]
    UnexpectedNull {
        /// Name of the rejecting codec
        codec: &'static str,
    },

    /// Statement binding failed
    #[error("Statement error: {0}")]
    Statement(String),
}

impl CodecError {
    /// Shorthand for a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        CodecError::Configuration(msg.into())
    }

    /// Shorthand for an invalid-value error
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        CodecError::InvalidValue(msg.into())
    }

    /// Check if this error is fatal at setup time
    pub fn is_configuration(&self) -> bool {
        matches!(self, CodecError::Configuration(_))
    }
}

impl From<toml::de::Error> for CodecError {
    fn from(e: toml::de::Error) -> Self {
        CodecError::Configuration(e.to_string())
    }
}
