//! Codec configuration via a properties bag
//!
//! Hosts deliver codec parameters once, before first use, as string
//! key/value pairs. The bag can be built in code or loaded from TOML:
//!
//! ```toml
//! # Storage format: "numeric", "datetime", "string" or "time"
//! sqltype = "datetime"
//!
//! # Zone used to read and write timestamp columns
//! timezone = "America/New_York"
//!
//! # Shift stored dates to "noon" instead of midnight ("none")
//! timeOffset = "noon"
//! ```
//!
//! Every recognized value is validated eagerly. Unknown selectors and zones
//! are configuration errors, never silent defaults.

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::column::SqlType;
use crate::error::{CodecError, CodecResult};

/// Storage-format selector key
pub const SQLTYPE_KEY: &str = "sqltype";
/// Time zone key
pub const TIMEZONE_KEY: &str = "timezone";
/// Date time-offset key
pub const TIME_OFFSET_KEY: &str = "timeOffset";
/// Split-duration second-column key
pub const SECOND_COLUMN_KEY: &str = "secondColumn";

/// Zone used by instant and date codecs unless configured otherwise
pub const DEFAULT_STORAGE_ZONE: Tz = Tz::America__New_York;
/// Zone used by time-of-day codecs unless configured otherwise
pub const DEFAULT_TIME_OF_DAY_ZONE: Tz = Tz::EST;

/// Parse a time zone id (IANA ids plus legacy ids such as `EST`)
///
/// # Errors
///
/// Returns [`CodecError::Configuration`] for unknown ids.
pub fn parse_zone(id: &str) -> CodecResult<Tz> {
    id.parse::<Tz>()
        .map_err(|_| CodecError::configuration(format!("Unknown time zone '{}'", id)))
}

/// Column encoding chosen once at configuration time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageFormat {
    /// Integral NUMERIC column
    Numeric,
    /// TIMESTAMP column interpreted in the codec's zone
    Datetime,
    /// VARCHAR column
    String,
    /// SQL TIME column
    Time,
}

impl StorageFormat {
    /// Short identifier, as used by the `sqltype` key
    pub const fn id(&self) -> &'static str {
        match self {
            StorageFormat::Numeric => "numeric",
            StorageFormat::Datetime => "datetime",
            StorageFormat::String => "string",
            StorageFormat::Time => "time",
        }
    }

    /// Parse from short identifier
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "numeric" => Some(StorageFormat::Numeric),
            "datetime" => Some(StorageFormat::Datetime),
            "string" => Some(StorageFormat::String),
            "time" => Some(StorageFormat::Time),
            _ => None,
        }
    }

    /// SQL type of the column this format occupies
    pub const fn sql_type(&self) -> SqlType {
        match self {
            StorageFormat::Numeric => SqlType::Numeric,
            StorageFormat::Datetime => SqlType::Timestamp,
            StorageFormat::String => SqlType::Varchar,
            StorageFormat::Time => SqlType::Time,
        }
    }
}

impl FromStr for StorageFormat {
    type Err = CodecError;

    fn from_str(s: &str) -> CodecResult<Self> {
        Self::from_id(s).ok_or_else(|| {
            CodecError::configuration(format!(
                "Invalid sqltype '{}'. Expected \"numeric\", \"datetime\", \"string\" or \"time\".",
                s
            ))
        })
    }
}

impl std::fmt::Display for StorageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Time-of-day shift applied when a date is stored as a timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOffset {
    /// Store midnight
    #[default]
    None,
    /// Store midnight plus twelve hours
    Noon,
}

impl TimeOffset {
    /// Short identifier, as used by the `timeOffset` key
    pub const fn id(&self) -> &'static str {
        match self {
            TimeOffset::None => "none",
            TimeOffset::Noon => "noon",
        }
    }
}

impl FromStr for TimeOffset {
    type Err = CodecError;

    fn from_str(s: &str) -> CodecResult<Self> {
        match s {
            "none" => Ok(TimeOffset::None),
            "noon" => Ok(TimeOffset::Noon),
            other => Err(CodecError::configuration(format!(
                "Invalid timeOffset '{}'. Expected \"none\" or \"noon\".",
                other
            ))),
        }
    }
}

impl std::fmt::Display for TimeOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// String properties delivered to a codec before first use
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodecProperties {
    entries: BTreeMap<String, String>,
}

impl CodecProperties {
    /// Create an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Look up a raw value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Check if the bag has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a value with `FromStr`, returning `None` when the key is absent
    ///
    /// # Errors
    ///
    /// Propagates the parse error of `T`.
    pub fn parse<T>(&self, key: &str) -> CodecResult<Option<T>>
    where
        T: FromStr<Err = CodecError>,
    {
        self.get(key).map(str::parse).transpose()
    }

    /// The `sqltype` selector, if present
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Configuration`] for unrecognized selectors.
    pub fn storage_format(&self) -> CodecResult<Option<StorageFormat>> {
        self.parse(SQLTYPE_KEY)
    }

    /// The `timezone` zone, or `default` when absent
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Configuration`] for unknown zones.
    pub fn time_zone(&self, default: Tz) -> CodecResult<Tz> {
        self.get(TIMEZONE_KEY).map_or(Ok(default), parse_zone)
    }

    /// The `timeOffset` value, defaulting to [`TimeOffset::None`]
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Configuration`] for unrecognized offsets.
    pub fn time_offset(&self) -> CodecResult<TimeOffset> {
        Ok(self.parse(TIME_OFFSET_KEY)?.unwrap_or_default())
    }

    /// Parse properties from a TOML table of string values
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Configuration`] if the text is not TOML or a
    /// value is not a string.
    pub fn from_toml_str(content: &str) -> CodecResult<Self> {
        let table: toml::Table = toml::from_str(content)?;
        let mut entries = BTreeMap::new();
        for (key, value) in table {
            match value {
                toml::Value::String(s) => {
                    entries.insert(key, s);
                }
                other => {
                    return Err(CodecError::configuration(format!(
                        "Property '{}' must be a string, found {}",
                        key,
                        other.type_str()
                    )))
                }
            }
        }
        Ok(CodecProperties { entries })
    }

    /// Read and parse properties from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> CodecResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CodecError::configuration(format!(
                "Failed to read properties file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let props = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), entries = props.entries.len(), "loaded codec properties");
        Ok(props)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CodecProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        CodecProperties {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
