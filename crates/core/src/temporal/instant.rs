//! Millisecond-precision instant
//!
//! An absolute point on the time line, independent of any zone.
//!
//! ## Precision
//!
//! Instants are stored as signed milliseconds since the Unix epoch
//! (1970-01-01 00:00:00 UTC). Negative values lie before the epoch.
//!
//! ## Usage
//!
//! ```
//! use chronopersist_core::Instant;
//!
//! let epoch = Instant::EPOCH;
//! let later = Instant::from_millis(1000);
//! assert!(epoch < later);
//! ```

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{CodecError, CodecResult};

/// Millisecond-precision instant
///
/// ## Invariants
///
/// - Two instants are equal iff their millisecond values are equal
/// - Instants are totally ordered by their millisecond values
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Instant(i64);

impl Instant {
    /// Unix epoch (1970-01-01 00:00:00 UTC)
    pub const EPOCH: Instant = Instant(0);

    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create an instant for the current moment
    pub fn now() -> Self {
        Instant(Utc::now().timestamp_millis())
    }

    /// Create an instant from milliseconds since epoch
    #[inline]
    pub const fn from_millis(millis: i64) -> Self {
        Instant(millis)
    }

    /// Create an instant from a zoned date-time
    pub fn from_datetime<Z: TimeZone>(datetime: &DateTime<Z>) -> Self {
        Instant(datetime.timestamp_millis())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get milliseconds since Unix epoch
    #[inline]
    pub const fn millis(&self) -> i64 {
        self.0
    }

    /// Convert to a UTC date-time
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidValue`] if the instant is outside the
    /// range chrono can represent.
    pub fn to_utc(&self) -> CodecResult<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0).ok_or_else(|| {
            CodecError::invalid_value(format!("instant {} ms is out of range", self.0))
        })
    }

    /// Convert to a date-time in the given zone
    ///
    /// # Errors
    ///
    /// Same as [`Instant::to_utc`].
    pub fn to_datetime_in(&self, zone: &Tz) -> CodecResult<DateTime<Tz>> {
        Ok(self.to_utc()?.with_timezone(zone))
    }

    /// Add milliseconds, saturating at the i64 bounds
    pub fn saturating_add_millis(&self, millis: i64) -> Self {
        Instant(self.0.saturating_add(millis))
    }
}

impl Default for Instant {
    fn default() -> Self {
        Instant::EPOCH
    }
}

impl std::fmt::Display for Instant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_utc() {
            Ok(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
            Err(_) => write!(f, "{}ms", self.0),
        }
    }
}

impl From<i64> for Instant {
    /// Create from raw milliseconds
    fn from(millis: i64) -> Self {
        Instant::from_millis(millis)
    }
}

impl From<Instant> for i64 {
    /// Extract raw milliseconds
    fn from(instant: Instant) -> Self {
        instant.0
    }
}
