//! Non-negative elapsed time in milliseconds

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, CodecResult};

const MILLIS_PER_MINUTE: i64 = 60_000;
const MILLIS_PER_HOUR: i64 = 3_600_000;
const MILLIS_PER_DAY: i64 = 86_400_000;

/// Elapsed time with millisecond precision
///
/// Component views (`whole_hours`, `remainder_minutes`, `whole_days`) all
/// truncate toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Duration(i64);

impl Duration {
    /// Zero-length duration
    pub const ZERO: Duration = Duration(0);

    /// Create from total milliseconds
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidValue`] for negative input.
    pub fn from_millis(millis: i64) -> CodecResult<Self> {
        if millis < 0 {
            return Err(CodecError::invalid_value(format!(
                "duration of {} ms is negative",
                millis
            )));
        }
        Ok(Duration(millis))
    }

    /// Create from whole hours plus additional minutes
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidValue`] if the total is negative or overflows.
    pub fn from_hours_minutes(hours: i64, minutes: i64) -> CodecResult<Self> {
        let total = hours
            .checked_mul(MILLIS_PER_HOUR)
            .and_then(|h| minutes.checked_mul(MILLIS_PER_MINUTE).and_then(|m| h.checked_add(m)))
            .ok_or_else(|| {
                CodecError::invalid_value(format!(
                    "duration of {}h {}m overflows",
                    hours, minutes
                ))
            })?;
        Self::from_millis(total)
    }

    /// Create from a standard library duration
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidValue`] if the millisecond count exceeds i64.
    pub fn from_std(duration: std::time::Duration) -> CodecResult<Self> {
        i64::try_from(duration.as_millis())
            .map(Duration)
            .map_err(|_| CodecError::invalid_value("duration exceeds i64 milliseconds"))
    }

    /// Total milliseconds
    #[inline]
    pub const fn millis(&self) -> i64 {
        self.0
    }

    /// Total whole minutes
    pub const fn whole_minutes(&self) -> i64 {
        self.0 / MILLIS_PER_MINUTE
    }

    /// Total whole hours
    pub const fn whole_hours(&self) -> i64 {
        self.0 / MILLIS_PER_HOUR
    }

    /// Minutes past the last whole hour (0-59)
    pub const fn remainder_minutes(&self) -> i64 {
        self.whole_minutes() % 60
    }

    /// Total whole days
    pub const fn whole_days(&self) -> i64 {
        self.0 / MILLIS_PER_DAY
    }

    /// Check if anything below minute granularity is set
    pub const fn has_sub_minute_part(&self) -> bool {
        self.0 % MILLIS_PER_MINUTE != 0
    }

    /// Convert to a standard library duration
    pub fn to_std(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.0.unsigned_abs())
    }
}

impl Default for Duration {
    fn default() -> Self {
        Duration::ZERO
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PT{}.{:03}S", self.0 / 1_000, self.0 % 1_000)
    }
}

impl TryFrom<std::time::Duration> for Duration {
    type Error = CodecError;

    fn try_from(duration: std::time::Duration) -> CodecResult<Self> {
        Duration::from_std(duration)
    }
}
