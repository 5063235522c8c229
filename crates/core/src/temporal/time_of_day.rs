//! Wall-clock time of day without date or zone

use chrono::{NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{CodecError, CodecResult};

/// Milliseconds in one day
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Hour, minute, second and millisecond within a day
///
/// ## Invariants
///
/// - hour 0-23, minute 0-59, second 0-59, millisecond 0-999
/// - ordering is chronological within the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
    millis: u16,
}

impl TimeOfDay {
    /// 00:00:00.000
    pub const MIDNIGHT: TimeOfDay = TimeOfDay {
        hour: 0,
        minute: 0,
        second: 0,
        millis: 0,
    };

    /// Create a time with zero seconds and milliseconds
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidValue`] if a field is out of range.
    pub fn new(hour: u32, minute: u32) -> CodecResult<Self> {
        Self::with_seconds(hour, minute, 0, 0)
    }

    /// Create a time from all four fields
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidValue`] if a field is out of range.
    pub fn with_seconds(hour: u32, minute: u32, second: u32, millis: u32) -> CodecResult<Self> {
        if hour > 23 || minute > 59 || second > 59 || millis > 999 {
            return Err(CodecError::invalid_value(format!(
                "{:02}:{:02}:{:02}.{:03} is not a time of day",
                hour, minute, second, millis
            )));
        }
        Ok(TimeOfDay {
            hour: hour as u8,
            minute: minute as u8,
            second: second as u8,
            millis: millis as u16,
        })
    }

    /// Create from milliseconds since midnight, wrapping within one day
    pub fn from_millis_of_day(millis: i64) -> Self {
        let ms = millis.rem_euclid(MILLIS_PER_DAY);
        TimeOfDay {
            hour: (ms / 3_600_000) as u8,
            minute: (ms / 60_000 % 60) as u8,
            second: (ms / 1_000 % 60) as u8,
            millis: (ms % 1_000) as u16,
        }
    }

    /// Create from a chrono time, truncating to milliseconds
    ///
    /// A leap second is folded into the last millisecond of its minute.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        TimeOfDay {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
            second: time.second() as u8,
            millis: (time.nanosecond() / 1_000_000).min(999) as u16,
        }
    }

    /// Hour of day (0-23)
    pub fn hour(&self) -> u32 {
        u32::from(self.hour)
    }

    /// Minute of hour (0-59)
    pub fn minute(&self) -> u32 {
        u32::from(self.minute)
    }

    /// Second of minute (0-59)
    pub fn second(&self) -> u32 {
        u32::from(self.second)
    }

    /// Millisecond of second (0-999)
    pub fn millisecond(&self) -> u32 {
        u32::from(self.millis)
    }

    /// Milliseconds since midnight
    pub fn millis_of_day(&self) -> i64 {
        i64::from(self.hour) * 3_600_000
            + i64::from(self.minute) * 60_000
            + i64::from(self.second) * 1_000
            + i64::from(self.millis)
    }

    /// Convert to a chrono time
    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::MIN + TimeDelta::milliseconds(self.millis_of_day())
    }

    /// Check if anything below minute granularity is set
    pub fn has_sub_minute_fields(&self) -> bool {
        self.second != 0 || self.millis != 0
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hour, self.minute, self.second, self.millis
        )
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        TimeOfDay::from_naive_time(time)
    }
}
