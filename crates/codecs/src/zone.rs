//! Converting between instants and zoneless timestamp columns
//!
//! A TIMESTAMP column stores wall-clock time. Codecs that write instants
//! into such a column render them in their configured zone, and interpret
//! what they read in that same zone.
//!
//! Wall-clock times that a zone skips (spring-forward gaps) resolve one hour
//! later, and times it repeats (fall-back overlaps) resolve to the earlier
//! instant. This matches a lenient calendar.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use chronopersist_core::{CodecError, CodecResult, Instant};

/// Render an instant as wall-clock time in `zone`
pub fn to_wall_clock(instant: Instant, zone: &Tz) -> CodecResult<NaiveDateTime> {
    Ok(instant.to_datetime_in(zone)?.naive_local())
}

/// Interpret wall-clock time in `zone` as an instant
pub fn from_wall_clock(local: NaiveDateTime, zone: &Tz) -> CodecResult<Instant> {
    if let Some(dt) = zone.from_local_datetime(&local).earliest() {
        return Ok(Instant::from_datetime(&dt));
    }
    // Skipped by a transition
    let shifted = local + TimeDelta::hours(1);
    zone.from_local_datetime(&shifted)
        .earliest()
        .map(|dt| Instant::from_datetime(&dt))
        .ok_or_else(|| {
            CodecError::invalid_value(format!(
                "{} does not exist in zone {}",
                local,
                zone.name()
            ))
        })
}

/// Start of `date` in `zone`
pub fn midnight(date: NaiveDate, zone: &Tz) -> CodecResult<Instant> {
    from_wall_clock(date.and_time(NaiveTime::MIN), zone)
}

/// The current calendar date in `zone`
pub fn today_in(zone: &Tz) -> NaiveDate {
    Utc::now().with_timezone(zone).date_naive()
}
