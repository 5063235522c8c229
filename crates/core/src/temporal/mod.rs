//! Temporal value types
//!
//! All four types are immutable values with no identity beyond their
//! contents:
//!
//! | Type | Contents |
//! |------|----------|
//! | [`Instant`] | signed milliseconds since the Unix epoch |
//! | [`YearMonthDay`] | validated calendar date |
//! | [`TimeOfDay`] | hour, minute, second, millisecond |
//! | [`Duration`] | non-negative milliseconds |

mod duration;
mod instant;
mod time_of_day;
mod year_month_day;

pub use duration::Duration;
pub use instant::Instant;
pub use time_of_day::{TimeOfDay, MILLIS_PER_DAY};
pub use year_month_day::YearMonthDay;
