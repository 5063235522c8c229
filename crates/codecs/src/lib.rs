//! Column codecs for temporal values
//!
//! Each codec converts one immutable value type to and from flat columns:
//!
//! | Codec | Value | Formats |
//! |-------|-------|---------|
//! | [`InstantCodec`] | `Instant` | numeric millis, datetime |
//! | [`YearMonthDayCodec`] | `YearMonthDay` | packed `YYYYMMDD`, datetime (midnight/noon), ISO string |
//! | [`TimeOfDayCodec`] | `TimeOfDay` | `hh:mm` string, datetime, millis-of-day, SQL time |
//! | [`SplitDurationCodec`] | `Duration` | hours + second INTEGER column |
//! | [`MillisDurationCodec`] | `Duration` | numeric millis |
//!
//! All of them implement [`ImmutableValueCodec`], which supplies the shared
//! null handling, equality, hashing and copy semantics, and [`Configure`],
//! which builds a codec from a [`CodecProperties`](chronopersist_core::CodecProperties)
//! bag. Configure once, then share: codecs hold no mutable state.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod duration;
pub mod immutable;
pub mod instant;
mod read;
pub mod time_of_day;
pub mod year_month_day;
pub mod zone;

pub use duration::{MillisDurationCodec, SecondColumn, SplitDurationCodec};
pub use immutable::{Configure, ImmutableValueCodec};
pub use instant::{InstantCodec, InstantFormat};
pub use time_of_day::TimeOfDayCodec;
pub use year_month_day::{pack, unpack, DateFormat, YearMonthDayCodec};
