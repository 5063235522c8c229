//! Instant Codec Tests

use crate::common::*;
use chrono::{NaiveDate, TimeZone};
use chronopersist::{Instant, InstantCodec, InstantFormat, SqlType, Tz};

#[test]
fn numeric_encode_writes_1000() {
    let codec = InstantCodec::default();
    assert_eq!(
        encode_one(&codec, &Instant::from_millis(1000)),
        ColumnValue::Integer(1000)
    );
}

#[test]
fn numeric_decode_reads_1000() {
    let row = MemoryRow::new().with("created", 1000i64);
    let decoded = InstantCodec::default().decode(&row, &["created"]).unwrap();
    assert_eq!(decoded.unwrap().millis(), 1000);
}

#[test]
fn numeric_ignores_configured_zone() {
    let codec = InstantCodec::configure(&props(&[("sqltype", "numeric"), ("timezone", "Asia/Tokyo")]))
        .unwrap();
    let instant = Instant::from_millis(-86_400_000);
    assert_eq!(round_trip(&codec, Some(&instant), &["at"]), Some(instant));
}

#[test]
fn datetime_writes_wall_clock_in_zone() {
    init_tracing();
    let codec = InstantCodec::configure(&props(&[("sqltype", "datetime"), ("timezone", "UTC")]))
        .unwrap();
    assert_eq!(codec.format(), InstantFormat::Datetime);

    let utc = chrono::Utc.with_ymd_and_hms(2006, 5, 1, 17, 45, 0).unwrap();
    let written = encode_one(&codec, &Instant::from_datetime(&utc));
    assert_eq!(written, ColumnValue::Timestamp(utc.naive_utc()));
}

#[test]
fn datetime_reads_wall_clock_in_zone() {
    let codec = InstantCodec::new(InstantFormat::Datetime, Tz::America__New_York);
    let wall = NaiveDate::from_ymd_opt(2006, 12, 25)
        .unwrap()
        .and_hms_milli_opt(9, 0, 0, 500)
        .unwrap();
    let row = MemoryRow::new().with("at", wall);

    let instant = codec.decode(&row, &["at"]).unwrap().unwrap();
    // EST is UTC-5 in December
    let expected = chrono::Utc
        .with_ymd_and_hms(2006, 12, 25, 14, 0, 0)
        .unwrap()
        .timestamp_millis()
        + 500;
    assert_eq!(instant.millis(), expected);
}

#[test]
fn datetime_round_trip_across_zones() {
    for zone in ["America/New_York", "Europe/London", "Australia/Sydney", "UTC"] {
        let codec = InstantCodec::configure(&props(&[("sqltype", "datetime"), ("timezone", zone)]))
            .unwrap();
        let instant = Instant::from_millis(1_146_456_123_456);
        assert_eq!(round_trip(&codec, Some(&instant), &["at"]), Some(instant), "{}", zone);
    }
}

#[test]
fn null_round_trip() {
    for codec in [InstantCodec::numeric(), InstantCodec::datetime()] {
        assert_eq!(round_trip(&codec, None, &["at"]), None);
    }
}

#[test]
fn declared_sql_types_follow_format() {
    assert_eq!(InstantCodec::numeric().sql_types(), &[SqlType::Numeric]);
    assert_eq!(InstantCodec::datetime().sql_types(), &[SqlType::Timestamp]);
}

#[test]
fn unknown_sqltype_is_configuration_error() {
    let err = InstantCodec::configure(&props(&[("sqltype", "epoch")])).unwrap_err();
    assert!(err.is_configuration());
}
