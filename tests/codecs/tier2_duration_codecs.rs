//! Duration Codec Tests

use crate::common::*;
use chronopersist::{
    CodecError, Duration, MillisDurationCodec, SecondColumn, SplitDurationCodec, SqlType,
};

const HOUR: i64 = 3_600_000;
const MINUTE: i64 = 60_000;

fn split_row(hours: Option<i64>, minutes: Option<i64>) -> MemoryRow {
    MemoryRow::new().with("hrs", hours).with("mins", minutes)
}

// ============================================================================
// Split hours / second column
// ============================================================================

#[test]
fn split_decodes_one_hour() {
    let decoded = SplitDurationCodec::default()
        .decode(&split_row(Some(1), Some(0)), &["hrs", "mins"])
        .unwrap();
    assert_eq!(decoded.unwrap().millis(), HOUR);
}

#[test]
fn split_decodes_hours_and_minutes() {
    let decoded = SplitDurationCodec::default()
        .decode(&split_row(Some(2), Some(45)), &["hrs", "mins"])
        .unwrap();
    assert_eq!(decoded.unwrap().millis(), 2 * HOUR + 45 * MINUTE);
}

#[test]
fn split_null_columns_count_as_zero() {
    let codec = SplitDurationCodec::default();
    let decoded = codec.decode(&split_row(None, Some(30)), &["hrs", "mins"]).unwrap();
    assert_eq!(decoded, Some(Duration::from_millis(30 * MINUTE).unwrap()));

    let decoded = codec.decode(&split_row(None, None), &["hrs", "mins"]).unwrap();
    assert_eq!(decoded, Some(Duration::ZERO));
}

#[test]
fn split_default_writes_days_to_second_column() {
    init_tracing();
    let codec = SplitDurationCodec::default();
    assert_eq!(codec.second_column(), SecondColumn::Days);

    let value = Duration::from_hours_minutes(50, 30).unwrap();
    let mut stmt = MemoryStatement::new();
    codec.encode(&mut stmt, 3, &value).unwrap();
    assert_eq!(stmt.get(3).unwrap().value(), ColumnValue::Integer(50));
    assert_eq!(stmt.get(4).unwrap().value(), ColumnValue::Integer(2));
}

#[test]
fn split_default_layout_does_not_round_trip() {
    let codec = SplitDurationCodec::default();
    let value = Duration::from_hours_minutes(50, 30).unwrap();
    let read_back = round_trip(&codec, Some(&value), &["hrs", "mins"]).unwrap();
    assert_eq!(read_back, Duration::from_hours_minutes(50, 2).unwrap());
    assert_ne!(read_back, value);
}

#[test]
fn split_minutes_layout_round_trips() {
    let codec = SplitDurationCodec::configure(&props(&[("secondColumn", "minutes")])).unwrap();
    let value = Duration::from_hours_minutes(50, 30).unwrap();
    assert_eq!(round_trip(&codec, Some(&value), &["hrs", "mins"]), Some(value));
}

#[test]
fn split_null_encode_is_rejected() {
    let mut stmt = MemoryStatement::new();
    let err = SplitDurationCodec::default()
        .null_safe_set(&mut stmt, 1, None)
        .unwrap_err();
    assert!(matches!(err, CodecError::UnexpectedNull { .. }));
    assert!(stmt.is_empty());
}

#[test]
fn split_declares_two_integer_columns() {
    assert_eq!(
        SplitDurationCodec::default().sql_types(),
        &[SqlType::Integer, SqlType::Integer]
    );
}

#[test]
fn split_requires_two_column_names() {
    let err = SplitDurationCodec::default()
        .decode(&split_row(Some(1), Some(0)), &["hrs"])
        .unwrap_err();
    assert!(matches!(err, CodecError::InvalidArgument(_)));
}

#[test]
fn split_rejects_unknown_second_column() {
    let err = SplitDurationCodec::configure(&props(&[("secondColumn", "seconds")])).unwrap_err();
    assert!(err.is_configuration());
}

// ============================================================================
// Total milliseconds
// ============================================================================

#[test]
fn millis_codec_values() {
    let codec = MillisDurationCodec;
    for millis in [1000, 0] {
        let value = Duration::from_millis(millis).unwrap();
        assert_eq!(encode_one(&codec, &value), ColumnValue::Integer(millis));
        assert_eq!(round_trip(&codec, Some(&value), &["len"]), Some(value));
    }
    assert_eq!(round_trip(&codec, None, &["len"]), None);
}

#[test]
fn millis_codec_rejects_negative_column() {
    let row = MemoryRow::new().with("len", -5i64);
    assert!(MillisDurationCodec.decode(&row, &["len"]).is_err());
}
