//! Entity Mapping Tests
//!
//! A record with one field per codec, bound to consecutive statement
//! parameters and read back from a row, the way a persistence layer
//! drives the codecs.

use std::collections::BTreeMap;

use crate::common::*;
use chronopersist::{
    BoundParameter, CodecError, CodecResult, Duration, Instant, InstantCodec,
    MillisDurationCodec, RowReader, SecondColumn, SplitDurationCodec, SqlType, StatementWriter,
    TimeOfDayCodec, YearMonthDayCodec,
};

const COLUMNS: [&str; 8] = [
    "created",
    "due",
    "due_label",
    "starts",
    "reminder",
    "length_hours",
    "length_minutes",
    "timeout",
];

#[derive(Debug, Clone, PartialEq)]
struct Appointment {
    created: Option<Instant>,
    due: Option<YearMonthDay>,
    due_label: Option<YearMonthDay>,
    starts: Option<TimeOfDay>,
    reminder: Option<TimeOfDay>,
    length: Duration,
    timeout: Option<Duration>,
}

struct AppointmentMapping {
    created: InstantCodec,
    due: YearMonthDayCodec,
    due_label: YearMonthDayCodec,
    starts: TimeOfDayCodec,
    reminder: TimeOfDayCodec,
    length: SplitDurationCodec,
    timeout: MillisDurationCodec,
}

impl AppointmentMapping {
    /// Configure each field from its own TOML table
    fn from_toml(text: &str) -> CodecResult<Self> {
        let tables: BTreeMap<String, CodecProperties> =
            toml::from_str(text).map_err(CodecError::from)?;
        let get = |name: &str| tables.get(name).cloned().unwrap_or_default();
        Ok(AppointmentMapping {
            created: InstantCodec::configure(&get("created"))?,
            due: YearMonthDayCodec::configure(&get("due"))?,
            due_label: YearMonthDayCodec::configure(&get("due_label"))?,
            starts: TimeOfDayCodec::configure(&get("starts"))?,
            reminder: TimeOfDayCodec::configure(&get("reminder"))?,
            length: SplitDurationCodec::configure(&get("length"))?,
            timeout: MillisDurationCodec::configure(&get("timeout"))?,
        })
    }

    fn write(&self, stmt: &mut dyn StatementWriter, value: &Appointment) -> CodecResult<()> {
        self.created.null_safe_set(stmt, 1, value.created.as_ref())?;
        self.due.null_safe_set(stmt, 2, value.due.as_ref())?;
        self.due_label.null_safe_set(stmt, 3, value.due_label.as_ref())?;
        self.starts.null_safe_set(stmt, 4, value.starts.as_ref())?;
        self.reminder.null_safe_set(stmt, 5, value.reminder.as_ref())?;
        self.length.null_safe_set(stmt, 6, Some(&value.length))?;
        self.timeout.null_safe_set(stmt, 8, value.timeout.as_ref())
    }

    fn read(&self, row: &dyn RowReader) -> CodecResult<Appointment> {
        Ok(Appointment {
            created: self.created.null_safe_get(row, &COLUMNS[0..1])?,
            due: self.due.null_safe_get(row, &COLUMNS[1..2])?,
            due_label: self.due_label.null_safe_get(row, &COLUMNS[2..3])?,
            starts: self.starts.null_safe_get(row, &COLUMNS[3..4])?,
            reminder: self.reminder.null_safe_get(row, &COLUMNS[4..5])?,
            length: self
                .length
                .null_safe_get(row, &COLUMNS[5..7])?
                .unwrap_or_default(),
            timeout: self.timeout.null_safe_get(row, &COLUMNS[7..8])?,
        })
    }
}

const MAPPING: &str = r#"
[created]
sqltype = "datetime"
timezone = "America/New_York"

[due]
sqltype = "numeric"

[due_label]
sqltype = "string"

[starts]
sqltype = "datetime"

[reminder]
sqltype = "numeric"

[length]
secondColumn = "minutes"
"#;

fn sample() -> Appointment {
    Appointment {
        created: Some(Instant::from_millis(1_146_456_123_000)),
        due: Some(ymd(2006, 5, 1)),
        due_label: Some(ymd(2006, 5, 1)),
        starts: Some(tod(5, 30, 0, 2)),
        reminder: Some(tod(5, 30, 0, 2)),
        length: Duration::from_hours_minutes(1, 15).unwrap(),
        timeout: Some(Duration::from_millis(1000).unwrap()),
    }
}

#[test]
fn entity_round_trip() {
    init_tracing();
    let mapping = AppointmentMapping::from_toml(MAPPING).unwrap();
    let value = sample();

    let mut stmt = MemoryStatement::new();
    mapping.write(&mut stmt, &value).unwrap();
    assert_eq!(stmt.len(), COLUMNS.len());

    let row = stmt.to_row(&COLUMNS);
    assert_eq!(mapping.read(&row).unwrap(), value);
}

#[test]
fn entity_bound_columns() {
    let mapping = AppointmentMapping::from_toml(MAPPING).unwrap();
    let mut stmt = MemoryStatement::new();
    mapping.write(&mut stmt, &sample()).unwrap();

    assert_eq!(stmt.get(2).unwrap().value(), ColumnValue::Integer(20060501));
    assert_eq!(stmt.get(3).unwrap().value(), ColumnValue::from("2006-05-01"));
    assert_eq!(stmt.get(6).unwrap().value(), ColumnValue::Integer(1));
    assert_eq!(stmt.get(7).unwrap().value(), ColumnValue::Integer(15));
    assert_eq!(stmt.get(8).unwrap().value(), ColumnValue::Integer(1000));
}

#[test]
fn entity_with_nulls() {
    let mapping = AppointmentMapping::from_toml(MAPPING).unwrap();
    let value = Appointment {
        created: None,
        due: None,
        due_label: None,
        starts: None,
        reminder: None,
        length: Duration::ZERO,
        timeout: None,
    };

    let mut stmt = MemoryStatement::new();
    mapping.write(&mut stmt, &value).unwrap();
    assert_eq!(stmt.get(1), Some(&BoundParameter::Null(SqlType::Timestamp)));
    assert_eq!(stmt.get(2), Some(&BoundParameter::Null(SqlType::Numeric)));
    assert_eq!(stmt.get(3), Some(&BoundParameter::Null(SqlType::Varchar)));
    assert_eq!(stmt.get(8), Some(&BoundParameter::Null(SqlType::Numeric)));

    let row = stmt.to_row(&COLUMNS);
    assert_eq!(mapping.read(&row).unwrap(), value);
}

#[test]
fn mapping_from_properties_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("due.toml");
    std::fs::write(&path, "sqltype = \"datetime\"\ntimeOffset = \"noon\"\n").unwrap();

    let props = CodecProperties::from_file(&path).unwrap();
    let codec = YearMonthDayCodec::configure(&props).unwrap();
    let date = ymd(2006, 5, 1);
    assert_eq!(round_trip(&codec, Some(&date), &["due"]), Some(date));
}

#[test]
fn default_split_layout_changes_entity_on_reload() {
    let mapping = AppointmentMapping {
        length: SplitDurationCodec::new(SecondColumn::Days),
        ..AppointmentMapping::from_toml(MAPPING).unwrap()
    };
    let mut value = sample();
    value.length = Duration::from_hours_minutes(49, 0).unwrap();

    let mut stmt = MemoryStatement::new();
    mapping.write(&mut stmt, &value).unwrap();
    let reloaded = mapping.read(&stmt.to_row(&COLUMNS)).unwrap();
    // 49 hours written as (49, 2 days) reads back as 49h02m
    assert_eq!(reloaded.length, Duration::from_hours_minutes(49, 2).unwrap());
}

#[test]
fn mapping_properties_from_json() {
    let props: CodecProperties =
        serde_json::from_str(r#"{"sqltype": "string", "timezone": "UTC"}"#).unwrap();
    let codec = TimeOfDayCodec::configure(&props).unwrap();
    assert_eq!(encode_one(&codec, &tod(8, 5, 0, 0)), ColumnValue::from("08:05"));

    let echoed = serde_json::to_value(&props).unwrap();
    assert_eq!(echoed["sqltype"], "string");
}
