use logviz::enums::label_order::LabelOrder;
use logviz::services::aggregator::Aggregator;
use logviz::structs::aggregates::Aggregates;
use logviz::structs::raw_log_record::RawLogRecord;

pub fn raw(category: &str, severity: &str) -> RawLogRecord {
    RawLogRecord::new(category, severity, None)
}

pub fn raw_with_message(category: &str, severity: &str, message: &str) -> RawLogRecord {
    RawLogRecord::new(category, severity, Some(message))
}

/// Connection/ERROR, Connection/WARNING, File/ERROR, Control/ERROR.
pub fn example_records() -> Vec<RawLogRecord> {
    vec![
        raw("Connection", "ERROR"),
        raw("Connection", "WARNING"),
        raw("File", "ERROR"),
        raw("Control", "ERROR"),
    ]
}

pub fn example_aggregates() -> Aggregates {
    Aggregator::new(LabelOrder::FirstSeen)
        .aggregate_raw(example_records())
        .expect("example records are valid")
}
