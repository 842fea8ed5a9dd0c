use logviz::enums::label_order::LabelOrder;
use logviz::enums::severity::Severity;
use logviz::errors::LogvizError;
use logviz::services::aggregator::Aggregator;
use logviz::structs::log_record::LogRecord;
use crate::common::{example_aggregates, example_records, raw, raw_with_message};

#[test]
fn example_input_yields_documented_aggregates() {
    let aggregates = example_aggregates();

    let categories = aggregates.category_counts();
    assert_eq!(categories.categories(), vec!["Connection", "File", "Control"]);
    assert_eq!(categories.counts(), vec![1, 1, 1]);

    let severities = aggregates.severity_counts();
    assert_eq!(severities.get(Severity::Error), 3);
    assert_eq!(severities.get(Severity::Warning), 1);

    let cells = aggregates.category_severity_counts();
    assert_eq!(cells.len(), 4);
    assert_eq!(cells.get("Connection", Severity::Error), 1);
    assert_eq!(cells.get("Connection", Severity::Warning), 1);
    assert_eq!(cells.get("File", Severity::Error), 1);
    assert_eq!(cells.get("Control", Severity::Error), 1);
    assert_eq!(cells.get("File", Severity::Warning), 0);
}

#[test]
fn empty_input_yields_empty_aggregates() {
    let aggregates = Aggregator::default()
        .aggregate_raw(Vec::new())
        .expect("empty input is not an error");

    assert!(aggregates.is_empty());
    assert!(aggregates.category_counts().is_empty());
    assert!(aggregates.severity_counts().is_empty());
    assert!(aggregates.category_severity_counts().is_empty());
    assert!(aggregates.message_frequency(Severity::Error).is_empty());
    assert!(aggregates.message_frequency(Severity::Warning).is_empty());
    assert_eq!(aggregates.record_count(), 0);
}

#[test]
fn unrecognized_severity_fails_with_invalid_record() {
    let mut records = example_records();
    records.insert(2, raw("Disk", "CRITICAL"));

    let error = Aggregator::default().aggregate_raw(records).unwrap_err();

    assert_eq!(
        error,
        LogvizError::InvalidRecord {
            index: 2,
            category: "Disk".to_string(),
            severity: "CRITICAL".to_string(),
        }
    );
}

#[test]
fn first_invalid_record_is_reported() {
    let records = vec![raw("A", "ERROR"), raw("B", "INFO"), raw("C", "FATAL")];

    match Aggregator::default().aggregate_raw(records) {
        Err(LogvizError::InvalidRecord { index, severity, .. }) => {
            assert_eq!(index, 1);
            assert_eq!(severity, "INFO");
        }
        other => panic!("expected InvalidRecord, got {other:?}"),
    }
}

#[test]
fn unknown_categories_are_counted() {
    let aggregates = Aggregator::default()
        .aggregate_raw(vec![raw("Brand New Category", "ERROR"), raw("", "WARNING")])
        .unwrap();

    assert_eq!(aggregates.category_counts().get("Brand New Category"), 1);
    assert_eq!(aggregates.category_severity_counts().get("", Severity::Warning), 1);
}

#[test]
fn warnings_do_not_enter_category_count() {
    let aggregates = Aggregator::default()
        .aggregate_raw(vec![raw("Configuration", "WARNING"), raw("Configuration", "WARNING")])
        .unwrap();

    assert!(aggregates.category_counts().is_empty());
    assert_eq!(aggregates.severity_counts().get(Severity::Warning), 2);
    assert_eq!(aggregates.category_severity_counts().get("Configuration", Severity::Warning), 2);
}

#[test]
fn duplicates_are_counted_not_deduplicated() {
    let records = vec![raw("File", "ERROR"); 5];
    let aggregates = Aggregator::default().aggregate_raw(records).unwrap();

    assert_eq!(aggregates.category_counts().get("File"), 5);
    assert_eq!(aggregates.severity_counts().get(Severity::Error), 5);
}

#[test]
fn first_seen_order_follows_input() {
    let records = vec![
        raw("Zeta", "WARNING"),
        raw("Alpha", "ERROR"),
        raw("Zeta", "ERROR"),
        raw("Mid", "ERROR"),
    ];
    let aggregates = Aggregator::new(LabelOrder::FirstSeen).aggregate_raw(records).unwrap();

    assert_eq!(aggregates.category_counts().categories(), vec!["Alpha", "Zeta", "Mid"]);
    assert_eq!(
        aggregates.severity_counts().severities(),
        vec![Severity::Warning, Severity::Error]
    );
    let subtotals = aggregates.category_severity_counts().category_subtotals();
    let order: Vec<&String> = subtotals.keys().collect();
    assert_eq!(order, vec!["Zeta", "Alpha", "Mid"]);
}

#[test]
fn alphabetical_order_is_independent_of_input_order() {
    let forward = vec![
        raw("Zeta", "WARNING"),
        raw("Alpha", "ERROR"),
        raw("Zeta", "ERROR"),
        raw("Mid", "ERROR"),
    ];
    let mut backward = forward.clone();
    backward.reverse();

    let aggregator = Aggregator::new(LabelOrder::Alphabetical);
    let a = aggregator.aggregate_raw(forward).unwrap();
    let b = aggregator.aggregate_raw(backward).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.category_counts().categories(), vec!["Alpha", "Mid", "Zeta"]);
    assert_eq!(a.severity_counts().severities(), vec![Severity::Error, Severity::Warning]);
    let cells: Vec<(&str, Severity)> = a
        .category_severity_counts()
        .iter()
        .map(|(category, severity, _)| (category, severity))
        .collect();
    assert_eq!(
        cells,
        vec![
            ("Alpha", Severity::Error),
            ("Mid", Severity::Error),
            ("Zeta", Severity::Error),
            ("Zeta", Severity::Warning),
        ]
    );
}

#[test]
fn subtotals_match_severity_and_category_views() {
    let aggregates = example_aggregates();
    let cells = aggregates.category_severity_counts();

    let by_category = cells.category_subtotals();
    assert_eq!(by_category.get("Connection"), 2);
    assert_eq!(by_category.get("File"), 1);
    assert_eq!(by_category.get("Control"), 1);

    let by_severity = cells.severity_subtotals();
    for (severity, count) in aggregates.severity_counts().iter() {
        assert_eq!(by_severity.get(&severity), count);
    }
}

#[test]
fn message_templates_strip_placeholders() {
    let records = vec![
        raw_with_message("Connection", "ERROR", "Could not connect to: {configuration}"),
        raw_with_message("Connection", "ERROR", "Could not connect to: {other}"),
        raw_with_message("Configuration", "WARNING", "Ignoring message size limit ({value})."),
        raw("File", "ERROR"),
    ];
    let aggregates = Aggregator::default().aggregate_raw(records).unwrap();

    let errors = aggregates.message_frequency(Severity::Error);
    assert_eq!(errors.severity(), Severity::Error);
    assert_eq!(errors.get("Could not connect to:"), 2);
    assert_eq!(errors.total(), 2);

    let warnings = aggregates.message_frequency(Severity::Warning);
    assert_eq!(warnings.templates(), vec!["Ignoring message size limit ("]);
}

#[test]
fn typed_records_aggregate_without_validation_step() {
    let records = vec![
        LogRecord::new("Connection", Severity::Error, None),
        LogRecord::new("Connection", Severity::Warning, Some("Retrying {n}".to_string())),
    ];
    let aggregates = Aggregator::default().aggregate(records);

    assert_eq!(aggregates.record_count(), 2);
    assert_eq!(aggregates.message_frequency(Severity::Warning).get("Retrying"), 1);
}

#[test]
fn aggregation_is_idempotent() {
    let aggregator = Aggregator::default();
    let first = aggregator.aggregate_raw(example_records()).unwrap();
    let second = aggregator.aggregate_raw(example_records()).unwrap();
    assert_eq!(first, second);
}
