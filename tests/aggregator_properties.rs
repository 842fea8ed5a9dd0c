use proptest::prelude::*;
use logviz::enums::label_order::LabelOrder;
use logviz::enums::severity::Severity;
use logviz::services::aggregator::Aggregator;
use logviz::structs::raw_log_record::RawLogRecord;

fn record_strategy() -> impl Strategy<Value = RawLogRecord> {
    (
        prop::sample::select(vec!["Connection", "File", "Control", "Configuration", "Other"]),
        prop::sample::select(vec!["ERROR", "WARNING"]),
        prop::option::of("[a-z ]{0,8}(\\{[a-z]{1,4}\\})?"),
    )
        .prop_map(|(category, severity, message)| {
            RawLogRecord::new(category, severity, message.as_deref())
        })
}

fn order_strategy() -> impl Strategy<Value = LabelOrder> {
    prop_oneof![Just(LabelOrder::FirstSeen), Just(LabelOrder::Alphabetical)]
}

proptest! {
    #[test]
    fn category_count_sums_to_error_records(
        records in prop::collection::vec(record_strategy(), 0..64),
        order in order_strategy(),
    ) {
        let errors = records.iter().filter(|r| r.severity == "ERROR").count();
        let aggregates = Aggregator::new(order).aggregate_raw(records).unwrap();
        prop_assert_eq!(aggregates.category_counts().total(), errors);
    }

    #[test]
    fn severity_count_sums_to_input_length(
        records in prop::collection::vec(record_strategy(), 0..64),
        order in order_strategy(),
    ) {
        let len = records.len();
        let aggregates = Aggregator::new(order).aggregate_raw(records).unwrap();
        prop_assert_eq!(aggregates.severity_counts().total(), len);
    }

    #[test]
    fn cells_per_category_sum_to_category_records(
        records in prop::collection::vec(record_strategy(), 0..64),
    ) {
        let aggregates = Aggregator::default().aggregate_raw(records.clone()).unwrap();
        let cells = aggregates.category_severity_counts();
        for record in &records {
            let expected = records.iter().filter(|r| r.category == record.category).count();
            let actual: usize = Severity::ALL
                .iter()
                .map(|&severity| cells.get(&record.category, severity))
                .sum();
            prop_assert_eq!(actual, expected);
        }
    }

    #[test]
    fn cells_per_severity_match_severity_count(
        records in prop::collection::vec(record_strategy(), 0..64),
        order in order_strategy(),
    ) {
        let aggregates = Aggregator::new(order).aggregate_raw(records).unwrap();
        let cells = aggregates.category_severity_counts();
        for severity in Severity::ALL {
            let from_cells: usize = cells.for_severity(severity).map(|(_, count)| count).sum();
            prop_assert_eq!(from_cells, aggregates.severity_counts().get(severity));
        }
        for (category, count) in aggregates.category_counts().iter() {
            prop_assert_eq!(count, cells.get(category, Severity::Error));
        }
    }

    #[test]
    fn message_frequency_counts_records_with_messages(
        records in prop::collection::vec(record_strategy(), 0..64),
    ) {
        let aggregates = Aggregator::default().aggregate_raw(records.clone()).unwrap();
        for severity in Severity::ALL {
            let expected = records
                .iter()
                .filter(|r| r.severity == severity.as_str() && r.message.is_some())
                .count();
            prop_assert_eq!(aggregates.message_frequency(severity).total(), expected);
        }
    }

    #[test]
    fn aggregation_is_idempotent(
        records in prop::collection::vec(record_strategy(), 0..64),
        order in order_strategy(),
    ) {
        let aggregator = Aggregator::new(order);
        let first = aggregator.aggregate_raw(records.clone()).unwrap();
        let second = aggregator.aggregate_raw(records).unwrap();
        prop_assert_eq!(first, second);
    }
}
