use std::cmp::Ordering;
use crate::enums::label_order::LabelOrder;
use crate::enums::severity::Severity;
use crate::errors::{LogvizError, LogvizResult};
use crate::structs::aggregates::Aggregates;
use crate::structs::category_count::CategoryCount;
use crate::structs::category_severity_count::CategorySeverityCount;
use crate::structs::count_table::CountTable;
use crate::structs::log_record::LogRecord;
use crate::structs::message_frequency::MessageFrequency;
use crate::structs::raw_log_record::RawLogRecord;
use crate::structs::severity_count::SeverityCount;

/// Groups and counts log records into the chart aggregates.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator {
    order: LabelOrder,
}

impl Aggregator {
    pub const fn new(order: LabelOrder) -> Self {
        Self { order }
    }

    /// Validates every raw record first, then aggregates. The first record
    /// with an unrecognized severity fails the whole batch.
    pub fn aggregate_raw<I>(&self, records: I) -> LogvizResult<Aggregates>
    where
        I: IntoIterator<Item = RawLogRecord>,
    {
        let validated = records
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                let category = raw.category.clone();
                LogRecord::try_from(raw)
                    .map_err(|unknown| LogvizError::invalid_record(index, &category, &unknown.0))
            })
            .collect::<LogvizResult<Vec<_>>>()?;

        Ok(self.aggregate(validated))
    }

    pub fn aggregate<I>(&self, records: I) -> Aggregates
    where
        I: IntoIterator<Item = LogRecord>,
    {
        let mut errors_by_category: CountTable<String> = CountTable::new();
        let mut by_severity: CountTable<Severity> = CountTable::new();
        let mut by_pair: CountTable<(String, Severity)> = CountTable::new();
        let mut error_templates: CountTable<String> = CountTable::new();
        let mut warning_templates: CountTable<String> = CountTable::new();

        for record in records {
            let severity = record.severity();
            if severity == Severity::Error {
                errors_by_category.increment(record.category().to_string());
            }
            by_severity.increment(severity);
            by_pair.increment((record.category().to_string(), severity));

            if let Some(template) = record.message_template() {
                let templates = match severity {
                    Severity::Error => &mut error_templates,
                    Severity::Warning => &mut warning_templates,
                };
                templates.increment(template.to_string());
            }
        }

        if self.order == LabelOrder::Alphabetical {
            errors_by_category.sort_by(|a, b| a.cmp(b));
            by_severity.sort_by(|a, b| a.as_str().cmp(b.as_str()));
            by_pair.sort_by(compare_pairs);
            error_templates.sort_by(|a, b| a.cmp(b));
            warning_templates.sort_by(|a, b| a.cmp(b));
        }

        log::debug!(
            "Aggregated {} records into {} category/severity cells",
            by_severity.total(),
            by_pair.len()
        );

        Aggregates::new(
            CategoryCount::new(errors_by_category),
            SeverityCount::new(by_severity),
            CategorySeverityCount::new(by_pair),
            MessageFrequency::with_templates(Severity::Error, error_templates),
            MessageFrequency::with_templates(Severity::Warning, warning_templates),
        )
    }
}

fn compare_pairs(a: &(String, Severity), b: &(String, Severity)) -> Ordering {
    a.0.cmp(&b.0).then_with(|| a.1.as_str().cmp(b.1.as_str()))
}
