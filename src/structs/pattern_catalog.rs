use serde::{Deserialize, Serialize};
use crate::enums::severity::Severity;
use crate::helpers::ordered_groups;
use crate::structs::raw_log_record::RawLogRecord;

/// Known log messages grouped by severity, then category, in document order.
///
/// ```json
/// {
///   "error_logs":   { "Connection": ["Could not connect to: {cfg}"] },
///   "warning_logs": { "Configuration": ["Ignoring limit ({value})"] }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatternCatalog {
    #[serde(default, with = "ordered_groups")]
    pub error_logs: Vec<MessageGroup>,

    #[serde(default, with = "ordered_groups")]
    pub warning_logs: Vec<MessageGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageGroup {
    pub category: String,
    pub messages: Vec<String>,
}

impl MessageGroup {
    pub fn new(category: &str, messages: &[&str]) -> Self {
        Self {
            category: category.to_string(),
            messages: messages.iter().map(ToString::to_string).collect(),
        }
    }
}

impl PatternCatalog {
    pub fn groups(&self, severity: Severity) -> &[MessageGroup] {
        match severity {
            Severity::Error => &self.error_logs,
            Severity::Warning => &self.warning_logs,
        }
    }

    /// One record per catalog message, errors first.
    pub fn to_records(&self) -> Vec<RawLogRecord> {
        Severity::ALL
            .iter()
            .flat_map(|&severity| {
                self.groups(severity).iter().flat_map(move |group| {
                    group.messages.iter().map(move |message| {
                        RawLogRecord::new(&group.category, severity.as_str(), Some(message.as_str()))
                    })
                })
            })
            .collect()
    }

    pub fn message_count(&self) -> usize {
        self.error_logs
            .iter()
            .chain(&self.warning_logs)
            .map(|group| group.messages.len())
            .sum()
    }
}
