use crate::enums::severity::{Severity, UnknownSeverity};
use crate::helpers::message_template::template_of;
use crate::structs::raw_log_record::RawLogRecord;

/// A validated log record. Each value stands for one occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogRecord {
    category: String,
    severity: Severity,
    message: Option<String>,
}

impl LogRecord {
    pub fn new(category: impl Into<String>, severity: Severity, message: Option<String>) -> Self {
        Self {
            category: category.into(),
            severity,
            message,
        }
    }

    /// Builds a record from loosely-typed fields, rejecting unknown severities.
    pub fn parse(category: &str, severity: &str, message: Option<&str>) -> Result<Self, UnknownSeverity> {
        Ok(Self::new(category, severity.parse()?, message.map(ToString::to_string)))
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub const fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Message text with its variable part removed, if the record has a message.
    pub fn message_template(&self) -> Option<&str> {
        self.message.as_deref().map(template_of)
    }
}

impl TryFrom<RawLogRecord> for LogRecord {
    type Error = UnknownSeverity;

    fn try_from(raw: RawLogRecord) -> Result<Self, Self::Error> {
        let severity = raw.severity.parse()?;
        Ok(Self::new(raw.category, severity, raw.message))
    }
}
