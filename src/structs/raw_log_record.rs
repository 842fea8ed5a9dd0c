use serde::{Deserialize, Serialize};

/// A record exactly as a log source produced it, severity not yet checked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawLogRecord {
    pub category: String,
    pub severity: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl RawLogRecord {
    pub fn new(category: &str, severity: &str, message: Option<&str>) -> Self {
        Self {
            category: category.to_string(),
            severity: severity.to_string(),
            message: message.map(ToString::to_string),
        }
    }
}
