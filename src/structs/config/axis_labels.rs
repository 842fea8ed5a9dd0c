use serde::{Deserialize, Serialize};
use crate::enums::severity::Severity;
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AxisLabels {
    #[serde(default = "ConfigHelper::default_severity_label")]
    pub severity: String,

    #[serde(default = "ConfigHelper::default_message_count_label")]
    pub message_count: String,

    #[serde(default = "ConfigHelper::default_error_message_label")]
    pub error_message: String,

    #[serde(default = "ConfigHelper::default_warning_message_label")]
    pub warning_message: String,

    #[serde(default = "ConfigHelper::default_frequency_label")]
    pub frequency: String,
}

impl AxisLabels {
    pub fn message_for(&self, severity: Severity) -> &str {
        match severity {
            Severity::Error => &self.error_message,
            Severity::Warning => &self.warning_message,
        }
    }
}

impl Default for AxisLabels {
    fn default() -> Self {
        Self {
            severity: ConfigHelper::default_severity_label(),
            message_count: ConfigHelper::default_message_count_label(),
            error_message: ConfigHelper::default_error_message_label(),
            warning_message: ConfigHelper::default_warning_message_label(),
            frequency: ConfigHelper::default_frequency_label(),
        }
    }
}
