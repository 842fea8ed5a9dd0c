use serde::{Deserialize, Serialize};
use crate::enums::severity::Severity;
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ChartColors {
    #[serde(default = "ConfigHelper::default_error_color")]
    pub error: String,

    #[serde(default = "ConfigHelper::default_warning_color")]
    pub warning: String,
}

impl ChartColors {
    pub fn for_severity(&self, severity: Severity) -> &str {
        match severity {
            Severity::Error => &self.error,
            Severity::Warning => &self.warning,
        }
    }
}

impl Default for ChartColors {
    fn default() -> Self {
        Self {
            error: ConfigHelper::default_error_color(),
            warning: ConfigHelper::default_warning_color(),
        }
    }
}
