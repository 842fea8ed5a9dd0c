use serde::{Deserialize, Serialize};
use crate::enums::chart_kind::ChartKind;
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ChartTitles {
    #[serde(default = "ConfigHelper::default_error_distribution_title")]
    pub error_distribution: String,

    #[serde(default = "ConfigHelper::default_severity_comparison_title")]
    pub severity_comparison: String,

    #[serde(default = "ConfigHelper::default_detailed_analysis_title")]
    pub detailed_analysis: String,

    #[serde(default = "ConfigHelper::default_error_histogram_title")]
    pub error_histogram: String,

    #[serde(default = "ConfigHelper::default_warning_histogram_title")]
    pub warning_histogram: String,
}

impl ChartTitles {
    pub fn for_chart(&self, chart: ChartKind) -> &str {
        match chart {
            ChartKind::Donut => &self.error_distribution,
            ChartKind::Bar => &self.severity_comparison,
            ChartKind::Treemap => &self.detailed_analysis,
            ChartKind::ErrorHistogram => &self.error_histogram,
            ChartKind::WarningHistogram => &self.warning_histogram,
        }
    }
}

impl Default for ChartTitles {
    fn default() -> Self {
        Self {
            error_distribution: ConfigHelper::default_error_distribution_title(),
            severity_comparison: ConfigHelper::default_severity_comparison_title(),
            detailed_analysis: ConfigHelper::default_detailed_analysis_title(),
            error_histogram: ConfigHelper::default_error_histogram_title(),
            warning_histogram: ConfigHelper::default_warning_histogram_title(),
        }
    }
}
