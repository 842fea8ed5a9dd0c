use serde::{Deserialize, Serialize};
use crate::enums::chart_kind::ChartKind;
use crate::helpers::config_helper::ConfigHelper;

/// File name of each chart inside the output directory.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct OutputFiles {
    #[serde(default = "ConfigHelper::default_donut_file")]
    pub donut: String,

    #[serde(default = "ConfigHelper::default_bar_file")]
    pub bar: String,

    #[serde(default = "ConfigHelper::default_treemap_file")]
    pub treemap: String,

    #[serde(default = "ConfigHelper::default_error_histogram_file")]
    pub error_histogram: String,

    #[serde(default = "ConfigHelper::default_warning_histogram_file")]
    pub warning_histogram: String,
}

impl OutputFiles {
    pub fn file_for(&self, chart: ChartKind) -> &str {
        match chart {
            ChartKind::Donut => &self.donut,
            ChartKind::Bar => &self.bar,
            ChartKind::Treemap => &self.treemap,
            ChartKind::ErrorHistogram => &self.error_histogram,
            ChartKind::WarningHistogram => &self.warning_histogram,
        }
    }

    pub fn all(&self) -> [(ChartKind, &str); 5] {
        [
            (ChartKind::Donut, self.donut.as_str()),
            (ChartKind::Bar, self.bar.as_str()),
            (ChartKind::Treemap, self.treemap.as_str()),
            (ChartKind::ErrorHistogram, self.error_histogram.as_str()),
            (ChartKind::WarningHistogram, self.warning_histogram.as_str()),
        ]
    }
}

impl Default for OutputFiles {
    fn default() -> Self {
        Self {
            donut: ConfigHelper::default_donut_file(),
            bar: ConfigHelper::default_bar_file(),
            treemap: ConfigHelper::default_treemap_file(),
            error_histogram: ConfigHelper::default_error_histogram_file(),
            warning_histogram: ConfigHelper::default_warning_histogram_file(),
        }
    }
}
