use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::enums::chart_kind::ChartKind;
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::config::output_files::OutputFiles;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default = "ConfigHelper::default_output_dir")]
    pub output_dir: String,

    #[serde(default = "ConfigHelper::default_true")]
    pub save_plots: bool,

    #[serde(default = "ConfigHelper::default_true")]
    pub histograms: bool,

    #[serde(default)]
    pub open_in_browser: bool,

    #[serde(default)]
    pub files: OutputFiles,
}

impl OutputConfig {
    pub fn path_for(&self, chart: ChartKind) -> PathBuf {
        PathBuf::from(&self.output_dir).join(self.files.file_for(chart))
    }

    /// Charts this configuration produces, in rendering order.
    pub fn charts(&self) -> Vec<ChartKind> {
        let mut charts = vec![ChartKind::Donut, ChartKind::Bar, ChartKind::Treemap];
        if self.histograms {
            charts.push(ChartKind::ErrorHistogram);
            charts.push(ChartKind::WarningHistogram);
        }
        charts
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: ConfigHelper::default_output_dir(),
            save_plots: true,
            histograms: true,
            open_in_browser: false,
            files: OutputFiles::default(),
        }
    }
}
