use serde::{Deserialize, Serialize};
use crate::structs::config::axis_labels::AxisLabels;
use crate::structs::config::chart_colors::ChartColors;
use crate::structs::config::chart_titles::ChartTitles;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct VisualizationConfig {
    #[serde(default)]
    pub colors: ChartColors,

    #[serde(default)]
    pub titles: ChartTitles,

    #[serde(default)]
    pub labels: AxisLabels,
}
