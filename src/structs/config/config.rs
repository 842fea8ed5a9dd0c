use serde::{Deserialize, Serialize};
use crate::enums::label_order::LabelOrder;
use crate::structs::config::input_config::InputConfig;
use crate::structs::config::output_config::OutputConfig;
use crate::structs::config::visualization_config::VisualizationConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub label_order: LabelOrder,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub visualization: VisualizationConfig,
}
