pub mod axis_labels;
pub mod chart_colors;
pub mod chart_titles;
pub mod config;
pub mod input_config;
pub mod output_config;
pub mod output_files;
pub mod visualization_config;
