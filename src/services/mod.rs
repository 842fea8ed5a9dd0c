pub mod aggregator;
pub mod log_sources;
pub mod plotly_renderer;
pub mod report_generator;
