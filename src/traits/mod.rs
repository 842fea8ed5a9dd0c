pub mod chart_renderer;
pub mod log_source;
