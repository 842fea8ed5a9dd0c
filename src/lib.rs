//! Summarize error and warning log records into interactive HTML charts.
//!
//! Records come from a [`traits::log_source::LogSource`], are validated and
//! counted by [`services::aggregator::Aggregator`], and each aggregate is
//! handed to a [`traits::chart_renderer::ChartRenderer`].

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
