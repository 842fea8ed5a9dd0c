use std::path::Path;
use crate::errors::LogvizResult;
use crate::structs::category_count::CategoryCount;
use crate::structs::category_severity_count::CategorySeverityCount;
use crate::structs::message_frequency::MessageFrequency;
use crate::structs::severity_count::SeverityCount;

/// Turns one aggregate into an interactive chart written at `path`.
pub trait ChartRenderer {
    fn render_donut(&self, counts: &CategoryCount, path: &Path) -> LogvizResult<()>;

    fn render_bar(&self, counts: &SeverityCount, path: &Path) -> LogvizResult<()>;

    fn render_treemap(&self, counts: &CategorySeverityCount, path: &Path) -> LogvizResult<()>;

    fn render_histogram(&self, frequency: &MessageFrequency, path: &Path) -> LogvizResult<()>;
}
