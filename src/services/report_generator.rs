use std::fs;
use std::path::{Path, PathBuf};
use crate::enums::chart_kind::ChartKind;
use crate::enums::severity::Severity;
use crate::errors::{LogvizError, LogvizResult};
use crate::structs::aggregates::Aggregates;
use crate::structs::config::output_config::OutputConfig;
use crate::traits::chart_renderer::ChartRenderer;

/// Hands finished aggregates to a renderer, one output file per chart.
pub struct ReportGenerator<R: ChartRenderer> {
    renderer: R,
    output: OutputConfig,
}

impl<R: ChartRenderer> ReportGenerator<R> {
    pub const fn new(renderer: R, output: OutputConfig) -> Self {
        Self { renderer, output }
    }

    /// Renders every configured chart and returns the written paths. Stops at
    /// the first failure.
    pub fn generate(&self, aggregates: &Aggregates) -> LogvizResult<Vec<PathBuf>> {
        if !self.output.save_plots {
            log::info!("💤 output.save_plots is disabled, no charts written");
            return Ok(Vec::new());
        }

        self.ensure_output_dir()?;

        let mut written = Vec::new();
        for chart in self.output.charts() {
            let path = self.output.path_for(chart);
            self.render(chart, aggregates, &path)?;
            log::info!("✅ {} → {}", chart.description(), path.display());
            written.push(path);
        }

        Ok(written)
    }

    fn render(&self, chart: ChartKind, aggregates: &Aggregates, path: &Path) -> LogvizResult<()> {
        match chart {
            ChartKind::Donut => self.renderer.render_donut(aggregates.category_counts(), path),
            ChartKind::Bar => self.renderer.render_bar(aggregates.severity_counts(), path),
            ChartKind::Treemap => self
                .renderer
                .render_treemap(aggregates.category_severity_counts(), path),
            ChartKind::ErrorHistogram => self
                .renderer
                .render_histogram(aggregates.message_frequency(Severity::Error), path),
            ChartKind::WarningHistogram => self
                .renderer
                .render_histogram(aggregates.message_frequency(Severity::Warning), path),
        }
    }

    fn ensure_output_dir(&self) -> LogvizResult<()> {
        let dir = PathBuf::from(&self.output.output_dir);
        if !dir.exists() {
            log::debug!("Creating output directory {}", dir.display());
            fs::create_dir_all(&dir).map_err(|e| {
                LogvizError::file_error(&dir.display().to_string(), "create output directory", &e.to_string())
            })?;
        }
        Ok(())
    }
}
