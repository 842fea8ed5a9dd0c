//! HTML chart rendering on top of Plotly.js.
//!
//! Every chart is a self-contained page: the trace data and layout are
//! embedded as JSON and Plotly.js is loaded from its CDN.

use std::fs;
use std::path::Path;
use serde_json::{json, Value};
use crate::config::constants::{DONUT_CENTER_TEXT, DONUT_HOLE, PLOTLY_CDN_URL, TREEMAP_ROOT_LABEL};
use crate::enums::chart_kind::ChartKind;
use crate::enums::severity::Severity;
use crate::errors::{LogvizError, LogvizResult};
use crate::structs::category_count::CategoryCount;
use crate::structs::category_severity_count::CategorySeverityCount;
use crate::structs::config::visualization_config::VisualizationConfig;
use crate::structs::message_frequency::MessageFrequency;
use crate::structs::severity_count::SeverityCount;
use crate::traits::chart_renderer::ChartRenderer;

const TREEMAP_ROOT_ID: &str = "all";
const TREEMAP_ROOT_COLOR: &str = "#f0f0f0";

pub struct PlotlyRenderer {
    visualization: VisualizationConfig,
    generated_at: String,
}

impl PlotlyRenderer {
    pub fn new(visualization: VisualizationConfig) -> Self {
        Self {
            visualization,
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    pub fn donut_html(&self, counts: &CategoryCount) -> String {
        let title = self.visualization.titles.for_chart(ChartKind::Donut);
        let center_text = if counts.is_empty() { "No errors" } else { DONUT_CENTER_TEXT };

        let traces = json!([{
            "type": "pie",
            "labels": counts.categories(),
            "values": counts.counts(),
            "hole": DONUT_HOLE,
            "sort": false,
        }]);
        let layout = json!({
            "title": { "text": title },
            "annotations": [{
                "text": center_text,
                "x": 0.5,
                "y": 0.5,
                "font": { "size": 20 },
                "showarrow": false,
            }],
        });

        self.page(title, &traces, &layout)
    }

    pub fn bar_html(&self, counts: &SeverityCount) -> String {
        let title = self.visualization.titles.for_chart(ChartKind::Bar);
        let labels = &self.visualization.labels;
        let colors: Vec<&str> = counts
            .severities()
            .into_iter()
            .map(|severity| self.visualization.colors.for_severity(severity))
            .collect();
        let names: Vec<&str> = counts.severities().into_iter().map(Severity::as_str).collect();

        let traces = json!([{
            "type": "bar",
            "x": names,
            "y": counts.counts(),
            "text": counts.counts(),
            "textposition": "auto",
            "marker": { "color": colors },
        }]);
        let mut layout = json!({
            "title": { "text": title },
            "xaxis": { "title": { "text": labels.severity } },
            "yaxis": { "title": { "text": labels.message_count }, "gridcolor": "#e5e5e5" },
            "plot_bgcolor": "#ffffff",
        });
        if counts.is_empty() {
            add_empty_annotation(&mut layout);
        }

        self.page(title, &traces, &layout)
    }

    /// Hierarchy: root, then one node per severity, then one leaf per category.
    pub fn treemap_html(&self, counts: &CategorySeverityCount) -> String {
        let title = self.visualization.titles.for_chart(ChartKind::Treemap);

        let mut ids = vec![TREEMAP_ROOT_ID.to_string()];
        let mut labels = vec![TREEMAP_ROOT_LABEL.to_string()];
        let mut parents = vec![String::new()];
        let mut values = vec![counts.total()];
        let mut colors = vec![TREEMAP_ROOT_COLOR.to_string()];

        for (severity, subtotal) in counts.severity_subtotals().iter() {
            let severity = *severity;
            let color = self.visualization.colors.for_severity(severity);
            ids.push(severity.as_str().to_string());
            labels.push(severity.as_str().to_string());
            parents.push(TREEMAP_ROOT_ID.to_string());
            values.push(subtotal);
            colors.push(color.to_string());

            for (category, count) in counts.for_severity(severity) {
                ids.push(format!("{severity}/{category}"));
                labels.push(category.to_string());
                parents.push(severity.as_str().to_string());
                values.push(count);
                colors.push(color.to_string());
            }
        }

        let traces = json!([{
            "type": "treemap",
            "ids": ids,
            "labels": labels,
            "parents": parents,
            "values": values,
            "branchvalues": "total",
            "marker": { "colors": colors },
            "textinfo": "label+value",
        }]);
        let mut layout = json!({ "title": { "text": title } });
        if counts.is_empty() {
            add_empty_annotation(&mut layout);
        }

        self.page(title, &traces, &layout)
    }

    pub fn histogram_html(&self, frequency: &MessageFrequency) -> String {
        let severity = frequency.severity();
        let title = self.visualization.titles.for_chart(histogram_kind(severity));
        let labels = &self.visualization.labels;

        let traces = json!([{
            "type": "bar",
            "x": frequency.templates(),
            "y": frequency.counts(),
            "marker": { "color": self.visualization.colors.for_severity(severity) },
        }]);
        let mut layout = json!({
            "title": { "text": title },
            "xaxis": { "title": { "text": labels.message_for(severity) }, "automargin": true },
            "yaxis": { "title": { "text": labels.frequency }, "tickformat": "d", "rangemode": "tozero" },
            "bargap": 0.1,
        });
        if frequency.is_empty() {
            add_empty_annotation(&mut layout);
        }

        self.page(title, &traces, &layout)
    }

    fn page(&self, title: &str, traces: &Value, layout: &Value) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<script src="{cdn}"></script>
<style>
body{{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;margin:0;background:#fafafa;color:#333}}
#chart{{width:100%;height:90vh}}
footer{{font-size:12px;color:#777;padding:4px 16px}}
</style>
</head>
<body>
<div id="chart"></div>
<footer>Generated by logviz at {generated_at}</footer>
<script>
const TRACES = {traces};
const LAYOUT = {layout};
Plotly.newPlot("chart", TRACES, LAYOUT, {{responsive: true}});
</script>
</body>
</html>
"#,
            title = escape_html(title),
            cdn = PLOTLY_CDN_URL,
            generated_at = self.generated_at,
            traces = script_json(traces),
            layout = script_json(layout),
        )
    }

    fn write(chart: ChartKind, html: &str, path: &Path) -> LogvizResult<()> {
        fs::write(path, html).map_err(|e| {
            LogvizError::render_failure(chart.name(), &path.display().to_string(), &e.to_string())
        })?;
        log::debug!("Wrote {} chart ({} bytes) to {}", chart, html.len(), path.display());
        Ok(())
    }
}

impl ChartRenderer for PlotlyRenderer {
    fn render_donut(&self, counts: &CategoryCount, path: &Path) -> LogvizResult<()> {
        Self::write(ChartKind::Donut, &self.donut_html(counts), path)
    }

    fn render_bar(&self, counts: &SeverityCount, path: &Path) -> LogvizResult<()> {
        Self::write(ChartKind::Bar, &self.bar_html(counts), path)
    }

    fn render_treemap(&self, counts: &CategorySeverityCount, path: &Path) -> LogvizResult<()> {
        Self::write(ChartKind::Treemap, &self.treemap_html(counts), path)
    }

    fn render_histogram(&self, frequency: &MessageFrequency, path: &Path) -> LogvizResult<()> {
        let kind = histogram_kind(frequency.severity());
        Self::write(kind, &self.histogram_html(frequency), path)
    }
}

pub const fn histogram_kind(severity: Severity) -> ChartKind {
    match severity {
        Severity::Error => ChartKind::ErrorHistogram,
        Severity::Warning => ChartKind::WarningHistogram,
    }
}

fn add_empty_annotation(layout: &mut Value) {
    layout["annotations"] = json!([{
        "text": "No records",
        "xref": "paper",
        "yref": "paper",
        "x": 0.5,
        "y": 0.5,
        "font": { "size": 18, "color": "#999999" },
        "showarrow": false,
    }]);
}

/// JSON safe to inline in a `<script>` element.
fn script_json(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
