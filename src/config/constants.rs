pub const DEFAULT_CONFIG_PATH: &str = "config/config.toml";
pub const HOME_CONFIG_RELATIVE_PATH: &str = "logviz/config.toml";
pub const PATTERNS_FILE_NAME: &str = "log_patterns.json";

pub const DEFAULT_OUTPUT_DIR: &str = "charts";
pub const DONUT_FILE_NAME: &str = "error_distribution.html";
pub const BAR_FILE_NAME: &str = "severity_comparison.html";
pub const TREEMAP_FILE_NAME: &str = "category_analysis.html";
pub const ERROR_HISTOGRAM_FILE_NAME: &str = "error_histogram.html";
pub const WARNING_HISTOGRAM_FILE_NAME: &str = "warning_histogram.html";

pub const DEFAULT_ERROR_COLOR: &str = "#ff6b6b";
pub const DEFAULT_WARNING_COLOR: &str = "#ffd93d";

pub const PLOTLY_CDN_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
pub const TREEMAP_ROOT_LABEL: &str = "All Messages";
pub const DONUT_CENTER_TEXT: &str = "Errors";
pub const DONUT_HOLE: f64 = 0.3;

/// Extensions read as one JSON document per line.
pub const JSON_LINES_EXTENSIONS: &[&str] = &["jsonl", "ndjson"];
