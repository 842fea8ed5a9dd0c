use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{DEFAULT_CONFIG_PATH, HOME_CONFIG_RELATIVE_PATH, PATTERNS_FILE_NAME};
use crate::errors::{LogvizError, LogvizResult};
use crate::helpers::config_helper::ConfigHelper;
use crate::services::log_sources::sample_source::SampleSource;
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    /// Loads the explicit path when given; otherwise the first existing of
    /// `config/config.toml` and `~/logviz/config.toml`, else built-in defaults.
    pub fn load(explicit: Option<&Path>) -> LogvizResult<Config> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(LogvizError::config_file_error(
                    &path.display().to_string(),
                    "file not found",
                ));
            }
            return Self::load_from(path);
        }

        for candidate in Self::default_locations() {
            if candidate.exists() {
                return Self::load_from(&candidate);
            }
        }

        log::info!("📋 No configuration file found, using built-in defaults with sample data");
        Ok(Config::default())
    }

    pub fn load_from(path: &Path) -> LogvizResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| LogvizError::config_file_error(&path.display().to_string(), &e.to_string()))?;

        toml::from_str(&content)
            .map_err(|e| LogvizError::config_file_error(&path.display().to_string(), &e.to_string()))
    }

    pub fn default_locations() -> Vec<PathBuf> {
        let mut locations = vec![PathBuf::from(DEFAULT_CONFIG_PATH)];
        if let Some(home) = dirs::home_dir() {
            locations.push(home.join(HOME_CONFIG_RELATIVE_PATH));
        }
        locations
    }

    /// Writes a sample config and pattern catalog next to each other.
    /// Existing files are never overwritten.
    pub fn create_sample_config(config_path: &Path) -> LogvizResult<Vec<PathBuf>> {
        let config_dir = config_path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        let patterns_path = config_dir.join(PATTERNS_FILE_NAME);

        for target in [config_path, patterns_path.as_path()] {
            if target.exists() {
                return Err(LogvizError::file_error(
                    &target.display().to_string(),
                    "create sample configuration",
                    "file already exists",
                ));
            }
        }

        fs::create_dir_all(&config_dir).map_err(|e| {
            LogvizError::file_error(&config_dir.display().to_string(), "create config directory", &e.to_string())
        })?;

        let patterns = serde_json::to_string_pretty(SampleSource::catalog())?;
        fs::write(&patterns_path, patterns).map_err(|e| {
            LogvizError::file_error(&patterns_path.display().to_string(), "write", &e.to_string())
        })?;

        let sample_config = Self::sample_config(&patterns_path);
        fs::write(config_path, sample_config).map_err(|e| {
            LogvizError::file_error(&config_path.display().to_string(), "write", &e.to_string())
        })?;

        log::info!("✅ Created sample config at: {}", config_path.display());
        log::info!("✅ Created sample pattern catalog at: {}", patterns_path.display());
        Ok(vec![config_path.to_path_buf(), patterns_path])
    }

    fn sample_config(patterns_path: &Path) -> String {
        let patterns = toml::Value::String(patterns_path.display().to_string());
        format!(
            r##"# Logviz Configuration

# Order of categories and severities in the charts: "first-seen" or "alphabetical"
label_order = "first-seen"

[input]
# Where records come from: "patterns", "records" or "sample"
source = "patterns"
path = {patterns}

[output]
output_dir = "charts"
save_plots = true
# Also write per-severity message frequency histograms
histograms = true
open_in_browser = false

[output.files]
donut = "error_distribution.html"
bar = "severity_comparison.html"
treemap = "category_analysis.html"
error_histogram = "error_histogram.html"
warning_histogram = "warning_histogram.html"

[visualization.colors]
error = "#ff6b6b"
warning = "#ffd93d"

[visualization.titles]
error_distribution = "Error Distribution by Category"
severity_comparison = "Message Comparison by Severity Level"
detailed_analysis = "Detailed Analysis by Category and Severity"
error_histogram = "Error Message Frequency"
warning_histogram = "Warning Message Frequency"

[visualization.labels]
severity = "Severity Level"
message_count = "Message Count"
error_message = "Error Message"
warning_message = "Warning Message"
frequency = "Frequency"
"##
        )
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.input.source.requires_path() {
            match &config.input.path {
                Some(path) if !Path::new(path).exists() => {
                    errors.push(format!("Input file does not exist: {path}"));
                }
                None => {
                    errors.push("input.path is required for the configured input.source".to_string());
                }
                Some(_) => {}
            }
        }

        if config.output.output_dir.trim().is_empty() {
            errors.push("output.output_dir must not be empty".to_string());
        }

        let mut names = HashSet::new();
        for (chart, file) in config.output.files.all() {
            if file.trim().is_empty() {
                errors.push(format!("Output file name for the {chart} chart is empty"));
            } else if !names.insert(file) {
                errors.push(format!("Duplicate output file name: {file}"));
            }
        }

        let colors = &config.visualization.colors;
        for (name, value) in [("error", &colors.error), ("warning", &colors.warning)] {
            if !ConfigHelper::is_hex_color(value) {
                errors.push(format!("visualization.colors.{name} is not a #rrggbb color: {value}"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

}
