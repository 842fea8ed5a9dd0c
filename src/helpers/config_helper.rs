use crate::config::constants::{
    BAR_FILE_NAME, DEFAULT_ERROR_COLOR, DEFAULT_OUTPUT_DIR, DEFAULT_WARNING_COLOR, DONUT_FILE_NAME,
    ERROR_HISTOGRAM_FILE_NAME, TREEMAP_FILE_NAME, WARNING_HISTOGRAM_FILE_NAME,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_output_dir() -> String {
        DEFAULT_OUTPUT_DIR.to_string()
    }

    pub const fn default_true() -> bool {
        true
    }

    pub fn default_donut_file() -> String {
        DONUT_FILE_NAME.to_string()
    }

    pub fn default_bar_file() -> String {
        BAR_FILE_NAME.to_string()
    }

    pub fn default_treemap_file() -> String {
        TREEMAP_FILE_NAME.to_string()
    }

    pub fn default_error_histogram_file() -> String {
        ERROR_HISTOGRAM_FILE_NAME.to_string()
    }

    pub fn default_warning_histogram_file() -> String {
        WARNING_HISTOGRAM_FILE_NAME.to_string()
    }

    pub fn default_error_color() -> String {
        DEFAULT_ERROR_COLOR.to_string()
    }

    pub fn default_warning_color() -> String {
        DEFAULT_WARNING_COLOR.to_string()
    }

    pub fn default_error_distribution_title() -> String {
        "Error Distribution by Category".to_string()
    }

    pub fn default_severity_comparison_title() -> String {
        "Message Comparison by Severity Level".to_string()
    }

    pub fn default_detailed_analysis_title() -> String {
        "Detailed Analysis by Category and Severity".to_string()
    }

    pub fn default_error_histogram_title() -> String {
        "Error Message Frequency".to_string()
    }

    pub fn default_warning_histogram_title() -> String {
        "Warning Message Frequency".to_string()
    }

    pub fn default_severity_label() -> String {
        "Severity Level".to_string()
    }

    pub fn default_message_count_label() -> String {
        "Message Count".to_string()
    }

    pub fn default_error_message_label() -> String {
        "Error Message".to_string()
    }

    pub fn default_warning_message_label() -> String {
        "Warning Message".to_string()
    }

    pub fn default_frequency_label() -> String {
        "Frequency".to_string()
    }

    /// `#rrggbb` only.
    pub fn is_hex_color(value: &str) -> bool {
        value.len() == 7
            && value.starts_with('#')
            && value[1..].chars().all(|c| c.is_ascii_hexdigit())
    }
}
