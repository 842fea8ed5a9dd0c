use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every failure a logviz run can surface.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum LogvizError {
    // Record validation errors
    #[error("invalid record #{index} (category '{category}'): unrecognized severity '{severity}'")]
    InvalidRecord {
        index: usize,
        category: String,
        severity: String,
    },

    // Rendering errors
    #[error("failed to render {chart} chart to '{path}': {reason}")]
    RenderFailure {
        chart: String,
        path: String,
        reason: String,
    },

    // Configuration errors
    #[error("configuration error: {message}")]
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    #[error("configuration file error at '{path}': {reason}")]
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Input errors
    #[error("cannot read log records from {input}: {reason}")]
    SourceError {
        input: String,
        reason: String,
    },
    #[error("parse error in {content_type}: {reason}")]
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
    },

    // File operation errors
    #[error("file operation '{operation}' failed for '{file_path}': {reason}")]
    FileOperationError {
        file_path: String,
        operation: String,
        reason: String,
    },
}

impl LogvizError {
    pub fn invalid_record(index: usize, category: &str, severity: &str) -> Self {
        Self::InvalidRecord {
            index,
            category: category.to_string(),
            severity: severity.to_string(),
        }
    }

    pub fn render_failure(chart: &str, path: &str, reason: &str) -> Self {
        Self::RenderFailure {
            chart: chart.to_string(),
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(ToString::to_string),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn source_error(input: &str, reason: &str) -> Self {
        Self::SourceError {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn parse_error(content_type: &str, line_number: Option<usize>, reason: &str) -> Self {
        Self::ParseError {
            content_type: content_type.to_string(),
            line_number,
            reason: reason.to_string(),
        }
    }

    pub fn file_error(file_path: &str, operation: &str, reason: &str) -> Self {
        Self::FileOperationError {
            file_path: file_path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::RenderFailure { .. } | Self::FileOperationError { .. } => ErrorSeverity::High,
            Self::InvalidRecord { .. }
            | Self::SourceError { .. }
            | Self::ParseError { .. }
            | Self::ConfigurationFileError { .. } => ErrorSeverity::Medium,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
        }
    }

    /// Display message plus a hint on what to do about it.
    pub fn user_message(&self) -> String {
        let mut msg = self.to_string();
        match self {
            Self::InvalidRecord { .. } => {
                msg.push_str("\n💡 Recognized severities are ERROR and WARNING; no charts were written");
            }
            Self::RenderFailure { .. } => {
                msg.push_str("\n💡 Check that the output directory is writable, then re-run");
            }
            Self::ConfigurationError { field, suggestion, .. } => {
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {field})"));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {suggestion}"));
                }
            }
            Self::ConfigurationFileError { .. } => {
                msg.push_str("\n💡 Check file permissions and syntax, or run 'logviz init'");
            }
            Self::SourceError { .. } => {
                msg.push_str("\n💡 Check the [input] section of your configuration");
            }
            Self::ParseError { line_number, .. } => {
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {line})"));
                }
                msg.push_str("\n💡 Check the format and syntax of the input");
            }
            Self::FileOperationError { .. } => {
                msg.push_str("\n💡 Check file permissions and path");
            }
        }
        msg
    }

    pub fn technical_details(&self) -> String {
        format!("{self:?}")
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
}

impl ErrorSeverity {
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🔴",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

/// Result type alias for logviz operations
pub type LogvizResult<T> = Result<T, LogvizError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message.
    pub fn handle_error(error: &LogvizError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());
    }
}

impl From<serde_json::Error> for LogvizError {
    fn from(error: serde_json::Error) -> Self {
        Self::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
        }
    }
}
