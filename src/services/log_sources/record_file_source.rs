use std::fs;
use std::path::PathBuf;
use crate::config::constants::JSON_LINES_EXTENSIONS;
use crate::errors::{LogvizError, LogvizResult};
use crate::structs::raw_log_record::RawLogRecord;
use crate::traits::log_source::LogSource;

/// Reads individual records from a JSON array, or from JSON Lines when the
/// file extension is `.jsonl` / `.ndjson`.
pub struct RecordFileSource {
    path: PathBuf,
}

impl RecordFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_json_lines(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| JSON_LINES_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
    }

    fn content_type(&self) -> String {
        format!("record file {}", self.path.display())
    }

    fn parse_array(&self, content: &str) -> LogvizResult<Vec<RawLogRecord>> {
        serde_json::from_str(content)
            .map_err(|e| LogvizError::parse_error(&self.content_type(), Some(e.line()), &e.to_string()))
    }

    fn parse_lines(&self, content: &str) -> LogvizResult<Vec<RawLogRecord>> {
        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(lineno, line)| {
                serde_json::from_str(line).map_err(|e| {
                    LogvizError::parse_error(&self.content_type(), Some(lineno + 1), &e.to_string())
                })
            })
            .collect()
    }
}

impl LogSource for RecordFileSource {
    fn read_records(&self) -> LogvizResult<Vec<RawLogRecord>> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| LogvizError::source_error(&self.describe(), &e.to_string()))?;

        if self.is_json_lines() {
            self.parse_lines(&content)
        } else {
            self.parse_array(&content)
        }
    }

    fn describe(&self) -> String {
        format!("record file '{}'", self.path.display())
    }
}
