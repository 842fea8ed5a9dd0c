use once_cell::sync::Lazy;
use crate::errors::LogvizResult;
use crate::structs::pattern_catalog::{MessageGroup, PatternCatalog};
use crate::structs::raw_log_record::RawLogRecord;
use crate::traits::log_source::LogSource;

static SAMPLE_CATALOG: Lazy<PatternCatalog> = Lazy::new(|| PatternCatalog {
    error_logs: vec![
        MessageGroup::new(
            "Connection",
            &[
                "Could not connect to: {configuration}",
                "Invalid configuration: {configuration}",
                "Connection setup failed to context {context}!",
                "Failed commiting read session on queue {queue_name}",
                "Sending failed to {queue_name}!",
                "Error while receiving from {queue_name}",
                "Error while receiving from {queue_name} The node will stop.",
                "Rollback failed",
            ],
        ),
        MessageGroup::new(
            "File",
            &[
                "Invalid file format!",
                "Error reading bytes message >>> {message}",
                "Error reading file content (file = {file_name})",
                "Unknown message type!!!",
            ],
        ),
        MessageGroup::new(
            "Control",
            &[
                "START request will be ignored for node [{node}] which has a pending start request, control point [{control_point}]",
                "Error retrieving participant data from form",
                "Received null participant data (id) for validating",
                "Received invalid participant for validating",
            ],
        ),
    ],
    warning_logs: vec![MessageGroup::new(
        "Configuration",
        &[
            "Failed parsing log message size limit ({value}). Will default to none!",
            "Ignoring message size limit ({value}). Cannot be smaller than 1000. Will default to none!",
            "Failed parsing minimum commit ({value}). Will default to {default_value}",
            "Ignoring message size limit ({value}). Cannot be smaller than 1 or greater than 100. Will default to 1",
            "Ignoring message mininum time commit ({value}). Will default to {default_value}",
        ],
    )],
});

/// Built-in demo dataset, used when nothing else is configured.
#[derive(Debug, Default)]
pub struct SampleSource;

impl SampleSource {
    pub const fn new() -> Self {
        Self
    }

    pub fn catalog() -> &'static PatternCatalog {
        &SAMPLE_CATALOG
    }
}

impl LogSource for SampleSource {
    fn read_records(&self) -> LogvizResult<Vec<RawLogRecord>> {
        Ok(SAMPLE_CATALOG.to_records())
    }

    fn describe(&self) -> String {
        "built-in sample dataset".to_string()
    }
}
