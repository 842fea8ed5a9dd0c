use std::fs;
use std::path::PathBuf;
use crate::errors::{LogvizError, LogvizResult};
use crate::structs::pattern_catalog::PatternCatalog;
use crate::structs::raw_log_record::RawLogRecord;
use crate::traits::log_source::LogSource;

/// Reads a JSON pattern catalog; every listed message is one record.
pub struct PatternCatalogSource {
    path: PathBuf,
}

impl PatternCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load_catalog(&self) -> LogvizResult<PatternCatalog> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| LogvizError::source_error(&self.describe(), &e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| {
            LogvizError::parse_error(
                &format!("pattern catalog {}", self.path.display()),
                Some(e.line()),
                &e.to_string(),
            )
        })
    }
}

impl LogSource for PatternCatalogSource {
    fn read_records(&self) -> LogvizResult<Vec<RawLogRecord>> {
        let catalog = self.load_catalog()?;
        log::debug!("📋 Pattern catalog lists {} messages", catalog.message_count());
        Ok(catalog.to_records())
    }

    fn describe(&self) -> String {
        format!("pattern catalog '{}'", self.path.display())
    }
}
