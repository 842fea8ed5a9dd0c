pub mod pattern_catalog_source;
pub mod record_file_source;
pub mod sample_source;

use crate::enums::source_kind::SourceKind;
use crate::errors::{LogvizError, LogvizResult};
use crate::structs::config::input_config::InputConfig;
use crate::traits::log_source::LogSource;
use pattern_catalog_source::PatternCatalogSource;
use record_file_source::RecordFileSource;
use sample_source::SampleSource;

/// Picks the source implementation named by the `[input]` section.
pub fn build_source(input: &InputConfig) -> LogvizResult<Box<dyn LogSource>> {
    let required_path = || {
        input.path.clone().ok_or_else(|| {
            LogvizError::config_error(
                "input.path is required for this source",
                Some("input.path"),
                Some("Point input.path at a pattern catalog or record file"),
            )
        })
    };

    let source: Box<dyn LogSource> = match input.source {
        SourceKind::Patterns => Box::new(PatternCatalogSource::new(required_path()?)),
        SourceKind::Records => Box::new(RecordFileSource::new(required_path()?)),
        SourceKind::Sample => Box::new(SampleSource::new()),
    };
    Ok(source)
}
