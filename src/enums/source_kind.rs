use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq, Default)]
pub enum SourceKind {
    /// JSON catalog of messages grouped by severity and category.
    #[serde(rename = "patterns")]
    Patterns,
    /// JSON array or JSON Lines of individual records.
    #[serde(rename = "records")]
    Records,
    /// Built-in demo dataset.
    #[default]
    #[serde(rename = "sample")]
    Sample,
}

impl SourceKind {
    pub const fn requires_path(self) -> bool {
        matches!(self, Self::Patterns | Self::Records)
    }
}
