use serde::{Deserialize, Serialize};

/// How category and severity labels are ordered in the aggregates.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq, Default)]
pub enum LabelOrder {
    /// Order of first occurrence in the input.
    #[default]
    #[serde(rename = "first-seen")]
    FirstSeen,
    /// Sorted by label text, independent of input order.
    #[serde(rename = "alphabetical")]
    Alphabetical,
}
