use serde::{Deserialize, Serialize};
use crate::enums::source_kind::SourceKind;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct InputConfig {
    #[serde(default)]
    pub source: SourceKind,

    #[serde(default)]
    pub path: Option<String>,
}
