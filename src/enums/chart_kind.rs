use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Donut,
    Bar,
    Treemap,
    ErrorHistogram,
    WarningHistogram,
}

impl ChartKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Donut => "donut",
            Self::Bar => "bar",
            Self::Treemap => "treemap",
            Self::ErrorHistogram => "error histogram",
            Self::WarningHistogram => "warning histogram",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Donut => "Error distribution by category",
            Self::Bar => "Message comparison by severity level",
            Self::Treemap => "Detailed analysis by category and severity",
            Self::ErrorHistogram => "Error message frequency histogram",
            Self::WarningHistogram => "Warning message frequency histogram",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
