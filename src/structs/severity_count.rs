use crate::enums::severity::Severity;
use crate::structs::count_table::CountTable;

/// All records per severity. Feeds the bar chart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeverityCount {
    counts: CountTable<Severity>,
}

impl SeverityCount {
    pub const fn new(counts: CountTable<Severity>) -> Self {
        Self { counts }
    }

    pub fn get(&self, severity: Severity) -> usize {
        self.counts.get(&severity)
    }

    pub fn total(&self) -> usize {
        self.counts.total()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Severity, usize)> + '_ {
        self.counts.iter().map(|(severity, count)| (*severity, count))
    }

    pub fn severities(&self) -> Vec<Severity> {
        self.counts.keys().copied().collect()
    }

    pub fn counts(&self) -> Vec<usize> {
        self.counts.counts()
    }
}
