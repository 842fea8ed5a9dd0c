use crate::enums::severity::Severity;
use crate::structs::count_table::CountTable;

/// Records per (category, severity) pair. Feeds the treemap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySeverityCount {
    cells: CountTable<(String, Severity)>,
}

impl CategorySeverityCount {
    pub const fn new(cells: CountTable<(String, Severity)>) -> Self {
        Self { cells }
    }

    pub fn get(&self, category: &str, severity: Severity) -> usize {
        self.cells.get(&(category.to_string(), severity))
    }

    pub fn total(&self) -> usize {
        self.cells.total()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Severity, usize)> + '_ {
        self.cells
            .iter()
            .map(|((category, severity), count)| (category.as_str(), *severity, count))
    }

    /// Cells of one severity, in table order.
    pub fn for_severity(&self, severity: Severity) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.iter()
            .filter(move |(_, cell_severity, _)| *cell_severity == severity)
            .map(|(category, _, count)| (category, count))
    }

    /// Per-category totals over every severity, categories in table order.
    pub fn category_subtotals(&self) -> CountTable<String> {
        let mut subtotals = CountTable::new();
        for (category, _, count) in self.iter() {
            subtotals.add(category.to_string(), count);
        }
        subtotals
    }

    /// Per-severity totals over every category, severities in table order.
    pub fn severity_subtotals(&self) -> CountTable<Severity> {
        let mut subtotals = CountTable::new();
        for (_, severity, count) in self.iter() {
            subtotals.add(severity, count);
        }
        subtotals
    }
}
