use crate::structs::count_table::CountTable;

/// ERROR records per category. Feeds the donut chart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCount {
    counts: CountTable<String>,
}

impl CategoryCount {
    pub const fn new(counts: CountTable<String>) -> Self {
        Self { counts }
    }

    pub fn get(&self, category: &str) -> usize {
        self.counts.get(category)
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

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(category, count)| (category.as_str(), count))
    }

    pub fn categories(&self) -> Vec<&str> {
        self.counts.keys().map(String::as_str).collect()
    }

    pub fn counts(&self) -> Vec<usize> {
        self.counts.counts()
    }
}
