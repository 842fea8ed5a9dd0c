use crate::enums::severity::Severity;
use crate::structs::count_table::CountTable;

/// Occurrences of each message template at one severity. Feeds the histograms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageFrequency {
    severity: Severity,
    templates: CountTable<String>,
}

impl MessageFrequency {
    pub const fn with_templates(severity: Severity, templates: CountTable<String>) -> Self {
        Self { severity, templates }
    }

    pub const fn severity(&self) -> Severity {
        self.severity
    }

    pub fn get(&self, template: &str) -> usize {
        self.templates.get(template)
    }

    pub fn total(&self) -> usize {
        self.templates.total()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.templates.iter().map(|(template, count)| (template.as_str(), count))
    }

    pub fn templates(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }

    pub fn counts(&self) -> Vec<usize> {
        self.templates.counts()
    }
}
