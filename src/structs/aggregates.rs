use crate::enums::severity::Severity;
use crate::structs::category_count::CategoryCount;
use crate::structs::category_severity_count::CategorySeverityCount;
use crate::structs::message_frequency::MessageFrequency;
use crate::structs::severity_count::SeverityCount;

/// Every chart-ready table computed from one run's records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregates {
    category_counts: CategoryCount,
    severity_counts: SeverityCount,
    category_severity_counts: CategorySeverityCount,
    error_messages: MessageFrequency,
    warning_messages: MessageFrequency,
}

impl Aggregates {
    pub const fn new(
        category_counts: CategoryCount,
        severity_counts: SeverityCount,
        category_severity_counts: CategorySeverityCount,
        error_messages: MessageFrequency,
        warning_messages: MessageFrequency,
    ) -> Self {
        Self {
            category_counts,
            severity_counts,
            category_severity_counts,
            error_messages,
            warning_messages,
        }
    }

    pub const fn category_counts(&self) -> &CategoryCount {
        &self.category_counts
    }

    pub const fn severity_counts(&self) -> &SeverityCount {
        &self.severity_counts
    }

    pub const fn category_severity_counts(&self) -> &CategorySeverityCount {
        &self.category_severity_counts
    }

    pub const fn message_frequency(&self, severity: Severity) -> &MessageFrequency {
        match severity {
            Severity::Error => &self.error_messages,
            Severity::Warning => &self.warning_messages,
        }
    }

    pub fn record_count(&self) -> usize {
        self.severity_counts.total()
    }

    pub fn is_empty(&self) -> bool {
        self.severity_counts.is_empty()
    }

    pub fn print_summary(&self) {
        println!("\n📊 Log Record Summary");
        println!("═══════════════════════════════════════");

        println!("📈 Overview:");
        println!("   Total Records: {}", self.record_count());
        println!("   Categories: {}", self.category_severity_counts.category_subtotals().len());

        println!("\n⚡ By Severity:");
        for (severity, count) in self.severity_counts.iter() {
            let marker = match severity {
                Severity::Error => "🔴",
                Severity::Warning => "🟡",
            };
            println!("   {severity}: {count} {marker}");
        }

        println!("\n🏷️ Errors By Category:");
        if self.category_counts.is_empty() {
            println!("   (none)");
        }
        for (category, count) in self.category_counts.iter() {
            println!("   {category}: {count}");
        }

        println!("\n🧩 By Category And Severity:");
        for (category, severity, count) in self.category_severity_counts.iter() {
            println!("   {category} / {severity}: {count}");
        }

        for severity in Severity::ALL {
            let frequency = self.message_frequency(severity);
            if frequency.is_empty() {
                continue;
            }
            println!("\n📝 {severity} Messages:");
            for (template, count) in frequency.iter() {
                println!("   {count:>4} × {template}");
            }
        }

        println!("═══════════════════════════════════════\n");
    }
}
