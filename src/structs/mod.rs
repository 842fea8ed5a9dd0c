pub mod aggregates;
pub mod category_count;
pub mod category_severity_count;
pub mod cli;
pub mod config;
pub mod count_table;
pub mod log_record;
pub mod message_frequency;
pub mod pattern_catalog;
pub mod raw_log_record;
pub mod severity_count;
