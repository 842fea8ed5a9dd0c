pub mod chart_kind;
pub mod commands;
pub mod label_order;
pub mod severity;
pub mod source_kind;
