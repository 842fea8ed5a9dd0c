pub mod config_helper;
pub mod message_template;
pub mod ordered_groups;
