mod aggregator_properties;
mod aggregator_tests;
mod common;
mod config_tests;
