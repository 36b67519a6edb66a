//! CLI command implementations

pub mod browse;
pub mod catalog;
pub mod history;
pub mod search;
