pub mod catalog;
pub mod config;
pub mod metrics;
pub mod persistence;
pub mod report;
pub mod store;

pub mod error;
