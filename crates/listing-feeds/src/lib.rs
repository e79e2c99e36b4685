pub mod batch;
pub mod canonical;
pub mod catalog;
pub mod config;
pub mod error;
pub mod feeds;
pub mod telemetry;
