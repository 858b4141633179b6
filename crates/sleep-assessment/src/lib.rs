pub mod analytics;
pub mod assessment;
pub mod config;
pub mod content;
pub mod error;
pub mod telemetry;
