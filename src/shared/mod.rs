//! Cross-cutting concerns: configuration and process-wide telemetry setup.

pub mod config;
pub mod telemetry;
