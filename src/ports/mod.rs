//! Port traits. API boundaries for the hexagon.
//!
//! Outbound only: the application logs through these, adapters implement them.

pub mod logging;

pub use logging::{CacheLogger, DriverLog, LogSink, SqlLogger};
