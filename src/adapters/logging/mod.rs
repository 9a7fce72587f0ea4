//! Logging adapters: the database logger the ORM and cache driver use, and
//! the `tracing` plumbing of the database channel.

pub mod database_logger;
pub mod format;
pub mod severity_filter;
pub mod tracing_sink;
pub mod writer;

pub use database_logger::{CacheLoggerCompat, DatabaseLogger};
pub use format::DatabaseFormat;
pub use severity_filter::SeverityFilter;
pub use tracing_sink::{DATABASE_TARGET, TracingSink};
pub use writer::{LogOutput, LogOutputError};
