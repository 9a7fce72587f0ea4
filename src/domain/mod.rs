//! Core domain layer. No external I/O dependencies.
//!
//! Error catalog, response mapping and log level definitions.

pub mod error_response;
pub mod errors;
pub mod log_level;

pub use error_response::{ErrorCode, ErrorResponse};
pub use errors::{DomainError, ErrorKind};
pub use log_level::{CacheLogLevel, LevelParseError, Severity, SqlLogLevel};
