//! Logging ports.
//!
//! [`LogSink`] is the seam to the application's logging backend. The ORM and
//! the cache driver depend on [`SqlLogger`] and [`CacheLogger`]; both speak
//! the same [`DriverLog`] call surface but read and write different level
//! enumerations.

use crate::domain::{CacheLogLevel, Severity, SqlLogLevel};
use std::fmt::{self, Display};

/// Backend that receives fully rendered log lines.
///
/// Implemented by the tracing adapter in production and by recording doubles
/// in tests.
pub trait LogSink: Send + Sync {
    fn write(&self, severity: Severity, message: &str);
}

/// Leveled call surface shared by database drivers.
///
/// Value-list forms join their values with single spaces. Format forms take
/// `format_args!` output. Neither filters: filtering is the backend's job.
pub trait DriverLog: Send + Sync {
    fn debug(&self, values: &[&dyn Display]);
    fn debugf(&self, args: fmt::Arguments<'_>);
    fn info(&self, values: &[&dyn Display]);
    fn infof(&self, args: fmt::Arguments<'_>);
    fn warn(&self, values: &[&dyn Display]);
    fn warnf(&self, args: fmt::Arguments<'_>);
    fn error(&self, values: &[&dyn Display]);
    fn errorf(&self, args: fmt::Arguments<'_>);

    /// Sets whether SQL statements are traced. `None` leaves it unchanged.
    fn show_sql(&self, show: Option<bool>);
    fn is_show_sql(&self) -> bool;
}

/// Logger contract expected by the ORM.
pub trait SqlLogger: DriverLog {
    fn level(&self) -> SqlLogLevel;
    fn set_level(&self, level: SqlLogLevel);
}

/// Logger contract expected by the cache driver.
pub trait CacheLogger: DriverLog {
    fn level(&self) -> CacheLogLevel;
    fn set_level(&self, level: CacheLogLevel);
}
