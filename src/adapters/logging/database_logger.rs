//! Database logger. Implements [`SqlLogger`] for the ORM and, through
//! [`CacheLoggerCompat`], [`CacheLogger`] for the cache driver.
//!
//! Both share one level and one SQL trace toggle, stored atomically so the
//! ORM and the cache driver can read and set them from any thread.

use crate::domain::{CacheLogLevel, Severity, SqlLogLevel};
use crate::ports::{CacheLogger, DriverLog, LogSink, SqlLogger};
use std::fmt::{self, Display};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

pub struct DatabaseLogger {
    sink: Arc<dyn LogSink>,
    level: AtomicU8,
    show_sql: AtomicBool,
}

impl DatabaseLogger {
    /// Builds the logger from a configured level name (case-insensitive).
    ///
    /// An unrecognised name is reported at critical severity on both the
    /// standard channel and the sink, and the logger starts at
    /// [`SqlLogLevel::Unknown`].
    pub fn new(level_name: &str, sink: Arc<dyn LogSink>) -> Self {
        let level = match level_name.parse::<Severity>() {
            Ok(severity) => SqlLogLevel::from(severity),
            Err(e) => {
                // The database channel may be off.
                tracing::error!(severity = "CRITICAL", error = %e, "Error setting database log level");
                sink.write(
                    Severity::Critical,
                    &format!("Error setting database log level: {e}"),
                );
                SqlLogLevel::Unknown
            }
        };
        Self::with_level(level, sink)
    }

    pub fn with_level(level: SqlLogLevel, sink: Arc<dyn LogSink>) -> Self {
        Self {
            sink,
            level: AtomicU8::new(level as u8),
            show_sql: AtomicBool::new(true),
        }
    }

    fn emit(&self, severity: Severity, values: &[&dyn Display]) {
        self.sink.write(severity, &join_values(values));
    }

    fn emitf(&self, severity: Severity, args: fmt::Arguments<'_>) {
        match args.as_str() {
            Some(s) => self.sink.write(severity, s),
            None => self.sink.write(severity, &args.to_string()),
        }
    }
}

fn join_values(values: &[&dyn Display]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl DriverLog for DatabaseLogger {
    fn debug(&self, values: &[&dyn Display]) {
        self.emit(Severity::Debug, values);
    }

    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.emitf(Severity::Debug, args);
    }

    fn info(&self, values: &[&dyn Display]) {
        self.emit(Severity::Info, values);
    }

    fn infof(&self, args: fmt::Arguments<'_>) {
        self.emitf(Severity::Info, args);
    }

    fn warn(&self, values: &[&dyn Display]) {
        self.emit(Severity::Warning, values);
    }

    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.emitf(Severity::Warning, args);
    }

    fn error(&self, values: &[&dyn Display]) {
        self.emit(Severity::Error, values);
    }

    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.emitf(Severity::Error, args);
    }

    fn show_sql(&self, show: Option<bool>) {
        if let Some(show) = show {
            self.show_sql.store(show, Ordering::Relaxed);
        }
    }

    fn is_show_sql(&self) -> bool {
        self.show_sql.load(Ordering::Relaxed)
    }
}

impl SqlLogger for DatabaseLogger {
    fn level(&self) -> SqlLogLevel {
        SqlLogLevel::from_repr(self.level.load(Ordering::Relaxed))
    }

    fn set_level(&self, level: SqlLogLevel) {
        self.level.store(level as u8, Ordering::Relaxed);
    }
}

/// Cache-driver view of a [`DatabaseLogger`].
///
/// Shares state with the wrapped logger: a level set here is what the ORM
/// reads next, and the other way round.
#[derive(Clone)]
pub struct CacheLoggerCompat {
    inner: Arc<DatabaseLogger>,
}

impl CacheLoggerCompat {
    pub fn new(inner: Arc<DatabaseLogger>) -> Self {
        Self { inner }
    }
}

impl DriverLog for CacheLoggerCompat {
    fn debug(&self, values: &[&dyn Display]) {
        self.inner.debug(values);
    }

    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.inner.debugf(args);
    }

    fn info(&self, values: &[&dyn Display]) {
        self.inner.info(values);
    }

    fn infof(&self, args: fmt::Arguments<'_>) {
        self.inner.infof(args);
    }

    fn warn(&self, values: &[&dyn Display]) {
        self.inner.warn(values);
    }

    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.inner.warnf(args);
    }

    fn error(&self, values: &[&dyn Display]) {
        self.inner.error(values);
    }

    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.inner.errorf(args);
    }

    fn show_sql(&self, show: Option<bool>) {
        self.inner.show_sql(show);
    }

    fn is_show_sql(&self) -> bool {
        self.inner.is_show_sql()
    }
}

impl CacheLogger for CacheLoggerCompat {
    fn level(&self) -> CacheLogLevel {
        CacheLogLevel::from(SqlLogger::level(&*self.inner))
    }

    fn set_level(&self, level: CacheLogLevel) {
        SqlLogger::set_level(&*self.inner, SqlLogLevel::from(level));
    }
}
