//! Process-wide logging registration.
//!
//! [`init`] installs the global `tracing` subscriber once, with two channels:
//!
//! - standard: everything except the database target, plain `fmt` output;
//! - database: only [`DATABASE_TARGET`], rendered by [`DatabaseFormat`] and
//!   filtered by backend severity through [`SeverityFilter`].
//!
//! Outputs, levels and formats are fixed here for the process lifetime. The
//! database logger never touches this; it only emits on the target.

use crate::adapters::logging::tracing_sink::tracing_level;
use crate::adapters::logging::{
    DATABASE_TARGET, DatabaseFormat, LogOutputError, SeverityFilter,
};
use crate::domain::Severity;
use crate::shared::config::AppConfig;
use thiserror::Error;
use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error(transparent)]
    Output(#[from] LogOutputError),

    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),

    #[error("logging is already initialised for this process")]
    AlreadyInitialised,
}

/// Registers both channels with the global subscriber. Call once at startup.
pub fn init(cfg: &AppConfig) -> Result<(), TelemetryError> {
    subscriber(cfg)?
        .try_init()
        .map_err(|_| TelemetryError::AlreadyInitialised)
}

/// Builds the two-channel subscriber without installing it.
pub fn subscriber(
    cfg: &AppConfig,
) -> Result<impl Subscriber + Send + Sync + 'static, TelemetryError> {
    let log_path = cfg.log_path();

    let standard_output = cfg.standard_output()?;
    let standard_layer = fmt::layer()
        .with_ansi(standard_output.is_terminal())
        .with_writer(standard_output.make_writer(&log_path, "standard")?)
        .with_filter(standard_filter(cfg)?);

    let database_output = cfg.database_output()?;
    let database_layer = fmt::layer()
        .with_ansi(database_output.is_terminal())
        .event_format(DatabaseFormat::new())
        .with_writer(database_output.make_writer(&log_path, "database")?)
        .with_filter(database_filter(cfg));

    Ok(tracing_subscriber::registry()
        .with(standard_layer)
        .with(database_layer))
}

/// `RUST_LOG` if set, else the configured level; the database target is
/// always excluded.
pub fn standard_filter(cfg: &AppConfig) -> Result<EnvFilter, TelemetryError> {
    let base = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(standard_level(cfg).to_string()));
    Ok(base.add_directive(format!("{DATABASE_TARGET}=off").parse()?))
}

/// Unparsable level names fall back to INFO.
pub fn standard_level(cfg: &AppConfig) -> LevelFilter {
    cfg.standard_severity()
        .map(|s| LevelFilter::from_level(tracing_level(s)))
        .unwrap_or(LevelFilter::INFO)
}

/// Only the database target, at the configured minimum severity. An
/// unparsable name leaves the channel showing error and critical lines.
pub fn database_filter(cfg: &AppConfig) -> SeverityFilter {
    SeverityFilter::new(cfg.database_severity().unwrap_or(Severity::Error))
}
