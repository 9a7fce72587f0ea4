//! Wiring: load config, register logging channels, hand the database loggers
//! to the ORM and cache layers. No business logic here.

use anyhow::Context;
use std::sync::Arc;
use todo_api::adapters::logging::{CacheLoggerCompat, DatabaseLogger, TracingSink};
use todo_api::ports::{CacheLogger, DriverLog, LogSink, SqlLogger};
use todo_api::shared::config::AppConfig;
use todo_api::shared::telemetry;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    let cfg = AppConfig::load().context("load configuration")?;
    telemetry::init(&cfg).context("initialise logging")?;

    if let Err(e) = cfg.standard_severity() {
        warn!(error = %e, "falling back to INFO for the standard channel");
    }
    info!(
        standard = %cfg.log_standard,
        database = %cfg.log_database,
        path = %cfg.log_path().display(),
        "logging channels registered"
    );

    // --- Database loggers (one shared state for the ORM and the cache driver) ---
    let sink: Arc<dyn LogSink> = Arc::new(TracingSink);
    let sql_logger = Arc::new(DatabaseLogger::new(&cfg.log_database_level, sink));
    let cache_logger = CacheLoggerCompat::new(Arc::clone(&sql_logger));

    info!(
        sql_level = %SqlLogger::level(&*sql_logger),
        cache_level = %CacheLogger::level(&cache_logger),
        show_sql = sql_logger.is_show_sql(),
        "database logger ready"
    );
    sql_logger.infof(format_args!(
        "database channel active at {}",
        cfg.log_database_level.to_uppercase()
    ));

    Ok(())
}
