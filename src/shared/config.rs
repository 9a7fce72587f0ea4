//! Application configuration. Logging targets and levels.

use crate::adapters::logging::{LogOutput, LogOutputError};
use crate::domain::{LevelParseError, Severity};
use serde::Deserialize;
use std::path::PathBuf;

/// Prefix of environment variables, e.g. `TODO_API_LOG_LEVEL`.
pub const ENV_PREFIX: &str = "TODO_API";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Master switch. When false every channel writes nowhere. Read from TODO_API_LOG_ENABLED.
    #[serde(default = "default_true")]
    pub log_enabled: bool,

    /// Directory for `file` outputs. Read from TODO_API_LOG_PATH.
    #[serde(default = "default_log_path")]
    pub log_path: String,

    /// Output of the standard channel (stdout, stderr, file, off). Read from TODO_API_LOG_STANDARD.
    #[serde(default = "default_log_standard")]
    pub log_standard: String,

    /// Minimum severity of the standard channel. Read from TODO_API_LOG_LEVEL.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    // ─────────────────────────────────────────────────────────────────────────
    // Database channel
    // ─────────────────────────────────────────────────────────────────────────
    /// Output of the database channel. Read from TODO_API_LOG_DATABASE.
    #[serde(default = "default_log_database")]
    pub log_database: String,

    /// Minimum severity of the database channel. Read from TODO_API_LOG_DATABASE_LEVEL.
    #[serde(default = "default_log_database_level")]
    pub log_database_level: String,
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "./logs".to_string()
}

fn default_log_standard() -> String {
    "stdout".to_string()
}

fn default_log_level() -> String {
    "INFO".to_string()
}

fn default_log_database() -> String {
    "off".to_string()
}

fn default_log_database_level() -> String {
    "WARNING".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_enabled: default_true(),
            log_path: default_log_path(),
            log_standard: default_log_standard(),
            log_level: default_log_level(),
            log_database: default_log_database(),
            log_database_level: default_log_database_level(),
        }
    }
}

impl AppConfig {
    /// Loads `.env`, then `TODO_API_*` variables, then the file named by
    /// `TODO_API_CONFIG` if set.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix(ENV_PREFIX));
        if let Ok(path) = std::env::var("TODO_API_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        Self::from_config(c.build()?)
    }

    pub fn from_config(cfg: config::Config) -> Result<Self, config::ConfigError> {
        cfg.try_deserialize()
    }

    pub fn log_path(&self) -> PathBuf {
        PathBuf::from(&self.log_path)
    }

    /// Standard channel output. `Off` when logging is disabled.
    pub fn standard_output(&self) -> Result<LogOutput, LogOutputError> {
        self.output_or_off(&self.log_standard)
    }

    /// Database channel output. `Off` when logging is disabled.
    pub fn database_output(&self) -> Result<LogOutput, LogOutputError> {
        self.output_or_off(&self.log_database)
    }

    fn output_or_off(&self, raw: &str) -> Result<LogOutput, LogOutputError> {
        if !self.log_enabled {
            return Ok(LogOutput::Off);
        }
        raw.parse()
    }

    pub fn standard_severity(&self) -> Result<Severity, LevelParseError> {
        self.log_level.parse()
    }

    pub fn database_severity(&self) -> Result<Severity, LevelParseError> {
        self.log_database_level.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(raw: &str) -> AppConfig {
        let cfg = config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()
            .unwrap();
        AppConfig::from_config(cfg).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cfg = from_toml("");
        assert!(cfg.log_enabled);
        assert_eq!(cfg.log_path, "./logs");
        assert_eq!(cfg.standard_output().unwrap(), LogOutput::Stdout);
        assert_eq!(cfg.database_output().unwrap(), LogOutput::Off);
        assert_eq!(cfg.standard_severity(), Ok(Severity::Info));
        assert_eq!(cfg.database_severity(), Ok(Severity::Warning));
    }

    #[test]
    fn test_default_impl_matches_serde_defaults() {
        let parsed = from_toml("");
        let built = AppConfig::default();
        assert_eq!(parsed.log_path, built.log_path);
        assert_eq!(parsed.log_database_level, built.log_database_level);
        assert_eq!(parsed.log_standard, built.log_standard);
    }

    #[test]
    fn test_overrides() {
        let cfg = from_toml(
            r#"
            log_path = "/var/log/todo"
            log_database = "FILE"
            log_database_level = "debug"
            "#,
        );
        assert_eq!(cfg.log_path(), PathBuf::from("/var/log/todo"));
        assert_eq!(cfg.database_output().unwrap(), LogOutput::File);
        assert_eq!(cfg.database_severity(), Ok(Severity::Debug));
    }

    #[test]
    fn test_disabled_turns_outputs_off() {
        let cfg = from_toml(
            r#"
            log_enabled = false
            log_standard = "stderr"
            log_database = "stdout"
            "#,
        );
        assert_eq!(cfg.standard_output().unwrap(), LogOutput::Off);
        assert_eq!(cfg.database_output().unwrap(), LogOutput::Off);
    }

    #[test]
    fn test_bad_values_surface_as_errors() {
        let cfg = from_toml(
            r#"
            log_database = "syslog"
            log_database_level = "loud"
            "#,
        );
        assert!(cfg.database_output().is_err());
        assert!(cfg.database_severity().is_err());
    }
}
