//! [`LogSink`] backed by `tracing`, emitting on the database channel.

use crate::domain::Severity;
use crate::ports::LogSink;
use tracing::Level;

/// Target of every event on the database channel.
pub const DATABASE_TARGET: &str = "todo_api::database";

/// Forwards lines to the process-wide `tracing` subscriber.
///
/// The backend severity travels as the `severity` field because `tracing`
/// has no critical or notice level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, severity: Severity, message: &str) {
        let label = severity.as_str();
        match severity {
            Severity::Critical | Severity::Error => {
                tracing::error!(target: DATABASE_TARGET, severity = label, "{message}")
            }
            Severity::Warning => {
                tracing::warn!(target: DATABASE_TARGET, severity = label, "{message}")
            }
            Severity::Notice | Severity::Info => {
                tracing::info!(target: DATABASE_TARGET, severity = label, "{message}")
            }
            Severity::Debug => {
                tracing::debug!(target: DATABASE_TARGET, severity = label, "{message}")
            }
        }
    }
}

/// `tracing` level a backend severity is emitted at.
pub fn tracing_level(severity: Severity) -> Level {
    match severity {
        Severity::Critical | Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARN,
        Severity::Notice | Severity::Info => Level::INFO,
        Severity::Debug => Level::DEBUG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_level() {
        assert_eq!(tracing_level(Severity::Critical), Level::ERROR);
        assert_eq!(tracing_level(Severity::Error), Level::ERROR);
        assert_eq!(tracing_level(Severity::Warning), Level::WARN);
        assert_eq!(tracing_level(Severity::Notice), Level::INFO);
        assert_eq!(tracing_level(Severity::Info), Level::INFO);
        assert_eq!(tracing_level(Severity::Debug), Level::DEBUG);
    }

    #[test]
    fn test_write_without_subscriber_is_silent() {
        TracingSink.write(Severity::Critical, "no subscriber installed");
    }
}
