//! Per-layer filter of the database channel.
//!
//! `tracing` has no critical or notice level, so filtering on the `tracing`
//! level alone would let INFO through a NOTICE minimum. This filter reads the
//! backend severity from the event's `severity` field instead.

use super::tracing_sink::{DATABASE_TARGET, tracing_level};
use crate::domain::Severity;
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Metadata};
use tracing_subscriber::layer::{Context, Filter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityFilter {
    minimum: Severity,
}

impl SeverityFilter {
    pub fn new(minimum: Severity) -> Self {
        Self { minimum }
    }

    pub fn minimum(&self) -> Severity {
        self.minimum
    }

    /// Callsite check: database target, and a `tracing` level that can carry
    /// a severity at or above the minimum.
    pub fn would_enable(&self, target: &str, level: &Level) -> bool {
        target == DATABASE_TARGET && *level <= tracing_level(self.minimum)
    }

    pub fn allows(&self, severity: Severity) -> bool {
        severity >= self.minimum
    }
}

impl<S> Filter<S> for SeverityFilter {
    fn enabled(&self, meta: &Metadata<'_>, _cx: &Context<'_, S>) -> bool {
        self.would_enable(meta.target(), meta.level())
    }

    fn event_enabled(&self, event: &Event<'_>, _cx: &Context<'_, S>) -> bool {
        let mut visitor = SeverityVisitor::default();
        event.record(&mut visitor);
        let severity = visitor
            .severity
            .unwrap_or_else(|| severity_for_level(*event.metadata().level()));
        self.allows(severity)
    }

    fn max_level_hint(&self) -> Option<LevelFilter> {
        Some(LevelFilter::from_level(tracing_level(self.minimum)))
    }
}

/// Severity of events emitted without a `severity` field.
fn severity_for_level(level: Level) -> Severity {
    if level == Level::ERROR {
        Severity::Error
    } else if level == Level::WARN {
        Severity::Warning
    } else if level == Level::INFO {
        Severity::Info
    } else {
        Severity::Debug
    }
}

#[derive(Default)]
struct SeverityVisitor {
    severity: Option<Severity>,
}

impl Visit for SeverityVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "severity" {
            self.severity = value.parse().ok();
        }
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn fmt::Debug) {}
}
