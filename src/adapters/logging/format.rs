//! Line format of the database channel:
//!
//! ```text
//! 2024-01-01T10:00:00.123456789Z: WARNING	▶ [DATABASE] 01f slow query
//! ```
//!
//! The prefix up to the sequence number is coloured by severity when the
//! writer supports ANSI escapes.

use chrono::{SecondsFormat, Utc};
use std::fmt::{self, Write as _};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

const RESET: &str = "\x1b[0m";

/// [`FormatEvent`] for the database channel. Numbers events per process.
#[derive(Debug, Default)]
pub struct DatabaseFormat {
    seq: AtomicU64,
}

impl DatabaseFormat {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl<S, N> FormatEvent<S, N> for DatabaseFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let label = visitor
            .severity
            .as_deref()
            .unwrap_or_else(|| label_for_level(*event.metadata().level()));
        let ansi = writer.has_ansi_escapes();
        let line = Line {
            timestamp: &Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true),
            label,
            seq: self.next_seq(),
            message: &visitor.message,
            fields: &visitor.fields,
        };
        line.write_to(&mut writer, ansi)
    }
}

/// One rendered database log line.
pub struct Line<'a> {
    pub timestamp: &'a str,
    pub label: &'a str,
    pub seq: u64,
    pub message: &'a str,
    /// Extra `key=value` pairs, already prefixed with a space each.
    pub fields: &'a str,
}

impl Line<'_> {
    pub fn write_to(&self, w: &mut impl fmt::Write, ansi: bool) -> fmt::Result {
        let color = if ansi { color_for(self.label) } else { "" };
        let reset = if color.is_empty() { "" } else { RESET };
        writeln!(
            w,
            "{color}{}: {}\t▶ [DATABASE] {:03x}{reset} {}{}",
            self.timestamp, self.label, self.seq, self.message, self.fields
        )
    }
}

fn color_for(label: &str) -> &'static str {
    match label {
        "CRITICAL" => "\x1b[35m",
        "ERROR" => "\x1b[31m",
        "WARNING" => "\x1b[33m",
        "NOTICE" => "\x1b[32m",
        "DEBUG" => "\x1b[36m",
        _ => "",
    }
}

fn label_for_level(level: Level) -> &'static str {
    if level == Level::ERROR {
        "ERROR"
    } else if level == Level::WARN {
        "WARNING"
    } else if level == Level::INFO {
        "INFO"
    } else {
        "DEBUG"
    }
}

#[derive(Default)]
struct LineVisitor {
    severity: Option<String>,
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "severity" => self.severity = Some(value.to_string()),
            "message" => self.message.push_str(value),
            name => {
                let _ = write!(self.fields, " {name}={value}");
            }
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => {
                let _ = write!(self.message, "{value:?}");
            }
            name => {
                let _ = write!(self.fields, " {name}={value:?}");
            }
        }
    }
}
