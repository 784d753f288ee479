//! Rendering of log records through a fixed line template.
//!
//! [`RedactingFormatter`] composes the redaction step in front of any
//! [`RecordRenderer`]. The renderer only ever sees the redacted message.

use std::{borrow::Cow, fmt};

use chrono::{DateTime, Local};

use crate::{
    datum::{Redactor, REDACTION, SEPARATOR},
    error::Result,
};

/// Tag printed at the start of every rendered line.
pub const DEFAULT_TAG: &str = "HOLBERTON";

/// `chrono` format used for the timestamp column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Severity of a log record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Level {
    /// Upper-case name used in rendered lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single log event as seen by a renderer.
#[derive(Clone, Debug)]
pub struct LogRecord<'a> {
    /// Name of the logger that emitted the record.
    pub name: &'a str,
    pub level: Level,
    pub timestamp: DateTime<Local>,
    pub message: Cow<'a, str>,
}

impl<'a> LogRecord<'a> {
    pub fn new(
        name: &'a str,
        level: Level,
        timestamp: DateTime<Local>,
        message: impl Into<Cow<'a, str>>,
    ) -> Self {
        Self {
            name,
            level,
            timestamp,
            message: message.into(),
        }
    }
}

/// Renders a record to a single line of text.
pub trait RecordRenderer {
    fn render(&self, record: &LogRecord<'_>) -> String;
}

/// Renders `[TAG] <name> <LEVEL> <timestamp>: <message>`.
#[derive(Clone, Debug)]
pub struct TemplateRenderer {
    tag: Cow<'static, str>,
}

impl TemplateRenderer {
    /// Uses a custom tag in place of [`DEFAULT_TAG`].
    #[must_use]
    pub fn with_tag<T>(tag: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        Self { tag: tag.into() }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::with_tag(DEFAULT_TAG)
    }
}

impl RecordRenderer for TemplateRenderer {
    fn render(&self, record: &LogRecord<'_>) -> String {
        format!(
            "[{}] {} {} {}: {}",
            self.tag,
            record.name,
            record.level,
            record.timestamp.format(TIMESTAMP_FORMAT),
            record.message
        )
    }
}

/// Redacts a record's message, then hands the record to a renderer.
///
/// The redactor always uses [`REDACTION`] and [`SEPARATOR`]; only the field
/// set is configurable.
#[derive(Clone, Debug)]
pub struct RedactingFormatter<R = TemplateRenderer> {
    redactor: Redactor,
    renderer: R,
}

impl RedactingFormatter<TemplateRenderer> {
    /// Builds a formatter for `fields` using the default template.
    pub fn new<I, S>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_renderer(fields, TemplateRenderer::default())
    }
}

impl<R: RecordRenderer> RedactingFormatter<R> {
    pub fn with_renderer<I, S>(fields: I, renderer: R) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            redactor: Redactor::new(fields, REDACTION, SEPARATOR)?,
            renderer,
        })
    }

    pub fn redactor(&self) -> &Redactor {
        &self.redactor
    }

    /// Renders a copy of `record` whose message has been redacted.
    pub fn format(&self, record: &LogRecord<'_>) -> String {
        let redacted = LogRecord {
            message: self.redactor.redact(&record.message),
            ..*record
        };
        self.renderer.render(&redacted)
    }
}

impl<R: RecordRenderer> RecordRenderer for RedactingFormatter<R> {
    fn render(&self, record: &LogRecord<'_>) -> String {
        self.format(record)
    }
}
