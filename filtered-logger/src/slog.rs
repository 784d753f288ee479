//! Adapters for emitting redacted lines through `slog`.
//!
//! This module connects [`crate::RedactingFormatter`] with `slog` by providing
//! a `slog::Drain` that renders each record through the formatter and writes
//! the result to a console-style sink.
//!
//! It is responsible for:
//! - Ensuring the written text comes from the redacted message, never from
//!   `record.msg()` directly.
//! - Dropping records below the configured minimum level.
//!
//! It ignores the key-value pairs attached to records and loggers; output is
//! always the single templated line.

use std::{
    io::{self, Write},
    sync::Mutex,
};

use chrono::Local;
use slog::{o, Drain, Logger, OwnedKVList, Record};

use crate::{
    error::Result,
    format::{Level, LogRecord, RecordRenderer, RedactingFormatter, TemplateRenderer},
};

/// Name given to the logger built by [`get_logger`].
pub const USER_DATA_LOGGER: &str = "user_data";

impl From<slog::Level> for Level {
    fn from(level: slog::Level) -> Self {
        match level {
            slog::Level::Critical => Level::Critical,
            slog::Level::Error => Level::Error,
            slog::Level::Warning => Level::Warning,
            slog::Level::Info => Level::Info,
            slog::Level::Debug | slog::Level::Trace => Level::Debug,
        }
    }
}

/// A `slog::Drain` that writes one redacted, templated line per record.
pub struct RedactingDrain<W, R = TemplateRenderer> {
    name: String,
    level: Level,
    formatter: RedactingFormatter<R>,
    sink: Mutex<W>,
}

impl<W: Write, R: RecordRenderer> RedactingDrain<W, R> {
    /// Creates a drain that accepts records at [`Level::Info`] and above.
    pub fn new(name: impl Into<String>, formatter: RedactingFormatter<R>, sink: W) -> Self {
        Self {
            name: name.into(),
            level: Level::Info,
            formatter,
            sink: Mutex::new(sink),
        }
    }

    /// Sets the minimum level written to the sink.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }
}

impl<W: Write, R: RecordRenderer> Drain for RedactingDrain<W, R> {
    type Ok = ();
    type Err = io::Error;

    fn log(&self, record: &Record<'_>, _values: &OwnedKVList) -> io::Result<()> {
        let level = Level::from(record.level());
        if level < self.level {
            return Ok(());
        }
        let entry = LogRecord::new(&self.name, level, Local::now(), record.msg().to_string());
        let line = self.formatter.format(&entry);
        let mut sink = self
            .sink
            .lock()
            .map_err(|_| io::Error::other("log sink lock poisoned"))?;
        writeln!(sink, "{line}")?;
        sink.flush()
    }
}

/// Builds the `user_data` logger, masking `fields` and writing to `sink`.
///
/// The drain is fused: a failing sink panics rather than silently losing lines.
pub fn get_logger<I, S, W>(fields: I, sink: W) -> Result<Logger>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write + Send + 'static,
{
    let formatter = RedactingFormatter::new(fields)?;
    let drain = RedactingDrain::new(USER_DATA_LOGGER, formatter, sink);
    Ok(Logger::root(drain.fuse(), o!()))
}

/// [`get_logger`] writing to stderr.
pub fn get_console_logger<I, S>(fields: I) -> Result<Logger>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    get_logger(fields, io::stderr())
}

#[cfg(test)]
mod tests {
    use super::Level;

    #[test]
    fn slog_levels_map_to_record_levels() {
        assert_eq!(Level::from(slog::Level::Warning), Level::Warning);
        assert_eq!(Level::from(slog::Level::Trace), Level::Debug);
        assert_eq!(Level::from(slog::Level::Critical), Level::Critical);
    }
}
