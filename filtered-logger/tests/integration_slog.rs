//! Integration tests for the slog module.
//!
//! These tests verify that:
//! - the drain writes one templated, redacted line per record
//! - records below the minimum level are dropped
//! - key-value pairs attached to records are not written

#![cfg(feature = "slog")]

use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
};

use filtered_logger::{
    slog::{get_logger, RedactingDrain, USER_DATA_LOGGER},
    Level, RedactingFormatter, TemplateRenderer, PII_FIELDS,
};
use slog::{o, Drain, Logger};

/// A sink that keeps everything written to it for inspection.
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap();
        String::from_utf8(bytes.clone())
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Splits `[TAG] name LEVEL date time: message` into (prefix, message).
fn split_line(line: &str) -> (&str, &str) {
    line.split_once(": ").expect("line should contain a message")
}

#[test]
fn test_user_data_logger_masks_pii() {
    let sink = SharedBuffer::default();
    let logger = get_logger(PII_FIELDS, sink.clone()).unwrap();

    slog::info!(
        logger,
        "name=Bob;email=bob@x.com;phone=555;ssn=123;password=pw;ip=1.2.3.4;"
    );

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    let (prefix, message) = split_line(&lines[0]);
    assert!(prefix.starts_with(&format!("[HOLBERTON] {USER_DATA_LOGGER} INFO ")));
    assert_eq!(
        message,
        "name=***;email=***;phone=***;ssn=***;password=***;ip=1.2.3.4;"
    );
}

#[test]
fn test_formatted_arguments_are_redacted() {
    let sink = SharedBuffer::default();
    let logger = get_logger(["email"], sink.clone()).unwrap();

    let email = "carol@example.com";
    slog::warn!(logger, "email={};plan={};", email, "pro");

    let lines = sink.lines();
    assert!(lines[0].contains(" user_data WARNING "));
    assert!(lines[0].ends_with(": email=***;plan=pro;"));
    assert!(!lines[0].contains(email));
}

#[test]
fn test_debug_records_are_dropped_by_default() {
    let sink = SharedBuffer::default();
    let logger = get_logger(PII_FIELDS, sink.clone()).unwrap();

    slog::debug!(logger, "ssn=1;");
    slog::error!(logger, "ssn=2;");

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(" ERROR "));
    assert!(lines[0].ends_with(": ssn=***;"));
}

#[test]
fn test_custom_drain_level_and_tag() {
    let sink = SharedBuffer::default();
    let formatter =
        RedactingFormatter::with_renderer(["ssn"], TemplateRenderer::with_tag("AUDIT")).unwrap();
    let drain = RedactingDrain::new("audit", formatter, sink.clone()).with_level(Level::Error);
    let logger = Logger::root(drain.fuse(), o!());

    slog::warn!(logger, "ssn=123;");
    slog::crit!(logger, "ssn=456;");

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("[AUDIT] audit CRITICAL "));
    assert!(lines[0].ends_with(": ssn=***;"));
}

#[test]
fn test_key_values_are_not_written() {
    let sink = SharedBuffer::default();
    let logger = get_logger(PII_FIELDS, sink.clone())
        .unwrap()
        .new(o!("email" => "leak@example.com"));

    slog::info!(logger, "name=Dan;"; "ssn" => "999-99-9999");

    let lines = sink.lines();
    assert!(lines[0].ends_with(": name=***;"));
    assert!(!lines[0].contains("leak@example.com"));
    assert!(!lines[0].contains("999-99-9999"));
}
