//! Building `key=value;` lines from database rows.
//!
//! Rows are rendered field by field into a [`LineBuilder`]. The line is plain
//! text; masking happens later, when the line is formatted as a log record.

use std::fmt::{self, Write as _};

use crate::datum::SEPARATOR;

/// Accumulates `key=value<separator>` segments.
#[derive(Clone, Debug)]
pub struct LineBuilder {
    line: String,
    separator: char,
}

impl LineBuilder {
    pub fn new() -> Self {
        Self::with_separator(SEPARATOR)
    }

    pub fn with_separator(separator: char) -> Self {
        Self {
            line: String::new(),
            separator,
        }
    }

    /// Appends one segment. Values are written with `Display` and are not
    /// escaped.
    pub fn field<V>(&mut self, key: &str, value: &V) -> &mut Self
    where
        V: fmt::Display + ?Sized,
    {
        // Writing into a `String` cannot fail.
        let _ = write!(self.line, "{key}={value}{}", self.separator);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    pub fn finish(self) -> String {
        self.line
    }
}

impl Default for LineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A row that can be written as a `key=value;` log line.
///
/// Usually derived with `#[derive(LogRow)]`:
///
/// ```rust
/// use filtered_logger::LogRow;
///
/// #[derive(LogRow)]
/// struct Account {
///     #[log_row(pii)]
///     email: String,
///     plan: String,
/// }
///
/// let account = Account { email: "a@b.io".into(), plan: "pro".into() };
/// assert_eq!(Account::PII_FIELDS, ["email"]);
/// assert_eq!(account.to_log_line(), "email=a@b.io;plan=pro;");
/// ```
pub trait LogRow {
    /// Keys written by [`LogRow::write_fields`], in order.
    const COLUMNS: &'static [&'static str];
    /// Keys whose values must be masked before the line is logged.
    const PII_FIELDS: &'static [&'static str];

    fn write_fields(&self, line: &mut LineBuilder);

    fn to_log_line(&self) -> String {
        let mut line = LineBuilder::new();
        self.write_fields(&mut line);
        line.finish()
    }
}
