//! Masking of field values in `key=value;` log lines.
//!
//! Redaction is a pure string transformation. It does not parse the line into
//! segments; each field is matched as the literal text `field=` followed by the
//! shortest run of characters up to the next separator.

use std::borrow::Cow;

use regex::{NoExpand, Regex};

use crate::error::Result;

/// Fields treated as personally identifiable information by default.
pub const PII_FIELDS: [&str; 5] = ["name", "email", "phone", "ssn", "password"];

/// Placeholder written in place of a masked value.
pub const REDACTION: &str = "***";

/// Separator between consecutive `field=value` segments.
pub const SEPARATOR: char = ';';

/// One compiled `field=...;` pattern and its replacement text.
#[derive(Clone, Debug)]
struct FieldRule {
    field: String,
    pattern: Regex,
    replacement: String,
}

/// A reusable redactor for a fixed set of fields.
///
/// Patterns are compiled once in [`Redactor::new`], so a single instance can
/// be shared by a formatter for the lifetime of the process.
#[derive(Clone, Debug)]
pub struct Redactor {
    rules: Vec<FieldRule>,
}

impl Redactor {
    /// Builds a redactor for `fields`, replacing their values with `redaction`.
    ///
    /// Field names and the separator are matched literally. The replacement is
    /// inserted verbatim, so `$` in `redaction` has no special meaning.
    pub fn new<I, S>(fields: I, redaction: &str, separator: char) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sep = regex::escape(separator.encode_utf8(&mut [0; 4]));
        let rules = fields
            .into_iter()
            .map(|field| -> Result<FieldRule> {
                let field = field.as_ref();
                let pattern = Regex::new(&format!("(?s){}=.*?{sep}", regex::escape(field)))?;
                Ok(FieldRule {
                    field: field.to_owned(),
                    pattern,
                    replacement: format!("{field}={redaction}{separator}"),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Builds a redactor for [`PII_FIELDS`] with [`REDACTION`] and [`SEPARATOR`].
    pub fn pii() -> Result<Self> {
        Self::new(PII_FIELDS, REDACTION, SEPARATOR)
    }

    /// Returns the configured field names in application order.
    pub fn fields(&self) -> impl Iterator<Item = &str> + '_ {
        self.rules.iter().map(|rule| rule.field.as_str())
    }

    /// Masks every configured field in `line`.
    ///
    /// Fields are applied in order and each one replaces all of its
    /// occurrences. Returns the input unchanged (and borrowed) when no field
    /// matched.
    pub fn redact<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let mut line = Cow::Borrowed(line);
        for rule in &self.rules {
            let replaced = match rule.pattern.replace_all(&line, NoExpand(&rule.replacement)) {
                Cow::Borrowed(_) => None,
                Cow::Owned(replaced) => Some(replaced),
            };
            if let Some(replaced) = replaced {
                line = Cow::Owned(replaced);
            }
        }
        line
    }
}

/// Replaces the value of each field in `fields` with `redaction`.
///
/// This is the one-shot form of [`Redactor::redact`]. It never fails: fields
/// that are absent, or that have no separator after them, are left as they
/// are. If a field pattern cannot be compiled the whole message is replaced by
/// `redaction`, so the clear text is never returned.
pub fn filter_datum<S: AsRef<str>>(
    fields: &[S],
    redaction: &str,
    message: &str,
    separator: char,
) -> String {
    match Redactor::new(fields, redaction, separator) {
        Ok(redactor) => redactor.redact(message).into_owned(),
        Err(_) => redaction.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::{filter_datum, Redactor, PII_FIELDS, REDACTION, SEPARATOR};

    #[test]
    fn masks_every_listed_field() {
        let out = filter_datum(&["name", "email"], "***", "name=Alice;email=a@b.com;", ';');
        assert_eq!(out, "name=***;email=***;");
    }

    #[test]
    fn custom_token_leaves_other_fields() {
        let out = filter_datum(&["password"], "xxx", "password=secret;user=bob;", ';');
        assert_eq!(out, "password=xxx;user=bob;");
    }

    #[test]
    fn absent_field_is_a_no_op() {
        let line = "name=Bob;email=bob@x.com;";
        assert_eq!(filter_datum(&["ssn"], "***", line, ';'), line);
    }

    #[test]
    fn redacting_twice_is_idempotent() {
        let once = filter_datum(&PII_FIELDS, REDACTION, "name=Bob;ip=1.2.3.4;", SEPARATOR);
        let twice = filter_datum(&PII_FIELDS, REDACTION, &once, SEPARATOR);
        assert_eq!(once, "name=***;ip=1.2.3.4;");
        assert_eq!(twice, once);
    }

    #[test]
    fn replaces_all_occurrences_of_a_field() {
        let out = filter_datum(&["email"], "***", "email=a@x;ip=1;email=b@x;", ';');
        assert_eq!(out, "email=***;ip=1;email=***;");
    }

    #[test]
    fn keeps_segment_order_and_plain_text() {
        let line = "ip=10.0.0.1;name=Bob;last_login=2019-11-14;phone=555;";
        let out = filter_datum(&["phone", "name"], "***", line, ';');
        assert_eq!(out, "ip=10.0.0.1;name=***;last_login=2019-11-14;phone=***;");
    }

    #[test]
    fn field_without_separator_is_untouched() {
        assert_eq!(filter_datum(&["name"], "***", "name=Bob", ';'), "name=Bob");
    }

    #[test]
    fn value_containing_separator_is_masked_up_to_first_separator() {
        let out = filter_datum(&["password"], "***", "password=a;b;user=x;", ';');
        assert_eq!(out, "password=***;b;user=x;");
    }

    #[test]
    fn empty_value_is_masked_without_swallowing_next_segment() {
        let out = filter_datum(&["name"], "***", "name=;email=e;", ';');
        assert_eq!(out, "name=***;email=e;");
    }

    #[test]
    fn field_name_matches_as_substring() {
        // `name` is not anchored to a segment start.
        let out = filter_datum(&["name"], "***", "username=bob;", ';');
        assert_eq!(out, "username=***;");
    }

    #[test]
    fn token_is_inserted_literally() {
        let out = filter_datum(&["ssn"], "$1", "ssn=123;", ';');
        assert_eq!(out, "ssn=$1;");
    }

    #[test]
    fn field_names_are_not_patterns() {
        let line = "aXb=1;a.b=2;";
        assert_eq!(filter_datum(&["a.b"], "***", line, ';'), "aXb=1;a.b=***;");
    }

    #[test]
    fn other_separators_are_supported() {
        let out = filter_datum(&["email"], "***", "email=a@b|name=x|", '|');
        assert_eq!(out, "email=***|name=x|");
    }

    #[test]
    fn multiline_values_are_masked() {
        let out = filter_datum(&["password"], "***", "password=line1\nline2;x=1;", ';');
        assert_eq!(out, "password=***;x=1;");
    }

    #[test]
    fn unmatched_line_stays_borrowed() {
        let redactor = Redactor::pii().unwrap();
        let line = "ip=1.2.3.4;";
        assert!(matches!(redactor.redact(line), Cow::Borrowed(l) if l == line));
    }

    #[test]
    fn redactor_reports_fields_in_order() {
        let redactor = Redactor::new(["ssn", "email"], "***", ';').unwrap();
        assert_eq!(redactor.fields().collect::<Vec<_>>(), ["ssn", "email"]);
    }

    #[test]
    fn empty_field_list_changes_nothing() {
        let fields: [&str; 0] = [];
        assert_eq!(filter_datum(&fields, "***", "name=Bob;", ';'), "name=Bob;");
    }
}
