//! Logging of personal-data rows with PII fields masked.
//!
//! This crate separates:
//! - **Redaction**: masking the values of known fields in a `key=value;` line.
//! - **Formatting**: rendering a log record through a fixed template after the
//!   message has been redacted.
//!
//! Key rules:
//! - A field is masked wherever `field=<value>;` appears in the line, not only
//!   at its first occurrence.
//! - Masking stops at the first separator. Values that themselves contain `;`
//!   are only partially masked.
//! - The unredacted message never reaches the renderer or the sink.
//!
//! What this crate does:
//! - defines [`filter_datum`] and the reusable [`Redactor`]
//! - defines [`RedactingFormatter`] over any [`RecordRenderer`]
//! - provides [`LogRow`] and `#[derive(LogRow)]` for building row lines
//! - provides integrations behind feature flags (`slog`, `sqlite`)
//!
//! What it does not do:
//! - validate row schemas
//! - emit structured key-value output

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use filtered_logger_derive::LogRow;

// Lets `#[derive(LogRow)]` refer to `::filtered_logger` from inside this crate.
#[allow(unused_extern_crates)]
extern crate self as filtered_logger;

mod config;
mod datum;
mod error;
mod format;
mod row;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "sqlite")]
mod source;
mod user;

pub use config::{DbConfig, DB_NAME_VAR};
pub use datum::{filter_datum, Redactor, PII_FIELDS, REDACTION, SEPARATOR};
pub use error::{Error, Result};
pub use format::{
    Level, LogRecord, RecordRenderer, RedactingFormatter, TemplateRenderer, DEFAULT_TAG,
    TIMESTAMP_FORMAT,
};
pub use row::{LineBuilder, LogRow};
#[cfg(feature = "sqlite")]
pub use source::{fetch_users, get_db, USERS_QUERY};
pub use user::User;
