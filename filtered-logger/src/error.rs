//! Error type for the glue around the redaction core.
//!
//! Redacting and formatting never fail on input. Errors only come from
//! building patterns, reading configuration and talking to the database.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid field pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("configuration error: {var}: {reason}")]
    Config { var: &'static str, reason: String },

    #[cfg(feature = "sqlite")]
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
