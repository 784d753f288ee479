//! Environment-driven database configuration.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Variable holding the path of the personal-data database.
pub const DB_NAME_VAR: &str = "PERSONAL_DATA_DB_NAME";

/// Where to read user rows from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DbConfig {
    /// Path of the SQLite database file.
    pub database: PathBuf,
}

impl DbConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let database = lookup(DB_NAME_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| Error::Config {
                var: DB_NAME_VAR,
                reason: "must be set to the database path".to_string(),
            })?;
        Ok(Self {
            database: PathBuf::from(database),
        })
    }
}
