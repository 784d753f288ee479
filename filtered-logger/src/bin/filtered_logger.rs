//! Prints every row of the `users` table with PII fields masked.

use anyhow::Context;
use filtered_logger::{fetch_users, get_db, slog::get_console_logger, DbConfig, LogRow, User};
use slog::info;

fn main() -> anyhow::Result<()> {
    let config = DbConfig::from_env().context("reading database configuration")?;
    let conn = get_db(&config)
        .with_context(|| format!("opening database {}", config.database.display()))?;
    let logger = get_console_logger(User::PII_FIELDS).context("building user_data logger")?;

    fetch_users(&conn, |user| {
        info!(logger, "{}", user.to_log_line());
    })
    .context("reading users")?;

    Ok(())
}
