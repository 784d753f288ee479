//! SQLite source of `users` rows.

use rusqlite::{Connection, OpenFlags};

use crate::{config::DbConfig, error::Result, user::User};

/// Query used by [`fetch_users`]. Column names match [`User`]'s fields.
pub const USERS_QUERY: &str =
    "SELECT name, email, phone, ssn, password, ip, last_login, user_agent FROM users;";

/// Opens the configured database read-only.
pub fn get_db(config: &DbConfig) -> Result<Connection> {
    let conn = Connection::open_with_flags(
        &config.database,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    Ok(conn)
}

/// Runs [`USERS_QUERY`] and hands each row to `on_row` in cursor order.
///
/// Returns the number of rows visited. Stops at the first row that fails to
/// decode.
pub fn fetch_users<F>(conn: &Connection, mut on_row: F) -> Result<usize>
where
    F: FnMut(User),
{
    let mut stmt = conn.prepare(USERS_QUERY)?;
    let rows = stmt.query_map([], User::from_row)?;
    let mut count = 0;
    for row in rows {
        on_row(row?);
        count += 1;
    }
    Ok(count)
}
