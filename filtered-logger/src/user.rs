use crate::LogRow;

/// A row of the `users` table.
///
/// `Debug` masks the PII columns; use [`LogRow::to_log_line`] together with a
/// redacting logger to emit the row.
#[derive(Clone, Default, PartialEq, Eq, LogRow)]
pub struct User {
    #[log_row(pii)]
    pub name: String,
    #[log_row(pii)]
    pub email: String,
    #[log_row(pii)]
    pub phone: String,
    #[log_row(pii)]
    pub ssn: String,
    #[log_row(pii)]
    pub password: String,
    pub ip: String,
    pub last_login: String,
    pub user_agent: String,
}

#[cfg(feature = "sqlite")]
impl User {
    /// Reads a row selected by [`crate::USERS_QUERY`].
    ///
    /// Columns of any storage class are accepted: numbers are written in
    /// decimal, text and blobs as (lossy) UTF-8, and NULL as an empty string.
    pub(crate) fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        let text = |column: &str| row.get_ref(column).map(column_text);
        Ok(Self {
            name: text("name")?,
            email: text("email")?,
            phone: text("phone")?,
            ssn: text("ssn")?,
            password: text("password")?,
            ip: text("ip")?,
            last_login: text("last_login")?,
            user_agent: text("user_agent")?,
        })
    }
}

#[cfg(feature = "sqlite")]
fn column_text(value: rusqlite::types::ValueRef<'_>) -> String {
    use rusqlite::types::ValueRef;

    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}
