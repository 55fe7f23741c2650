use crate::libs::error::{Result, TodoError};
use rusqlite::Connection;
use std::path::Path;

/// One open SQLite connection. Dropping it closes the connection.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn open(path: &Path) -> Result<Db> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA busy_timeout = 5000;")?;

        Ok(Db { conn })
    }

    /// Opens a connection, runs `op` against it and closes it again on every
    /// exit path. Engine failures surface as [`TodoError::Storage`].
    pub fn scoped<T, F>(path: &Path, op: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T>,
    {
        let mut db = Db::open(path)?;
        let result = op(&mut db.conn);
        if let Err(TodoError::Storage(err)) = &result {
            tracing::debug!(path = %path.display(), error = %err, "storage operation failed");
        }
        result
    }
}
