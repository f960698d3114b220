use rusqlite::Connection;
use std::cell::RefCell;
use std::fs;
use std::time::Duration;
use tracing::{debug, info};

use crate::errors::ServerError;

// Thread-local connection slot, tagged with the path it was opened for.
// Each astra worker keeps one open connection.
thread_local! {
    static DB_CONN: RefCell<Option<(String, Connection)>> = const { RefCell::new(None) };
}

#[derive(Clone, Debug)]
pub struct Database {
    path: String,
}

impl Database {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    fn open(&self) -> Result<Connection, ServerError> {
        let conn = Connection::open(&self.path)
            .map_err(|e| ServerError::DbError(format!("Open DB failed: {e}")))?;
        conn.busy_timeout(Duration::from_secs(5))
            .map_err(|e| ServerError::DbError(format!("Set busy timeout failed: {e}")))?;
        debug!(path = %self.path, "opened sqlite connection");
        Ok(conn)
    }

    /// Borrows this thread's connection for the duration of `f`.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut Connection) -> Result<T, ServerError>,
    {
        DB_CONN
            .try_with(|cell| {
                let mut slot = cell.borrow_mut();
                let stale = !matches!(slot.as_ref(), Some((path, _)) if *path == self.path);
                if stale {
                    *slot = Some((self.path.clone(), self.open()?));
                }
                let Some((_, conn)) = slot.as_mut() else {
                    return Err(ServerError::InternalError);
                };
                f(conn)
            })
            .map_err(|_| ServerError::InternalError)?
    }
}

/// Apply a SQL batch file (schema or seed data).
pub fn init_db(db: &Database, schema_path: &str) -> Result<(), ServerError> {
    let schema_sql = fs::read_to_string(schema_path)
        .map_err(|e| ServerError::DbError(format!("Failed to read SQL file {schema_path}: {e}")))?;

    db.with_conn(|conn| {
        conn.execute_batch(&schema_sql)
            .map_err(|e| ServerError::DbError(format!("Failed to apply {schema_path}: {e}")))
    })?;

    info!(path = schema_path, db = db.path(), "applied SQL batch");
    Ok(())
}
