use std::path::PathBuf;

use rusqlite::Connection;

mod contacts;
mod error;
mod schema;

pub use error::{StoreError, UniqueField};

/// Handle to the contact store. Opened once at process start, used for a
/// single command, and explicitly closed before exit; there is no shared
/// global connection. Cross-process safety is whatever SQLite's own file
/// locking provides.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the store described by a connection string, creating the file
    /// and schema as needed. Accepts `sqlite:///path`, a bare path, or
    /// `:memory:`.
    pub fn open(db_url: &str) -> Result<Self, StoreError> {
        match db_path(db_url) {
            Some(path) => Self::open_at(path),
            None => Self::open_memory(),
        }
    }

    pub fn open_at(path: PathBuf) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| StoreError::Storage(e.into()))?;
            }
        }

        let conn = Connection::open(&path)?;
        let db = Self { conn };
        db.ensure_schema()?;
        Ok(db)
    }

    /// Open an in-memory store for testing
    pub fn open_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.ensure_schema()?;
        Ok(db)
    }

    /// Release the connection. Every exit path is expected to get here,
    /// success or failure.
    pub fn close(self) -> Result<(), StoreError> {
        self.conn.close().map_err(|(_conn, err)| err.into())
    }

    /// Safe to run against an already-initialized store.
    fn ensure_schema(&self) -> Result<(), StoreError> {
        self.conn
            .execute_batch(&format!("BEGIN; {} COMMIT;", schema::SCHEMA))?;
        Ok(())
    }
}

/// Extract a filesystem path from a connection string. Returns `None` for
/// in-memory stores.
fn db_path(db_url: &str) -> Option<PathBuf> {
    let trimmed = db_url.trim();
    let path = trimmed
        .strip_prefix("sqlite:///")
        .or_else(|| trimmed.strip_prefix("sqlite://"))
        .unwrap_or(trimmed);

    if path.is_empty() || path == ":memory:" {
        None
    } else {
        Some(PathBuf::from(path))
    }
}
