// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All writes are serialized through tokio-rusqlite's single background thread.
//! Do NOT create additional Connection instances for writes.

use std::path::Path;
use std::time::Duration;

use posmon_core::PosmonError;
use tracing::debug;

use crate::migrations;

/// Lock wait before SQLite gives up with `SQLITE_BUSY`.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Map a tokio-rusqlite error into the storage variant of [`PosmonError`].
pub fn map_tr_err(e: tokio_rusqlite::Error<rusqlite::Error>) -> PosmonError {
    PosmonError::Storage {
        source: Box::new(e),
    }
}

/// Handle to the posmon state database.
pub struct Database {
    conn: tokio_rusqlite::Connection,
}

impl Database {
    /// Open (or create) the database at `path`, apply PRAGMAs and run pending
    /// migrations. Parent directories are created as needed.
    pub async fn open(path: &str, wal_mode: bool) -> Result<Self, PosmonError> {
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| PosmonError::Storage {
                source: Box::new(e),
            })?;
        }

        let conn = tokio_rusqlite::Connection::open(path)
            .await
            .map_err(|e| PosmonError::Storage {
                source: Box::new(e),
            })?;

        conn.call(move |conn| -> Result<(), PosmonError> {
            configure(conn, wal_mode).map_err(|e| PosmonError::Storage {
                source: Box::new(e),
            })?;
            migrations::run_migrations(conn)
        })
        .await
        .map_err(|e| match e {
            tokio_rusqlite::Error::Error(e) => e,
            other => PosmonError::Storage {
                source: Box::new(other),
            },
        })?;

        debug!(path, wal_mode, "database opened");
        Ok(Self { conn })
    }

    /// The underlying single-writer connection.
    pub fn connection(&self) -> &tokio_rusqlite::Connection {
        &self.conn
    }

    /// Checkpoint the WAL and close the connection.
    pub async fn close(self) -> Result<(), PosmonError> {
        checkpoint(&self.conn).await?;
        self.conn.close().await.map_err(map_tr_err)
    }
}

fn configure(conn: &mut rusqlite::Connection, wal_mode: bool) -> Result<(), rusqlite::Error> {
    if wal_mode {
        let mode: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        debug!(journal_mode = %mode, "journal mode set");
    }
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    Ok(())
}

/// Flush the WAL into the main database file.
pub(crate) async fn checkpoint(conn: &tokio_rusqlite::Connection) -> Result<(), PosmonError> {
    conn.call(|conn| -> Result<(), rusqlite::Error> {
        conn.query_row("PRAGMA wal_checkpoint(TRUNCATE);", [], |_| Ok(()))?;
        Ok(())
    })
    .await
    .map_err(map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn open_creates_file_and_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/state/posmon.db");
        let db = Database::open(path.to_str().unwrap(), true).await.unwrap();
        assert!(path.exists());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn migrations_create_state_tables() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tables.db");
        let db = Database::open(path.to_str().unwrap(), false).await.unwrap();

        let tables: Vec<String> = db
            .connection()
            .call(|conn| -> Result<Vec<String>, rusqlite::Error> {
                let mut stmt = conn.prepare(
                    "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
                )?;
                let rows = stmt.query_map([], |row| row.get(0))?;
                rows.collect()
            })
            .await
            .unwrap();

        for table in ["name_cache", "status_cache", "stream_cursors", "warning_flags"] {
            assert!(tables.iter().any(|t| t == table), "missing table {table}");
        }
    }

    #[tokio::test]
    async fn reopening_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reopen.db");
        let p = path.to_str().unwrap();
        Database::open(p, true).await.unwrap().close().await.unwrap();
        Database::open(p, true).await.unwrap().close().await.unwrap();
    }
}
