// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-stream monotonic cursors.

use posmon_core::{PosmonError, Stream, INITIAL_CURSOR};
use rusqlite::{params, OptionalExtension};

use crate::database::Database;

/// Read the cursor for `stream`, falling back to [`INITIAL_CURSOR`].
pub async fn get_cursor(db: &Database, stream: Stream) -> Result<i64, PosmonError> {
    let key = stream.as_str();
    let stored = db
        .connection()
        .call(move |conn| {
            conn.query_row(
                "SELECT last_id FROM stream_cursors WHERE stream = ?1",
                params![key],
                |row| row.get::<_, i64>(0),
            )
            .optional()
        })
        .await
        .map_err(crate::database::map_tr_err)?;
    Ok(stored.unwrap_or(INITIAL_CURSOR))
}

/// Upsert the cursor, keeping whichever of the stored and new value is larger.
pub async fn advance_cursor(db: &Database, stream: Stream, value: i64) -> Result<(), PosmonError> {
    let key = stream.as_str();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO stream_cursors (stream, last_id) VALUES (?1, ?2)
                 ON CONFLICT(stream) DO UPDATE SET
                     last_id = MAX(last_id, excluded.last_id),
                     updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
                params![key, value],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}
