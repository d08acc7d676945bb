// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Name cache and status cache.

use posmon_core::{EntityCategory, PosmonError, Stream};
use rusqlite::{params, OptionalExtension};

use crate::database::Database;

pub async fn get_name(
    db: &Database,
    category: EntityCategory,
    id: i64,
) -> Result<Option<String>, PosmonError> {
    let category = category.as_str();
    db.connection()
        .call(move |conn| {
            conn.query_row(
                "SELECT name FROM name_cache WHERE category = ?1 AND id = ?2",
                params![category, id],
                |row| row.get(0),
            )
            .optional()
        })
        .await
        .map_err(crate::database::map_tr_err)
}

pub async fn put_name(
    db: &Database,
    category: EntityCategory,
    id: i64,
    name: &str,
) -> Result<(), PosmonError> {
    let category = category.as_str();
    let name = name.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO name_cache (category, id, name) VALUES (?1, ?2, ?3)
                 ON CONFLICT(category, id) DO UPDATE SET name = excluded.name",
                params![category, id, name],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

pub async fn get_status(db: &Database, stream: Stream, id: i64) -> Result<Option<String>, PosmonError> {
    let stream = stream.as_str();
    db.connection()
        .call(move |conn| {
            conn.query_row(
                "SELECT status FROM status_cache WHERE stream = ?1 AND id = ?2",
                params![stream, id],
                |row| row.get(0),
            )
            .optional()
        })
        .await
        .map_err(crate::database::map_tr_err)
}

pub async fn put_status(
    db: &Database,
    stream: Stream,
    id: i64,
    status: &str,
) -> Result<(), PosmonError> {
    let stream = stream.as_str();
    let status = status.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO status_cache (stream, id, status) VALUES (?1, ?2, ?3)
                 ON CONFLICT(stream, id) DO UPDATE SET
                     status = excluded.status,
                     updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
                params![stream, id, status],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}
