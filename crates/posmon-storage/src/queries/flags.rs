// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hysteresis warning flags. A missing row means the warning is armed.

use posmon_core::{PosmonError, WarningKind};
use rusqlite::{params, OptionalExtension};

use crate::database::Database;

pub async fn get_flag(db: &Database, entity_id: i64, kind: WarningKind) -> Result<bool, PosmonError> {
    let kind = kind.as_str();
    let armed = db
        .connection()
        .call(move |conn| {
            conn.query_row(
                "SELECT armed FROM warning_flags WHERE entity_id = ?1 AND kind = ?2",
                params![entity_id, kind],
                |row| row.get::<_, bool>(0),
            )
            .optional()
        })
        .await
        .map_err(crate::database::map_tr_err)?;
    Ok(armed.unwrap_or(true))
}

pub async fn set_flag(
    db: &Database,
    entity_id: i64,
    kind: WarningKind,
    armed: bool,
) -> Result<(), PosmonError> {
    let kind = kind.as_str();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO warning_flags (entity_id, kind, armed) VALUES (?1, ?2, ?3)
                 ON CONFLICT(entity_id, kind) DO UPDATE SET
                     armed = excluded.armed,
                     updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
                params![entity_id, kind, armed],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Delete every flag row. Returns how many rows were removed.
pub async fn clear_all(db: &Database) -> Result<u64, PosmonError> {
    let removed = db
        .connection()
        .call(|conn| conn.execute("DELETE FROM warning_flags", []))
        .await
        .map_err(crate::database::map_tr_err)?;
    Ok(removed as u64)
}
