// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed key-value interface over the persistent state store.

use async_trait::async_trait;

use crate::error::PosmonError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{EntityCategory, Stream, WarningKind};

/// Cursor value for a stream that has never been written.
pub const INITIAL_CURSOR: i64 = 1;

/// Persistent state shared by every change detector.
///
/// Implementations must provide atomic per-key get/set; detectors for
/// different streams call into the store concurrently.
#[async_trait]
pub trait StateStore: PluginAdapter {
    /// Initializes the backend (migrations, connection, etc.).
    async fn initialize(&self) -> Result<(), PosmonError>;

    /// Flushes pending writes and releases connections.
    async fn close(&self) -> Result<(), PosmonError>;

    /// Highest id already reported for `stream`, or [`INITIAL_CURSOR`].
    async fn cursor(&self, stream: Stream) -> Result<i64, PosmonError>;

    /// Stores a new cursor. A value below the stored one is ignored, so the
    /// cursor never moves backwards.
    async fn set_cursor(&self, stream: Stream, value: i64) -> Result<(), PosmonError>;

    /// Whether the warning for (`entity_id`, `kind`) is armed. Absent means armed.
    async fn flag(&self, entity_id: i64, kind: WarningKind) -> Result<bool, PosmonError>;

    async fn set_flag(
        &self,
        entity_id: i64,
        kind: WarningKind,
        armed: bool,
    ) -> Result<(), PosmonError>;

    /// Removes every stored warning flag, re-arming all warnings.
    async fn clear_all_flags(&self) -> Result<u64, PosmonError>;

    async fn cached_name(
        &self,
        category: EntityCategory,
        id: i64,
    ) -> Result<Option<String>, PosmonError>;

    async fn set_cached_name(
        &self,
        category: EntityCategory,
        id: i64,
        name: &str,
    ) -> Result<(), PosmonError>;

    /// Last observed upstream status of a contract or job.
    async fn cached_status(&self, stream: Stream, id: i64) -> Result<Option<String>, PosmonError>;

    async fn set_cached_status(
        &self,
        stream: Stream,
        id: i64,
        status: &str,
    ) -> Result<(), PosmonError>;
}
