// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness wiring mock upstreams to a real temp SQLite state store.

use std::sync::Arc;

use posmon_config::model::{PosmonConfig, StorageConfig};
use posmon_core::{EntityCategory, PosmonError, StateStore};
use posmon_seat::IdentityResolver;
use posmon_storage::SqliteStateStore;

use crate::fixtures;
use crate::mock_lookup::MockNameLookup;
use crate::mock_seat::MockSeatApi;
use crate::mock_sink::MockSink;

/// Corporation id the harness configures for the activity feeds.
pub const CORPORATION_ID: i64 = 98000001;

/// A complete detector environment: mock SeAT, mock ESI, capturing sink, and
/// an initialized SQLite store in a temp directory.
pub struct TestHarness {
    pub seat: Arc<MockSeatApi>,
    pub names: Arc<MockNameLookup>,
    pub sink: Arc<MockSink>,
    pub store: Arc<SqliteStateStore>,
    pub resolver: IdentityResolver,
    /// Defaults with [`CORPORATION_ID`] and the temp database path filled in.
    pub config: PosmonConfig,
    _temp_dir: tempfile::TempDir,
}

impl TestHarness {
    pub async fn new() -> Result<Self, PosmonError> {
        let temp_dir =
            tempfile::TempDir::new().map_err(|e| PosmonError::Storage { source: e.into() })?;
        let db_path = temp_dir.path().join("posmon.db");

        let storage = StorageConfig {
            database_path: db_path.to_string_lossy().to_string(),
            wal_mode: true,
        };
        let store = Arc::new(SqliteStateStore::new(storage.clone()));
        store.initialize().await?;

        let names = Arc::new(MockNameLookup::new());
        names
            .insert(EntityCategory::Station, fixtures::JITA_STATION, "Jita IV - Moon 4 - Caldari Navy Assembly Plant")
            .await;
        names
            .insert(EntityCategory::Station, fixtures::AMARR_STATION, "Amarr VIII (Oris) - Emperor Family Academy")
            .await;
        names
            .insert(EntityCategory::Pilot, fixtures::INSTALLER, "Alice Builder")
            .await;
        names
            .insert(EntityCategory::Item, fixtures::BLUEPRINT, "Rifter Blueprint")
            .await;

        let resolver = IdentityResolver::new(store.clone(), names.clone());

        let mut config = PosmonConfig::default();
        config.seat.corporation_id = Some(CORPORATION_ID);
        config.storage = storage;

        Ok(Self {
            seat: Arc::new(MockSeatApi::new()),
            names,
            sink: Arc::new(MockSink::new()),
            store,
            resolver,
            config,
            _temp_dir: temp_dir,
        })
    }

    /// Path of the temp database.
    pub fn database_path(&self) -> &str {
        &self.config.storage.database_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use posmon_core::{Stream, INITIAL_CURSOR};

    #[tokio::test]
    async fn harness_store_is_ready() {
        let harness = TestHarness::new().await.unwrap();
        assert_eq!(
            harness.store.cursor(Stream::Trades).await.unwrap(),
            INITIAL_CURSOR
        );
        assert!(std::path::Path::new(harness.database_path()).exists());
    }

    #[tokio::test]
    async fn resolver_uses_mock_names() {
        let harness = TestHarness::new().await.unwrap();
        assert_eq!(
            harness
                .resolver
                .resolve(EntityCategory::Pilot, fixtures::INSTALLER)
                .await,
            "Alice Builder"
        );
        assert_eq!(harness.resolver.resolve(EntityCategory::Pilot, 1).await, "unknown");
    }
}
