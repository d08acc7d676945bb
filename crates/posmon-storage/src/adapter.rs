// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the StateStore trait.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use posmon_config::model::StorageConfig;
use posmon_core::{
    AdapterType, EntityCategory, HealthStatus, PluginAdapter, PosmonError, StateStore, Stream,
    WarningKind,
};

use crate::database::{self, Database};
use crate::queries;

/// SQLite-backed state store.
///
/// The database is opened lazily by [`StateStore::initialize`]; every other
/// call fails until then.
pub struct SqliteStateStore {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl SqliteStateStore {
    /// Create a store for the configured database path without opening it.
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    fn db(&self) -> Result<&Database, PosmonError> {
        self.db.get().ok_or_else(|| PosmonError::Storage {
            source: "state store not initialized -- call initialize() first".into(),
        })
    }
}

#[async_trait]
impl PluginAdapter for SqliteStateStore {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Storage
    }

    async fn health_check(&self) -> Result<HealthStatus, PosmonError> {
        let db = self.db()?;
        db.connection()
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.query_row("SELECT 1", [], |_| Ok(()))?;
                Ok(())
            })
            .await
            .map_err(database::map_tr_err)?;
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), PosmonError> {
        if let Some(db) = self.db.get() {
            database::checkpoint(db.connection()).await?;
            debug!("shutdown: WAL checkpoint complete");
        }
        Ok(())
    }
}

#[async_trait]
impl StateStore for SqliteStateStore {
    async fn initialize(&self) -> Result<(), PosmonError> {
        let db = Database::open(&self.config.database_path, self.config.wal_mode).await?;
        self.db.set(db).map_err(|_| PosmonError::Storage {
            source: "state store already initialized".into(),
        })?;
        debug!(path = %self.config.database_path, "SQLite state store initialized");
        Ok(())
    }

    async fn close(&self) -> Result<(), PosmonError> {
        database::checkpoint(self.db()?.connection()).await?;
        debug!("WAL checkpoint complete");
        Ok(())
    }

    async fn cursor(&self, stream: Stream) -> Result<i64, PosmonError> {
        queries::cursors::get_cursor(self.db()?, stream).await
    }

    async fn set_cursor(&self, stream: Stream, value: i64) -> Result<(), PosmonError> {
        queries::cursors::advance_cursor(self.db()?, stream, value).await
    }

    async fn flag(&self, entity_id: i64, kind: WarningKind) -> Result<bool, PosmonError> {
        queries::flags::get_flag(self.db()?, entity_id, kind).await
    }

    async fn set_flag(
        &self,
        entity_id: i64,
        kind: WarningKind,
        armed: bool,
    ) -> Result<(), PosmonError> {
        queries::flags::set_flag(self.db()?, entity_id, kind, armed).await
    }

    async fn clear_all_flags(&self) -> Result<u64, PosmonError> {
        queries::flags::clear_all(self.db()?).await
    }

    async fn cached_name(
        &self,
        category: EntityCategory,
        id: i64,
    ) -> Result<Option<String>, PosmonError> {
        queries::cache::get_name(self.db()?, category, id).await
    }

    async fn set_cached_name(
        &self,
        category: EntityCategory,
        id: i64,
        name: &str,
    ) -> Result<(), PosmonError> {
        queries::cache::put_name(self.db()?, category, id, name).await
    }

    async fn cached_status(&self, stream: Stream, id: i64) -> Result<Option<String>, PosmonError> {
        queries::cache::get_status(self.db()?, stream, id).await
    }

    async fn set_cached_status(
        &self,
        stream: Stream,
        id: i64,
        status: &str,
    ) -> Result<(), PosmonError> {
        queries::cache::put_status(self.db()?, stream, id, status).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use posmon_core::INITIAL_CURSOR;
    use tempfile::tempdir;

    fn make_config(path: &str) -> StorageConfig {
        StorageConfig {
            database_path: path.to_string(),
            wal_mode: true,
        }
    }

    #[tokio::test]
    async fn sqlite_store_implements_plugin_adapter() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let store = SqliteStateStore::new(make_config(db_path.to_str().unwrap()));

        assert_eq!(store.name(), "sqlite");
        assert_eq!(store.version(), semver::Version::new(0, 1, 0));
        assert_eq!(store.adapter_type(), AdapterType::Storage);
    }

    #[tokio::test]
    async fn initialize_twice_returns_error() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("double_init.db");
        let store = SqliteStateStore::new(make_config(db_path.to_str().unwrap()));

        store.initialize().await.unwrap();
        assert!(store.initialize().await.is_err());
    }

    #[tokio::test]
    async fn calls_fail_before_initialize() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("no_init.db");
        let store = SqliteStateStore::new(make_config(db_path.to_str().unwrap()));

        assert!(store.health_check().await.is_err());
        assert!(store.cursor(Stream::Trades).await.is_err());
    }

    #[tokio::test]
    async fn health_check_returns_healthy_when_initialized() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("health.db");
        let store = SqliteStateStore::new(make_config(db_path.to_str().unwrap()));

        store.initialize().await.unwrap();
        assert_eq!(store.health_check().await.unwrap(), HealthStatus::Healthy);
    }

    #[tokio::test]
    async fn state_survives_reopen() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("persist.db");
        let path = db_path.to_str().unwrap();

        {
            let store = SqliteStateStore::new(make_config(path));
            store.initialize().await.unwrap();
            store.set_cursor(Stream::Trades, 9001).await.unwrap();
            store.set_flag(1001, WarningKind::Fuel, false).await.unwrap();
            store
                .set_cached_name(EntityCategory::Item, 34, "Tritanium")
                .await
                .unwrap();
            store
                .set_cached_status(Stream::Industry, 55, "active")
                .await
                .unwrap();
            store.shutdown().await.unwrap();
        }

        let store = SqliteStateStore::new(make_config(path));
        store.initialize().await.unwrap();
        assert_eq!(store.cursor(Stream::Trades).await.unwrap(), 9001);
        assert_eq!(store.cursor(Stream::Contracts).await.unwrap(), INITIAL_CURSOR);
        assert!(!store.flag(1001, WarningKind::Fuel).await.unwrap());
        assert_eq!(
            store
                .cached_name(EntityCategory::Item, 34)
                .await
                .unwrap()
                .as_deref(),
            Some("Tritanium")
        );
        assert_eq!(
            store
                .cached_status(Stream::Industry, 55)
                .await
                .unwrap()
                .as_deref(),
            Some("active")
        );
    }

    #[tokio::test]
    async fn clear_all_flags_rearms_everything() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("clear.db");
        let store = SqliteStateStore::new(make_config(db_path.to_str().unwrap()));
        store.initialize().await.unwrap();

        for kind in WarningKind::ALL {
            store.set_flag(1001, kind, false).await.unwrap();
        }
        assert_eq!(store.clear_all_flags().await.unwrap(), 4);
        for kind in WarningKind::ALL {
            assert!(store.flag(1001, kind).await.unwrap());
        }
        store.close().await.unwrap();
    }
}
