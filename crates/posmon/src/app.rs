// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Component wiring shared by `posmon serve` and the one-shot commands.

use std::sync::Arc;

use posmon_config::model::PosmonConfig;
use posmon_core::{NotificationSink, PluginAdapter, PosmonError, StateStore};
use posmon_seat::{EsiClient, IdentityResolver, SeatClient};
use posmon_storage::SqliteStateStore;
use posmon_watch::{WatchSettings, Watcher};
use tracing::{info, warn};

/// The initialized state store, sink and the watcher built on them.
pub struct App {
    pub watcher: Arc<Watcher>,
    store: Arc<SqliteStateStore>,
    sink: Arc<dyn NotificationSink>,
}

impl App {
    /// Builds every component from `config` and opens the state store.
    ///
    /// HTTP clients and the sink are built before the database is touched,
    /// so a missing token fails without creating the database file.
    pub async fn build(config: &PosmonConfig) -> Result<Self, PosmonError> {
        let settings = WatchSettings::from_config(config)?;
        let seat = Arc::new(SeatClient::new(&config.seat)?);
        let esi = Arc::new(EsiClient::new(&config.esi)?);
        let sink = posmon_notify::build_sink(&config.sink)?;

        let store = Arc::new(SqliteStateStore::new(config.storage.clone()));
        store.initialize().await?;

        let resolver = IdentityResolver::new(store.clone(), esi);
        let watcher = Watcher::new(seat, store.clone(), sink.clone(), resolver, settings);
        info!(
            store = store.name(),
            sink = sink.name(),
            corporation_id = watcher.settings().corporation_id,
            "components initialized"
        );

        Ok(Self {
            watcher: Arc::new(watcher),
            store,
            sink,
        })
    }

    /// Shuts the sink down and checkpoints the state store. Failures are
    /// logged; there is nothing left to recover at this point.
    pub async fn shutdown(&self) {
        if let Err(e) = self.sink.shutdown().await {
            warn!(error = %e, "sink shutdown failed");
        }
        if let Err(e) = self.store.close().await {
            warn!(error = %e, "state store close failed");
        }
    }
}
