// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cache-aside resolution of entity ids to display names.

use std::sync::Arc;

use posmon_core::{EntityCategory, NameLookup, StateStore};
use tracing::{info, warn};

/// Resolves ids through the persistent name cache, falling back to a
/// [`NameLookup`] on a miss.
///
/// Resolution never fails: when the lookup fails the category sentinel
/// (`"unknown"` or `"unknown Station"`) is returned and nothing is cached.
#[derive(Clone)]
pub struct IdentityResolver {
    store: Arc<dyn StateStore>,
    lookup: Arc<dyn NameLookup>,
}

impl IdentityResolver {
    pub fn new(store: Arc<dyn StateStore>, lookup: Arc<dyn NameLookup>) -> Self {
        Self { store, lookup }
    }

    pub async fn resolve(&self, category: EntityCategory, id: i64) -> String {
        match self.store.cached_name(category, id).await {
            Ok(Some(name)) => return name,
            Ok(None) => {}
            Err(e) => warn!(%category, id, error = %e, "name cache read failed"),
        }

        match self.lookup.lookup(category, id).await {
            Ok(name) => {
                if let Err(e) = self.store.set_cached_name(category, id, &name).await {
                    warn!(%category, id, error = %e, "name cache write failed");
                }
                name
            }
            Err(e) => {
                info!(error = %e, "name lookup failed, using placeholder");
                category.sentinel().to_string()
            }
        }
    }
}
