// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock name lookup backed by a fixed table.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use posmon_core::{EntityCategory, NameLookup, PosmonError};

/// Resolves ids from a table; ids not in the table fail with
/// [`PosmonError::Lookup`].
pub struct MockNameLookup {
    names: Mutex<HashMap<(EntityCategory, i64), String>>,
    calls: AtomicUsize,
}

impl MockNameLookup {
    pub fn new() -> Self {
        Self {
            names: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub async fn insert(&self, category: EntityCategory, id: i64, name: &str) {
        self.names
            .lock()
            .await
            .insert((category, id), name.to_string());
    }

    /// Number of lookups performed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockNameLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NameLookup for MockNameLookup {
    async fn lookup(&self, category: EntityCategory, id: i64) -> Result<String, PosmonError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.names
            .lock()
            .await
            .get(&(category, id))
            .cloned()
            .ok_or_else(|| PosmonError::Lookup {
                category,
                id,
                message: "not in mock table".into(),
            })
    }
}
