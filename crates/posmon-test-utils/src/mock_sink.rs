// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock notification sink that captures emitted messages.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use posmon_core::{AdapterType, HealthStatus, NotificationSink, PluginAdapter, PosmonError};

/// A sink that records every `(channel, text)` pair it is asked to deliver.
///
/// With [`set_failing`](Self::set_failing) enabled, deliveries are still
/// recorded but `emit` returns an error.
pub struct MockSink {
    sent: Mutex<Vec<(String, String)>>,
    failing: AtomicBool,
}

impl MockSink {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Every delivery attempt, in order.
    pub async fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().await.clone()
    }

    /// Texts only, in order.
    pub async fn texts(&self) -> Vec<String> {
        self.sent
            .lock()
            .await
            .iter()
            .map(|(_, text)| text.clone())
            .collect()
    }

    /// Texts delivered to one channel.
    pub async fn sent_to(&self, channel: &str) -> Vec<String> {
        self.sent
            .lock()
            .await
            .iter()
            .filter(|(c, _)| c == channel)
            .map(|(_, text)| text.clone())
            .collect()
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }

    pub async fn clear(&self) {
        self.sent.lock().await.clear();
    }
}

impl Default for MockSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PluginAdapter for MockSink {
    fn name(&self) -> &str {
        "mock-sink"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Sink
    }

    async fn health_check(&self) -> Result<HealthStatus, PosmonError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), PosmonError> {
        Ok(())
    }
}

#[async_trait]
impl NotificationSink for MockSink {
    async fn emit(&self, channel: &str, text: &str) -> Result<(), PosmonError> {
        self.sent
            .lock()
            .await
            .push((channel.to_string(), text.to_string()));
        if self.failing.load(Ordering::SeqCst) {
            return Err(PosmonError::Sink {
                message: "mock sink failure".into(),
                source: None,
            });
        }
        Ok(())
    }
}
