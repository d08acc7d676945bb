// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sink that writes notifications to the tracing log.

use async_trait::async_trait;
use posmon_core::{AdapterType, HealthStatus, NotificationSink, PluginAdapter, PosmonError};
use tracing::info;

/// Writes every notification as an `INFO` event tagged with its channel.
#[derive(Debug, Default)]
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PluginAdapter for LogSink {
    fn name(&self) -> &str {
        "log"
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
impl NotificationSink for LogSink {
    async fn emit(&self, channel: &str, text: &str) -> Result<(), PosmonError> {
        info!(channel, "{text}");
        Ok(())
    }
}
