// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sink that posts notifications to chat webhooks.

use std::time::Duration;

use async_trait::async_trait;
use posmon_config::model::SinkConfig;
use posmon_core::{AdapterType, HealthStatus, NotificationSink, PluginAdapter, PosmonError};
use tracing::debug;

/// Posts `{"content": text}` to the channel, which must be a webhook URL.
///
/// The payload shape is accepted by Discord and by Slack-compatible
/// incoming webhooks.
#[derive(Debug, Clone)]
pub struct WebhookSink {
    client: reqwest::Client,
}

impl WebhookSink {
    pub fn new(config: &SinkConfig) -> Result<Self, PosmonError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PosmonError::Sink {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PluginAdapter for WebhookSink {
    fn name(&self) -> &str {
        "webhook"
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
impl NotificationSink for WebhookSink {
    async fn emit(&self, channel: &str, text: &str) -> Result<(), PosmonError> {
        let body = serde_json::json!({ "content": text });
        let response = self
            .client
            .post(channel)
            .json(&body)
            .send()
            .await
            .map_err(|e| PosmonError::Sink {
                message: format!("webhook delivery failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PosmonError::Sink {
                message: format!("webhook returned {status}"),
                source: None,
            });
        }
        debug!(status = status.as_u16(), "webhook delivered");
        Ok(())
    }
}
