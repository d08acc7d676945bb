// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notification sinks.
//!
//! A sink delivers `(channel, text)` pairs produced by the change detectors.
//! [`LogSink`] writes them to the tracing log; [`WebhookSink`] treats every
//! channel as a webhook URL and posts the text to it.

pub mod log;
pub mod webhook;

use std::sync::Arc;

use posmon_config::model::{SinkConfig, SinkKind};
use posmon_core::{NotificationSink, PosmonError};

pub use log::LogSink;
pub use webhook::WebhookSink;

/// Builds the sink selected by `[sink] kind`.
pub fn build_sink(config: &SinkConfig) -> Result<Arc<dyn NotificationSink>, PosmonError> {
    match config.kind {
        SinkKind::Log => Ok(Arc::new(LogSink::new())),
        SinkKind::Webhook => Ok(Arc::new(WebhookSink::new(config)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_sink_follows_kind() {
        let log = build_sink(&SinkConfig::default()).unwrap();
        assert_eq!(log.name(), "log");

        let webhook = build_sink(&SinkConfig {
            kind: SinkKind::Webhook,
            timeout_secs: 5,
        })
        .unwrap();
        assert_eq!(webhook.name(), "webhook");
    }
}
