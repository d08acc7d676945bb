// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notification sink trait for outbound alert delivery.

use async_trait::async_trait;

use crate::error::PosmonError;
use crate::traits::adapter::PluginAdapter;

/// Delivers formatted notification text to a named channel.
///
/// Delivery is fire-and-forget from the detectors' point of view: an error is
/// logged by the caller and never rolls back detector state.
#[async_trait]
pub trait NotificationSink: PluginAdapter {
    /// Sends `text` to the channel identified by `channel`.
    async fn emit(&self, channel: &str, text: &str) -> Result<(), PosmonError>;
}
