// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions at the seams of the watch engine.
//!
//! Adapters with a lifecycle extend [`PluginAdapter`] and use
//! `#[async_trait]` for dynamic dispatch compatibility.

pub mod adapter;
pub mod sink;
pub mod store;
pub mod upstream;

pub use adapter::PluginAdapter;
pub use sink::NotificationSink;
pub use store::{StateStore, INITIAL_CURSOR};
pub use upstream::{NameLookup, SeatApi};
