// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for posmon.
//!
//! This crate provides the trait definitions, error type, and domain records
//! shared by the upstream client, the state store, the notification sinks,
//! and the watch engine.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::PosmonError;
pub use types::{AdapterType, EntityCategory, HealthStatus, Stream, WarningKind};

pub use traits::{NameLookup, NotificationSink, PluginAdapter, SeatApi, StateStore, INITIAL_CURSOR};
