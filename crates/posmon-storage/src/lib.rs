// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence layer for posmon.
//!
//! Holds everything the change detectors must remember between sweeps:
//! per-stream cursors, hysteresis warning flags, the name cache, and the
//! status cache. Writes are serialized through a single `tokio-rusqlite`
//! connection and the schema is applied by embedded migrations.

pub mod adapter;
pub mod database;
pub mod migrations;
pub mod queries;

pub use adapter::SqliteStateStore;
pub use database::Database;
