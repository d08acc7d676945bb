// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for posmon integration tests.
//!
//! Provides mock adapters and a harness with a temp SQLite store for fast,
//! deterministic tests without a SeAT instance or network access.
//!
//! # Components
//!
//! - [`MockSeatApi`] - In-memory SeAT data with per-endpoint failure injection
//! - [`MockNameLookup`] - Fixed id-to-name table with a call counter
//! - [`MockSink`] - Captures every emitted notification
//! - [`fixtures`] - Builders for wire records

pub mod fixtures;
pub mod harness;
pub mod mock_lookup;
pub mod mock_seat;
pub mod mock_sink;

pub use harness::TestHarness;
pub use mock_lookup::MockNameLookup;
pub use mock_seat::MockSeatApi;
pub use mock_sink::MockSink;
