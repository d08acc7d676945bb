// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query modules for each kind of persisted detector state.

pub mod cache;
pub mod cursors;
pub mod flags;
