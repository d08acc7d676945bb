// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Upstream access for posmon.
//!
//! [`SeatClient`] reads corporations, starbases, customs offices and the
//! paginated wallet, contract and industry feeds from SeAT. [`EsiClient`]
//! resolves ids to names, and [`IdentityResolver`] puts the persistent name
//! cache in front of it.

pub mod client;
pub mod esi;
pub mod resolver;
pub mod types;

pub use client::SeatClient;
pub use esi::EsiClient;
pub use resolver::IdentityResolver;
