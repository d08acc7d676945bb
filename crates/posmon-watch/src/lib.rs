// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Change detection and notification dedup for posmon.
//!
//! A [`Watcher`] pulls starbases, wallet transactions, contracts and
//! industry jobs, decides what is worth reporting, and records what it has
//! reported in the state store so each event is announced once:
//!
//! - starbase warnings use armed/disarmed flags (see [`structures`]),
//! - new records use per-stream monotonic cursors,
//! - contract and job status changes use the status cache.
//!
//! The [`Scheduler`] runs each detector on its own interval.

pub mod conditions;
pub mod contracts;
pub mod format;
pub mod industry;
pub mod job;
pub mod queries;
pub mod recording;
pub mod report;
pub mod scheduler;
pub mod structures;
pub mod trades;
pub mod watcher;

pub use job::Job;
pub use report::SweepReport;
pub use scheduler::Scheduler;
pub use watcher::{WatchSettings, Watcher};
