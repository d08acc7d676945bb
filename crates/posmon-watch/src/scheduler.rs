// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Periodic job scheduling.
//!
//! Each enabled job gets its own task with its own interval timer, so passes
//! of the same job never overlap and a slow pass delays the next tick rather
//! than bunching ticks up. All tasks stop when the cancellation token fires.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use posmon_config::model::ChecksConfig;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::job::Job;
use crate::watcher::Watcher;

pub struct Scheduler {
    watcher: Arc<Watcher>,
    jobs: Vec<(Job, Duration)>,
}

impl Scheduler {
    /// Schedules every job whose check is enabled. The structures check
    /// brings both the alert sweep and the clear sweep.
    pub fn from_config(watcher: Arc<Watcher>, checks: &ChecksConfig) -> Self {
        let mut jobs = Vec::new();
        if checks.structures {
            jobs.push((Job::Structures, Duration::from_secs(checks.structures_interval_secs)));
            jobs.push((Job::ClearSweep, Duration::from_secs(checks.clear_interval_secs)));
        }
        if checks.trades {
            jobs.push((Job::Trades, Duration::from_secs(checks.trades_interval_secs)));
        }
        if checks.contracts {
            jobs.push((Job::Contracts, Duration::from_secs(checks.contracts_interval_secs)));
        }
        if checks.industry {
            jobs.push((Job::Industry, Duration::from_secs(checks.industry_interval_secs)));
        }
        Self { watcher, jobs }
    }

    pub fn jobs(&self) -> &[(Job, Duration)] {
        &self.jobs
    }

    /// Spawns one task per job. The first pass runs one period after start.
    pub fn spawn(self, cancel: CancellationToken) -> Vec<JoinHandle<()>> {
        self.jobs
            .into_iter()
            .map(|(job, period)| {
                let watcher = self.watcher.clone();
                let cancel = cancel.clone();
                tokio::spawn(run_periodic(watcher, job, period, cancel))
            })
            .collect()
    }
}

async fn run_periodic(
    watcher: Arc<Watcher>,
    job: Job,
    period: Duration,
    cancel: CancellationToken,
) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately.
    interval.tick().await;
    info!(job = job.as_str(), interval_secs = period.as_secs(), "poller started");

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(job = job.as_str(), "poller stopped");
                break;
            }
            _ = interval.tick() => {
                watcher.run(job, Utc::now()).await;
            }
        }
    }
}
