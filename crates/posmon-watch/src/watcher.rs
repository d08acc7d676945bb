// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The shared context every change detector runs against.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use posmon_config::model::{PosmonConfig, ReportConfig, ThresholdConfig};
use posmon_core::types::{Corporation, Starbase};
use posmon_core::{NotificationSink, PosmonError, SeatApi, StateStore, Stream, INITIAL_CURSOR};
use posmon_seat::IdentityResolver;
use tracing::{info, warn};

use crate::job::Job;
use crate::recording;
use crate::report::SweepReport;

/// Detector settings extracted from [`PosmonConfig`].
#[derive(Debug, Clone)]
pub struct WatchSettings {
    /// Corporation whose wallet, contracts and industry jobs are watched.
    pub corporation_id: i64,
    pub thresholds: ThresholdConfig,
    pub report: ReportConfig,
    /// Contract types reported; empty means every type.
    pub contract_types: Vec<String>,
}

impl WatchSettings {
    pub fn from_config(config: &PosmonConfig) -> Result<Self, PosmonError> {
        let corporation_id = config
            .seat
            .corporation_id
            .ok_or_else(|| PosmonError::Config("seat.corporation_id is required".into()))?;
        Ok(Self {
            corporation_id,
            thresholds: config.thresholds.clone(),
            report: config.report.clone(),
            contract_types: config.checks.contract_types.clone(),
        })
    }

    pub(crate) fn wants_contract(&self, kind: &str) -> bool {
        self.contract_types.is_empty()
            || self
                .contract_types
                .iter()
                .any(|t| t.eq_ignore_ascii_case(kind))
    }
}

/// Upstream, store, sink and resolver shared by all detectors.
///
/// Detector passes never fail: upstream errors degrade to an empty pass and
/// store errors skip the affected record. See [`SweepReport`] for what
/// happened during a pass.
pub struct Watcher {
    pub(crate) seat: Arc<dyn SeatApi>,
    pub(crate) store: Arc<dyn StateStore>,
    pub(crate) sink: Arc<dyn NotificationSink>,
    pub(crate) resolver: IdentityResolver,
    pub(crate) settings: WatchSettings,
}

impl Watcher {
    pub fn new(
        seat: Arc<dyn SeatApi>,
        store: Arc<dyn StateStore>,
        sink: Arc<dyn NotificationSink>,
        resolver: IdentityResolver,
        settings: WatchSettings,
    ) -> Self {
        Self {
            seat,
            store,
            sink,
            resolver,
            settings,
        }
    }

    pub fn settings(&self) -> &WatchSettings {
        &self.settings
    }

    /// Runs one pass of `job`.
    pub async fn run(&self, job: Job, now: DateTime<Utc>) -> SweepReport {
        let report = match job {
            Job::Structures => self.check_structures(now).await,
            Job::ClearSweep => self.clear_warnings(now).await,
            Job::Trades => self.check_trades().await,
            Job::Contracts => self.check_contracts().await,
            Job::Industry => self.check_industry(now).await,
        };
        recording::record_sweep(job.as_str());
        info!(job = job.as_str(), summary = %report, "pass complete");
        report
    }

    /// Hands `text` to the sink. A delivery failure is logged and counted;
    /// it never rolls back detector state.
    pub(crate) async fn notify(
        &self,
        job: Job,
        channel: &str,
        text: &str,
        report: &mut SweepReport,
    ) {
        report.notifications += 1;
        recording::record_notification(job.as_str());
        if let Err(e) = self.sink.emit(channel, text).await {
            report.delivery_failures += 1;
            warn!(job = job.as_str(), channel, error = %e, "notification delivery failed");
        }
    }

    pub(crate) fn upstream_failed(&self, job: Job, error: &PosmonError, report: &mut SweepReport) {
        report.upstream_failed = true;
        recording::record_upstream_failure(job.as_str());
        warn!(job = job.as_str(), error = %error, "upstream unavailable, treating as empty");
    }

    /// Loads the cursor for `stream`; a store failure aborts the pass since
    /// without it every record would look new.
    pub(crate) async fn load_cursor(&self, stream: Stream) -> Option<i64> {
        match self.store.cursor(stream).await {
            Ok(cursor) => Some(cursor.max(INITIAL_CURSOR)),
            Err(e) => {
                warn!(stream = stream.as_str(), error = %e, "cursor unavailable, skipping pass");
                None
            }
        }
    }

    /// Every corporation with its starbases. A corporation whose starbases
    /// cannot be fetched is skipped; failing to list corporations is an error.
    pub(crate) async fn towers(&self) -> Result<Vec<(Corporation, Vec<Starbase>)>, PosmonError> {
        let corporations = self.seat.corporations().await?;
        let mut towers = Vec::with_capacity(corporations.len());
        for corporation in corporations {
            match self.seat.starbases(corporation.corporation_id).await {
                Ok(starbases) => towers.push((corporation, starbases)),
                Err(e) => warn!(
                    corporation_id = corporation.corporation_id,
                    error = %e,
                    "skipping corporation, starbases unavailable"
                ),
            }
        }
        Ok(towers)
    }
}
