// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Starbase alert and re-arm sweeps.
//!
//! Each (starbase, warning kind) pair is a two-state machine stored as a
//! flag. The alert sweep reports an armed warning whose condition holds and
//! disarms it; the clear sweep silently re-arms a disarmed warning whose
//! condition no longer holds. Both sweeps use the same evaluators, so a
//! warning fires exactly once per entry into its condition.

use chrono::{DateTime, Utc};
use posmon_core::types::{Corporation, Starbase};
use posmon_core::{PosmonError, StateStore, WarningKind};
use tracing::{info, warn};

use crate::conditions;
use crate::format;
use crate::job::Job;
use crate::report::SweepReport;
use crate::watcher::Watcher;

impl Watcher {
    /// Alert sweep over every tower of every corporation.
    pub async fn check_structures(&self, now: DateTime<Utc>) -> SweepReport {
        let job = Job::Structures;
        let mut report = SweepReport::default();
        let towers = match self.towers().await {
            Ok(towers) => towers,
            Err(e) => {
                self.upstream_failed(job, &e, &mut report);
                return report;
            }
        };

        for (corporation, starbases) in &towers {
            for starbase in starbases {
                if let Err(e) = self
                    .alert_starbase(corporation, starbase, now, &mut report)
                    .await
                {
                    report.skipped += 1;
                    warn!(item_id = starbase.item_id, error = %e, "skipping starbase");
                }
            }
        }
        report
    }

    async fn alert_starbase(
        &self,
        corporation: &Corporation,
        starbase: &Starbase,
        now: DateTime<Utc>,
        report: &mut SweepReport,
    ) -> Result<(), PosmonError> {
        for kind in WarningKind::ALL {
            if !conditions::evaluate(kind, starbase, &self.settings.thresholds, now) {
                continue;
            }
            if !self.store.flag(starbase.item_id, kind).await? {
                continue;
            }

            let channel = match kind {
                WarningKind::Reinforced => &self.settings.report.reinforced_channel,
                _ => &self.settings.report.structures_channel,
            };
            let text = format::structure_warning(kind, &corporation.ticker, starbase);
            self.notify(Job::Structures, channel, &text, report).await;
            info!(moon = %starbase.moon_name, %kind, "reported starbase warning");

            self.store.set_flag(starbase.item_id, kind, false).await?;
        }
        Ok(())
    }

    /// Re-arm sweep: warnings whose condition has cleared may fire again.
    pub async fn clear_warnings(&self, now: DateTime<Utc>) -> SweepReport {
        let job = Job::ClearSweep;
        let mut report = SweepReport::default();
        let towers = match self.towers().await {
            Ok(towers) => towers,
            Err(e) => {
                self.upstream_failed(job, &e, &mut report);
                return report;
            }
        };

        for (_, starbases) in &towers {
            for starbase in starbases {
                if let Err(e) = self.rearm_starbase(starbase, now, &mut report).await {
                    report.skipped += 1;
                    warn!(item_id = starbase.item_id, error = %e, "skipping starbase");
                }
            }
        }
        report
    }

    async fn rearm_starbase(
        &self,
        starbase: &Starbase,
        now: DateTime<Utc>,
        report: &mut SweepReport,
    ) -> Result<(), PosmonError> {
        for kind in WarningKind::ALL {
            if conditions::evaluate(kind, starbase, &self.settings.thresholds, now) {
                continue;
            }
            if self.store.flag(starbase.item_id, kind).await? {
                continue;
            }
            self.store.set_flag(starbase.item_id, kind, true).await?;
            report.rearmed += 1;
            info!(moon = %starbase.moon_name, %kind, "re-enabled starbase warning");
        }
        Ok(())
    }
}
