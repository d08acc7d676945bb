// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Industry job detection: new jobs via the cursor, status changes via the
//! status cache.

use chrono::{DateTime, Utc};
use posmon_core::types::IndustryJob;
use posmon_core::{EntityCategory, PosmonError, SeatApi, StateStore, Stream};
use tracing::warn;

use crate::format;
use crate::job::Job;
use crate::report::SweepReport;
use crate::watcher::Watcher;

/// Display names of the entities an industry job refers to.
pub(crate) struct JobNames {
    pub type_name: String,
    pub installer: String,
    pub location: String,
}

impl Watcher {
    pub async fn check_industry(&self, now: DateTime<Utc>) -> SweepReport {
        let job = Job::Industry;
        let mut report = SweepReport::default();
        let mut jobs = match self.seat.industry_jobs(self.settings.corporation_id).await {
            Ok(jobs) => jobs,
            Err(e) => {
                self.upstream_failed(job, &e, &mut report);
                return report;
            }
        };
        let Some(mut cursor) = self.load_cursor(Stream::Industry).await else {
            report.skipped = jobs.len();
            return report;
        };

        jobs.sort_by_key(|j| j.job_id);
        for industry_job in &jobs {
            if let Err(e) = self
                .process_job(industry_job, now, &mut cursor, &mut report)
                .await
            {
                report.skipped += 1;
                warn!(job_id = industry_job.job_id, error = %e, "skipping industry job");
            }
        }
        report
    }

    pub(crate) async fn job_names(&self, job: &IndustryJob) -> JobNames {
        JobNames {
            type_name: self
                .resolver
                .resolve(EntityCategory::Item, job.blueprint_type_id)
                .await,
            installer: self
                .resolver
                .resolve(EntityCategory::Pilot, job.installer_id)
                .await,
            location: self
                .resolver
                .resolve(EntityCategory::Station, job.facility_id)
                .await,
        }
    }

    async fn process_job(
        &self,
        job: &IndustryJob,
        now: DateTime<Utc>,
        cursor: &mut i64,
        report: &mut SweepReport,
    ) -> Result<(), PosmonError> {
        let id = job.job_id;
        let status = job.status.as_str();

        let previous = self.store.cached_status(Stream::Industry, id).await?;
        let first_seen = previous.is_none();
        let changed_from = previous.filter(|old| old != status);
        if first_seen || changed_from.is_some() {
            self.store
                .set_cached_status(Stream::Industry, id, status)
                .await?;
        }

        let is_new = id > *cursor;
        if changed_from.is_none() && !is_new {
            return Ok(());
        }

        let channel = &self.settings.report.industry_channel;
        let names = self.job_names(job).await;

        if let Some(old) = &changed_from {
            let text = format::job_update(
                &names.type_name,
                &names.location,
                &names.installer,
                old,
                status,
            );
            self.notify(Job::Industry, channel, &text, report).await;
        }
        if is_new {
            let end = format::seat_timestamp(&job.end_date);
            let left = format::time_left(job.end_date.and_utc() - now);
            let text =
                format::job_new(&names.type_name, &names.installer, &names.location, &end, &left);
            self.notify(Job::Industry, channel, &text, report).await;
            *cursor = id;
            self.store.set_cursor(Stream::Industry, id).await?;
        }
        Ok(())
    }
}
