// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contract detection: new contracts via the cursor, status changes via the
//! status cache.

use posmon_core::types::Contract;
use posmon_core::{EntityCategory, PosmonError, SeatApi, StateStore, Stream};
use tracing::warn;

use crate::format;
use crate::job::Job;
use crate::report::SweepReport;
use crate::watcher::Watcher;

impl Watcher {
    pub async fn check_contracts(&self) -> SweepReport {
        let job = Job::Contracts;
        let mut report = SweepReport::default();
        let contracts = match self.seat.contracts(self.settings.corporation_id).await {
            Ok(contracts) => contracts,
            Err(e) => {
                self.upstream_failed(job, &e, &mut report);
                return report;
            }
        };
        let mut contracts: Vec<Contract> = contracts
            .into_iter()
            .filter(|c| self.settings.wants_contract(&c.detail.kind))
            .collect();
        let Some(mut cursor) = self.load_cursor(Stream::Contracts).await else {
            report.skipped = contracts.len();
            return report;
        };

        contracts.sort_by_key(|c| c.contract_id);
        for contract in &contracts {
            if let Err(e) = self.process_contract(contract, &mut cursor, &mut report).await {
                report.skipped += 1;
                warn!(contract_id = contract.contract_id, error = %e, "skipping contract");
            }
        }
        report
    }

    async fn process_contract(
        &self,
        contract: &Contract,
        cursor: &mut i64,
        report: &mut SweepReport,
    ) -> Result<(), PosmonError> {
        let id = contract.contract_id;
        let status = contract.detail.status.as_str();

        let previous = self.store.cached_status(Stream::Contracts, id).await?;
        let first_seen = previous.is_none();
        let changed_from = previous.filter(|old| old != status);
        if first_seen || changed_from.is_some() {
            self.store
                .set_cached_status(Stream::Contracts, id, status)
                .await?;
        }

        let is_new = id > *cursor;
        if changed_from.is_none() && !is_new {
            return Ok(());
        }

        let channel = &self.settings.report.contracts_channel;
        let source = self
            .resolver
            .resolve(EntityCategory::Station, contract.detail.start_location_id)
            .await;
        let destination = self
            .resolver
            .resolve(EntityCategory::Station, contract.detail.end_location_id)
            .await;

        if let Some(old) = &changed_from {
            let text = format::contract_update(&source, &destination, old, status);
            self.notify(Job::Contracts, channel, &text, report).await;
        }
        if is_new {
            let text = format::contract_new(&source, &destination, &contract.detail);
            self.notify(Job::Contracts, channel, &text, report).await;
            *cursor = id;
            self.store.set_cursor(Stream::Contracts, id).await?;
        }
        Ok(())
    }
}
