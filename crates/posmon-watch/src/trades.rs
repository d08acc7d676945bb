// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! New wallet transaction detection.

use posmon_core::{SeatApi, StateStore, Stream};
use tracing::warn;

use crate::format;
use crate::job::Job;
use crate::report::SweepReport;
use crate::watcher::Watcher;

impl Watcher {
    /// Reports every transaction with an id above the trades cursor, in
    /// ascending id order, advancing the cursor after each one.
    pub async fn check_trades(&self) -> SweepReport {
        let job = Job::Trades;
        let mut report = SweepReport::default();
        let mut transactions = match self.seat.transactions(self.settings.corporation_id).await {
            Ok(transactions) => transactions,
            Err(e) => {
                self.upstream_failed(job, &e, &mut report);
                return report;
            }
        };
        let Some(mut cursor) = self.load_cursor(Stream::Trades).await else {
            report.skipped = transactions.len();
            return report;
        };

        transactions.sort_by_key(|t| t.transaction_id);
        for transaction in &transactions {
            if transaction.transaction_id <= cursor {
                continue;
            }
            let text = format::trade(transaction);
            self.notify(job, &self.settings.report.trades_channel, &text, &mut report)
                .await;

            cursor = transaction.transaction_id;
            if let Err(e) = self.store.set_cursor(Stream::Trades, cursor).await {
                report.skipped += 1;
                warn!(transaction_id = cursor, error = %e, "failed to persist trades cursor");
            }
        }
        report
    }
}
