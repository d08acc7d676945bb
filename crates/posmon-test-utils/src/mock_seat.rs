// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock SeAT API holding canned records in memory.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::Mutex;

use posmon_core::types::{Contract, Corporation, Facility, IndustryJob, Starbase, Transaction};
use posmon_core::{PosmonError, SeatApi};

/// Endpoint names accepted by [`MockSeatApi::fail`] and [`MockSeatApi::calls`].
pub const CORPORATIONS: &str = "corporations";
pub const STARBASES: &str = "starbases";
pub const FACILITIES: &str = "facilities";
pub const TRANSACTIONS: &str = "transactions";
pub const CONTRACTS: &str = "contracts";
pub const INDUSTRY: &str = "industry";

#[derive(Default)]
struct SeatData {
    corporations: Vec<Corporation>,
    starbases: HashMap<i64, Vec<Starbase>>,
    facilities: HashMap<i64, Vec<Facility>>,
    transactions: Vec<Transaction>,
    contracts: Vec<Contract>,
    jobs: Vec<IndustryJob>,
    failing: HashSet<&'static str>,
    calls: HashMap<&'static str, usize>,
}

/// In-memory [`SeatApi`]. Activity feeds are returned for any corporation id;
/// starbases and facilities are keyed by corporation.
pub struct MockSeatApi {
    data: Mutex<SeatData>,
}

impl MockSeatApi {
    pub fn new() -> Self {
        Self {
            data: Mutex::new(SeatData::default()),
        }
    }

    pub async fn set_corporations(&self, corporations: Vec<Corporation>) {
        self.data.lock().await.corporations = corporations;
    }

    pub async fn set_starbases(&self, corporation_id: i64, starbases: Vec<Starbase>) {
        self.data
            .lock()
            .await
            .starbases
            .insert(corporation_id, starbases);
    }

    pub async fn set_facilities(&self, corporation_id: i64, facilities: Vec<Facility>) {
        self.data
            .lock()
            .await
            .facilities
            .insert(corporation_id, facilities);
    }

    pub async fn set_transactions(&self, transactions: Vec<Transaction>) {
        self.data.lock().await.transactions = transactions;
    }

    pub async fn set_contracts(&self, contracts: Vec<Contract>) {
        self.data.lock().await.contracts = contracts;
    }

    pub async fn set_industry_jobs(&self, jobs: Vec<IndustryJob>) {
        self.data.lock().await.jobs = jobs;
    }

    /// Makes `endpoint` answer with an upstream error until reset.
    pub async fn fail(&self, endpoint: &'static str, failing: bool) {
        let mut data = self.data.lock().await;
        if failing {
            data.failing.insert(endpoint);
        } else {
            data.failing.remove(endpoint);
        }
    }

    /// How many times `endpoint` has been called.
    pub async fn calls(&self, endpoint: &'static str) -> usize {
        self.data
            .lock()
            .await
            .calls
            .get(endpoint)
            .copied()
            .unwrap_or(0)
    }

    async fn serve<T>(
        &self,
        endpoint: &'static str,
        pick: impl FnOnce(&SeatData) -> Vec<T>,
    ) -> Result<Vec<T>, PosmonError> {
        let mut data = self.data.lock().await;
        *data.calls.entry(endpoint).or_default() += 1;
        if data.failing.contains(endpoint) {
            return Err(PosmonError::upstream_status(endpoint, 503));
        }
        Ok(pick(&data))
    }
}

impl Default for MockSeatApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SeatApi for MockSeatApi {
    async fn corporations(&self) -> Result<Vec<Corporation>, PosmonError> {
        self.serve(CORPORATIONS, |d| d.corporations.clone()).await
    }

    async fn starbases(&self, corporation_id: i64) -> Result<Vec<Starbase>, PosmonError> {
        self.serve(STARBASES, |d| {
            d.starbases.get(&corporation_id).cloned().unwrap_or_default()
        })
        .await
    }

    async fn facilities(&self, corporation_id: i64) -> Result<Vec<Facility>, PosmonError> {
        self.serve(FACILITIES, |d| {
            d.facilities.get(&corporation_id).cloned().unwrap_or_default()
        })
        .await
    }

    async fn transactions(&self, _corporation_id: i64) -> Result<Vec<Transaction>, PosmonError> {
        self.serve(TRANSACTIONS, |d| d.transactions.clone()).await
    }

    async fn contracts(&self, _corporation_id: i64) -> Result<Vec<Contract>, PosmonError> {
        self.serve(CONTRACTS, |d| d.contracts.clone()).await
    }

    async fn industry_jobs(&self, _corporation_id: i64) -> Result<Vec<IndustryJob>, PosmonError> {
        self.serve(INDUSTRY, |d| d.jobs.clone()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[tokio::test]
    async fn starbases_are_keyed_by_corporation() {
        let seat = MockSeatApi::new();
        seat.set_starbases(1, vec![fixtures::starbase(10)]).await;
        assert_eq!(seat.starbases(1).await.unwrap().len(), 1);
        assert!(seat.starbases(2).await.unwrap().is_empty());
        assert_eq!(seat.calls(STARBASES).await, 2);
    }

    #[tokio::test]
    async fn failure_injection() {
        let seat = MockSeatApi::new();
        seat.fail(TRANSACTIONS, true).await;
        assert!(seat.transactions(1).await.unwrap_err().is_upstream());
        seat.fail(TRANSACTIONS, false).await;
        assert!(seat.transactions(1).await.unwrap().is_empty());
    }
}
