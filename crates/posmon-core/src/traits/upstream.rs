// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Upstream data source traits (SeAT collections and ESI name lookups).

use async_trait::async_trait;

use crate::error::PosmonError;
use crate::types::{
    Contract, Corporation, EntityCategory, Facility, IndustryJob, Starbase, Transaction,
};

/// The SeAT API surface the change detectors read from.
///
/// Every method returns an explicit error on failure; callers decide whether
/// a failure degrades to an empty collection.
#[async_trait]
pub trait SeatApi: Send + Sync {
    async fn corporations(&self) -> Result<Vec<Corporation>, PosmonError>;

    async fn starbases(&self, corporation_id: i64) -> Result<Vec<Starbase>, PosmonError>;

    async fn facilities(&self, corporation_id: i64) -> Result<Vec<Facility>, PosmonError>;

    /// Wallet transactions from the most recent pages only.
    async fn transactions(&self, corporation_id: i64) -> Result<Vec<Transaction>, PosmonError>;

    /// Contracts from the most recent pages only.
    async fn contracts(&self, corporation_id: i64) -> Result<Vec<Contract>, PosmonError>;

    /// Industry jobs from the most recent pages only.
    async fn industry_jobs(&self, corporation_id: i64) -> Result<Vec<IndustryJob>, PosmonError>;
}

/// Resolves a single entity id to its display name.
#[async_trait]
pub trait NameLookup: Send + Sync {
    async fn lookup(&self, category: EntityCategory, id: i64) -> Result<String, PosmonError>;
}
