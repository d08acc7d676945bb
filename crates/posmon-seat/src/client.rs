// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the SeAT API.
//!
//! Provides [`SeatClient`], which authenticates with the `X-Token` header,
//! fetches single resources, and pulls the trailing pages of paginated
//! collections.

use std::time::Duration;

use async_trait::async_trait;
use posmon_config::model::SeatConfig;
use posmon_core::types::{Contract, Corporation, Facility, IndustryJob, Starbase, Transaction};
use posmon_core::{PosmonError, SeatApi};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::types::{Page, PageCount, record_id, window_start};

/// HTTP client for SeAT communication.
#[derive(Debug, Clone)]
pub struct SeatClient {
    client: reqwest::Client,
    base_url: String,
    corporation_id: i64,
    page_window: u32,
}

impl SeatClient {
    /// Builds a client from the `[seat]` section.
    ///
    /// Fails when the token or the corporation id is not configured.
    pub fn new(config: &SeatConfig) -> Result<Self, PosmonError> {
        let token = config
            .token
            .as_deref()
            .ok_or_else(|| PosmonError::Config("seat.token is required".into()))?;
        let corporation_id = config
            .corporation_id
            .ok_or_else(|| PosmonError::Config("seat.corporation_id is required".into()))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            "X-Token",
            HeaderValue::from_str(token).map_err(|e| {
                PosmonError::Config(format!("invalid seat token header value: {e}"))
            })?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PosmonError::Upstream {
                message: format!("failed to build HTTP client: {e}"),
                status: None,
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            corporation_id,
            page_window: config.page_window,
        })
    }

    /// The corporation whose wallet, contracts and industry jobs are watched.
    pub fn corporation_id(&self) -> i64 {
        self.corporation_id
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Fetches a single, unpaginated resource.
    pub async fn fetch_resource<T: DeserializeOwned>(&self, path: &str) -> Result<T, PosmonError> {
        self.get_json(&self.url(path)).await
    }

    /// Fetches an unpaginated list. Records that fail to decode are skipped.
    pub async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, PosmonError> {
        let records: Vec<Value> = self.fetch_resource(path).await?;
        Ok(decode_records(&self.url(path), records))
    }

    /// Fetches the trailing window of a paginated collection.
    ///
    /// The first request only discovers `meta.last_page`. If any page in the
    /// window fails the whole collection fails; a single malformed record
    /// is skipped.
    pub async fn fetch_collection<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Vec<T>, PosmonError> {
        let url = self.url(path);
        let count: PageCount = self.get_json(&url).await?;
        let last_page = count.meta.last_page;
        let start = window_start(last_page, self.page_window);
        debug!(%url, start, last_page, "fetching collection window");

        let mut items = Vec::new();
        for page in start..last_page {
            let page_url = format!("{url}?page={page}");
            let page: Page = self.get_json(&page_url).await?;
            items.extend(decode_records(&page_url, page.data));
        }
        Ok(items)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, PosmonError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            error!(%url, error = %e, "connection to SeAT failed");
            PosmonError::Upstream {
                message: format!("request to {url} failed: {e}"),
                status: None,
                source: Some(Box::new(e)),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(%url, status = status.as_u16(), "problem with status code");
            return Err(PosmonError::upstream_status(url, status.as_u16()));
        }

        response.json::<T>().await.map_err(|e| {
            error!(%url, error = %e, "malformed SeAT response");
            PosmonError::Upstream {
                message: format!("failed to parse response from {url}: {e}"),
                status: Some(status.as_u16()),
                source: Some(Box::new(e)),
            }
        })
    }
}

/// Decodes each record on its own, dropping the ones that do not fit `T`.
fn decode_records<T: DeserializeOwned>(url: &str, records: Vec<Value>) -> Vec<T> {
    let mut decoded = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let id = record_id(&record);
        match serde_json::from_value(record) {
            Ok(item) => decoded.push(item),
            Err(e) => warn!(%url, index, ?id, error = %e, "skipping malformed SeAT record"),
        }
    }
    decoded
}

#[async_trait]
impl SeatApi for SeatClient {
    async fn corporations(&self) -> Result<Vec<Corporation>, PosmonError> {
        self.fetch_list("corporation/all").await
    }

    async fn starbases(&self, corporation_id: i64) -> Result<Vec<Starbase>, PosmonError> {
        self.fetch_list(&format!("corporation/starbases/{corporation_id}"))
            .await
    }

    async fn facilities(&self, corporation_id: i64) -> Result<Vec<Facility>, PosmonError> {
        self.fetch_list(&format!("corporation/pocos/{corporation_id}"))
            .await
    }

    async fn transactions(&self, corporation_id: i64) -> Result<Vec<Transaction>, PosmonError> {
        self.fetch_collection(&format!("corporation/wallet-transactions/{corporation_id}"))
            .await
    }

    async fn contracts(&self, corporation_id: i64) -> Result<Vec<Contract>, PosmonError> {
        self.fetch_collection(&format!("corporation/contracts/{corporation_id}"))
            .await
    }

    async fn industry_jobs(&self, corporation_id: i64) -> Result<Vec<IndustryJob>, PosmonError> {
        self.fetch_collection(&format!("corporation/industry/{corporation_id}"))
            .await
    }
}
