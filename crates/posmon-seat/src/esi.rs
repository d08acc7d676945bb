// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! EVE Swagger Interface (ESI) name lookups.

use std::time::Duration;

use async_trait::async_trait;
use posmon_config::model::EsiConfig;
use posmon_core::{EntityCategory, NameLookup, PosmonError};

use crate::types::NamedEntity;

/// Public ESI client. Unauthenticated; only the `name` of each entity is read.
#[derive(Debug, Clone)]
pub struct EsiClient {
    client: reqwest::Client,
    base_url: String,
}

impl EsiClient {
    pub fn new(config: &EsiConfig) -> Result<Self, PosmonError> {
        let client = reqwest::Client::builder()
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
        })
    }

    fn url(&self, category: EntityCategory, id: i64) -> String {
        let resource = match category {
            EntityCategory::Pilot => "characters",
            EntityCategory::Item => "universe/types",
            EntityCategory::Corporation => "corporations",
            EntityCategory::Alliance => "alliances",
            EntityCategory::Station => "universe/stations",
        };
        format!("{}/{resource}/{id}", self.base_url)
    }
}

#[async_trait]
impl NameLookup for EsiClient {
    async fn lookup(&self, category: EntityCategory, id: i64) -> Result<String, PosmonError> {
        let fail = |message: String| PosmonError::Lookup {
            category,
            id,
            message,
        };

        let response = self
            .client
            .get(self.url(category, id))
            .send()
            .await
            .map_err(|e| fail(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(fail(format!("ESI returned {status}")));
        }
        let entity: NamedEntity = response.json().await.map_err(|e| fail(e.to_string()))?;
        Ok(entity.name)
    }
}
