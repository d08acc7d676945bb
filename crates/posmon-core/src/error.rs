// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for posmon.

use thiserror::Error;

use crate::types::EntityCategory;

/// The primary error type used across all posmon traits and core operations.
#[derive(Debug, Error)]
pub enum PosmonError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// State store errors (database connection, query failure, migration).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Upstream API errors (connection failure, non-success status, malformed body).
    #[error("upstream error: {message}")]
    Upstream {
        message: String,
        /// HTTP status, when the server answered at all.
        status: Option<u16>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A name lookup for an entity id failed.
    #[error("lookup of {category} {id} failed: {message}")]
    Lookup {
        category: EntityCategory,
        id: i64,
        message: String,
    },

    /// Notification sink errors (delivery failure, unknown channel).
    #[error("sink error: {message}")]
    Sink {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl PosmonError {
    /// Builds an upstream error for a response with a non-success status.
    pub fn upstream_status(url: &str, status: u16) -> Self {
        PosmonError::Upstream {
            message: format!("problem with status code for {url}: got {status}"),
            status: Some(status),
            source: None,
        }
    }

    /// Returns true when the error came from the upstream API.
    pub fn is_upstream(&self) -> bool {
        matches!(self, PosmonError::Upstream { .. })
    }
}
