// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as URL schemes, minimum polling intervals, and non-empty channels.

use crate::diagnostic::ConfigError;
use crate::model::{PosmonConfig, SinkKind};

/// Shortest polling interval accepted for any stream.
pub const MIN_INTERVAL_SECS: u64 = 60;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &PosmonConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    check_http_url(&mut errors, "seat.base_url", &config.seat.base_url);
    check_http_url(&mut errors, "esi.base_url", &config.esi.base_url);

    if config.seat.page_window < 1 {
        errors.push(ConfigError::Validation {
            message: "seat.page_window must be at least 1".to_string(),
        });
    }

    if let Some(token) = &config.seat.token
        && token.trim().is_empty()
    {
        errors.push(ConfigError::Validation {
            message: "seat.token must not be empty when set".to_string(),
        });
    }

    if let Some(corp) = config.seat.corporation_id
        && corp <= 0
    {
        errors.push(ConfigError::Validation {
            message: format!("seat.corporation_id must be positive, got {corp}"),
        });
    }

    let intervals = [
        ("checks.structures_interval_secs", config.checks.structures_interval_secs),
        ("checks.clear_interval_secs", config.checks.clear_interval_secs),
        ("checks.trades_interval_secs", config.checks.trades_interval_secs),
        ("checks.contracts_interval_secs", config.checks.contracts_interval_secs),
        ("checks.industry_interval_secs", config.checks.industry_interval_secs),
    ];
    for (key, secs) in intervals {
        if secs < MIN_INTERVAL_SECS {
            errors.push(ConfigError::Validation {
                message: format!("{key} must be at least {MIN_INTERVAL_SECS} seconds, got {secs}"),
            });
        }
    }

    for (key, channel) in config.report.channels() {
        if channel.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("{key} must not be empty"),
            });
        } else if config.sink.kind == SinkKind::Webhook && !is_http_url(channel) {
            errors.push(ConfigError::Validation {
                message: format!("{key} must be an http(s) webhook URL when sink.kind = \"webhook\""),
            });
        }
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_http_url(value: &str) -> bool {
    let value = value.trim();
    value.starts_with("http://") || value.starts_with("https://")
}

fn check_http_url(errors: &mut Vec<ConfigError>, key: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: format!("{key} must not be empty"),
        });
    } else if !is_http_url(value) {
        errors.push(ConfigError::Validation {
            message: format!("{key} `{value}` must start with http:// or https://"),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = PosmonConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn short_interval_is_rejected() {
        let mut config = PosmonConfig::default();
        config.checks.trades_interval_secs = 5;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("checks.trades_interval_secs"));
    }

    #[test]
    fn webhook_sink_requires_url_channels() {
        let mut config = PosmonConfig::default();
        config.sink.kind = SinkKind::Webhook;
        let errors = validate_config(&config).unwrap_err();
        // All five default channels are plain labels.
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn collects_every_error() {
        let mut config = PosmonConfig::default();
        config.seat.base_url = "seat.local".into();
        config.seat.page_window = 0;
        config.seat.corporation_id = Some(-4);
        config.storage.database_path = " ".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}
