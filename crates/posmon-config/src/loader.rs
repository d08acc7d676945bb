// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./posmon.toml` > `~/.config/posmon/posmon.toml` > `/etc/posmon/posmon.toml`
//! with environment variable overrides via `POSMON_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::PosmonConfig;

/// Config sections, used to turn `POSMON_SECTION_KEY` into `section.key`.
const SECTIONS: &[&str] = &[
    "daemon",
    "seat",
    "esi",
    "thresholds",
    "checks",
    "report",
    "storage",
    "sink",
];

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/posmon/posmon.toml` (system-wide)
/// 3. `~/.config/posmon/posmon.toml` (user XDG config)
/// 4. `./posmon.toml` (local directory)
/// 5. `POSMON_*` environment variables
pub fn load_config() -> Result<PosmonConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<PosmonConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PosmonConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<PosmonConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PosmonConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(PosmonConfig::default()))
        .merge(Toml::file("/etc/posmon/posmon.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("posmon/posmon.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("posmon.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")`: `POSMON_SEAT_CORPORATION_ID` must
/// map to `seat.corporation_id`, not `seat.corporation.id`.
fn env_provider() -> Env {
    Env::prefixed("POSMON_").map(|key| map_env_key(key.as_str()).into())
}

/// Map a lowercased, prefix-stripped env var name onto a dotted config path.
pub fn map_env_key(key: &str) -> String {
    for section in SECTIONS {
        if let Some(rest) = key.strip_prefix(section).and_then(|r| r.strip_prefix('_')) {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_keys_map_to_section_paths() {
        assert_eq!(map_env_key("seat_corporation_id"), "seat.corporation_id");
        assert_eq!(map_env_key("thresholds_fuel_hours"), "thresholds.fuel_hours");
        assert_eq!(
            map_env_key("report_reinforced_channel"),
            "report.reinforced_channel"
        );
        assert_eq!(map_env_key("checks_trades"), "checks.trades");
    }

    #[test]
    fn unknown_section_is_left_alone() {
        assert_eq!(map_env_key("nothing_here"), "nothing_here");
    }
}
