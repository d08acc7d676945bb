// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for posmon.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

/// Top-level posmon configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values. The struct is built once
/// at startup and handed to each component; nothing mutates it afterwards.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PosmonConfig {
    /// Process-level settings.
    #[serde(default)]
    pub daemon: DaemonConfig,

    /// SeAT upstream API settings.
    #[serde(default)]
    pub seat: SeatConfig,

    /// ESI name lookup settings.
    #[serde(default)]
    pub esi: EsiConfig,

    /// Warning thresholds for starbase checks.
    #[serde(default)]
    pub thresholds: ThresholdConfig,

    /// Which streams are watched, and how often.
    #[serde(default)]
    pub checks: ChecksConfig,

    /// Destination channel per notification category.
    #[serde(default)]
    pub report: ReportConfig,

    /// State store settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Notification transport settings.
    #[serde(default)]
    pub sink: SinkConfig,
}

/// Process-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DaemonConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Address the Prometheus exporter listens on. Counters are still
    /// recorded in-process when unset.
    #[serde(default)]
    pub metrics_listen: Option<SocketAddr>,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            metrics_listen: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// SeAT API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SeatConfig {
    /// Base URL of the SeAT API, e.g. `https://seat.example.com/api/v2`.
    #[serde(default = "default_seat_url")]
    pub base_url: String,

    /// SeAT API token sent as `X-Token`. Required to start polling.
    #[serde(default)]
    pub token: Option<String>,

    /// Corporation whose trades, contracts, and industry jobs are watched.
    #[serde(default)]
    pub corporation_id: Option<i64>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Number of trailing pages fetched from paginated collections.
    #[serde(default = "default_page_window")]
    pub page_window: u32,
}

impl Default for SeatConfig {
    fn default() -> Self {
        Self {
            base_url: default_seat_url(),
            token: None,
            corporation_id: None,
            timeout_secs: default_timeout_secs(),
            page_window: default_page_window(),
        }
    }
}

fn default_seat_url() -> String {
    "http://localhost/api/v2".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_page_window() -> u32 {
    3
}

/// ESI (public EVE API) configuration used for name lookups.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EsiConfig {
    #[serde(default = "default_esi_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for EsiConfig {
    fn default() -> Self {
        Self {
            base_url: default_esi_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_esi_url() -> String {
    "https://esi.evetech.net/latest".to_string()
}

/// Starbase warning thresholds, in hours.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdConfig {
    /// Warn when fewer than this many hours of fuel remain.
    #[serde(default = "default_fuel_hours")]
    pub fuel_hours: u32,

    /// Warn when fewer than this many hours of strontium remain.
    #[serde(default = "default_stront_hours")]
    pub stront_hours: u32,

    /// A tower whose data is older than this is reported as outdated.
    #[serde(default = "default_outdated_hours")]
    pub outdated_hours: u32,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            fuel_hours: default_fuel_hours(),
            stront_hours: default_stront_hours(),
            outdated_hours: default_outdated_hours(),
        }
    }
}

fn default_fuel_hours() -> u32 {
    24
}

fn default_stront_hours() -> u32 {
    12
}

fn default_outdated_hours() -> u32 {
    12
}

/// Per-stream enable flags and polling intervals.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ChecksConfig {
    #[serde(default = "default_true")]
    pub structures: bool,

    #[serde(default = "default_true")]
    pub trades: bool,

    #[serde(default = "default_true")]
    pub contracts: bool,

    #[serde(default = "default_true")]
    pub industry: bool,

    /// Interval of the structure alert sweep.
    #[serde(default = "default_hourly")]
    pub structures_interval_secs: u64,

    /// Interval of the warning re-arm sweep.
    #[serde(default = "default_hourly")]
    pub clear_interval_secs: u64,

    #[serde(default = "default_quarter_hour")]
    pub trades_interval_secs: u64,

    #[serde(default = "default_quarter_hour")]
    pub contracts_interval_secs: u64,

    #[serde(default = "default_quarter_hour")]
    pub industry_interval_secs: u64,

    /// Contract types that are reported. Empty reports every type.
    #[serde(default = "default_contract_types")]
    pub contract_types: Vec<String>,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            structures: true,
            trades: true,
            contracts: true,
            industry: true,
            structures_interval_secs: default_hourly(),
            clear_interval_secs: default_hourly(),
            trades_interval_secs: default_quarter_hour(),
            contracts_interval_secs: default_quarter_hour(),
            industry_interval_secs: default_quarter_hour(),
            contract_types: default_contract_types(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_hourly() -> u64 {
    3600
}

fn default_quarter_hour() -> u64 {
    900
}

fn default_contract_types() -> Vec<String> {
    vec!["courier".to_string()]
}

/// Destination channel identifiers, one per notification category.
///
/// With the `log` sink these are labels; with the `webhook` sink each one is
/// the webhook URL to post to.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    #[serde(default = "default_structures_channel")]
    pub structures_channel: String,

    #[serde(default = "default_reinforced_channel")]
    pub reinforced_channel: String,

    #[serde(default = "default_trades_channel")]
    pub trades_channel: String,

    #[serde(default = "default_industry_channel")]
    pub industry_channel: String,

    #[serde(default = "default_contracts_channel")]
    pub contracts_channel: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            structures_channel: default_structures_channel(),
            reinforced_channel: default_reinforced_channel(),
            trades_channel: default_trades_channel(),
            industry_channel: default_industry_channel(),
            contracts_channel: default_contracts_channel(),
        }
    }
}

fn default_structures_channel() -> String {
    "structures".to_string()
}

fn default_reinforced_channel() -> String {
    "reinforced".to_string()
}

fn default_trades_channel() -> String {
    "trades".to_string()
}

fn default_industry_channel() -> String {
    "industry".to_string()
}

fn default_contracts_channel() -> String {
    "contracts".to_string()
}

impl ReportConfig {
    /// All channels with the config key they came from.
    pub fn channels(&self) -> [(&'static str, &str); 5] {
        [
            ("report.structures_channel", self.structures_channel.as_str()),
            ("report.reinforced_channel", self.reinforced_channel.as_str()),
            ("report.trades_channel", self.trades_channel.as_str()),
            ("report.industry_channel", self.industry_channel.as_str()),
            ("report.contracts_channel", self.contracts_channel.as_str()),
        ]
    }
}

/// State store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_true")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: true,
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("posmon").join("posmon.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("posmon.db"))
        .to_string_lossy()
        .into_owned()
}

/// Which notification transport to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkKind {
    /// Write notifications to the log.
    #[default]
    Log,
    /// POST notifications to per-channel webhook URLs.
    Webhook,
}

impl SinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SinkKind::Log => "log",
            SinkKind::Webhook => "webhook",
        }
    }
}

/// Notification transport configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SinkConfig {
    #[serde(default)]
    pub kind: SinkKind,

    /// Per-delivery timeout in seconds (webhook only).
    #[serde(default = "default_sink_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            kind: SinkKind::default(),
            timeout_secs: default_sink_timeout_secs(),
        }
    }
}

fn default_sink_timeout_secs() -> u64 {
    10
}
