// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across posmon traits, the upstream client, and the watch engine.
//!
//! Record structs mirror the SeAT JSON payloads field for field (via serde renames),
//! so the same types travel from the HTTP client to the change detectors unchanged.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Identifies the type of adapter behind a [`PluginAdapter`](crate::PluginAdapter).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum AdapterType {
    Sink,
    Storage,
}

/// An event stream that carries a "last seen" cursor.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Stream {
    Trades,
    Contracts,
    Industry,
}

impl Stream {
    /// All cursor-tracked streams.
    pub const ALL: [Stream; 3] = [Stream::Trades, Stream::Contracts, Stream::Industry];

    /// Stable key used by the state store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stream::Trades => "trades",
            Stream::Contracts => "contracts",
            Stream::Industry => "industry",
        }
    }
}

/// The kind of starbase warning a hysteresis flag guards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    Fuel,
    Strontium,
    Outdated,
    Reinforced,
}

impl WarningKind {
    /// Every warning kind, in the order the structure sweep evaluates them.
    pub const ALL: [WarningKind; 4] = [
        WarningKind::Outdated,
        WarningKind::Fuel,
        WarningKind::Reinforced,
        WarningKind::Strontium,
    ];

    /// Stable key used by the state store.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningKind::Fuel => "fuel",
            WarningKind::Strontium => "strontium",
            WarningKind::Outdated => "outdated",
            WarningKind::Reinforced => "reinforced",
        }
    }
}

/// Category of an entity id that can be resolved to a display name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EntityCategory {
    Pilot,
    Item,
    Corporation,
    Alliance,
    Station,
}

impl EntityCategory {
    /// Stable key used by the name cache.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityCategory::Pilot => "pilot",
            EntityCategory::Item => "item",
            EntityCategory::Corporation => "corporation",
            EntityCategory::Alliance => "alliance",
            EntityCategory::Station => "station",
        }
    }

    /// The name reported when resolution fails. Never cached.
    pub fn sentinel(&self) -> &'static str {
        match self {
            EntityCategory::Station => "unknown Station",
            _ => "unknown",
        }
    }
}

/// Operational state of a starbase, decoded from SeAT's numeric `state` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarbaseState {
    Unanchored,
    Offline,
    Reinforced,
    Online,
    /// Any other code (onlining, unanchoring). Checked like an online tower.
    Other(i64),
}

impl StarbaseState {
    /// True for unanchored and offline towers.
    pub fn is_inactive(&self) -> bool {
        matches!(self, StarbaseState::Unanchored | StarbaseState::Offline)
    }

    pub fn is_reinforced(&self) -> bool {
        matches!(self, StarbaseState::Reinforced)
    }
}

impl From<i64> for StarbaseState {
    fn from(code: i64) -> Self {
        match code {
            0 => StarbaseState::Unanchored,
            1 => StarbaseState::Offline,
            3 => StarbaseState::Reinforced,
            4 => StarbaseState::Online,
            other => StarbaseState::Other(other),
        }
    }
}

/// A corporation known to SeAT (`/corporation/all`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Corporation {
    #[serde(rename = "corporationID")]
    pub corporation_id: i64,
    pub ticker: String,
}

/// One starbase (player-owned tower) as last reported by SeAT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Starbase {
    #[serde(rename = "itemID")]
    pub item_id: i64,
    #[serde(rename = "moonName")]
    pub moon_name: String,
    #[serde(rename = "solarSystemName")]
    pub solar_system_name: String,
    #[serde(rename = "starbaseTypeName")]
    pub type_name: String,
    #[serde(rename = "state")]
    pub state_code: i64,
    #[serde(rename = "fuelBlocks")]
    pub fuel_blocks: f64,
    #[serde(rename = "baseFuelUsage")]
    pub fuel_usage: f64,
    pub strontium: f64,
    #[serde(rename = "baseStrontUsage")]
    pub stront_usage: f64,
    #[serde(with = "seat_time")]
    pub updated_at: NaiveDateTime,
    #[serde(rename = "stateTimeStamp", default)]
    pub state_timestamp: Option<String>,
}

impl Starbase {
    pub fn state(&self) -> StarbaseState {
        StarbaseState::from(self.state_code)
    }

    /// Hours of fuel left, or `None` when the tower burns nothing.
    pub fn fuel_hours(&self) -> Option<f64> {
        hours_left(self.fuel_blocks, self.fuel_usage)
    }

    /// Hours of strontium left, or `None` when the tower burns nothing.
    pub fn stront_hours(&self) -> Option<f64> {
        hours_left(self.strontium, self.stront_usage)
    }
}

fn hours_left(amount: f64, rate: f64) -> Option<f64> {
    if rate > 0.0 {
        Some(amount / rate)
    } else {
        None
    }
}

/// A customs office (POCO) owned by a corporation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    #[serde(rename = "itemID", default)]
    pub item_id: i64,
    #[serde(rename = "solarSystemName")]
    pub solar_system_name: String,
    #[serde(rename = "planetName")]
    pub planet_name: String,
    #[serde(rename = "planetTypeName")]
    pub planet_type_name: String,
}

/// Item type reference embedded in wallet transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeRef {
    #[serde(rename = "typeName")]
    pub type_name: String,
}

/// A corporation wallet transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: i64,
    pub quantity: i64,
    pub unit_price: f64,
    #[serde(with = "flag_or_bool")]
    pub is_buy: bool,
    #[serde(rename = "type")]
    pub item: TypeRef,
}

impl Transaction {
    pub fn total_price(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

/// Contract details as nested by SeAT under `detail`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractDetail {
    pub contract_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    #[serde(default)]
    pub reward: f64,
    #[serde(default)]
    pub collateral: f64,
    #[serde(default)]
    pub volume: f64,
    pub start_location_id: i64,
    pub end_location_id: i64,
}

/// A corporation contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub contract_id: i64,
    pub detail: ContractDetail,
}

/// A corporation industry job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryJob {
    pub job_id: i64,
    pub installer_id: i64,
    pub facility_id: i64,
    pub blueprint_type_id: i64,
    pub status: String,
    #[serde(with = "seat_time")]
    pub end_date: NaiveDateTime,
}

/// Serde adapter for SeAT's `YYYY-MM-DD HH:MM:SS` UTC timestamps.
pub mod seat_time {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for flags SeAT sends either as `0`/`1` or as JSON booleans.
pub mod flag_or_bool {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Int(i64),
    }

    pub fn serialize<S: Serializer>(value: &bool, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_bool(*value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        Ok(match Raw::deserialize(d)? {
            Raw::Bool(b) => b,
            Raw::Int(i) => i != 0,
        })
    }
}
