// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builders for SeAT wire records with sensible defaults.
//!
//! Timestamps are anchored to [`now`] so tests that pass the same instant to
//! the detectors are deterministic.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use posmon_core::types::{
    Contract, ContractDetail, Corporation, Facility, IndustryJob, Starbase, Transaction, TypeRef,
};

/// Station used as contract origin and job facility.
pub const JITA_STATION: i64 = 60003760;
/// Station used as contract destination.
pub const AMARR_STATION: i64 = 60008494;
/// Installer of fixture industry jobs.
pub const INSTALLER: i64 = 90000001;
/// Blueprint type of fixture industry jobs.
pub const BLUEPRINT: i64 = 1000;

/// The fixed instant fixture records are relative to: 2026-03-01 12:00:00 UTC.
pub fn now() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2026, 3, 1)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

pub fn corporation(id: i64, ticker: &str) -> Corporation {
    Corporation {
        corporation_id: id,
        ticker: ticker.to_string(),
    }
}

/// An online tower with 100 hours of fuel and 50 hours of strontium,
/// updated at [`now`].
pub fn starbase(item_id: i64) -> Starbase {
    Starbase {
        item_id,
        moon_name: format!("Jita IV - Moon {item_id}"),
        solar_system_name: "Jita".to_string(),
        type_name: "Amarr Control Tower".to_string(),
        state_code: 4,
        fuel_blocks: 1000.0,
        fuel_usage: 10.0,
        strontium: 500.0,
        stront_usage: 10.0,
        updated_at: now().naive_utc(),
        state_timestamp: None,
    }
}

pub fn facility(system: &str, planet: &str) -> Facility {
    Facility {
        item_id: 0,
        solar_system_name: system.to_string(),
        planet_name: planet.to_string(),
        planet_type_name: "Planet (Barren)".to_string(),
    }
}

pub fn transaction(id: i64, quantity: i64, unit_price: f64, is_buy: bool) -> Transaction {
    Transaction {
        transaction_id: id,
        quantity,
        unit_price,
        is_buy,
        item: TypeRef {
            type_name: "Tritanium".to_string(),
        },
    }
}

/// A courier contract from [`JITA_STATION`] to [`AMARR_STATION`].
pub fn contract(id: i64, status: &str) -> Contract {
    Contract {
        contract_id: id,
        detail: ContractDetail {
            contract_id: id,
            kind: "courier".to_string(),
            status: status.to_string(),
            reward: 15_000_000.0,
            collateral: 250_000_000.0,
            volume: 12_500.0,
            start_location_id: JITA_STATION,
            end_location_id: AMARR_STATION,
        },
    }
}

/// A job installed by [`INSTALLER`] that ends 1d 2h 30m after [`now`].
pub fn job(id: i64, status: &str) -> IndustryJob {
    IndustryJob {
        job_id: id,
        installer_id: INSTALLER,
        facility_id: JITA_STATION,
        blueprint_type_id: BLUEPRINT,
        status: status.to_string(),
        end_date: (now() + Duration::minutes(26 * 60 + 30)).naive_utc(),
    }
}
