// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pure condition evaluators over a starbase snapshot.
//!
//! Unanchored and offline towers never report low fuel, low strontium, or
//! stale data. Reinforced towers keep burning fuel, so only their strontium
//! and staleness checks are suppressed.

use chrono::{DateTime, Duration, Utc};
use posmon_config::model::ThresholdConfig;
use posmon_core::types::Starbase;
use posmon_core::WarningKind;

fn fuel_suppressed(starbase: &Starbase) -> bool {
    starbase.state().is_inactive()
}

fn checks_suppressed(starbase: &Starbase) -> bool {
    let state = starbase.state();
    state.is_inactive() || state.is_reinforced()
}

/// At or below `thresholds.fuel_hours` whole hours of fuel.
pub fn is_low_fuel(starbase: &Starbase, thresholds: &ThresholdConfig) -> bool {
    if fuel_suppressed(starbase) {
        return false;
    }
    starbase
        .fuel_hours()
        .is_some_and(|hours| hours.floor() <= f64::from(thresholds.fuel_hours))
}

/// At or below `thresholds.stront_hours` whole hours of strontium.
pub fn is_low_strontium(starbase: &Starbase, thresholds: &ThresholdConfig) -> bool {
    if checks_suppressed(starbase) {
        return false;
    }
    starbase
        .stront_hours()
        .is_some_and(|hours| hours.floor() <= f64::from(thresholds.stront_hours))
}

/// SeAT has not refreshed the tower for longer than `thresholds.outdated_hours`.
pub fn is_outdated(starbase: &Starbase, thresholds: &ThresholdConfig, now: DateTime<Utc>) -> bool {
    if checks_suppressed(starbase) {
        return false;
    }
    let cutoff = now - Duration::hours(i64::from(thresholds.outdated_hours));
    starbase.updated_at < cutoff.naive_utc()
}

pub fn is_reinforced(starbase: &Starbase) -> bool {
    starbase.state().is_reinforced()
}

/// Evaluates the condition guarded by the warning flag of `kind`.
pub fn evaluate(
    kind: WarningKind,
    starbase: &Starbase,
    thresholds: &ThresholdConfig,
    now: DateTime<Utc>,
) -> bool {
    match kind {
        WarningKind::Fuel => is_low_fuel(starbase, thresholds),
        WarningKind::Strontium => is_low_strontium(starbase, thresholds),
        WarningKind::Outdated => is_outdated(starbase, thresholds, now),
        WarningKind::Reinforced => is_reinforced(starbase),
    }
}
