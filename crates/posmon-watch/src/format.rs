// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notification text and value formatting.

use chrono::{Duration, NaiveDateTime};
use posmon_core::types::{seat_time, ContractDetail, Starbase, Transaction};
use posmon_core::WarningKind;

/// Formats an ISK amount with thousands separators and two decimals,
/// e.g. `1234567.891` becomes `1,234,567.89`.
pub fn isk(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && !fixed.trim_matches(['0', '.']).is_empty() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac}")
}

/// Formats a remaining duration as `{d}d {h}h {m}m`.
///
/// Days are floored, so an already elapsed duration of 30 minutes renders
/// as `-1d 23h 30m`.
pub fn time_left(delta: Duration) -> String {
    let total = delta.num_seconds();
    let days = total.div_euclid(86_400);
    let rest = total.rem_euclid(86_400);
    format!("{days}d {}h {}m", rest / 3600, (rest % 3600) / 60)
}

pub fn seat_timestamp(value: &NaiveDateTime) -> String {
    value.format(seat_time::FORMAT).to_string()
}

/// Rounds to the nearest hour, ties to even: 12.5 hours reads as 12.
pub(crate) fn whole_hours(hours: Option<f64>) -> i64 {
    hours.map(|h| h.round_ties_even() as i64).unwrap_or(0)
}

/// Alert text for a starbase warning of `kind`.
pub fn structure_warning(kind: WarningKind, ticker: &str, starbase: &Starbase) -> String {
    let tower = format!("{ticker} {} {}", starbase.moon_name, starbase.type_name);
    match kind {
        WarningKind::Outdated => format!("{tower} is outdated."),
        WarningKind::Fuel => format!(
            "{tower} will run out of fuel in {} hours",
            whole_hours(starbase.fuel_hours())
        ),
        WarningKind::Reinforced => format!(
            "{tower} got reinforced, Timer {}",
            starbase.state_timestamp.as_deref().unwrap_or("unknown")
        ),
        WarningKind::Strontium => format!(
            "{tower} has only stront for {} hours",
            whole_hours(starbase.stront_hours())
        ),
    }
}

pub fn trade(transaction: &Transaction) -> String {
    let action = if transaction.is_buy { "Bought" } else { "Sold" };
    format!(
        ":moneybag: {action} {}x {} at {}. Total: {}",
        transaction.quantity,
        transaction.item.type_name,
        isk(transaction.unit_price),
        isk(transaction.total_price())
    )
}

pub fn contract_new(source: &str, destination: &str, detail: &ContractDetail) -> String {
    format!(
        ":airplane: New: {source} --> {destination} | {} volume  {} reward  {} collateral",
        detail.volume,
        isk(detail.reward),
        isk(detail.collateral)
    )
}

pub fn contract_update(source: &str, destination: &str, old: &str, new: &str) -> String {
    format!(":airplane: Update: {source} --> {destination} from {old} to {new}")
}

pub fn job_new(type_name: &str, installer: &str, location: &str, end: &str, left: &str) -> String {
    format!(":factory: New: {type_name} by {installer} in {location} ends {end} timeleft {left}")
}

pub fn job_update(type_name: &str, location: &str, installer: &str, old: &str, new: &str) -> String {
    format!(":factory: Update: {type_name} in {location} by {installer} {old} --> {new}")
}

pub fn job_listing(type_name: &str, location: &str, installer: &str, end: &str, left: &str) -> String {
    format!(":factory: {type_name} in {location} by {installer}, ends on {end}, timeleft: {left}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use posmon_test_utils::fixtures;

    #[test]
    fn isk_groups_thousands() {
        assert_eq!(isk(0.0), "0.00");
        assert_eq!(isk(5.5), "5.50");
        assert_eq!(isk(999.999), "1,000.00");
        assert_eq!(isk(1234567.891), "1,234,567.89");
        assert_eq!(isk(-42000.0), "-42,000.00");
        assert_eq!(isk(-0.001), "0.00");
    }

    #[test]
    fn time_left_splits_days_hours_minutes() {
        assert_eq!(time_left(Duration::minutes(26 * 60 + 30)), "1d 2h 30m");
        assert_eq!(time_left(Duration::seconds(59)), "0d 0h 0m");
        assert_eq!(time_left(Duration::minutes(-30)), "-1d 23h 30m");
    }

    #[test]
    fn structure_warnings() {
        let mut sb = fixtures::starbase(7);
        sb.fuel_blocks = 10.0;
        sb.fuel_usage = 1.0;
        sb.strontium = 125.0;
        sb.stront_usage = 10.0;
        sb.state_timestamp = Some("2026-03-02 18:00:00".into());

        assert_eq!(
            structure_warning(WarningKind::Outdated, "POS", &sb),
            "POS Jita IV - Moon 7 Amarr Control Tower is outdated."
        );
        assert_eq!(
            structure_warning(WarningKind::Fuel, "POS", &sb),
            "POS Jita IV - Moon 7 Amarr Control Tower will run out of fuel in 10 hours"
        );
        assert_eq!(
            structure_warning(WarningKind::Reinforced, "POS", &sb),
            "POS Jita IV - Moon 7 Amarr Control Tower got reinforced, Timer 2026-03-02 18:00:00"
        );
        assert_eq!(
            structure_warning(WarningKind::Strontium, "POS", &sb),
            "POS Jita IV - Moon 7 Amarr Control Tower has only stront for 12 hours"
        );
    }

    #[test]
    fn half_hours_round_to_even() {
        assert_eq!(whole_hours(Some(12.5)), 12);
        assert_eq!(whole_hours(Some(13.5)), 14);
        assert_eq!(whole_hours(Some(13.49)), 13);
        assert_eq!(whole_hours(None), 0);

        let mut sb = fixtures::starbase(7);
        sb.strontium = 135.0;
        sb.stront_usage = 10.0;
        assert!(
            structure_warning(WarningKind::Strontium, "POS", &sb)
                .ends_with("has only stront for 14 hours")
        );
    }

    #[test]
    fn trade_lines() {
        let sold = fixtures::transaction(6, 1500, 4.25, false);
        assert_eq!(
            trade(&sold),
            ":moneybag: Sold 1500x Tritanium at 4.25. Total: 6,375.00"
        );
        let bought = fixtures::transaction(7, 2, 1_000_000.0, true);
        assert_eq!(
            trade(&bought),
            ":moneybag: Bought 2x Tritanium at 1,000,000.00. Total: 2,000,000.00"
        );
    }

    #[test]
    fn contract_lines() {
        let c = fixtures::contract(1, "outstanding");
        assert_eq!(
            contract_new("Jita", "Amarr", &c.detail),
            ":airplane: New: Jita --> Amarr | 12500 volume  15,000,000.00 reward  250,000,000.00 collateral"
        );
        assert_eq!(
            contract_update("Jita", "Amarr", "outstanding", "in_progress"),
            ":airplane: Update: Jita --> Amarr from outstanding to in_progress"
        );
    }
}
