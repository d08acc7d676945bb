// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Operator queries and actions.
//!
//! Every query returns the lines to show the operator: matches, a "found
//! none" line, a usage line for bad arguments, or an error line when SeAT
//! cannot be reached.

use chrono::{DateTime, Utc};
use posmon_core::types::{Corporation, Starbase, StarbaseState};
use posmon_core::{HealthStatus, PluginAdapter, PosmonError, SeatApi, StateStore, Stream};

use crate::format;
use crate::watcher::Watcher;

fn upstream_error(e: &PosmonError) -> Vec<String> {
    vec![format!("Could not reach SeAT: {e}")]
}

fn tower_line(corporation: &Corporation, starbase: &Starbase) -> String {
    format!(
        "**Location:** {} **Type:** {} **Corp:** {}",
        starbase.moon_name, starbase.type_name, corporation.ticker
    )
}

impl Watcher {
    /// Towers matching `keep`, formatted by `line`, or `none` when nothing matched.
    async fn tower_query(
        &self,
        keep: impl Fn(&Starbase) -> bool,
        line: impl Fn(&Corporation, &Starbase) -> String,
        none: String,
    ) -> Vec<String> {
        let towers = match self.towers().await {
            Ok(towers) => towers,
            Err(e) => return upstream_error(&e),
        };
        let lines: Vec<String> = towers
            .iter()
            .flat_map(|(corp, starbases)| {
                starbases
                    .iter()
                    .filter(|sb| keep(sb))
                    .map(|sb| line(corp, sb))
                    .collect::<Vec<_>>()
            })
            .collect();
        if lines.is_empty() { vec![none] } else { lines }
    }

    /// Towers anchored in `system` (case-insensitive).
    pub async fn find_towers(&self, system: &str) -> Vec<String> {
        let system = system.trim();
        if system.is_empty() {
            return vec!["Usage: find towers <system>".to_string()];
        }
        self.tower_query(
            |sb| sb.solar_system_name.eq_ignore_ascii_case(system),
            tower_line,
            format!("Found no towers in {system}"),
        )
        .await
    }

    /// Customs offices in `system` (case-insensitive).
    pub async fn find_facilities(&self, system: &str) -> Vec<String> {
        let system = system.trim();
        if system.is_empty() {
            return vec!["Usage: find facilities <system>".to_string()];
        }
        let corporations = match self.seat.corporations().await {
            Ok(corporations) => corporations,
            Err(e) => return upstream_error(&e),
        };

        let mut lines = Vec::new();
        for corporation in &corporations {
            let facilities = match self.seat.facilities(corporation.corporation_id).await {
                Ok(facilities) => facilities,
                Err(e) => {
                    tracing::warn!(
                        corporation_id = corporation.corporation_id,
                        error = %e,
                        "skipping corporation, customs offices unavailable"
                    );
                    continue;
                }
            };
            lines.extend(
                facilities
                    .iter()
                    .filter(|f| f.solar_system_name.eq_ignore_ascii_case(system))
                    .map(|f| {
                        format!(
                            "**Location:** {} **Type:** {} **Corp:** {}",
                            f.planet_name, f.planet_type_name, corporation.ticker
                        )
                    }),
            );
        }
        if lines.is_empty() {
            vec![format!("Found no customs offices in {system}")]
        } else {
            lines
        }
    }

    /// Every industry job in the watched corporation's current window.
    pub async fn list_industry_jobs(&self, now: DateTime<Utc>) -> Vec<String> {
        let mut jobs = match self.seat.industry_jobs(self.settings.corporation_id).await {
            Ok(jobs) => jobs,
            Err(e) => return upstream_error(&e),
        };
        jobs.sort_by_key(|j| j.job_id);

        let mut lines = Vec::with_capacity(jobs.len());
        for job in &jobs {
            let names = self.job_names(job).await;
            lines.push(format::job_listing(
                &names.type_name,
                &names.location,
                &names.installer,
                &format::seat_timestamp(&job.end_date),
                &format::time_left(job.end_date.and_utc() - now),
            ));
        }
        if lines.is_empty() {
            vec!["Found no industry jobs.".to_string()]
        } else {
            lines
        }
    }

    /// Towers with fewer than `hours` (but more than zero) whole hours of fuel.
    pub async fn low_fuel_towers(&self, hours: &str) -> Vec<String> {
        let Ok(limit) = hours.trim().parse::<u32>() else {
            return vec!["Usage: pos low-fuel <hours>".to_string()];
        };
        let limit = f64::from(limit);
        self.tower_query(
            |sb| {
                sb.fuel_hours()
                    .map(f64::floor)
                    .is_some_and(|left| left > 0.0 && left < limit)
            },
            |corp, sb| {
                format!(
                    "{} **Hours of fuel left:** {}",
                    tower_line(corp, sb),
                    format::whole_hours(sb.fuel_hours())
                )
            },
            format!("Found no towers running out of fuel within {limit} hours."),
        )
        .await
    }

    pub async fn reinforced_towers(&self) -> Vec<String> {
        self.tower_query(
            |sb| sb.state().is_reinforced(),
            |corp, sb| {
                format!(
                    "{} - {} - {}. Timer: {}",
                    sb.moon_name,
                    sb.type_name,
                    corp.ticker,
                    sb.state_timestamp.as_deref().unwrap_or("unknown")
                )
            },
            "Did not find any reinforced towers.".to_string(),
        )
        .await
    }

    /// Online towers with an empty strontium bay.
    pub async fn towers_without_stront(&self) -> Vec<String> {
        self.tower_query(
            |sb| sb.strontium <= 0.0 && sb.state() == StarbaseState::Online,
            |corp, sb| format!("{} has no strontium.", tower_line(corp, sb)),
            "Found no towers without stront.".to_string(),
        )
        .await
    }

    /// Offline and unanchored towers.
    pub async fn offline_towers(&self) -> Vec<String> {
        self.tower_query(
            |sb| sb.state().is_inactive(),
            tower_line,
            "Found no offline towers.".to_string(),
        )
        .await
    }

    /// Removes every stored warning flag so all warnings may fire again.
    pub async fn clear_all_warnings(&self) -> String {
        match self.store.clear_all_flags().await {
            Ok(removed) => {
                tracing::info!(removed, "cleared all warning states");
                "Cleared all saved warning states.".to_string()
            }
            Err(e) => format!("Failed to clear warning states: {e}"),
        }
    }

    /// Store health and the current stream cursors.
    pub async fn status(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(Stream::ALL.len() + 1);
        let health = match self.store.health_check().await {
            Ok(HealthStatus::Healthy) => "healthy".to_string(),
            Ok(HealthStatus::Degraded(why)) => format!("degraded ({why})"),
            Ok(HealthStatus::Unhealthy(why)) => format!("unhealthy ({why})"),
            Err(e) => format!("unavailable ({e})"),
        };
        lines.push(format!("state store: {health}"));
        for stream in Stream::ALL {
            match self.store.cursor(stream).await {
                Ok(cursor) => lines.push(format!("{stream} cursor: {cursor}")),
                Err(e) => lines.push(format!("{stream} cursor: unavailable ({e})")),
            }
        }
        lines
    }
}
