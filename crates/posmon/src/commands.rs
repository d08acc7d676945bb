// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-shot operator commands: manual triggers, queries and actions.

use chrono::Utc;
use posmon_watch::{Job, Watcher};

/// Operator commands that run once against a live [`Watcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Trigger(Job),
    ClearWarnings,
    FindTowers(String),
    FindFacilities(String),
    Jobs,
    LowFuel(String),
    Reinforced,
    NoStront,
    Offline,
    Status,
}

/// Runs `command` and returns the lines to print.
pub async fn execute(watcher: &Watcher, command: Command) -> Vec<String> {
    match command {
        Command::Trigger(job) => {
            let report = watcher.run(job, Utc::now()).await;
            vec![format!("{job}: {report}")]
        }
        Command::ClearWarnings => vec![watcher.clear_all_warnings().await],
        Command::FindTowers(system) => watcher.find_towers(&system).await,
        Command::FindFacilities(system) => watcher.find_facilities(&system).await,
        Command::Jobs => watcher.list_industry_jobs(Utc::now()).await,
        Command::LowFuel(hours) => watcher.low_fuel_towers(&hours).await,
        Command::Reinforced => watcher.reinforced_towers().await,
        Command::NoStront => watcher.towers_without_stront().await,
        Command::Offline => watcher.offline_towers().await,
        Command::Status => watcher.status().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use posmon_test_utils::harness::CORPORATION_ID;
    use posmon_test_utils::{TestHarness, fixtures};
    use posmon_watch::WatchSettings;

    fn watcher(h: &TestHarness) -> Watcher {
        Watcher::new(
            h.seat.clone(),
            h.store.clone(),
            h.sink.clone(),
            h.resolver.clone(),
            WatchSettings::from_config(&h.config).unwrap(),
        )
    }

    #[tokio::test]
    async fn trigger_runs_the_job_and_summarizes() {
        let h = TestHarness::new().await.unwrap();
        h.seat
            .set_transactions(vec![fixtures::transaction(2, 1, 1.0, true)])
            .await;

        let lines = execute(&watcher(&h), Command::Trigger(Job::Trades)).await;
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("trades: "), "got {lines:?}");
        assert_eq!(h.sink.sent_count().await, 1);
    }

    #[tokio::test]
    async fn queries_pass_their_arguments_through() {
        let h = TestHarness::new().await.unwrap();
        h.seat
            .set_corporations(vec![fixtures::corporation(CORPORATION_ID, "POS")])
            .await;
        h.seat
            .set_starbases(CORPORATION_ID, vec![fixtures::starbase(1)])
            .await;
        let watcher = watcher(&h);

        assert_eq!(
            execute(&watcher, Command::FindTowers("Jita".into())).await.len(),
            1
        );
        assert_eq!(
            execute(&watcher, Command::LowFuel("x".into())).await,
            vec!["Usage: pos low-fuel <hours>"]
        );
        assert_eq!(
            execute(&watcher, Command::ClearWarnings).await,
            vec!["Cleared all saved warning states."]
        );
    }
}
