// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Starbase alert and re-arm sweeps against a real SQLite store.

mod common;

use common::{setup, TICKER};
use posmon_core::{StateStore, WarningKind};
use posmon_test_utils::fixtures;
use posmon_test_utils::harness::CORPORATION_ID;
use posmon_test_utils::mock_seat::{CORPORATIONS, STARBASES};

#[tokio::test]
async fn low_fuel_fires_once_and_rearms_after_refuel() {
    let (h, watcher) = setup().await;
    let now = fixtures::now();
    h.seat
        .set_corporations(vec![fixtures::corporation(CORPORATION_ID, TICKER)])
        .await;

    let mut tower = fixtures::starbase(1001);
    tower.fuel_blocks = 10.0;
    tower.fuel_usage = 1.0;
    h.seat.set_starbases(CORPORATION_ID, vec![tower.clone()]).await;

    let report = watcher.check_structures(now).await;
    assert_eq!(report.notifications, 1);
    assert_eq!(
        h.sink.sent_to("structures").await,
        vec!["POS Jita IV - Moon 1001 Amarr Control Tower will run out of fuel in 10 hours"]
    );
    assert!(!h.store.flag(1001, WarningKind::Fuel).await.unwrap());

    // Still low: nothing new.
    watcher.check_structures(now).await;
    assert_eq!(h.sink.sent_count().await, 1);

    // Refuelled: the clear sweep re-arms silently.
    tower.fuel_blocks = 1000.0;
    h.seat.set_starbases(CORPORATION_ID, vec![tower.clone()]).await;
    let cleared = watcher.clear_warnings(now).await;
    assert_eq!(cleared.rearmed, 1);
    assert_eq!(cleared.notifications, 0);
    assert!(h.store.flag(1001, WarningKind::Fuel).await.unwrap());
    watcher.check_structures(now).await;
    assert_eq!(h.sink.sent_count().await, 1);

    // Low again: fires a second time.
    tower.fuel_blocks = 10.0;
    h.seat.set_starbases(CORPORATION_ID, vec![tower]).await;
    watcher.check_structures(now).await;
    assert_eq!(h.sink.sent_count().await, 2);
}

#[tokio::test]
async fn hysteresis_sequence_emits_one_notification_per_entry() {
    let (h, watcher) = setup().await;
    let now = fixtures::now();
    h.seat
        .set_corporations(vec![fixtures::corporation(CORPORATION_ID, TICKER)])
        .await;

    for low in [true, true, false, true] {
        let mut tower = fixtures::starbase(1);
        tower.strontium = if low { 50.0 } else { 5000.0 };
        h.seat.set_starbases(CORPORATION_ID, vec![tower]).await;
        watcher.clear_warnings(now).await;
        watcher.check_structures(now).await;
    }

    let sent = h.sink.texts().await;
    assert_eq!(sent.len(), 2, "got {sent:?}");
    assert!(sent.iter().all(|t| t.contains("has only stront for 5 hours")));
}

#[tokio::test]
async fn reinforced_tower_reports_timer_and_low_fuel_only() {
    let (h, watcher) = setup().await;
    let now = fixtures::now();
    h.seat
        .set_corporations(vec![fixtures::corporation(CORPORATION_ID, TICKER)])
        .await;

    let mut tower = fixtures::starbase(7);
    tower.state_code = 3;
    tower.fuel_blocks = 10.0;
    tower.fuel_usage = 1.0;
    tower.strontium = 10.0;
    tower.updated_at = (now - chrono::Duration::days(3)).naive_utc();
    tower.state_timestamp = Some("2026-03-02 18:00:00".into());
    h.seat.set_starbases(CORPORATION_ID, vec![tower]).await;

    let report = watcher.check_structures(now).await;
    assert_eq!(report.notifications, 2);
    assert_eq!(
        h.sink.sent_to("structures").await,
        vec!["POS Jita IV - Moon 7 Amarr Control Tower will run out of fuel in 10 hours"]
    );
    assert_eq!(
        h.sink.sent_to("reinforced").await,
        vec!["POS Jita IV - Moon 7 Amarr Control Tower got reinforced, Timer 2026-03-02 18:00:00"]
    );
}

#[tokio::test]
async fn offline_and_unanchored_towers_stay_quiet() {
    let (h, watcher) = setup().await;
    let now = fixtures::now();
    h.seat
        .set_corporations(vec![fixtures::corporation(CORPORATION_ID, TICKER)])
        .await;

    let towers = [0, 1]
        .into_iter()
        .map(|state| {
            let mut tower = fixtures::starbase(100 + state);
            tower.state_code = state;
            tower.fuel_blocks = 0.0;
            tower.strontium = 0.0;
            tower.updated_at = (now - chrono::Duration::days(30)).naive_utc();
            tower
        })
        .collect();
    h.seat.set_starbases(CORPORATION_ID, towers).await;

    let report = watcher.check_structures(now).await;
    assert_eq!(report.notifications, 0);
    assert_eq!(h.sink.sent_count().await, 0);
}

#[tokio::test]
async fn warnings_are_reported_in_sweep_order() {
    let (h, watcher) = setup().await;
    let now = fixtures::now();
    h.seat
        .set_corporations(vec![fixtures::corporation(CORPORATION_ID, TICKER)])
        .await;

    let mut tower = fixtures::starbase(5);
    tower.fuel_blocks = 20.0;
    tower.fuel_usage = 1.0;
    tower.strontium = 10.0;
    tower.stront_usage = 1.0;
    tower.updated_at = (now - chrono::Duration::hours(13)).naive_utc();
    h.seat.set_starbases(CORPORATION_ID, vec![tower]).await;

    watcher.check_structures(now).await;
    let sent = h.sink.texts().await;
    assert_eq!(sent.len(), 3);
    assert!(sent[0].ends_with("is outdated."));
    assert!(sent[1].contains("will run out of fuel in 20 hours"));
    assert!(sent[2].contains("has only stront for 10 hours"));
}

#[tokio::test]
async fn upstream_failure_is_an_empty_pass() {
    let (h, watcher) = setup().await;
    h.seat.fail(CORPORATIONS, true).await;

    let report = watcher.check_structures(fixtures::now()).await;
    assert!(report.upstream_failed);
    assert_eq!(h.sink.sent_count().await, 0);
    assert_eq!(h.seat.calls(STARBASES).await, 0);
}

#[tokio::test]
async fn every_corporation_is_checked_with_its_own_id() {
    let (h, watcher) = setup().await;
    let now = fixtures::now();
    h.seat
        .set_corporations(vec![
            fixtures::corporation(1, "AAA"),
            fixtures::corporation(2, "BBB"),
        ])
        .await;
    let mut low = fixtures::starbase(20);
    low.fuel_blocks = 1.0;
    h.seat.set_starbases(2, vec![low]).await;

    watcher.check_structures(now).await;
    let sent = h.sink.texts().await;
    assert_eq!(sent.len(), 1);
    assert!(sent[0].starts_with("BBB "));
}

#[tokio::test]
async fn sink_failure_still_disarms_the_warning() {
    let (h, watcher) = setup().await;
    let now = fixtures::now();
    h.seat
        .set_corporations(vec![fixtures::corporation(CORPORATION_ID, TICKER)])
        .await;
    let mut tower = fixtures::starbase(9);
    tower.fuel_blocks = 1.0;
    h.seat.set_starbases(CORPORATION_ID, vec![tower]).await;
    h.sink.set_failing(true);

    let report = watcher.check_structures(now).await;
    assert_eq!(report.notifications, 1);
    assert_eq!(report.delivery_failures, 1);
    assert!(!h.store.flag(9, WarningKind::Fuel).await.unwrap());

    watcher.check_structures(now).await;
    assert_eq!(h.sink.sent_count().await, 1);
}
