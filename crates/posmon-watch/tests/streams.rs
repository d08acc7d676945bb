// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trades, contracts and industry detectors: cursor and status axes.

mod common;

use common::{setup, AMARR_NAME, JITA_NAME};
use posmon_core::{StateStore, Stream, INITIAL_CURSOR};
use posmon_test_utils::fixtures;
use posmon_test_utils::mock_seat::{CONTRACTS, INDUSTRY, TRANSACTIONS};

#[tokio::test]
async fn trades_above_cursor_are_reported_in_id_order() {
    let (h, watcher) = setup().await;
    h.store.set_cursor(Stream::Trades, 5).await.unwrap();
    h.seat
        .set_transactions(vec![
            fixtures::transaction(3, 1, 1.0, false),
            fixtures::transaction(7, 2, 1_000_000.0, true),
            fixtures::transaction(6, 1500, 4.25, false),
        ])
        .await;

    let report = watcher.check_trades().await;
    assert_eq!(report.notifications, 2);
    assert_eq!(
        h.sink.sent_to("trades").await,
        vec![
            ":moneybag: Sold 1500x Tritanium at 4.25. Total: 6,375.00",
            ":moneybag: Bought 2x Tritanium at 1,000,000.00. Total: 2,000,000.00",
        ]
    );
    assert_eq!(h.store.cursor(Stream::Trades).await.unwrap(), 7);
}

#[tokio::test]
async fn reprocessing_a_seen_batch_emits_nothing() {
    let (h, watcher) = setup().await;
    h.seat
        .set_transactions(vec![
            fixtures::transaction(10, 1, 1.0, false),
            fixtures::transaction(11, 1, 1.0, false),
        ])
        .await;

    watcher.check_trades().await;
    watcher.check_trades().await;
    assert_eq!(h.sink.sent_count().await, 2);
    assert_eq!(h.store.cursor(Stream::Trades).await.unwrap(), 11);
}

#[tokio::test]
async fn ids_at_or_below_the_initial_cursor_are_never_new() {
    let (h, watcher) = setup().await;
    h.seat
        .set_transactions(vec![fixtures::transaction(INITIAL_CURSOR, 1, 1.0, true)])
        .await;

    assert_eq!(watcher.check_trades().await.notifications, 0);
    assert_eq!(h.store.cursor(Stream::Trades).await.unwrap(), INITIAL_CURSOR);
}

#[tokio::test]
async fn failed_feed_leaves_the_cursor_alone() {
    let (h, watcher) = setup().await;
    h.store.set_cursor(Stream::Trades, 40).await.unwrap();
    h.seat.fail(TRANSACTIONS, true).await;

    let report = watcher.check_trades().await;
    assert!(report.upstream_failed);
    assert_eq!(h.store.cursor(Stream::Trades).await.unwrap(), 40);

    h.seat.fail(TRANSACTIONS, false).await;
    h.seat
        .set_transactions(vec![fixtures::transaction(41, 1, 1.0, true)])
        .await;
    assert_eq!(watcher.check_trades().await.notifications, 1);
}

#[tokio::test]
async fn contract_status_change_reports_old_and_new() {
    let (h, watcher) = setup().await;
    h.store.set_cursor(Stream::Contracts, 10).await.unwrap();
    h.store
        .set_cached_status(Stream::Contracts, 10, "pending")
        .await
        .unwrap();
    h.seat
        .set_contracts(vec![fixtures::contract(10, "completed")])
        .await;

    let report = watcher.check_contracts().await;
    assert_eq!(report.notifications, 1);
    assert_eq!(
        h.sink.sent_to("contracts").await,
        vec![format!(
            ":airplane: Update: {JITA_NAME} --> {AMARR_NAME} from pending to completed"
        )]
    );
    assert_eq!(
        h.store
            .cached_status(Stream::Contracts, 10)
            .await
            .unwrap()
            .as_deref(),
        Some("completed")
    );

    watcher.check_contracts().await;
    assert_eq!(h.sink.sent_count().await, 1);
}

#[tokio::test]
async fn contract_above_cursor_with_changed_status_reports_update_then_new() {
    let (h, watcher) = setup().await;
    h.store.set_cursor(Stream::Contracts, 10).await.unwrap();
    h.store
        .set_cached_status(Stream::Contracts, 12, "outstanding")
        .await
        .unwrap();
    h.seat
        .set_contracts(vec![fixtures::contract(12, "in_progress")])
        .await;

    let report = watcher.check_contracts().await;
    assert_eq!(report.notifications, 2);
    assert_eq!(
        h.sink.texts().await,
        vec![
            format!(
                ":airplane: Update: {JITA_NAME} --> {AMARR_NAME} from outstanding to in_progress"
            ),
            format!(
                ":airplane: New: {JITA_NAME} --> {AMARR_NAME} | 12500 volume  15,000,000.00 reward  250,000,000.00 collateral"
            ),
        ]
    );
    assert_eq!(h.store.cursor(Stream::Contracts).await.unwrap(), 12);
    assert_eq!(
        h.store
            .cached_status(Stream::Contracts, 12)
            .await
            .unwrap()
            .as_deref(),
        Some("in_progress")
    );

    watcher.check_contracts().await;
    assert_eq!(h.sink.sent_count().await, 2);
}

#[tokio::test]
async fn new_contract_is_announced_and_its_status_cached_silently() {
    let (h, watcher) = setup().await;
    h.seat
        .set_contracts(vec![fixtures::contract(11, "outstanding")])
        .await;

    watcher.check_contracts().await;
    assert_eq!(
        h.sink.texts().await,
        vec![format!(
            ":airplane: New: {JITA_NAME} --> {AMARR_NAME} | 12500 volume  15,000,000.00 reward  250,000,000.00 collateral"
        )]
    );
    assert_eq!(h.store.cursor(Stream::Contracts).await.unwrap(), 11);
    assert_eq!(
        h.store
            .cached_status(Stream::Contracts, 11)
            .await
            .unwrap()
            .as_deref(),
        Some("outstanding")
    );
}

#[tokio::test]
async fn contracts_of_other_types_are_ignored() {
    let (h, watcher) = setup().await;
    let mut exchange = fixtures::contract(20, "outstanding");
    exchange.detail.kind = "item_exchange".into();
    h.seat.set_contracts(vec![exchange]).await;

    assert_eq!(watcher.check_contracts().await.notifications, 0);
    assert_eq!(
        h.store.cursor(Stream::Contracts).await.unwrap(),
        INITIAL_CURSOR
    );
    assert_eq!(
        h.store.cached_status(Stream::Contracts, 20).await.unwrap(),
        None
    );
}

#[tokio::test]
async fn station_names_are_looked_up_once() {
    let (h, watcher) = setup().await;
    h.seat
        .set_contracts(vec![
            fixtures::contract(30, "outstanding"),
            fixtures::contract(31, "outstanding"),
        ])
        .await;

    watcher.check_contracts().await;
    assert_eq!(h.sink.sent_count().await, 2);
    assert_eq!(h.names.calls(), 2, "one lookup per distinct station");
}

#[tokio::test]
async fn new_industry_job_includes_names_and_time_left() {
    let (h, watcher) = setup().await;
    h.seat
        .set_industry_jobs(vec![fixtures::job(500, "active")])
        .await;

    let report = watcher.check_industry(fixtures::now()).await;
    assert_eq!(report.notifications, 1);
    assert_eq!(
        h.sink.sent_to("industry").await,
        vec![format!(
            ":factory: New: Rifter Blueprint by Alice Builder in {JITA_NAME} ends 2026-03-02 14:30:00 timeleft 1d 2h 30m"
        )]
    );
    assert_eq!(h.store.cursor(Stream::Industry).await.unwrap(), 500);
}

#[tokio::test]
async fn industry_status_change_is_reported() {
    let (h, watcher) = setup().await;
    let now = fixtures::now();
    h.seat
        .set_industry_jobs(vec![fixtures::job(500, "active")])
        .await;
    watcher.check_industry(now).await;
    h.sink.clear().await;

    h.seat
        .set_industry_jobs(vec![fixtures::job(500, "delivered")])
        .await;
    watcher.check_industry(now).await;
    assert_eq!(
        h.sink.texts().await,
        vec![format!(
            ":factory: Update: Rifter Blueprint in {JITA_NAME} by Alice Builder active --> delivered"
        )]
    );
}

#[tokio::test]
async fn industry_job_above_cursor_with_changed_status_reports_update_then_new() {
    let (h, watcher) = setup().await;
    h.store.set_cursor(Stream::Industry, 499).await.unwrap();
    h.store
        .set_cached_status(Stream::Industry, 500, "ready")
        .await
        .unwrap();
    h.seat
        .set_industry_jobs(vec![fixtures::job(500, "active")])
        .await;

    watcher.check_industry(fixtures::now()).await;
    assert_eq!(
        h.sink.texts().await,
        vec![
            format!(
                ":factory: Update: Rifter Blueprint in {JITA_NAME} by Alice Builder ready --> active"
            ),
            format!(
                ":factory: New: Rifter Blueprint by Alice Builder in {JITA_NAME} ends 2026-03-02 14:30:00 timeleft 1d 2h 30m"
            ),
        ]
    );
    assert_eq!(h.store.cursor(Stream::Industry).await.unwrap(), 500);
}

#[tokio::test]
async fn streams_do_not_share_state() {
    let (h, watcher) = setup().await;
    h.seat
        .set_industry_jobs(vec![fixtures::job(77, "active")])
        .await;
    h.seat
        .set_contracts(vec![fixtures::contract(77, "outstanding")])
        .await;
    h.seat.fail(TRANSACTIONS, true).await;

    watcher.check_industry(fixtures::now()).await;
    watcher.check_contracts().await;
    watcher.check_trades().await;

    assert_eq!(h.sink.sent_to("industry").await.len(), 1);
    assert_eq!(h.sink.sent_to("contracts").await.len(), 1);
    assert_eq!(h.seat.calls(CONTRACTS).await, 1);
    assert_eq!(h.seat.calls(INDUSTRY).await, 1);
    assert_eq!(h.store.cursor(Stream::Trades).await.unwrap(), INITIAL_CURSOR);
}
