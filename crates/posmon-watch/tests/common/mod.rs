// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(dead_code)]

use posmon_test_utils::TestHarness;
use posmon_watch::{WatchSettings, Watcher};

/// Ticker of the corporation the tests register.
pub const TICKER: &str = "POS";

pub const JITA_NAME: &str = "Jita IV - Moon 4 - Caldari Navy Assembly Plant";
pub const AMARR_NAME: &str = "Amarr VIII (Oris) - Emperor Family Academy";

pub async fn setup() -> (TestHarness, Watcher) {
    let harness = TestHarness::new().await.expect("harness should build");
    let watcher = watcher_for(&harness);
    (harness, watcher)
}

pub fn watcher_for(harness: &TestHarness) -> Watcher {
    let settings = WatchSettings::from_config(&harness.config).expect("corporation configured");
    Watcher::new(
        harness.seat.clone(),
        harness.store.clone(),
        harness.sink.clone(),
        harness.resolver.clone(),
        settings,
    )
}
