// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Metric registration and recording helpers.
//!
//! Uses the metrics-rs facade; nothing is exported unless the binary
//! installs a recorder.

use metrics::describe_counter;

/// Register all posmon metric descriptions.
pub fn register_metrics() {
    describe_counter!(
        "posmon_notifications_total",
        "Notifications handed to the sink"
    );
    describe_counter!(
        "posmon_upstream_failures_total",
        "Detector passes that could not read the upstream feed"
    );
    describe_counter!("posmon_sweeps_total", "Detector passes completed");
}

pub fn record_notification(stream: &str) {
    metrics::counter!("posmon_notifications_total", "stream" => stream.to_string()).increment(1);
}

pub fn record_upstream_failure(stream: &str) {
    metrics::counter!("posmon_upstream_failures_total", "stream" => stream.to_string())
        .increment(1);
}

pub fn record_sweep(stream: &str) {
    metrics::counter!("posmon_sweeps_total", "stream" => stream.to_string()).increment(1);
}
