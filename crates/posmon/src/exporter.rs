// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prometheus recorder for the counters in `posmon_watch::recording`.

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use posmon_watch::recording;
use tracing::{info, warn};

/// Where the process-wide recorder ended up.
pub(crate) enum Exporter {
    /// Scraped over HTTP by Prometheus.
    Listening(SocketAddr),
    /// Recorded in-process only; rendered into the log at shutdown.
    Local(PrometheusHandle),
    /// No recorder could be installed. Counters are dropped.
    Disabled,
}

/// Installs the Prometheus recorder globally and registers metric
/// descriptions.
///
/// Only one recorder can be installed per process. A failure is logged and
/// polling carries on without metrics.
pub(crate) fn install(listen: Option<SocketAddr>) -> Exporter {
    let installed: Result<Exporter, BuildError> = match listen {
        Some(addr) => PrometheusBuilder::new()
            .with_http_listener(addr)
            .install()
            .map(|()| Exporter::Listening(addr)),
        None => PrometheusBuilder::new()
            .install_recorder()
            .map(Exporter::Local),
    };

    match installed {
        Ok(exporter) => {
            recording::register_metrics();
            match &exporter {
                Exporter::Listening(addr) => {
                    info!(%addr, "prometheus exporter listening");
                }
                _ => info!("prometheus metrics recorder installed"),
            }
            exporter
        }
        Err(e) => {
            warn!(error = %e, "failed to install Prometheus recorder, metrics disabled");
            Exporter::Disabled
        }
    }
}

impl Exporter {
    /// Logs the final counter values when nothing scrapes them.
    pub(crate) fn report(&self) {
        if let Exporter::Local(handle) = self {
            let rendered = handle.render();
            let samples: Vec<&str> = rendered
                .lines()
                .filter(|line| line.starts_with("posmon_"))
                .collect();
            if !samples.is_empty() {
                info!(metrics = %samples.join("; "), "final counters");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use metrics_exporter_prometheus::PrometheusBuilder;
    use posmon_watch::recording;

    #[test]
    fn recorded_counters_render_with_stream_labels() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            recording::register_metrics();
            recording::record_sweep("structures");
            recording::record_sweep("structures");
            recording::record_notification("trades");
        });

        let rendered = handle.render();
        assert!(rendered.contains("posmon_sweeps_total{stream=\"structures\"} 2"));
        assert!(rendered.contains("posmon_notifications_total{stream=\"trades\"} 1"));
        assert!(rendered.contains("# HELP posmon_sweeps_total Detector passes completed"));
    }

    #[test]
    fn counters_without_a_recorder_are_dropped_silently() {
        recording::record_upstream_failure("contracts");
    }
}
