// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `posmon serve` command implementation.
//!
//! Builds the watcher, starts one poller per enabled check and runs until
//! SIGINT or SIGTERM. Pollers finish their current pass before the state
//! store is checkpointed and closed.

use posmon_config::model::PosmonConfig;
use posmon_core::PosmonError;
use posmon_watch::Scheduler;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::app::App;
use crate::exporter;

/// Runs the `posmon serve` command.
pub async fn run_serve(config: PosmonConfig) -> Result<(), PosmonError> {
    init_tracing(&config.daemon.log_level);
    info!(version = env!("CARGO_PKG_VERSION"), "starting posmon serve");

    let app = App::build(&config).await.inspect_err(|e| {
        error!(error = %e, "failed to initialize");
    })?;
    let metrics_exporter = exporter::install(config.daemon.metrics_listen);

    let scheduler = Scheduler::from_config(app.watcher.clone(), &config.checks);
    if scheduler.jobs().is_empty() {
        warn!("every check is disabled, nothing will be polled");
    }
    for (job, period) in scheduler.jobs() {
        info!(job = job.as_str(), interval_secs = period.as_secs(), "scheduling");
    }

    let cancel = install_signal_handler();
    let handles = scheduler.spawn(cancel.clone());
    cancel.cancelled().await;

    info!("waiting for running passes to finish");
    for handle in handles {
        if let Err(e) = handle.await {
            error!(error = %e, "poller task failed");
        }
    }

    app.shutdown().await;
    metrics_exporter.report();
    info!("posmon serve shutdown complete");
    Ok(())
}

/// Installs handlers for SIGTERM and SIGINT.
///
/// Returns a [`CancellationToken`] that is cancelled when either signal is
/// received. If the SIGTERM handler cannot be installed only Ctrl+C is
/// watched.
fn install_signal_handler() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();

    tokio::spawn(async move {
        let ctrl_c = tokio::signal::ctrl_c();

        #[cfg(unix)]
        {
            use tokio::signal::unix::{SignalKind, signal};
            match signal(SignalKind::terminate()) {
                Ok(mut sigterm) => {
                    tokio::select! {
                        _ = ctrl_c => {
                            info!("received SIGINT (Ctrl+C), initiating shutdown");
                        }
                        _ = sigterm.recv() => {
                            info!("received SIGTERM, initiating shutdown");
                        }
                    }
                }
                Err(e) => {
                    warn!(error = %e, "failed to install SIGTERM handler");
                    let _ = ctrl_c.await;
                    info!("received SIGINT (Ctrl+C), initiating shutdown");
                }
            }
        }

        #[cfg(not(unix))]
        {
            let _ = ctrl_c.await;
            info!("received Ctrl+C, initiating shutdown");
        }

        trigger.cancel();
        debug!("shutdown signal handler completed");
    });

    token
}

/// Initializes the tracing subscriber. `RUST_LOG` overrides the configured
/// level.
pub(crate) fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("posmon={log_level},warn")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .try_init();
}
