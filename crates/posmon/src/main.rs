// SPDX-FileCopyrightText: 2026 Posmon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! posmon - starbase and corporation activity monitor for SeAT.
//!
//! This is the binary entry point: the long-running poller (`serve`) and the
//! one-shot operator commands.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod app;
mod commands;
mod exporter;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use posmon_config::model::PosmonConfig;
use posmon_core::PosmonError;
use posmon_watch::Job;

use crate::app::App;
use crate::commands::Command;

/// posmon - starbase and corporation activity monitor for SeAT.
#[derive(Parser, Debug)]
#[command(name = "posmon", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the XDG hierarchy.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Poll SeAT and send notifications until interrupted.
    Serve,
    /// Run one pass of a check now
    /// (structures, clear-sweep, trades, contracts, industry).
    Trigger { job: Job },
    /// Re-arm every starbase warning.
    ClearWarnings,
    /// Find structures in a solar system.
    Find {
        #[command(subcommand)]
        target: FindTarget,
    },
    /// List the corporation's industry jobs.
    Jobs,
    /// Starbase queries.
    Pos {
        #[command(subcommand)]
        query: PosQuery,
    },
    /// Show state store health and stream cursors.
    Status,
}

#[derive(Subcommand, Debug)]
enum FindTarget {
    /// Towers anchored in SYSTEM.
    Towers { system: String },
    /// Customs offices in SYSTEM.
    Facilities { system: String },
}

#[derive(Subcommand, Debug)]
enum PosQuery {
    /// Towers with less than HOURS of fuel left.
    LowFuel { hours: String },
    /// Reinforced towers and their timers.
    Reinforced,
    /// Online towers without strontium.
    NoStront,
    /// Offline and unanchored towers.
    Offline,
}

impl Commands {
    /// The one-shot command, or `None` for `serve`.
    fn one_shot(self) -> Option<Command> {
        Some(match self {
            Commands::Serve => return None,
            Commands::Trigger { job } => Command::Trigger(job),
            Commands::ClearWarnings => Command::ClearWarnings,
            Commands::Find {
                target: FindTarget::Towers { system },
            } => Command::FindTowers(system),
            Commands::Find {
                target: FindTarget::Facilities { system },
            } => Command::FindFacilities(system),
            Commands::Jobs => Command::Jobs,
            Commands::Pos { query } => match query {
                PosQuery::LowFuel { hours } => Command::LowFuel(hours),
                PosQuery::Reinforced => Command::Reinforced,
                PosQuery::NoStront => Command::NoStront,
                PosQuery::Offline => Command::Offline,
            },
            Commands::Status => Command::Status,
        })
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => posmon_config::load_and_validate_path(path),
        None => posmon_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            posmon_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let result = match cli.command.one_shot() {
        None => serve::run_serve(config).await,
        Some(command) => run_once(config, command).await,
    };
    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run_once(config: PosmonConfig, command: Command) -> Result<(), PosmonError> {
    serve::init_tracing("warn");
    let app = App::build(&config).await?;
    for line in commands::execute(&app.watcher, command).await {
        println!("{line}");
    }
    app.shutdown().await;
    Ok(())
}
