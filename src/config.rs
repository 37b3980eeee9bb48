// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Hashpad contributors

//! Command-line and environment configuration.

use clap::Parser;

use crate::logic::DigestAlgorithm;
use crate::ui::components::notifications::DEFAULT_TTL_SECS;

/// Hashpad: browse small desktop examples, starting with file hashing.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Route to open on startup (e.g. `/file-hash`).
    #[arg(long, env = "HASHPAD_ROUTE", default_value = "/")]
    pub route: String,

    /// Number of background worker threads (defaults to available parallelism, at least 2).
    #[arg(long, env = "HASHPAD_WORKERS", value_parser = clap::value_parser!(u16).range(1..))]
    pub workers: Option<u16>,

    /// Digest computed for selected files.
    #[arg(long, env = "HASHPAD_ALGORITHM", value_enum, default_value_t = DigestAlgorithm::Sha256)]
    pub algorithm: DigestAlgorithm,

    /// Seconds a notification stays on screen.
    #[arg(long, env = "HASHPAD_NOTIFICATION_SECS", default_value_t = DEFAULT_TTL_SECS)]
    pub notification_secs: f64,

    /// Increase log verbosity (use multiple times for more). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Resolved runtime settings consumed by the application.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub initial_route: String,
    pub workers: usize,
    pub algorithm: DigestAlgorithm,
    pub notification_secs: f64,
    pub log_level: log::LevelFilter,
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        let workers = cli.workers.map(usize::from).unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get().max(2))
                .unwrap_or(2)
        });
        Self {
            initial_route: cli.route,
            workers,
            algorithm: cli.algorithm,
            notification_secs: cli.notification_secs,
            log_level: level_for(cli.verbose),
        }
    }
}

/// Map `-v` repetitions to a default log level.
pub fn level_for(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}
