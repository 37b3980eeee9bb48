// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Hashpad contributors

mod app;
mod config;
mod logic;
mod models;
mod mvu;
mod ui;
mod utils;

use clap::Parser;

use crate::config::{AppConfig, Cli};

fn main() -> eframe::Result<()> {
    let config = AppConfig::from(Cli::parse());

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    app::run(config)
}
