//! `beacon`: validate JSON documents against the built-in schema catalog.

#![forbid(unsafe_code)]

mod catalog;
mod cli;
mod commands;
mod config;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;
use crate::config::Settings;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(commands::EXIT_ERROR)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let settings = Settings::load(&cli.global)?;
    beacon_log::init_with(settings.log.clone())?;
    tracing::debug!(?settings, "configuration loaded");

    let stdout = std::io::stdout();
    commands::dispatch(cli.command, &settings, &mut stdout.lock())
}
