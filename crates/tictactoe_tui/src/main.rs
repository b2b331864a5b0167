//! Tic-tac-toe - terminal entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tictactoe_tui::cli::{Cli, Command};
use tictactoe_tui::{TuiConfig, logging, replay, terminal};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = TuiConfig::load(cli.config.as_deref())?;
    if let Some(policy) = cli.turn_policy {
        config.set_turn_policy(policy.into());
    }

    logging::init(&config)?;
    info!(?config, "Configuration loaded");

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => terminal::run(&config),
        Command::Replay { moves, jump, json } => replay::run(&moves, jump, json, &config),
    }
}
