//! Strictly Timeline - CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use strictly_timeline_tui::{
    Cli, Command, TimelineConfig, logging::init_logging, render_json, render_text, replay,
    terminal::run_tui,
};
use tracing::info;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TimelineConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    init_logging(&config)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_tui(&config),
        Command::Replay { cells, jump, json } => {
            info!(moves = cells.len(), ?jump, "Replaying moves");
            let history = replay(&cells, jump)?;
            let report = if json {
                render_json(&history)?
            } else {
                render_text(&history, *config.move_order())
            };
            println!("{}", report.trim_end());
            Ok(())
        }
    }
}
