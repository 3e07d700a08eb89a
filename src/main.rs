//! noughts - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use noughts::GameConfig;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play { delay_ms, seed } => {
            let mut config = config;
            if let Some(delay_ms) = delay_ms {
                config = config.with_thinking_delay_ms(delay_ms);
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            noughts::run_tui(config).await
        }
        Command::Simulate { games, seed, json } => {
            let config = match seed {
                Some(seed) => config.with_seed(seed),
                None => config,
            };
            run_simulation(config, games, json).await
        }
    }
}

/// Run headless games and print the tally
#[instrument(skip(config))]
async fn run_simulation(config: GameConfig, games: u32, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(games, "Starting simulation");
    let tally = noughts::run_simulation(&config, games).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("{tally}");
    }
    Ok(())
}
