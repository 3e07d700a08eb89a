//! Command-line interface for noughts.

use clap::{Parser, Subcommand};

/// noughts - tic-tac-toe against a random computer opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Terminal tic-tac-toe against a random computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the game config file (defaults are used if it is missing)
    #[arg(short, long, global = true, default_value = "noughts.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer in the terminal
    Play {
        /// Computer thinking delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for the computer's moves
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play random games headlessly and report the results
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for both players' moves
        #[arg(long)]
        seed: Option<u64>,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_overrides() {
        let cli = Cli::parse_from(["noughts", "play", "--delay-ms", "0", "--seed", "3"]);
        assert_eq!(cli.config, std::path::PathBuf::from("noughts.toml"));
        match cli.command {
            Command::Play { delay_ms, seed } => {
                assert_eq!(delay_ms, Some(0));
                assert_eq!(seed, Some(3));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_simulate_with_global_config() {
        let cli = Cli::parse_from(["noughts", "simulate", "--games", "5", "--json", "-c", "x.toml"]);
        assert_eq!(cli.config, std::path::PathBuf::from("x.toml"));
        assert!(matches!(
            cli.command,
            Command::Simulate {
                games: 5,
                json: true,
                seed: None
            }
        ));
    }
}
