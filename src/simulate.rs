//! Headless games between two random agents.

use crate::config::GameConfig;
use crate::controller::TurnController;
use crate::players::{Player, RandomAgent};
use crate::table::GameTable;
use crate::view::TracingView;
use anyhow::Result;
use noughts_rules::Outcome;
use serde::Serialize;
use std::time::Duration;
use tracing::{info, instrument};

/// Outcome counts over a batch of games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Games played.
    pub games: u32,
    /// Wins for the first seat.
    pub first_wins: u32,
    /// Wins for the second seat.
    pub second_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: {} first-player wins, {} second-player wins, {} draws",
            self.games, self.first_wins, self.second_wins, self.draws
        )
    }
}

/// Plays `games` games through the turn controller with no thinking delay.
///
/// Seats use the configured names and marks. With a seed, the second seat's
/// generator is derived from it so both seats stay reproducible.
///
/// # Errors
///
/// Propagates any failure from a game.
#[instrument(skip(config))]
pub async fn run_simulation(config: &GameConfig, games: u32) -> Result<Tally> {
    let seed = *config.seed();
    let first = Player::new(
        *config.human_mark(),
        config.human_name(),
        RandomAgent::new(Duration::ZERO, seed),
    );
    let second = Player::new(
        *config.computer_mark(),
        config.computer_name(),
        RandomAgent::new(Duration::ZERO, seed.map(|s| s.wrapping_add(1))),
    );

    let mut controller = TurnController::new(GameTable::new(), first, second, TracingView);
    let mut tally = Tally::default();

    for game in 0..games {
        if game > 0 {
            controller.reset();
        }
        match controller.play_game().await? {
            Outcome::Win(mark) if mark == controller.first().mark() => tally.first_wins += 1,
            Outcome::Win(_) => tally.second_wins += 1,
            Outcome::Draw => tally.draws += 1,
            Outcome::Ongoing => anyhow::bail!("Game {} ended without an outcome", game),
        }
        tally.games += 1;
    }

    info!(%tally, "Simulation complete");
    Ok(tally)
}
