//! Players and the agents that pick their moves.

mod computer;
mod human;

pub use computer::RandomAgent;
pub use human::HumanAgent;

use crate::table::{Epoch, GameTable, Placement};
use crate::view::View;
use anyhow::Result;
use noughts_rules::rules::completed_line;
use noughts_rules::{Mark, Outcome, Position};
use tracing::{debug, info, instrument};

/// Whether a seat is played by a person or by the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// Moves come from user input.
    Human,
    /// Moves are chosen automatically.
    Computer,
}

/// Produces the next position for a player.
#[async_trait::async_trait]
pub trait Agent: Send {
    /// Waits for this agent's next move.
    ///
    /// Returns `None` if the table moved on to a new epoch while waiting.
    async fn choose(&mut self, table: &GameTable, epoch: Epoch) -> Result<Option<Position>>;

    /// The kind of player this agent stands in for.
    fn kind(&self) -> PlayerKind;
}

/// What happened during one call to [`Player::take_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnReport {
    /// The game was already over; no move was requested.
    Skipped,
    /// The move resumed after a reset and was discarded.
    Stale,
    /// A mark was placed.
    Moved {
        /// Where the mark went.
        position: Position,
        /// Outcome derived right after the move.
        outcome: Outcome,
    },
}

/// A seat at the table: identity, move history and the agent behind it.
pub struct Player {
    mark: Mark,
    name: String,
    history: Vec<Position>,
    history_epoch: Epoch,
    agent: Box<dyn Agent>,
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("mark", &self.mark)
            .field("name", &self.name)
            .field("kind", &self.kind())
            .field("history", &self.history)
            .finish()
    }
}

impl Player {
    /// Creates a player with an empty history.
    pub fn new(mark: Mark, name: impl Into<String>, agent: impl Agent + 'static) -> Self {
        Self {
            mark,
            name: name.into(),
            history: Vec::new(),
            history_epoch: Epoch::default(),
            agent: Box::new(agent),
        }
    }

    /// The player's mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// The player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human or computer.
    pub fn kind(&self) -> PlayerKind {
        self.agent.kind()
    }

    /// Positions played this game, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Forgets this game's moves.
    pub fn reset_history(&mut self) {
        self.history.clear();
    }

    /// Plays one turn.
    ///
    /// Resolves immediately with [`TurnReport::Skipped`] if the game already
    /// ended. Otherwise waits for the agent, commits the move, renders the
    /// board and publishes a result if the move ended the game.
    ///
    /// # Errors
    ///
    /// Fails if the agent fails or the move lands on an occupied cell.
    #[instrument(skip_all, fields(player = %self.name, mark = %self.mark))]
    pub async fn take_turn(&mut self, table: &GameTable, view: &mut dyn View) -> Result<TurnReport> {
        if table.is_over() {
            debug!("Game already over, skipping turn");
            return Ok(TurnReport::Skipped);
        }

        let epoch = table.epoch();
        if epoch != self.history_epoch {
            // The table was reset without us; start from its fresh state.
            self.history.clear();
            self.history_epoch = epoch;
        }
        debug!(%epoch, "Awaiting move");
        let Some(position) = self.agent.choose(table, epoch).await? else {
            return Ok(TurnReport::Stale);
        };

        let board = match table.place(epoch, position, self.mark)? {
            Placement::Placed(board) => board,
            Placement::Stale => return Ok(TurnReport::Stale),
        };
        self.history.push(position);
        view.render(&board, false);
        debug!(%position, "Move placed");

        let outcome = Outcome::after_move(&board, self.mark, &self.history);
        if outcome.is_over() && table.conclude(epoch, outcome) {
            let message = match outcome.winner() {
                Some(_) => format!("{} wins the game!", self.name),
                None => "It's a draw!".to_string(),
            };
            let line = completed_line(&self.history);
            info!(%outcome, ?line, "Game over");
            view.show_result(&message);
        }

        Ok(TurnReport::Moved { position, outcome })
    }
}
