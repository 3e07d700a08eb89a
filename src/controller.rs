//! Strict alternation of turns between the human and the computer.

use crate::players::{Player, TurnReport};
use crate::table::{Epoch, GameTable};
use crate::view::View;
use anyhow::Result;
use noughts_rules::Outcome;
use noughts_rules::invariants::{ExclusiveHistoryInvariant, Invariant, MoveLedger};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Signals from outside the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Abandon the current game and start a fresh one.
    Reset,
    /// Stop playing.
    Quit,
}

/// Drives games between two players on a shared table.
///
/// The first player always moves first in each round. When its move ends
/// the game the second player's turn still runs and resolves as skipped.
pub struct TurnController<V> {
    table: GameTable,
    first: Player,
    second: Player,
    view: V,
}

impl<V: View> TurnController<V> {
    /// Creates a new controller.
    pub fn new(table: GameTable, first: Player, second: Player, view: V) -> Self {
        info!(
            first = %first.name(),
            second = %second.name(),
            "Creating turn controller"
        );
        Self {
            table,
            first,
            second,
            view,
        }
    }

    /// The shared table.
    pub fn table(&self) -> &GameTable {
        &self.table
    }

    /// The player who moves first each round.
    pub fn first(&self) -> &Player {
        &self.first
    }

    /// The player who moves second each round.
    pub fn second(&self) -> &Player {
        &self.second
    }

    /// The view the engine renders into.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Plays rounds until the board is full or someone wins.
    ///
    /// # Errors
    ///
    /// Propagates any failure from either player's turn.
    #[instrument(skip(self), fields(epoch = %self.table.epoch()))]
    pub async fn play_game(&mut self) -> Result<Outcome> {
        info!("Starting game");

        while !self.table.available_cells().is_empty() && !self.table.is_over() {
            let first = self.first.take_turn(&self.table, &mut self.view).await?;
            let second = self.second.take_turn(&self.table, &mut self.view).await?;
            self.debug_check_histories(first, second);

            debug!(
                first = ?self.first.history(),
                second = ?self.second.history(),
                "Round complete"
            );
        }

        let outcome = self.table.outcome();
        info!(%outcome, "Game finished");
        Ok(outcome)
    }

    /// Clears the table, both histories and the display.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Epoch {
        let epoch = self.table.reset();
        self.first.reset_history();
        self.second.reset_history();
        self.view.render(&self.table.board(), true);
        self.view.clear_result();
        epoch
    }

    /// Runs games until told to quit.
    ///
    /// A reset received mid-game drops the game in flight and starts over;
    /// after a finished game the loop waits for a reset or quit.
    ///
    /// # Errors
    ///
    /// Propagates any failure from a game.
    #[instrument(skip_all)]
    pub async fn run(&mut self, mut control: mpsc::UnboundedReceiver<Control>) -> Result<()> {
        loop {
            let signal = tokio::select! {
                outcome = self.play_game() => {
                    let outcome = outcome?;
                    debug!(%outcome, "Waiting for reset or quit");
                    control.recv().await
                }
                signal = control.recv() => signal,
            };

            match signal {
                Some(Control::Reset) => {
                    let epoch = self.reset();
                    info!(%epoch, "Game reset");
                }
                Some(Control::Quit) | None => {
                    info!("Leaving game loop");
                    return Ok(());
                }
            }
        }
    }

    fn debug_check_histories(&self, first: TurnReport, second: TurnReport) {
        if cfg!(debug_assertions) && first != TurnReport::Stale && second != TurnReport::Stale {
            let board = self.table.board();
            let histories = [
                (self.first.mark(), self.first.history()),
                (self.second.mark(), self.second.history()),
            ];
            let ledger = MoveLedger {
                board: &board,
                histories: &histories,
            };
            debug_assert!(
                ExclusiveHistoryInvariant::holds(&ledger),
                "{}",
                ExclusiveHistoryInvariant::description()
            );
        }
    }
}
