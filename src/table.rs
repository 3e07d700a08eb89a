//! Shared game table: the board, its outcome, and the game epoch.
//!
//! Players and the turn controller hold clones of one [`GameTable`]. Every
//! move is tagged with the epoch it started in; a reset bumps the epoch, so a
//! move that resumes after a reset is discarded instead of leaking into the
//! fresh game.

use noughts_rules::{Board, Mark, Outcome, PlaceError, Position};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument};

/// Game generation counter, bumped by every reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, derive_more::Display)]
#[display("epoch {_0}")]
pub struct Epoch(u64);

impl Epoch {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Result of committing a move to the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// The mark was written; carries the board after the move.
    Placed(Board),
    /// The move belonged to an earlier epoch and was dropped.
    Stale,
}

#[derive(Debug, Default)]
struct TableState {
    board: Board,
    epoch: Epoch,
    outcome: Outcome,
}

/// Clonable handle to the board shared by both players.
#[derive(Debug, Clone, Default)]
pub struct GameTable {
    inner: Arc<Mutex<TableState>>,
}

impl GameTable {
    /// Creates a table with an empty board at the first epoch.
    pub fn new() -> Self {
        Self::default()
    }

    // The lock is only held for synchronous bookkeeping, so a poisoned
    // state is still consistent.
    fn state(&self) -> MutexGuard<'_, TableState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The current game epoch.
    pub fn epoch(&self) -> Epoch {
        self.state().epoch
    }

    /// Snapshot of the board.
    pub fn board(&self) -> Board {
        self.state().board.clone()
    }

    /// Positions still open, ascending.
    pub fn available_cells(&self) -> Vec<Position> {
        self.state().board.available_cells().to_vec()
    }

    /// Checks whether `pos` is still open.
    pub fn is_available(&self, pos: Position) -> bool {
        self.state().board.is_available(pos)
    }

    /// The outcome recorded for the current epoch.
    pub fn outcome(&self) -> Outcome {
        self.state().outcome
    }

    /// Returns true once the current game has a winner or is drawn.
    pub fn is_over(&self) -> bool {
        self.outcome().is_over()
    }

    /// Writes `mark` at `pos` if `epoch` is still current.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::SquareOccupied`] if the cell is taken in the
    /// current epoch.
    #[instrument(skip(self))]
    pub fn place(&self, epoch: Epoch, pos: Position, mark: Mark) -> Result<Placement, PlaceError> {
        let mut state = self.state();
        if state.epoch != epoch {
            debug!(current = %state.epoch, "Discarding stale move");
            return Ok(Placement::Stale);
        }
        state.board.place(pos, mark)?;
        Ok(Placement::Placed(state.board.clone()))
    }

    /// Records a terminal outcome for `epoch`. Returns false if stale.
    #[instrument(skip(self))]
    pub fn conclude(&self, epoch: Epoch, outcome: Outcome) -> bool {
        let mut state = self.state();
        if state.epoch != epoch {
            debug!(current = %state.epoch, "Discarding stale outcome");
            return false;
        }
        state.outcome = outcome;
        true
    }

    /// Clears the board and outcome and starts a new epoch.
    #[instrument(skip(self))]
    pub fn reset(&self) -> Epoch {
        let mut state = self.state();
        state.board.reset();
        state.outcome = Outcome::Ongoing;
        state.epoch = state.epoch.next();
        info!(epoch = %state.epoch, "Table reset");
        state.epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_in_current_epoch() {
        let table = GameTable::new();
        let epoch = table.epoch();

        let placement = table.place(epoch, Position::Center, Mark::O).unwrap();
        let Placement::Placed(board) = placement else {
            panic!("expected placement");
        };
        assert!(!board.is_available(Position::Center));
        assert!(!table.is_available(Position::Center));
    }

    #[test]
    fn test_stale_epoch_is_discarded() {
        let table = GameTable::new();
        let old = table.epoch();
        let new = table.reset();
        assert_ne!(old, new);

        let placement = table.place(old, Position::Center, Mark::X).unwrap();
        assert_eq!(placement, Placement::Stale);
        assert_eq!(table.available_cells().len(), 9);

        assert!(!table.conclude(old, Outcome::Win(Mark::X)));
        assert_eq!(table.outcome(), Outcome::Ongoing);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let table = GameTable::new();
        let epoch = table.epoch();
        table.place(epoch, Position::TopLeft, Mark::O).unwrap();

        let err = table.place(epoch, Position::TopLeft, Mark::X).unwrap_err();
        assert_eq!(err, PlaceError::SquareOccupied(Position::TopLeft));
    }

    #[test]
    fn test_reset_clears_outcome_and_board() {
        let table = GameTable::new();
        let epoch = table.epoch();
        table.place(epoch, Position::TopLeft, Mark::O).unwrap();
        assert!(table.conclude(epoch, Outcome::Draw));
        assert!(table.is_over());

        table.reset();
        assert!(!table.is_over());
        assert_eq!(table.board(), Board::new());
    }
}
