//! Game outcome derived from the board and the mover's history.

use crate::rules::{evaluate, is_draw};
use crate::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// Game is ongoing.
    #[default]
    #[display("ongoing")]
    Ongoing,
    /// Game ended in a win.
    #[display("{_0} wins")]
    Win(Mark),
    /// Game ended in a draw.
    #[display("draw")]
    Draw,
}

impl Outcome {
    /// Derives the outcome after `mark` has moved.
    ///
    /// The mover's history is checked for a line first; the draw rule only
    /// applies when that fails.
    #[instrument(skip(board))]
    pub fn after_move(board: &Board, mark: Mark, history: &[Position]) -> Self {
        if evaluate(history) {
            Outcome::Win(mark)
        } else if is_draw(board, history) {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }

    /// Returns true once the game has a winner or is drawn.
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// The winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(mark),
            _ => None,
        }
    }
}
