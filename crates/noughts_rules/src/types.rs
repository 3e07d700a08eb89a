//! Core domain types for tic-tac-toe.

use crate::invariants::{BoardInvariants, InvariantSet};
use crate::Position;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// The symbol a player writes into a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// Mark O.
    O,
    /// Mark X.
    X,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::O => Mark::X,
            Mark::X => Mark::O,
        }
    }

    /// Textual glyph painted into a cell.
    pub fn glyph(self) -> char {
        match self {
            Mark::O => 'O',
            Mark::X => 'X',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// Errors that can occur when placing a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlaceError {
    /// Square is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Position),
}

/// 3x3 tic-tac-toe board.
///
/// Tracks the set of available (empty) positions alongside the squares. The
/// available list is kept in ascending index order so that seeded random
/// selection over it is reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
    /// Empty positions, ascending.
    available: Vec<Position>,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
            available: Position::ALL.to_vec(),
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Checks if a square is empty.
    pub fn is_available(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Positions that are still empty, in ascending index order.
    pub fn available_cells(&self) -> &[Position] {
        &self.available
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.available.is_empty()
    }

    /// Places `mark` at `pos`.
    ///
    /// A written cell is never overwritten: placing on an occupied square
    /// leaves the board untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::SquareOccupied`] if the position is taken.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), PlaceError> {
        if !self.is_available(pos) {
            return Err(PlaceError::SquareOccupied(pos));
        }

        self.squares[pos.index()] = Square::Occupied(mark);
        self.available.retain(|&p| p != pos);
        trace!(remaining = self.available.len(), "Mark placed");

        debug_assert!(BoardInvariants::check_all(self).is_ok());
        Ok(())
    }

    /// Clears all squares and makes every position available again.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based key.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for pos in Position::ALL {
            let symbol = match self.get(pos) {
                Square::Empty => char::from(b'1' + pos.index() as u8),
                Square::Occupied(mark) => mark.glyph(),
            };
            result.push(symbol);
            if pos.col() < 2 {
                result.push('|');
            } else if pos.row() < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
