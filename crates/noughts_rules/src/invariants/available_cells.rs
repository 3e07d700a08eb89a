//! Available-cell bookkeeping invariants.

use super::Invariant;
use crate::{Board, Position, Square};

/// Invariant: the available list is exactly the set of empty squares.
pub struct AvailableComplementInvariant;

impl Invariant<Board> for AvailableComplementInvariant {
    fn holds(board: &Board) -> bool {
        let empty: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|&pos| board.get(pos) == Square::Empty)
            .collect();

        let mut available = board.available_cells().to_vec();
        available.sort();
        available == empty
    }

    fn description() -> &'static str {
        "Available cells equal the complement of occupied squares"
    }
}

/// Invariant: the available list is strictly ascending (no duplicates).
pub struct AvailableOrderedInvariant;

impl Invariant<Board> for AvailableOrderedInvariant {
    fn holds(board: &Board) -> bool {
        board.available_cells().windows(2).all(|w| w[0] < w[1])
    }

    fn description() -> &'static str {
        "Available cells are kept in ascending index order"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invariants::{BoardInvariants, InvariantSet};
    use crate::Mark;

    #[test]
    fn test_empty_board_holds() {
        let board = Board::new();
        assert!(BoardInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_holds_after_moves() {
        let mut board = Board::new();
        board.place(Position::BottomRight, Mark::O).unwrap();
        board.place(Position::TopLeft, Mark::X).unwrap();
        board.place(Position::Center, Mark::O).unwrap();
        assert!(AvailableComplementInvariant::holds(&board));
        assert!(AvailableOrderedInvariant::holds(&board));
    }
}
