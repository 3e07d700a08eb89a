//! Draw detection logic for tic-tac-toe.

use super::win::evaluate;
use crate::{Board, Position};
use tracing::instrument;

/// Checks whether the move just made ended the game in a draw.
///
/// A draw needs a full board and no winning line in the mover's history;
/// a win on the last cell takes precedence.
#[instrument(skip(board))]
pub fn is_draw(board: &Board, mover_history: &[Position]) -> bool {
    board.is_full() && !evaluate(mover_history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    fn fill(board: &mut Board, mark: Mark, indices: &[usize]) -> Vec<Position> {
        indices
            .iter()
            .map(|&i| {
                let pos = Position::from_index(i).unwrap();
                board.place(pos, mark).unwrap();
                pos
            })
            .collect()
    }

    #[test]
    fn test_partial_board_not_draw() {
        let mut board = Board::new();
        let history = fill(&mut board, Mark::X, &[4]);
        assert!(!is_draw(&board, &history));
    }

    #[test]
    fn test_draw_detection() {
        // O X O / O X X / X O O
        let mut board = Board::new();
        let o = fill(&mut board, Mark::O, &[0, 2, 3, 7, 8]);
        fill(&mut board, Mark::X, &[1, 4, 5, 6]);
        assert!(is_draw(&board, &o));
    }

    #[test]
    fn test_not_draw_if_last_move_wins() {
        // X fills the board and completes the left column.
        let mut board = Board::new();
        fill(&mut board, Mark::O, &[1, 2, 4, 8]);
        let x = fill(&mut board, Mark::X, &[0, 3, 5, 7, 6]);
        assert!(board.is_full());
        assert!(!is_draw(&board, &x));
    }
}
