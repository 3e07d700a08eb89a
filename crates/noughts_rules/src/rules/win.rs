//! Win detection logic for tic-tac-toe.

use crate::Position;
use tracing::instrument;

/// The eight winning lines: rows, then columns, then diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first winning line fully contained in `history`.
#[instrument]
pub fn completed_line(history: &[Position]) -> Option<[Position; 3]> {
    WINNING_LINES
        .into_iter()
        .find(|line| line.iter().all(|pos| history.contains(pos)))
}

/// Checks whether a player's moves contain a complete winning line.
pub fn evaluate(history: &[Position]) -> bool {
    completed_line(history).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(indices: &[usize]) -> Vec<Position> {
        indices
            .iter()
            .map(|&i| Position::from_index(i).unwrap())
            .collect()
    }

    #[test]
    fn test_no_winner_empty_history() {
        assert!(!evaluate(&[]));
    }

    #[test]
    fn test_top_row() {
        assert!(evaluate(&positions(&[0, 1, 2])));
    }

    #[test]
    fn test_diagonal() {
        assert!(evaluate(&positions(&[0, 4, 8])));
    }

    #[test]
    fn test_no_line() {
        assert!(!evaluate(&positions(&[0, 1, 5])));
    }

    #[test]
    fn test_order_irrelevant_and_superset_wins() {
        let history = positions(&[5, 8, 3, 4]);
        assert_eq!(
            completed_line(&history),
            Some([Position::MiddleLeft, Position::Center, Position::MiddleRight])
        );
    }

    #[test]
    fn test_first_line_in_fixed_order_reported() {
        // Completes both the top row and the left column.
        let history = positions(&[0, 1, 2, 3, 6]);
        assert_eq!(completed_line(&history), Some(WINNING_LINES[0]));
    }

    #[test]
    fn test_evaluate_matches_line_membership_for_all_triples() {
        for a in 0..9 {
            for b in (a + 1)..9 {
                for c in (b + 1)..9 {
                    let triple = positions(&[a, b, c]);
                    let is_line = WINNING_LINES
                        .iter()
                        .any(|line| line.iter().all(|p| triple.contains(p)));
                    assert_eq!(evaluate(&triple), is_line, "triple {a},{b},{c}");
                }
            }
        }
    }
}
