//! Move history exclusivity: each placed cell belongs to exactly one player.

use super::Invariant;
use crate::{Board, Mark, Position, Square};

/// A board together with every player's move history.
#[derive(Debug, Clone, Copy)]
pub struct MoveLedger<'a> {
    /// The board the histories were played on.
    pub board: &'a Board,
    /// Each player's mark and the positions it played, in order.
    pub histories: &'a [(Mark, &'a [Position])],
}

/// Invariant: histories are disjoint, duplicate-free and agree with the board.
///
/// Every recorded position is occupied by that player's mark, and the number
/// of recorded moves equals the number of occupied squares.
pub struct ExclusiveHistoryInvariant;

impl<'a> Invariant<MoveLedger<'a>> for ExclusiveHistoryInvariant {
    fn holds(ledger: &MoveLedger<'a>) -> bool {
        let mut seen = [false; 9];

        for (mark, history) in ledger.histories {
            for &pos in *history {
                if seen[pos.index()] || ledger.board.get(pos) != Square::Occupied(*mark) {
                    return false;
                }
                seen[pos.index()] = true;
            }
        }

        let occupied = ledger
            .board
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();
        occupied == seen.iter().filter(|s| **s).count()
    }

    fn description() -> &'static str {
        "Each occupied cell appears in exactly one matching move history"
    }
}
