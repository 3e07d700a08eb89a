//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a player's moves and the board. Rules are kept
//! apart from board storage so the turn engine can derive outcomes instead of
//! storing them.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{WINNING_LINES, completed_line, evaluate};
