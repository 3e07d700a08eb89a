//! Turning raw input into cell events.
//!
//! The human player receives element-style cell identifiers such as
//! `"cell-7"`. Keyboard and mouse input are translated into those
//! identifiers here, and parsed back into positions by the player.

use crossterm::event::KeyCode;
use noughts_rules::Position;
use tracing::instrument;

/// Builds the identifier for a cell (`"cell-<index>"`).
pub fn cell_id(pos: Position) -> String {
    format!("cell-{}", pos.index())
}

/// Extracts the cell index from the numeric suffix of an identifier.
///
/// Leading non-digit characters are stripped; the remainder must be a
/// number naming one of the nine cells. Anything else is not a cell event.
#[instrument]
pub fn parse_cell_id(id: &str) -> Option<Position> {
    let digits = id.trim_start_matches(|c: char| !c.is_ascii_digit());
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().and_then(Position::from_index)
}

/// What a key press asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Pick a cell, by identifier.
    Pick(String),
    /// Move the selection cursor.
    Cursor(Position),
    /// Start a new game.
    Reset,
    /// Leave the game.
    Quit,
    /// Key has no meaning.
    Ignore,
}

/// Interprets a key press given the current cursor.
pub fn interpret_key(key: KeyCode, cursor: Position) -> KeyAction {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('r') => KeyAction::Reset,
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Pick(cell_id(cursor)),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            Position::from_index(index)
                .map(|pos| KeyAction::Pick(cell_id(pos)))
                .unwrap_or(KeyAction::Ignore)
        }
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            KeyAction::Cursor(move_cursor(cursor, key))
        }
        _ => KeyAction::Ignore,
    }
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}
