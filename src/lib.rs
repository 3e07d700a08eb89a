//! noughts - tic-tac-toe against a random computer opponent.
//!
//! # Architecture
//!
//! - **Table**: the shared board plus a game epoch that invalidates moves
//!   resuming after a reset
//! - **Players**: a mark, a move history, and an [`Agent`] that waits for a
//!   cell event ([`HumanAgent`]) or picks at random after a delay
//!   ([`RandomAgent`])
//! - **Controller**: strict human-then-computer rounds until a win or draw
//! - **View**: the display collaborator the engine paints into
//!
//! Rules (board, winning lines, outcome) live in `noughts_rules`.
//!
//! # Example
//!
//! ```no_run
//! use noughts::{GameTable, Mark, Player, RandomAgent, TracingView, TurnController};
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let first = Player::new(Mark::O, "left", RandomAgent::new(Duration::ZERO, Some(1)));
//! let second = Player::new(Mark::X, "right", RandomAgent::new(Duration::ZERO, Some(2)));
//! let mut controller = TurnController::new(GameTable::new(), first, second, TracingView);
//! let outcome = controller.play_game().await?;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod controller;
mod input;
mod players;
mod simulate;
mod table;
mod tui;
mod view;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Turn engine
pub use controller::{Control, TurnController};
pub use players::{Agent, HumanAgent, Player, PlayerKind, RandomAgent, TurnReport};
pub use table::{Epoch, GameTable, Placement};

// Crate-level exports - Adapters
pub use input::{KeyAction, cell_id, interpret_key, move_cursor, parse_cell_id};
pub use simulate::{Tally, run_simulation};
pub use tui::run_tui;
pub use view::{Screen, SharedScreen, TracingView, View};

// Crate-level exports - Rules
pub use noughts_rules::{Board, Mark, Outcome, PlaceError, Position, Square};
