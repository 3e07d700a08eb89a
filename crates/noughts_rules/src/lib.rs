//! Pure tic-tac-toe rules.
//!
//! Board storage, the eight winning lines, the draw rule and the derived
//! [`Outcome`]. Nothing here is async or does I/O; the turn engine in the
//! `noughts` crate builds on these types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use outcome::Outcome;
pub use position::Position;
pub use types::{Board, Mark, PlaceError, Square};
