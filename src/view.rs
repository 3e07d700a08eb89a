//! Display collaborators the turn engine renders into.

use noughts_rules::{Board, Square};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info};

/// Receives board snapshots and result messages from the engine.
pub trait View: Send {
    /// Paints the board. With `reset` set, clears every visual cell instead.
    fn render(&mut self, board: &Board, reset: bool);

    /// Shows a result line until [`View::clear_result`] is called.
    fn show_result(&mut self, message: &str);

    /// Removes the result line.
    fn clear_result(&mut self);
}

/// In-memory visual grid.
///
/// A visual cell is painted once: rendering only writes into blank cells, so
/// repeated renders of the same board never change what is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    cells: [Option<char>; 9],
    result: Option<String>,
}

impl Screen {
    /// Glyphs painted so far, row-major.
    pub fn cells(&self) -> &[Option<char>; 9] {
        &self.cells
    }

    /// Current result line.
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }
}

impl View for Screen {
    fn render(&mut self, board: &Board, reset: bool) {
        for (cell, square) in self.cells.iter_mut().zip(board.squares()) {
            if reset {
                *cell = None;
            } else if cell.is_none()
                && let Square::Occupied(mark) = square
            {
                *cell = Some(mark.glyph());
            }
        }
    }

    fn show_result(&mut self, message: &str) {
        self.result = Some(message.to_string());
    }

    fn clear_result(&mut self) {
        self.result = None;
    }
}

/// A [`Screen`] shared between the engine task and the terminal renderer.
#[derive(Debug, Clone, Default)]
pub struct SharedScreen(Arc<Mutex<Screen>>);

impl SharedScreen {
    /// Copy of the current screen contents.
    pub fn snapshot(&self) -> Screen {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn with<R>(&self, f: impl FnOnce(&mut Screen) -> R) -> R {
        f(&mut self.0.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl View for SharedScreen {
    fn render(&mut self, board: &Board, reset: bool) {
        self.with(|screen| screen.render(board, reset));
    }

    fn show_result(&mut self, message: &str) {
        self.with(|screen| screen.show_result(message));
    }

    fn clear_result(&mut self) {
        self.with(|screen| screen.clear_result());
    }
}

/// Headless view that reports through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingView;

impl View for TracingView {
    fn render(&mut self, board: &Board, reset: bool) {
        if reset {
            debug!("Board cleared");
        } else {
            debug!(board = %board.display(), "Board updated");
        }
    }

    fn show_result(&mut self, message: &str) {
        info!(result = message, "Game result");
    }

    fn clear_result(&mut self) {}
}
