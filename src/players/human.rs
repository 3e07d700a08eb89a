//! Human player fed by cell events.

use super::{Agent, PlayerKind};
use crate::input::parse_cell_id;
use crate::table::{Epoch, GameTable};
use anyhow::Result;
use noughts_rules::Position;
use tokio::sync::mpsc;
use tracing::debug;

/// Human player reading cell identifiers from the UI.
///
/// Only events sent while a turn is waiting count; anything queued before
/// [`Agent::choose`] starts is discarded.
pub struct HumanAgent {
    cells: mpsc::UnboundedReceiver<String>,
}

impl HumanAgent {
    /// Creates a new human agent.
    pub fn new(cells: mpsc::UnboundedReceiver<String>) -> Self {
        Self { cells }
    }
}

#[async_trait::async_trait]
impl Agent for HumanAgent {
    async fn choose(&mut self, table: &GameTable, epoch: Epoch) -> Result<Option<Position>> {
        // Clicks sent before this turn began belong to nobody
        let mut dropped = 0usize;
        while self.cells.try_recv().is_ok() {
            dropped += 1;
        }
        if dropped > 0 {
            debug!(dropped, "Discarded input queued outside the turn");
        }

        // Wait until a cell event names an open cell
        while let Some(id) = self.cells.recv().await {
            if table.epoch() != epoch {
                debug!(id = %id, "Input arrived after reset");
                return Ok(None);
            }
            match parse_cell_id(&id) {
                Some(pos) if table.is_available(pos) => return Ok(Some(pos)),
                Some(pos) => debug!(id = %id, %pos, "Ignoring occupied cell"),
                None => debug!(id = %id, "Ignoring unrecognised cell"),
            }
        }

        anyhow::bail!("Input channel closed")
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }
}
