//! Computer player that picks uniformly among open cells.

use super::{Agent, PlayerKind};
use crate::table::{Epoch, GameTable};
use anyhow::Result;
use noughts_rules::Position;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::time::Duration;
use tracing::debug;

/// Random computer opponent with a fixed thinking delay.
pub struct RandomAgent {
    delay: Duration,
    rng: StdRng,
}

impl RandomAgent {
    /// Creates an agent; a seed makes its choices reproducible.
    pub fn new(delay: Duration, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { delay, rng }
    }
}

#[async_trait::async_trait]
impl Agent for RandomAgent {
    async fn choose(&mut self, table: &GameTable, epoch: Epoch) -> Result<Option<Position>> {
        // Thinking time
        tokio::time::sleep(self.delay).await;

        if table.epoch() != epoch {
            debug!("Timer fired after reset");
            return Ok(None);
        }

        let cells = table.available_cells();
        let pos = cells
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("No available cells to choose from"))?;

        debug!(position = %pos, choices = cells.len(), "Computer chose position");
        Ok(Some(pos))
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Computer
    }
}
