//! Selector configuration parameters.

use serde::{Deserialize, Serialize};

/// Simulation budget for the automated side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Randomized playouts run from each candidate move (default: 1000).
    pub playouts_per_candidate: u32,

    /// Playouts per candidate per round. The time budget is only checked
    /// between rounds, so every candidate always has the same playout count.
    pub batch_size: u32,

    /// Wall-clock budget for the simulation phase, in milliseconds.
    /// `None` runs every playout. When the budget expires the decision is
    /// made on the rounds already completed, which makes it
    /// timing-dependent.
    pub time_budget_ms: Option<u64>,

    /// Run each round's candidates on the rayon thread pool.
    /// Scores are identical to a serial run with the same seed.
    pub parallel: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            playouts_per_candidate: 1000,
            batch_size: 100,
            time_budget_ms: None,
            parallel: false,
        }
    }
}

impl SelectorConfig {
    pub fn with_playouts(mut self, playouts: u32) -> Self {
        self.playouts_per_candidate = playouts;
        self
    }

    pub fn with_batch_size(mut self, batch_size: u32) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_time_budget_ms(mut self, ms: u64) -> Self {
        self.time_budget_ms = Some(ms);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
