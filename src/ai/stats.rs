//! Selector statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

use crate::core::Space;

/// Accumulated playout score for one candidate move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateScore {
    pub space: Space,
    /// Wins minus losses over all playouts.
    pub score: i64,
    pub playouts: u32,
}

/// Statistics from the most recent decision.
///
/// Tactical, opening-book and random decisions leave everything at zero.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SelectionStats {
    /// Candidate moves simulated.
    pub candidates: u32,

    /// Playouts run across all candidates.
    pub playouts: u32,

    /// Batches completed per candidate.
    pub rounds: u32,

    /// The time budget expired before every playout ran.
    pub truncated: bool,

    /// Time spent simulating (microseconds).
    pub time_us: u64,

    /// Per-candidate totals in enumeration order.
    pub scores: Vec<CandidateScore>,
}

impl SelectionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate playouts per second.
    #[must_use]
    pub fn playouts_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.playouts as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Score recorded for `space`, if it was a candidate.
    #[must_use]
    pub fn score_of(&self, space: Space) -> Option<i64> {
        self.scores.iter().find(|c| c.space == space).map(|c| c.score)
    }
}
