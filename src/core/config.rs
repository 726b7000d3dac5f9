//! Game configuration.
//!
//! A `GameConfig` is chosen before a game starts: which opponent tier plays
//! the automated side, the RNG seed, and the selector's simulation budget.
//! All of it is serde-serializable so front-ends can load it from a file.

use serde::{Deserialize, Serialize};

use crate::ai::SelectorConfig;

/// Which policy drives the second side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Uniformly random moves.
    Easy,
    /// Randomized opening book, then tactics and simulation.
    Medium,
    /// Fixed opening book, then tactics and simulation.
    #[default]
    Hard,
    /// Two humans alternate; the selector is never used.
    TwoPlayer,
}

impl Mode {
    /// Whether an automated side plays in this mode.
    #[must_use]
    pub const fn has_automated_side(self) -> bool {
        !matches!(self, Mode::TwoPlayer)
    }
}

/// Configuration for a live game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    /// Opponent tier.
    pub mode: Mode,

    /// Seed for every random draw the game makes.
    /// Same seed and same human moves produce the same game.
    pub seed: u64,

    /// Simulation budget for the automated side.
    pub selector: SelectorConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            seed: 42,
            selector: SelectorConfig::default(),
        }
    }
}

impl GameConfig {
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_selector(mut self, selector: SelectorConfig) -> Self {
        self.selector = selector;
        self
    }
}
