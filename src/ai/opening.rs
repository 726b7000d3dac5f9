//! Opening book for the automated side's first reply.
//!
//! The book answers once per game, keyed on where the opponent's first
//! mark landed:
//!
//! | Opponent | Hard | Medium (uniform over) |
//! |----------|------|------------------------|
//! | center   | 3    | the four sides         |
//! | 2 or 4   | 1    | spaces sharing neither row nor column |
//! | 6 or 8   | 9    | spaces sharing neither row nor column |
//! | corner   | 5    | outer ring minus the opponent's corner |

use smallvec::SmallVec;

use crate::core::{GameRng, Mode, Space};

/// One-shot opening reply table.
#[derive(Clone, Debug)]
pub struct OpeningBook {
    armed: bool,
}

impl Default for OpeningBook {
    fn default() -> Self {
        Self { armed: true }
    }
}

impl OpeningBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the next call to [`reply`](Self::reply) will consult the book.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Re-arm for a new game.
    pub fn reset(&mut self) {
        self.armed = true;
    }

    /// Consume the book and return the reply for `mode`.
    ///
    /// The book is disarmed by any call while armed, whatever the mode or
    /// outcome. Returns `None` when already used, when the mode has no
    /// book, or when the opponent has not moved.
    pub fn reply(&mut self, mode: Mode, opponent_first: Option<Space>, rng: &mut GameRng) -> Option<Space> {
        if !std::mem::replace(&mut self.armed, false) {
            return None;
        }
        let opponent = opponent_first?;
        match mode {
            Mode::Hard => Some(hard_reply(opponent)),
            Mode::Medium => medium_reply(opponent, rng),
            Mode::Easy | Mode::TwoPlayer => None,
        }
    }
}

/// Fixed reply for the hard tier.
#[must_use]
pub fn hard_reply(opponent: Space) -> Space {
    match opponent.get() {
        5 => Space::CORNERS[1],
        2 | 4 => Space::CORNERS[0],
        6 | 8 => Space::CORNERS[3],
        _ => Space::CENTER,
    }
}

/// Randomized reply for the medium tier.
pub fn medium_reply(opponent: Space, rng: &mut GameRng) -> Option<Space> {
    if opponent.is_corner() {
        let ring: SmallVec<[Space; 8]> = Space::ALL
            .iter()
            .copied()
            .filter(|&s| s != Space::CENTER && s != opponent)
            .collect();
        rng.choose(&ring).copied()
    } else if opponent.is_side() {
        let rows: SmallVec<[usize; 2]> = (0..3).filter(|&r| r != opponent.row()).collect();
        let cols: SmallVec<[usize; 2]> = (0..3).filter(|&c| c != opponent.col()).collect();
        let row = *rng.choose(&rows)?;
        let col = *rng.choose(&cols)?;
        Space::from_coords(row, col)
    } else {
        rng.choose(&Space::SIDES).copied()
    }
}
