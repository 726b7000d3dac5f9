//! Marks and cell values.
//!
//! ## Mark
//!
//! The symbol a side places. The human side plays `X` and always moves
//! first in a fresh game; the automated side plays `O`. In two-player mode
//! the same two marks alternate between two humans.
//!
//! ## Cell
//!
//! One square of the board: empty, or holding one of the two marks.

use serde::{Deserialize, Serialize};

/// The symbol placed by one of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The human side (`X`).
    Player,
    /// The automated side (`O`).
    Computer,
}

impl Mark {
    /// Both marks, human first.
    pub const BOTH: [Mark; 2] = [Mark::Player, Mark::Computer];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::Player => Mark::Computer,
            Mark::Computer => Mark::Player,
        }
    }

    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Mark::Player => 'X',
            Mark::Computer => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Value held by a single square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Holds the human side's mark.
    Player,
    /// Holds the automated side's mark.
    Computer,
}

impl Cell {
    /// The mark in this cell, if any.
    #[must_use]
    pub const fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Player => Some(Mark::Player),
            Cell::Computer => Some(Mark::Computer),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Display symbol (a blank for empty cells).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self.mark() {
            Some(mark) => mark.symbol(),
            None => ' ',
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Player => Cell::Player,
            Mark::Computer => Cell::Computer,
        }
    }
}
