//! Board addressing.
//!
//! Spaces are numbered 1 to 9 in row-major order, matching the numeric
//! keypad layout printed by [`Board::key_map`](super::Board::key_map):
//!
//! ```text
//!  1 | 2 | 3
//! -----------
//!  4 | 5 | 6
//! -----------
//!  7 | 8 | 9
//! ```
//!
//! `row = (space - 1) / 3`, `col = (space - 1) % 3`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::MoveError;

/// A validated board address in `1..=9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Space(u8);

impl Space {
    /// The middle of the board.
    pub const CENTER: Space = Space(5);

    /// The four corners.
    pub const CORNERS: [Space; 4] = [Space(1), Space(3), Space(7), Space(9)];

    /// The four side-middle spaces (edges that are not corners).
    pub const SIDES: [Space; 4] = [Space(2), Space(4), Space(6), Space(8)];

    /// Every space in row-major order.
    pub const ALL: [Space; 9] = [
        Space(1),
        Space(2),
        Space(3),
        Space(4),
        Space(5),
        Space(6),
        Space(7),
        Space(8),
        Space(9),
    ];

    /// Create a space, returning `None` outside `1..=9`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Create a space from 0-based row and column.
    ///
    /// Returns `None` if either coordinate is outside `0..3`.
    #[must_use]
    pub const fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Self((row * 3 + col + 1) as u8))
        } else {
            None
        }
    }

    /// The 1-based space number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// 0-based row-major index.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.index() / 3
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.index() % 3
    }

    #[must_use]
    pub fn is_corner(self) -> bool {
        Self::CORNERS.contains(&self)
    }

    #[must_use]
    pub fn is_side(self) -> bool {
        Self::SIDES.contains(&self)
    }
}

impl TryFrom<u8> for Space {
    type Error = MoveError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Space::new(value).ok_or(MoveError::InvalidSpace(i64::from(value)))
    }
}

impl From<Space> for u8 {
    fn from(space: Space) -> Self {
        space.0
    }
}

impl FromStr for Space {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s.trim().parse().map_err(|_| MoveError::NotANumber)?;
        u8::try_from(value)
            .ok()
            .and_then(Space::new)
            .ok_or(MoveError::InvalidSpace(value))
    }
}

impl std::fmt::Display for Space {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
