//! The eight winning lines.

use serde::{Deserialize, Serialize};

use crate::core::Space;

/// Which line of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Row `0..3`, top to bottom.
    Row(u8),
    /// Column `0..3`, left to right.
    Column(u8),
    /// Top-left to bottom-right.
    Diagonal,
    /// Bottom-left to top-right.
    AntiDiagonal,
}

/// Three spaces that win when uniformly marked.
///
/// `spaces[0]` and `spaces[2]` are the endpoints reported in a
/// [`WinningLine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub spaces: [Space; 3],
}

const fn sp(n: u8) -> Space {
    match Space::new(n) {
        Some(space) => space,
        None => panic!("line table space out of range"),
    }
}

const fn line(kind: LineKind, a: u8, b: u8, c: u8) -> Line {
    Line {
        kind,
        spaces: [sp(a), sp(b), sp(c)],
    }
}

/// All lines in scan order: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    line(LineKind::Row(0), 1, 2, 3),
    line(LineKind::Row(1), 4, 5, 6),
    line(LineKind::Row(2), 7, 8, 9),
    line(LineKind::Column(0), 1, 4, 7),
    line(LineKind::Column(1), 2, 5, 8),
    line(LineKind::Column(2), 3, 6, 9),
    line(LineKind::Diagonal, 1, 5, 9),
    line(LineKind::AntiDiagonal, 7, 5, 3),
];

/// A completed line, for drawing a strike-through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    pub kind: LineKind,
    pub start: Space,
    pub end: Space,
}

impl From<&Line> for WinningLine {
    fn from(line: &Line) -> Self {
        Self {
            kind: line.kind,
            start: line.spaces[0],
            end: line.spaces[2],
        }
    }
}

impl WinningLine {
    /// Whether `space` lies on this line.
    #[must_use]
    pub fn contains(&self, space: Space) -> bool {
        LINES
            .iter()
            .find(|l| l.kind == self.kind)
            .is_some_and(|l| l.spaces.contains(&space))
    }
}
