//! The 3×3 board and its empty-space bookkeeping.
//!
//! `Board` is `Copy`-sized (nine cells plus an inline list of at most nine
//! spaces), so cloning it for a simulation is a plain memcpy with no heap
//! allocation. Every simulated playout works on its own clone; nothing in
//! the engine mutates a board it does not own.
//!
//! ## Invariant
//!
//! The number of non-empty cells is always `9 - empty_spaces().len()`, and
//! a space is listed in `empty_spaces()` exactly when its cell is empty.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::MoveError;
use super::mark::{Cell, Mark};
use super::space::Space;
use crate::rules::evaluate;

/// Read-only 3×3 snapshot of the cells, indexed `[row][col]`.
pub type BoardView = [[Cell; 3]; 3];

/// Ordered set of unoccupied spaces.
///
/// Starts as `1..=9` in order. Removal keeps the relative order of the
/// remaining spaces; candidate enumeration and random draws index into
/// this order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmptySpaces {
    spaces: SmallVec<[Space; 9]>,
}

impl EmptySpaces {
    /// All nine spaces, in order.
    #[must_use]
    pub fn full() -> Self {
        Self {
            spaces: SmallVec::from_slice(&Space::ALL),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    #[must_use]
    pub fn contains(&self, space: Space) -> bool {
        self.spaces.contains(&space)
    }

    /// The space at position `i` in enumeration order.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<Space> {
        self.spaces.get(i).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Space> + '_ {
        self.spaces.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Space] {
        &self.spaces
    }

    /// Remove `space`, returning whether it was present.
    fn remove(&mut self, space: Space) -> bool {
        match self.spaces.iter().position(|&s| s == space) {
            Some(i) => {
                self.spaces.remove(i);
                true
            }
            None => false,
        }
    }
}

impl Default for EmptySpaces {
    fn default() -> Self {
        Self::full()
    }
}

/// Cell grid plus the list of spaces still open.
///
/// Serializes as the bare cell grid; deserializing goes through
/// [`Board::from_view`] so the empty-space list always matches the cells.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BoardView", into = "BoardView")]
pub struct Board {
    cells: BoardView,
    empty: EmptySpaces,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from a cell grid.
    ///
    /// The empty-space list is rebuilt in row-major order. No legality
    /// check is made, so this can describe positions unreachable in play.
    #[must_use]
    pub fn from_view(cells: BoardView) -> Self {
        let spaces = Space::ALL
            .iter()
            .copied()
            .filter(|s| cells[s.row()][s.col()].is_empty())
            .collect();
        Self {
            cells,
            empty: EmptySpaces { spaces },
        }
    }

    /// Put `mark` on `space`.
    ///
    /// This is the only mutator of cell state. Fails if the space is taken
    /// or a line is already complete.
    pub fn place(&mut self, space: Space, mark: Mark) -> Result<(), MoveError> {
        if !self.empty.contains(space) {
            return Err(MoveError::Occupied(space));
        }
        let status = evaluate(self).status;
        if status.is_terminal() {
            return Err(MoveError::GameOver(status));
        }

        self.cells[space.row()][space.col()] = Cell::from(mark);
        let removed = self.empty.remove(space);
        debug_assert!(removed);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, space: Space) -> Cell {
        self.cells[space.row()][space.col()]
    }

    #[must_use]
    pub fn is_empty(&self, space: Space) -> bool {
        self.get(space).is_empty()
    }

    #[must_use]
    pub fn empty_spaces(&self) -> &EmptySpaces {
        &self.empty
    }

    /// True when no space is left.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.empty.is_empty()
    }

    /// Number of marks on the board.
    #[must_use]
    pub fn marks_placed(&self) -> usize {
        9 - self.empty.len()
    }

    /// Copy of the cell grid.
    #[must_use]
    pub fn view(&self) -> BoardView {
        self.cells
    }

    /// The 1-9 numbering, for prompting a human.
    #[must_use]
    pub fn key_map() -> String {
        render(|space| char::from(b'0' + space.get()))
    }
}

impl From<BoardView> for Board {
    fn from(cells: BoardView) -> Self {
        Self::from_view(cells)
    }
}

impl From<Board> for BoardView {
    fn from(board: Board) -> Self {
        board.cells
    }
}

fn render(symbol: impl Fn(Space) -> char) -> String {
    let mut out = String::new();
    for row in 0..3 {
        for col in 0..3 {
            if let Some(space) = Space::from_coords(row, col) {
                out.push(' ');
                out.push(symbol(space));
                out.push(' ');
            }
            if col < 2 {
                out.push('|');
            }
        }
        out.push('\n');
        if row < 2 {
            out.push_str("-----------\n");
        }
    }
    out
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render(|space| self.get(space).symbol()))
    }
}
