//! One-ply tactical scan.

use crate::core::{Board, Cell, Mark, Space};

use super::lines::LINES;

/// Find a space that completes three in a row for `mark`.
///
/// Scans lines in the same order as [`evaluate`](super::evaluate) and
/// returns the empty space of the first line holding exactly two of
/// `mark` and one empty cell.
#[must_use]
pub fn find_winning_move(board: &Board, mark: Mark) -> Option<Space> {
    let target = Cell::from(mark);

    LINES.iter().find_map(|line| {
        let mut owned = 0;
        let mut open = None;
        for &space in &line.spaces {
            match board.get(space) {
                cell if cell == target => owned += 1,
                Cell::Empty => open = Some(space),
                _ => return None,
            }
        }
        if owned == 2 {
            open
        } else {
            None
        }
    })
}
