//! Terminal-state evaluation.
//!
//! `evaluate` is a pure function of the board. The live game and every
//! simulated playout call the same function; a playout is simply an
//! evaluation of a disposable clone.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Mark};

use super::lines::{WinningLine, LINES};

/// Where a game stands.
///
/// Only `Unfinished` accepts further moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Unfinished,
    Draw,
    PlayerWon,
    ComputerWon,
}

impl GameStatus {
    /// Win status for the given mark.
    #[must_use]
    pub const fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::Player => GameStatus::PlayerWon,
            Mark::Computer => GameStatus::ComputerWon,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Unfinished)
    }

    /// The winning mark, if the game was won.
    #[must_use]
    pub const fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::PlayerWon => Some(Mark::Player),
            GameStatus::ComputerWon => Some(Mark::Computer),
            GameStatus::Unfinished | GameStatus::Draw => None,
        }
    }

    /// Playout score from `side`'s point of view: +1 win, -1 loss, 0 otherwise.
    #[must_use]
    pub fn score_for(self, side: Mark) -> i64 {
        match self.winner() {
            Some(mark) if mark == side => 1,
            Some(_) => -1,
            None => 0,
        }
    }
}

/// Result of [`evaluate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub status: GameStatus,
    /// Set only when `status` is a win.
    pub winning_line: Option<WinningLine>,
}

/// Determine the status of `board`.
///
/// Lines are scanned rows first, then columns, then diagonals; the first
/// uniformly marked line decides the winner. With no winning line the game
/// is a draw when the board is full and unfinished otherwise.
#[must_use]
pub fn evaluate(board: &Board) -> Evaluation {
    for line in &LINES {
        let [a, b, c] = line.spaces;
        let first = board.get(a);
        let Some(mark) = first.mark() else {
            continue;
        };
        if first == board.get(b) && first == board.get(c) {
            return Evaluation {
                status: GameStatus::won_by(mark),
                winning_line: Some(WinningLine::from(line)),
            };
        }
    }

    let status = if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::Unfinished
    };
    Evaluation {
        status,
        winning_line: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardView, Cell, Space};
    use crate::rules::LineKind;

    fn board(rows: [&str; 3]) -> Board {
        let mut cells = BoardView::default();
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                cells[r][c] = match ch {
                    'X' => Cell::Player,
                    'O' => Cell::Computer,
                    _ => Cell::Empty,
                };
            }
        }
        Board::from_view(cells)
    }

    #[test]
    fn test_empty_board_unfinished() {
        let eval = evaluate(&Board::new());
        assert_eq!(eval.status, GameStatus::Unfinished);
        assert!(eval.winning_line.is_none());
    }

    #[test]
    fn test_top_row_win() {
        let eval = evaluate(&board(["XXX", "OO.", "..."]));
        assert_eq!(eval.status, GameStatus::PlayerWon);
        let line = eval.winning_line.unwrap();
        assert_eq!(line.kind, LineKind::Row(0));
        assert_eq!((line.start.get(), line.end.get()), (1, 3));
    }

    #[test]
    fn test_column_win_for_computer() {
        let eval = evaluate(&board(["XO.", "XO.", ".OX"]));
        assert_eq!(eval.status, GameStatus::ComputerWon);
        let line = eval.winning_line.unwrap();
        assert_eq!(line.kind, LineKind::Column(1));
        assert_eq!((line.start.get(), line.end.get()), (2, 8));
    }

    #[test]
    fn test_anti_diagonal_endpoints() {
        let eval = evaluate(&board(["XXO", ".O.", "O.X"]));
        assert_eq!(eval.status, GameStatus::ComputerWon);
        let line = eval.winning_line.unwrap();
        assert_eq!(line.kind, LineKind::AntiDiagonal);
        assert_eq!((line.start.get(), line.end.get()), (7, 3));
    }

    #[test]
    fn test_rows_scanned_before_diagonals() {
        // Top row and main diagonal both complete: the row is reported.
        let eval = evaluate(&board(["XXX", "OXO", "O.X"]));
        let line = eval.winning_line.unwrap();
        assert_eq!(line.kind, LineKind::Row(0));
        assert_eq!((line.start.get(), line.end.get()), (1, 3));
    }

    #[test]
    fn test_rows_scanned_before_columns() {
        let eval = evaluate(&board(["XXX", "X..", "X.."]));
        assert_eq!(eval.winning_line.unwrap().kind, LineKind::Row(0));
    }

    #[test]
    fn test_full_board_draw() {
        let eval = evaluate(&board(["XOX", "XOO", "OXX"]));
        assert_eq!(eval.status, GameStatus::Draw);
        assert!(eval.winning_line.is_none());
    }

    #[test]
    fn test_win_on_last_move_is_not_draw() {
        let eval = evaluate(&board(["XOX", "OXO", "OXX"]));
        assert_eq!(eval.status, GameStatus::PlayerWon);
        assert!(eval.winning_line.unwrap().contains(Space::CENTER));
    }

    #[test]
    fn test_score_for() {
        assert_eq!(GameStatus::ComputerWon.score_for(Mark::Computer), 1);
        assert_eq!(GameStatus::PlayerWon.score_for(Mark::Computer), -1);
        assert_eq!(GameStatus::Draw.score_for(Mark::Player), 0);
        assert!(!GameStatus::Unfinished.is_terminal());
        assert_eq!(GameStatus::won_by(Mark::Player).winner(), Some(Mark::Player));
    }
}
