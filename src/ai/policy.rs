//! Playout policies.
//!
//! A playout continues a disposable board clone to a terminal state and
//! scores it from the selecting side's point of view. The policy decides
//! each move along the way:
//!
//! - `TacticalPlayout`: the default. The selecting side takes its own win,
//!   else blocks, else plays randomly. The opponent only looks for its own
//!   win, else plays randomly. The opponent deliberately does not block,
//!   which keeps playouts from collapsing into draws and lets the score
//!   separate candidates that create real chances.
//! - `RandomPlayout`: uniform random moves for both sides.

use crate::core::{Board, GameRng, Mark, Space};
use crate::rules::{evaluate, find_winning_move};

/// Policy for choosing moves inside a playout.
pub trait PlayoutPolicy: Send + Sync {
    /// Choose a move for `to_move` on an unfinished board.
    ///
    /// `side` is the mark the playout is scored for. The returned space
    /// must be empty.
    fn choose(&self, board: &Board, to_move: Mark, side: Mark, rng: &mut GameRng) -> Space;
}

/// Asymmetric tactically-aware policy.
#[derive(Clone, Debug, Default)]
pub struct TacticalPlayout;

impl PlayoutPolicy for TacticalPlayout {
    fn choose(&self, board: &Board, to_move: Mark, side: Mark, rng: &mut GameRng) -> Space {
        let tactical = if to_move == side {
            find_winning_move(board, side).or_else(|| find_winning_move(board, side.opponent()))
        } else {
            find_winning_move(board, to_move)
        };
        tactical.unwrap_or_else(|| random_space(board, rng))
    }
}

/// Uniform random policy.
#[derive(Clone, Debug, Default)]
pub struct RandomPlayout;

impl PlayoutPolicy for RandomPlayout {
    fn choose(&self, board: &Board, _to_move: Mark, _side: Mark, rng: &mut GameRng) -> Space {
        random_space(board, rng)
    }
}

/// Uniformly random empty space.
///
/// # Panics
///
/// Panics if the board is full.
pub fn random_space(board: &Board, rng: &mut GameRng) -> Space {
    let empty = board.empty_spaces().as_slice();
    assert!(!empty.is_empty(), "no empty space to choose from");
    empty[rng.gen_range_usize(0..empty.len())]
}

/// Play `board` out to the end and score it for `side`.
///
/// `to_move` is the mark due to play next. Returns +1 if `side` wins,
/// -1 if it loses, 0 for a draw. At most nine plies are played.
pub fn playout<P: PlayoutPolicy + ?Sized>(
    policy: &P,
    mut board: Board,
    mut to_move: Mark,
    side: Mark,
    rng: &mut GameRng,
) -> i64 {
    let mut status = evaluate(&board).status;

    while !status.is_terminal() {
        let space = policy.choose(&board, to_move, side, rng);
        let placed = board.place(space, to_move);
        assert!(placed.is_ok(), "playout policy chose unavailable space {space}");

        to_move = to_move.opponent();
        status = evaluate(&board).status;
    }

    status.score_for(side)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(n: u8) -> Space {
        Space::new(n).unwrap()
    }

    fn with_moves(moves: &[(u8, Mark)]) -> Board {
        let mut board = Board::new();
        for &(n, mark) in moves {
            board.place(s(n), mark).unwrap();
        }
        board
    }

    #[test]
    fn test_side_prefers_win_over_block() {
        // O can win at 6, X threatens 3.
        let board = with_moves(&[
            (1, Mark::Player),
            (4, Mark::Computer),
            (2, Mark::Player),
            (5, Mark::Computer),
            (9, Mark::Player),
        ]);
        let mut rng = GameRng::new(0);
        let choice = TacticalPlayout.choose(&board, Mark::Computer, Mark::Computer, &mut rng);
        assert_eq!(choice, s(6));
    }

    #[test]
    fn test_side_blocks_without_own_win() {
        let board = with_moves(&[(1, Mark::Player), (5, Mark::Computer), (2, Mark::Player)]);
        let mut rng = GameRng::new(0);
        let choice = TacticalPlayout.choose(&board, Mark::Computer, Mark::Computer, &mut rng);
        assert_eq!(choice, s(3));
    }

    #[test]
    fn test_opponent_takes_own_win() {
        let board = with_moves(&[
            (1, Mark::Player),
            (4, Mark::Computer),
            (2, Mark::Player),
            (5, Mark::Computer),
        ]);
        let mut rng = GameRng::new(0);
        let choice = TacticalPlayout.choose(&board, Mark::Player, Mark::Computer, &mut rng);
        assert_eq!(choice, s(3));
    }

    #[test]
    fn test_opponent_does_not_block() {
        // O threatens 6; X has no win of its own, so X plays randomly and
        // must sometimes leave 6 open.
        let board = with_moves(&[(1, Mark::Player), (4, Mark::Computer), (9, Mark::Player), (5, Mark::Computer)]);
        let mut rng = GameRng::new(11);
        let choices: Vec<Space> = (0..100)
            .map(|_| TacticalPlayout.choose(&board, Mark::Player, Mark::Computer, &mut rng))
            .collect();
        assert!(choices.iter().any(|&c| c != s(6)));
        assert!(choices.iter().all(|&c| board.is_empty(c)));
    }

    #[test]
    fn test_playout_scores_terminal_board() {
        let board = with_moves(&[
            (1, Mark::Computer),
            (4, Mark::Player),
            (2, Mark::Computer),
            (5, Mark::Player),
            (3, Mark::Computer),
        ]);
        let mut rng = GameRng::new(0);
        assert_eq!(playout(&TacticalPlayout, board.clone(), Mark::Player, Mark::Computer, &mut rng), 1);
        assert_eq!(playout(&TacticalPlayout, board, Mark::Player, Mark::Player, &mut rng), -1);
    }

    #[test]
    fn test_playout_reaches_terminal_and_leaves_source_alone() {
        let board = with_moves(&[(5, Mark::Player)]);
        let mut rng = GameRng::new(99);
        for _ in 0..200 {
            let score = playout(&RandomPlayout, board.clone(), Mark::Computer, Mark::Computer, &mut rng);
            assert!((-1..=1).contains(&score));
        }
        assert_eq!(board.marks_placed(), 1);
    }

    #[test]
    fn test_forced_win_always_scores() {
        // O to move with a win at 3 (and 7): the tactical policy never misses it.
        let board = with_moves(&[
            (1, Mark::Computer),
            (4, Mark::Player),
            (2, Mark::Computer),
            (8, Mark::Player),
            (5, Mark::Computer),
            (6, Mark::Player),
        ]);
        let mut rng = GameRng::new(5);
        for _ in 0..50 {
            assert_eq!(playout(&TacticalPlayout, board.clone(), Mark::Computer, Mark::Computer, &mut rng), 1);
        }
    }
}
