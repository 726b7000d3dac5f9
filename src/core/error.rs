//! Move rejection errors.
//!
//! Every error here is a precondition violation by the caller. None of
//! them leave the game in a modified state.

use thiserror::Error;

use super::config::Mode;
use super::mark::Mark;
use super::space::Space;
use crate::rules::GameStatus;

/// Why a move request was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The raw value does not name a space (valid spaces are 1 to 9).
    #[error("invalid space {0}, expected 1-9")]
    InvalidSpace(i64),

    /// Input text that is not a number at all.
    #[error("not a space number, expected 1-9")]
    NotANumber,

    /// The space already holds a mark.
    #[error("space {0} is already occupied")]
    Occupied(Space),

    /// The other side is due to move.
    #[error("not {0}'s turn")]
    NotYourTurn(Mark),

    /// The game already reached a terminal status.
    #[error("game is over ({0:?})")]
    GameOver(GameStatus),

    /// The request does not apply to the configured mode.
    #[error("move type not available in {0:?} mode")]
    WrongMode(Mode),
}
