//! Core engine types: marks, spaces, the board, configuration, errors, RNG.
//!
//! Nothing in here knows about winning lines or move selection; those live
//! in `rules` and `ai`.

pub mod mark;
pub mod space;
pub mod board;
pub mod config;
pub mod error;
pub mod rng;

pub use mark::{Cell, Mark};
pub use space::Space;
pub use board::{Board, BoardView, EmptySpaces};
pub use config::{GameConfig, Mode};
pub use error::MoveError;
pub use rng::{GameRng, GameRngState};
