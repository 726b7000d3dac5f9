//! Game rules: winning lines, terminal-state evaluation, tactical scan.
//!
//! All functions here are pure and take the board by reference. Callers
//! decide whether they are looking at the live board or a simulation clone.

pub mod lines;
pub mod evaluator;
pub mod tactics;

pub use lines::{Line, LineKind, WinningLine, LINES};
pub use evaluator::{evaluate, Evaluation, GameStatus};
pub use tactics::find_winning_move;
