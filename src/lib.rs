//! # rust-ttt
//!
//! Tic-tac-toe with a simulation-based automated opponent.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: `evaluate` and `find_winning_move` are free functions
//!    over a board. The live game and every simulation call the same code.
//!
//! 2. **Isolated simulations**: each playout owns a clone of the board.
//!    Nothing the selector does can touch the live game's state.
//!
//! 3. **Deterministic**: every random draw comes from a seeded, forkable
//!    ChaCha8 stream, so a seed plus a sequence of human moves replays a
//!    game exactly, serial or parallel.
//!
//! ## Modules
//!
//! - `core`: Marks, spaces, board, configuration, errors, RNG
//! - `rules`: Winning lines, terminal-state evaluation, tactical scan
//! - `ai`: Opening book, playout policies, simulation-based selector
//! - `game`: The live game orchestrator

pub mod core;
pub mod rules;
pub mod ai;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardView, Cell, EmptySpaces, GameConfig, GameRng, GameRngState, Mark, Mode,
    MoveError, Space,
};

pub use crate::rules::{
    evaluate, find_winning_move, Evaluation, GameStatus, Line, LineKind, WinningLine, LINES,
};

pub use crate::ai::{
    Decision, DecisionReason, MoveSelector, OpeningBook, PlayoutPolicy, RandomPlayout,
    SelectionStats, SelectorConfig, TacticalPlayout,
};

pub use crate::game::Game;
