//! The automated opponent.
//!
//! ## Overview
//!
//! The selector never searches the full game tree. It samples:
//!
//! - **Opening book**: a fixed (Hard) or randomized (Medium) first reply
//! - **Tactics**: take a win in one, else block a loss in one
//! - **Simulation**: randomized playouts from every candidate move, scored
//!   +1 win / -1 loss / 0 draw, highest total wins
//!
//! ## Usage
//!
//! ```rust
//! use rust_ttt::ai::{MoveSelector, SelectorConfig};
//! use rust_ttt::core::{Board, GameRng, Mark, Mode, Space};
//!
//! let mut board = Board::new();
//! let opening = Space::new(5).unwrap();
//! board.place(opening, Mark::Player).unwrap();
//!
//! let mut selector = MoveSelector::new(SelectorConfig::default().with_playouts(200));
//! let mut rng = GameRng::new(42);
//! let decision = selector.select(&board, Mark::Computer, Mode::Hard, Some(opening), &mut rng);
//! assert_eq!(decision.space.get(), 3);
//! ```

pub mod config;
pub mod opening;
pub mod policy;
pub mod selector;
pub mod stats;

pub use config::SelectorConfig;
pub use opening::{hard_reply, medium_reply, OpeningBook};
pub use policy::{playout, random_space, PlayoutPolicy, RandomPlayout, TacticalPlayout};
pub use selector::{Decision, DecisionReason, MoveSelector};
pub use stats::{CandidateScore, SelectionStats};
