//! Live game orchestration.

pub mod live;

pub use live::Game;
