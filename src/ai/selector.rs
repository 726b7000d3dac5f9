//! Move selection for the automated side.
//!
//! Per decision, by tier:
//!
//! - **Easy**: a uniformly random empty space.
//! - **Medium / Hard**: the opening book on the first reply of the game;
//!   afterwards take an immediate win, else block an immediate loss, else
//!   simulate. Simulation plays `playouts_per_candidate` randomized games
//!   from every empty space and picks the candidate with the highest
//!   wins-minus-losses total. Ties go to the earliest candidate in
//!   empty-space order.
//!
//! Every candidate owns a board clone and an RNG forked from the game RNG
//! in candidate order. Playouts never touch the caller's board, and a
//! parallel run produces exactly the same scores as a serial one.

use std::time::{Duration, Instant};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::core::{Board, GameRng, Mark, Mode, Space};
use crate::rules::find_winning_move;

use super::config::SelectorConfig;
use super::opening::OpeningBook;
use super::policy::{playout, random_space, PlayoutPolicy, TacticalPlayout};
use super::stats::{CandidateScore, SelectionStats};

/// Why a space was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionReason {
    /// Easy tier.
    Random,
    /// Opening book reply.
    Opening,
    /// Completes a line for the selecting side.
    Win,
    /// Stops the opponent completing a line.
    Block,
    /// Highest playout score.
    Simulated,
}

/// A chosen move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub space: Space,
    pub reason: DecisionReason,
}

impl Decision {
    const fn new(space: Space, reason: DecisionReason) -> Self {
        Self { space, reason }
    }
}

/// Per-candidate simulation state.
struct Lane {
    space: Space,
    board: Board,
    rng: GameRng,
    score: i64,
    playouts: u32,
}

impl Lane {
    fn run(&mut self, policy: &dyn PlayoutPolicy, count: u32, side: Mark) {
        for _ in 0..count {
            self.score += playout(policy, self.board.clone(), side.opponent(), side, &mut self.rng);
        }
        self.playouts += count;
    }
}

/// Chooses moves for the automated side.
///
/// Owns the one-shot opening book, so a selector belongs to one game at a
/// time; call [`reset`](Self::reset) when a new game starts.
pub struct MoveSelector {
    config: SelectorConfig,
    opening: OpeningBook,
    policy: Box<dyn PlayoutPolicy>,
    stats: SelectionStats,
}

impl MoveSelector {
    /// Create a selector with the tactical playout policy.
    pub fn new(config: SelectorConfig) -> Self {
        Self {
            config,
            opening: OpeningBook::new(),
            policy: Box::new(TacticalPlayout),
            stats: SelectionStats::default(),
        }
    }

    /// Set a custom playout policy.
    pub fn with_policy<P: PlayoutPolicy + 'static>(mut self, policy: P) -> Self {
        self.policy = Box::new(policy);
        self
    }

    #[must_use]
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Statistics from the most recent decision.
    #[must_use]
    pub fn stats(&self) -> &SelectionStats {
        &self.stats
    }

    #[must_use]
    pub fn opening_book(&self) -> &OpeningBook {
        &self.opening
    }

    /// Re-arm the opening book and clear statistics.
    pub fn reset(&mut self) {
        self.opening.reset();
        self.stats.reset();
    }

    /// Choose a move for `side` on `board`.
    ///
    /// `opponent_first` is the opponent's first move of the game, used by
    /// the opening book.
    ///
    /// # Panics
    ///
    /// Panics if the board has no empty space or `mode` has no automated
    /// side. Both are caller bugs.
    #[instrument(level = "debug", skip(self, board, rng), fields(empty = board.empty_spaces().len()))]
    pub fn select(
        &mut self,
        board: &Board,
        side: Mark,
        mode: Mode,
        opponent_first: Option<Space>,
        rng: &mut GameRng,
    ) -> Decision {
        assert!(!board.is_full(), "selector invoked on a full board");
        assert!(mode.has_automated_side(), "selector invoked in {mode:?} mode");
        self.stats.reset();

        if mode == Mode::Easy {
            return Decision::new(random_space(board, rng), DecisionReason::Random);
        }

        if self.opening.is_armed() {
            match self.opening.reply(mode, opponent_first, rng) {
                Some(space) if board.is_empty(space) => {
                    debug!(%space, "opening book reply");
                    return Decision::new(space, DecisionReason::Opening);
                }
                Some(space) => {
                    debug!(%space, "opening book reply occupied, simulating");
                }
                None => {}
            }
        }

        self.decide(board, side, rng)
    }

    /// Tactics, then simulation. Skips the opening book and the Easy tier.
    pub fn decide(&mut self, board: &Board, side: Mark, rng: &mut GameRng) -> Decision {
        assert!(!board.is_full(), "selector invoked on a full board");
        self.stats.reset();

        if let Some(space) = find_winning_move(board, side) {
            debug!(%space, "taking immediate win");
            return Decision::new(space, DecisionReason::Win);
        }
        if let Some(space) = find_winning_move(board, side.opponent()) {
            debug!(%space, "blocking immediate loss");
            return Decision::new(space, DecisionReason::Block);
        }

        Decision::new(self.simulate(board, side, rng), DecisionReason::Simulated)
    }

    /// Score every empty space by playouts and return the best.
    fn simulate(&mut self, board: &Board, side: Mark, rng: &mut GameRng) -> Space {
        let start = Instant::now();
        let deadline = self
            .config
            .time_budget_ms
            .map(|ms| start + Duration::from_millis(ms));

        let mut lanes: Vec<Lane> = board
            .empty_spaces()
            .iter()
            .map(|space| {
                let mut candidate = board.clone();
                let placed = candidate.place(space, side);
                assert!(placed.is_ok(), "candidate {space} not playable");
                Lane {
                    space,
                    board: candidate,
                    rng: rng.fork(),
                    score: 0,
                    playouts: 0,
                }
            })
            .collect();

        let policy: &dyn PlayoutPolicy = &*self.policy;
        let total = self.config.playouts_per_candidate;
        let batch = self.config.batch_size.max(1);
        let mut done = 0;

        while done < total {
            let count = batch.min(total - done);
            if self.config.parallel {
                lanes.par_iter_mut().for_each(|lane| lane.run(policy, count, side));
            } else {
                lanes.iter_mut().for_each(|lane| lane.run(policy, count, side));
            }
            done += count;
            self.stats.rounds += 1;
            trace!(round = self.stats.rounds, done, "playout round complete");

            if done < total && deadline.is_some_and(|d| Instant::now() >= d) {
                self.stats.truncated = true;
                debug!(done, total, "time budget expired");
                break;
            }
        }

        let mut best = 0;
        for (i, lane) in lanes.iter().enumerate().skip(1) {
            if lane.score > lanes[best].score {
                best = i;
            }
        }

        self.stats.candidates = lanes.len() as u32;
        self.stats.playouts = lanes.iter().map(|l| l.playouts).sum();
        self.stats.time_us = start.elapsed().as_micros() as u64;
        self.stats.scores = lanes
            .iter()
            .map(|l| CandidateScore {
                space: l.space,
                score: l.score,
                playouts: l.playouts,
            })
            .collect();

        let chosen = lanes[best].space;
        debug!(
            space = %chosen,
            score = lanes[best].score,
            playouts = self.stats.playouts,
            time_us = self.stats.time_us,
            "simulated decision"
        );
        chosen
    }
}
