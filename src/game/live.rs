//! The live game.
//!
//! `Game` owns the one real board. Every request validates mode, status,
//! turn and space before touching it, then re-evaluates the board and
//! flips the turn marker. A rejected request changes nothing.
//!
//! The human (`X`) always opens a fresh game. In single-player modes the
//! human and automated side alternate through [`Game::apply_human_move`]
//! and [`Game::apply_automated_move`]; in two-player mode both humans go
//! through [`Game::apply_two_player_move`].

use tracing::{debug, info};

use crate::ai::{Decision, MoveSelector, SelectionStats};
use crate::core::{Board, BoardView, GameConfig, GameRng, GameRngState, Mark, Mode, MoveError, Space};
use crate::rules::{evaluate, GameStatus, WinningLine};

/// A single game in progress.
pub struct Game {
    config: GameConfig,
    board: Board,
    status: GameStatus,
    winning_line: Option<WinningLine>,
    /// Turn marker: the mark that moved most recently.
    last_played: Mark,
    last_space: Option<Space>,
    /// The human's first move, for the opening book.
    opponent_first: Option<Space>,
    last_decision: Option<Decision>,
    selector: MoveSelector,
    rng: GameRng,
}

impl Game {
    /// Start a fresh game.
    pub fn new(config: GameConfig) -> Self {
        let selector = MoveSelector::new(config.selector.clone());
        let rng = GameRng::new(config.seed);
        Self {
            config,
            board: Board::new(),
            status: GameStatus::Unfinished,
            winning_line: None,
            last_played: Mark::Computer,
            last_space: None,
            opponent_first: None,
            last_decision: None,
            selector,
            rng,
        }
    }

    /// Clear the board and start over in `mode`.
    ///
    /// The RNG stream carries on from the previous game.
    pub fn new_game(&mut self, mode: Mode) {
        self.config.mode = mode;
        self.board = Board::new();
        self.status = GameStatus::Unfinished;
        self.winning_line = None;
        self.last_played = Mark::Computer;
        self.last_space = None;
        self.opponent_first = None;
        self.last_decision = None;
        self.selector.reset();
        debug!(?mode, "new game");
    }

    /// Place the human's mark.
    pub fn apply_human_move(&mut self, space: Space) -> Result<(), MoveError> {
        self.require_automated_side()?;
        self.require_unfinished()?;
        if self.last_played != Mark::Computer {
            return Err(MoveError::NotYourTurn(Mark::Player));
        }

        self.board.place(space, Mark::Player)?;
        self.record(space, Mark::Player);
        Ok(())
    }

    /// Let the automated side choose and play a move.
    ///
    /// Returns the space played.
    pub fn apply_automated_move(&mut self) -> Result<Space, MoveError> {
        self.require_automated_side()?;
        self.require_unfinished()?;
        if self.last_played != Mark::Player {
            return Err(MoveError::NotYourTurn(Mark::Computer));
        }

        let decision = self.selector.select(
            &self.board,
            Mark::Computer,
            self.config.mode,
            self.opponent_first,
            &mut self.rng,
        );
        self.board.place(decision.space, Mark::Computer)?;
        self.last_decision = Some(decision);
        self.record(decision.space, Mark::Computer);
        Ok(decision.space)
    }

    /// Place the next mark in two-player mode.
    ///
    /// Returns the mark placed.
    pub fn apply_two_player_move(&mut self, space: Space) -> Result<Mark, MoveError> {
        if self.config.mode != Mode::TwoPlayer {
            return Err(MoveError::WrongMode(self.config.mode));
        }
        self.require_unfinished()?;

        let mark = self.last_played.opponent();
        self.board.place(space, mark)?;
        self.record(space, mark);
        Ok(mark)
    }

    fn require_automated_side(&self) -> Result<(), MoveError> {
        if self.config.mode.has_automated_side() {
            Ok(())
        } else {
            Err(MoveError::WrongMode(self.config.mode))
        }
    }

    fn require_unfinished(&self) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            Err(MoveError::GameOver(self.status))
        } else {
            Ok(())
        }
    }

    fn record(&mut self, space: Space, mark: Mark) {
        self.last_played = mark;
        self.last_space = Some(space);
        if mark == Mark::Player && self.opponent_first.is_none() {
            self.opponent_first = Some(space);
        }

        let eval = evaluate(&self.board);
        self.status = eval.status;
        self.winning_line = eval.winning_line;

        debug!(%mark, %space, status = ?self.status, "move applied");
        if self.status.is_terminal() {
            info!(status = ?self.status, line = ?self.winning_line, "game over");
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Endpoints of the completed line, once the game is won.
    #[must_use]
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Copy of the cell grid.
    #[must_use]
    pub fn view(&self) -> BoardView {
        self.board.view()
    }

    /// The mark due to move next.
    #[must_use]
    pub fn to_move(&self) -> Mark {
        self.last_played.opponent()
    }

    #[must_use]
    pub fn last_space(&self) -> Option<Space> {
        self.last_space
    }

    /// How the automated side chose its most recent move.
    #[must_use]
    pub fn last_decision(&self) -> Option<Decision> {
        self.last_decision
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Statistics from the automated side's most recent decision.
    #[must_use]
    pub fn selector_stats(&self) -> &SelectionStats {
        self.selector.stats()
    }

    /// Current RNG position, for reproducing a session.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
