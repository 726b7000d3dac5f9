//! Terminal tic-tac-toe.
//!
//! Reads space numbers (1-9) from stdin. `RUST_LOG=rust_ttt=debug` shows
//! the selector's reasoning.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rust_ttt::{Board, DecisionReason, Game, GameConfig, Mark, Mode, SelectorConfig, Space};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Play tic-tac-toe against a simulation-based opponent
#[derive(Parser, Debug)]
#[command(name = "ttt", version, long_about = None)]
struct Cli {
    /// Opponent tier
    #[arg(short, long, value_enum, default_value_t = CliMode::Hard)]
    mode: CliMode,

    /// RNG seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Playouts per candidate move
    #[arg(long, default_value_t = 1000)]
    playouts: u32,

    /// Simulation time budget in milliseconds
    #[arg(long)]
    budget_ms: Option<u64>,

    /// Run playouts on all cores
    #[arg(long)]
    parallel: bool,

    /// JSON game config; overrides the flags above
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliMode {
    Easy,
    Medium,
    Hard,
    TwoPlayer,
}

impl From<CliMode> for Mode {
    fn from(mode: CliMode) -> Self {
        match mode {
            CliMode::Easy => Mode::Easy,
            CliMode::Medium => Mode::Medium,
            CliMode::Hard => Mode::Hard,
            CliMode::TwoPlayer => Mode::TwoPlayer,
        }
    }
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        if let Some(path) = &self.config {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            return serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()));
        }

        let mut selector = SelectorConfig::default()
            .with_playouts(self.playouts)
            .with_parallel(self.parallel);
        if let Some(ms) = self.budget_ms {
            selector = selector.with_time_budget_ms(ms);
        }
        let seed = self.seed.unwrap_or_else(rand::random);
        Ok(GameConfig::default()
            .with_mode(self.mode.into())
            .with_seed(seed)
            .with_selector(selector))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.game_config()?;
    info!(mode = ?config.mode, seed = config.seed, "starting game");

    let mut game = Game::new(config);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout();

    // Printed so a session can be replayed with --seed.
    writeln!(out, "Seed {}", game.config().seed)?;
    writeln!(out, "Spaces are numbered:\n{}", Board::key_map())?;

    while !game.status().is_terminal() {
        if game.mode() != Mode::TwoPlayer && game.to_move() == Mark::Computer {
            let space = game.apply_automated_move()?;
            if game.last_decision().is_some_and(|d| d.reason == DecisionReason::Simulated) {
                let stats = game.selector_stats();
                debug!(
                    %space,
                    score = ?stats.score_of(space),
                    playouts = stats.playouts,
                    rate = stats.playouts_per_second(),
                    truncated = stats.truncated,
                    "simulated decision"
                );
            }
            writeln!(out, "Computer plays {space}\n{}", game.board())?;
            continue;
        }

        write!(out, "{} to move: ", game.to_move())?;
        out.flush()?;
        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };

        let result = line.parse::<Space>().and_then(|space| {
            if game.mode() == Mode::TwoPlayer {
                game.apply_two_player_move(space).map(|_| ())
            } else {
                game.apply_human_move(space)
            }
        });
        match result {
            Ok(()) => writeln!(out, "{}", game.board())?,
            Err(e) => writeln!(out, "{e}")?,
        }
    }

    match game.status().winner() {
        Some(mark) => writeln!(out, "{mark} wins")?,
        None => writeln!(out, "Draw")?,
    }
    if let Some(line) = game.winning_line() {
        writeln!(out, "Line {} to {}", line.start, line.end)?;
    }
    Ok(())
}
