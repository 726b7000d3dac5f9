//! End-to-end games through the live orchestrator.

use rust_ttt::{
    DecisionReason, Game, GameConfig, GameRng, GameStatus, LineKind, Mark, Mode, MoveError,
    SelectorConfig, Space,
};

fn s(n: u8) -> Space {
    Space::new(n).unwrap()
}

fn game(mode: Mode, seed: u64) -> Game {
    let selector = SelectorConfig::default().with_playouts(200);
    Game::new(
        GameConfig::default()
            .with_mode(mode)
            .with_seed(seed)
            .with_selector(selector),
    )
}

fn reason(game: &Game) -> Option<DecisionReason> {
    game.last_decision().map(|d| d.reason)
}

// =============================================================================
// Hard Tier
// =============================================================================

#[test]
fn test_hard_center_opening_reply() {
    let mut game = game(Mode::Hard, 1);
    game.apply_human_move(s(5)).unwrap();

    assert_eq!(game.apply_automated_move(), Ok(s(3)));
    assert_eq!(reason(&game), Some(DecisionReason::Opening));
}

#[test]
fn test_hard_blocks_then_draws() {
    let mut game = game(Mode::Hard, 2);

    game.apply_human_move(s(1)).unwrap();
    assert_eq!(game.apply_automated_move(), Ok(s(5)));
    assert_eq!(reason(&game), Some(DecisionReason::Opening));

    game.apply_human_move(s(2)).unwrap();
    assert_eq!(game.apply_automated_move(), Ok(s(3)));
    assert_eq!(reason(&game), Some(DecisionReason::Block));

    game.apply_human_move(s(7)).unwrap();
    assert_eq!(game.apply_automated_move(), Ok(s(4)));
    assert_eq!(reason(&game), Some(DecisionReason::Block));

    game.apply_human_move(s(6)).unwrap();
    let reply = game.apply_automated_move().unwrap();
    assert!(reply == s(8) || reply == s(9));
    assert_eq!(reason(&game), Some(DecisionReason::Simulated));
    let stats = game.selector_stats();
    assert_eq!(stats.candidates, 2);
    assert_eq!(stats.playouts, 400);
    let chosen = stats.score_of(reply).unwrap();
    assert!(stats.scores.iter().all(|c| c.score <= chosen));
    assert!(stats.playouts_per_second() >= 0.0);

    let last = game.board().empty_spaces().get(0).unwrap();
    game.apply_human_move(last).unwrap();

    assert_eq!(game.status(), GameStatus::Draw);
    assert!(game.winning_line().is_none());
    assert_eq!(game.apply_human_move(last), Err(MoveError::GameOver(GameStatus::Draw)));
}

#[test]
fn test_hard_prefers_win_over_block() {
    let mut game = game(Mode::Hard, 3);

    game.apply_human_move(s(5)).unwrap();
    assert_eq!(game.apply_automated_move(), Ok(s(3)));

    game.apply_human_move(s(1)).unwrap();
    assert_eq!(game.apply_automated_move(), Ok(s(9)));
    assert_eq!(reason(&game), Some(DecisionReason::Block));

    // X threatens 8, but O completes column 2 first.
    game.apply_human_move(s(2)).unwrap();
    assert_eq!(game.apply_automated_move(), Ok(s(6)));
    assert_eq!(reason(&game), Some(DecisionReason::Win));
    assert_eq!(game.selector_stats().playouts, 0);

    assert_eq!(game.status(), GameStatus::ComputerWon);
    let line = game.winning_line().unwrap();
    assert_eq!(line.kind, LineKind::Column(2));
    assert_eq!((line.start, line.end), (s(3), s(9)));
    assert_eq!(
        game.apply_automated_move(),
        Err(MoveError::GameOver(GameStatus::ComputerWon))
    );
}

// =============================================================================
// Medium and Easy Tiers
// =============================================================================

#[test]
fn test_medium_center_opening_is_side() {
    for seed in 0..20 {
        let mut game = game(Mode::Medium, seed);
        game.apply_human_move(s(5)).unwrap();
        let reply = game.apply_automated_move().unwrap();
        assert!(Space::SIDES.contains(&reply), "seed {seed} replied {reply}");
    }
}

#[test]
fn test_easy_games_always_finish() {
    let mut human = GameRng::new(77);
    for seed in 0..20 {
        let mut game = game(Mode::Easy, seed);
        while !game.status().is_terminal() {
            match game.to_move() {
                Mark::Player => {
                    let empty = game.board().empty_spaces().as_slice();
                    let space = *human.choose(empty).unwrap();
                    game.apply_human_move(space).unwrap();
                }
                Mark::Computer => {
                    game.apply_automated_move().unwrap();
                    assert_eq!(reason(&game), Some(DecisionReason::Random));
                }
            }
        }
        let board = game.board();
        assert_eq!(board.marks_placed() + board.empty_spaces().len(), 9);
        assert_eq!(game.status().winner().is_some(), game.winning_line().is_some());
    }
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_same_seed_same_game() {
    let play = |seed: u64| {
        let mut game = game(Mode::Hard, seed);
        let mut replies = Vec::new();
        for n in [1, 9, 3, 8] {
            if game.status().is_terminal() || game.apply_human_move(s(n)).is_err() {
                break;
            }
            if game.status().is_terminal() {
                break;
            }
            replies.push(game.apply_automated_move().unwrap());
        }
        (replies, game.selector_stats().scores.clone(), game.rng_state())
    };

    assert_eq!(play(1234), play(1234));
}

#[test]
fn test_two_player_column_win() {
    let mut game = game(Mode::TwoPlayer, 0);
    for n in [2, 1, 5, 3, 8] {
        game.apply_two_player_move(s(n)).unwrap();
    }
    assert_eq!(game.status(), GameStatus::PlayerWon);
    let line = game.winning_line().unwrap();
    assert_eq!(line.kind, LineKind::Column(1));
    assert_eq!(game.selector_stats().playouts, 0);
}
