//! Gravity driver tests - synthetic clock drives time-based drops

use blockfall::core::{
    step, Board, Clock, GameConfig, GameState, GravityDriver, ManualClock, ScriptedSource,
};
use blockfall::types::{Command, PieceKind};

fn game(drop_interval_ms: u32) -> GameState<ScriptedSource> {
    let config = GameConfig {
        drop_interval_ms,
        ..GameConfig::default()
    };
    GameState::with_source(config, ScriptedSource::repeat(PieceKind::T)).unwrap()
}

#[test]
fn test_drop_fires_only_after_interval_is_exceeded() {
    let clock = ManualClock::new(0);
    let mut driver = GravityDriver::new(&clock);
    let mut game = game(1000);

    clock.advance(1000);
    assert!(!driver.pump(&mut game, &clock));
    assert_eq!(game.active().y, 0);

    clock.advance(1);
    assert!(driver.pump(&mut game, &clock));
    assert_eq!(game.active().y, 1);

    // Interval restarts from the drop
    assert_eq!(driver.elapsed_ms(&clock), 0);
    clock.advance(600);
    assert!(!driver.pump(&mut game, &clock));
    assert_eq!(game.active().y, 1);
    clock.advance(401);
    assert!(driver.pump(&mut game, &clock));
    assert_eq!(game.active().y, 2);
}

#[test]
fn test_user_commands_interleave_with_ticks() {
    let clock = ManualClock::new(10_000);
    let mut driver = GravityDriver::new(&clock);
    let mut game = game(200);

    let x = game.active().x;
    game.apply(Command::MoveLeft);
    clock.advance(250);
    driver.pump(&mut game, &clock);
    game.apply(Command::SoftDropNow);

    assert_eq!(game.active().x, x - 1);
    assert_eq!(game.active().y, 2);
}

#[test]
fn test_gravity_alone_locks_and_respawns() {
    let clock = ManualClock::new(0);
    let mut driver = GravityDriver::new(&clock);
    let mut game = game(100);

    // T spawns on row 0 with two filled rows: 18 falls, then a lock
    for _ in 0..19 {
        clock.advance(101);
        assert!(driver.pump(&mut game, &clock));
    }
    assert_eq!(game.pieces_locked(), 1);
    assert_eq!(game.active().y, 0);
    assert_eq!(clock.now_ms(), 19 * 101);
}

#[test]
fn test_ticks_after_game_over_are_inert() {
    let mut board = Board::new();
    board.set(4, 1, Some(PieceKind::Z));
    let mut game = GameState::with_board(board, 50, ScriptedSource::repeat(PieceKind::T)).unwrap();
    assert!(game.game_over());

    let clock = ManualClock::new(0);
    let mut driver = GravityDriver::new(&clock);
    let before = game.snapshot();
    for _ in 0..10 {
        clock.advance(1_000);
        assert!(!driver.pump(&mut game, &clock));
    }
    assert_eq!(game.snapshot(), before);
    // No drop ever fired, so the interval keeps growing
    assert_eq!(driver.elapsed_ms(&clock), 10_000);
}

#[test]
fn test_step_function_with_ticks() {
    let state = game(1000);
    let state = step(state, Command::tick(999));
    assert_eq!(state.active().y, 0);
    let state = step(state, Command::tick(1001));
    assert_eq!(state.active().y, 1);
}
