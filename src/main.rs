//! Blockfall runner (default binary).
//!
//! Two drivers around the same core: `sim` plays a seeded game against a
//! synthetic clock and prints the final snapshot, `play` forwards real key
//! presses and a wall clock into a live game. Neither draws anything.

mod cli;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

use blockfall::core::{
    Clock, GameConfig, GameState, GravityDriver, ManualClock, RandomSource, SimpleRng, SystemClock,
};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::types::Command as GameCommand;
use cli::{Cli, Command};

/// Poll interval for key events in `play`
const FRAME_MS: u64 = 16;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Sim {
            board,
            max_pieces,
            step_ms,
        } => run_sim(board.config(), board.seed, max_pieces, step_ms),
        Command::Play { board } => run_play(board.config(), board.seed),
    }
}

/// Log every lock the game reports since the last call
fn report_locks<R: RandomSource>(game: &mut GameState<R>) {
    if let Some(event) = game.take_last_event() {
        info!(
            kind = %event.kind,
            lines_cleared = event.lines_cleared,
            awarded = event.score_awarded,
            score = game.score(),
            next = %game.next_kind(),
            "locked"
        );
    }
}

#[instrument(skip(config))]
fn run_sim(config: GameConfig, seed: u32, max_pieces: u32, step_ms: u64) -> Result<()> {
    let mut game = GameState::new(config, seed)?;
    let clock = ManualClock::new(0);
    let mut driver = GravityDriver::new(&clock);
    // Separate stream so the command choice never perturbs the piece sequence.
    let mut player = SimpleRng::new(seed.wrapping_mul(31).wrapping_add(7));

    info!(?config, "simulation started");

    while !game.game_over() && (max_pieces == 0 || game.pieces_locked() < max_pieces) {
        let command = match player.next_range(8) {
            0 | 1 => GameCommand::MoveLeft,
            2 | 3 => GameCommand::MoveRight,
            4 | 5 => GameCommand::Rotate,
            _ => GameCommand::SoftDropNow,
        };
        game.apply(command);
        report_locks(&mut game);

        clock.advance(step_ms);
        driver.pump(&mut game, &clock);
        report_locks(&mut game);
    }

    info!(
        score = game.score(),
        lines = game.lines(),
        pieces = game.pieces_locked(),
        game_over = game.game_over(),
        elapsed_ms = clock.now_ms(),
        "simulation finished"
    );
    println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    Ok(())
}

#[instrument(skip(config))]
fn run_play(config: GameConfig, seed: u32) -> Result<()> {
    let mut game = GameState::new(config, seed)?;

    terminal::enable_raw_mode()?;
    let result = play_loop(&mut game);
    // Always try to restore terminal state.
    let _ = terminal::disable_raw_mode();
    result?;

    info!(
        score = game.score(),
        lines = game.lines(),
        game_over = game.game_over(),
        "game finished"
    );
    println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    Ok(())
}

fn play_loop(game: &mut GameState) -> Result<()> {
    let clock = SystemClock::new();
    let mut driver = GravityDriver::new(&clock);
    let frame = Duration::from_millis(FRAME_MS);

    info!(active = %game.active().kind, next = %game.next_kind(), "game started");

    while !game.game_over() {
        if event::poll(frame)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        game.apply(command);
                        report_locks(game);
                    }
                }
            }
        }

        driver.pump(game, &clock);
        report_locks(game);
    }

    Ok(())
}
