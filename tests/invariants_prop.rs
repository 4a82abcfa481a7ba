//! Property tests for controller invariants over generated command streams.
//!
//! Invariants covered:
//! - Board dimensions never change.
//! - While running, the active piece never collides.
//! - Score is always 100 per cleared row.
//! - Rejected moves and rotations leave the state untouched.
//! - Once the game is over, nothing changes.

use proptest::prelude::*;

use blockfall::core::{Board, GameConfig, GameState, ScriptedSource};
use blockfall::types::{Command, PieceKind};

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::MoveLeft),
        Just(Command::MoveRight),
        Just(Command::Rotate),
        Just(Command::SoftDropNow),
        (0u64..2500).prop_map(Command::tick),
    ]
}

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn invariants_hold_over_random_play(
        seed in any::<u32>(),
        width in 4u8..=14,
        height in 4u8..=24,
        commands in prop::collection::vec(command_strategy(), 0..400),
    ) {
        let config = GameConfig { width, height, drop_interval_ms: 1000 };
        let mut game = GameState::new(config, seed).unwrap();

        for command in commands {
            let was_over = game.game_over();
            let before = game.snapshot();
            let advanced = game.apply(command);

            prop_assert_eq!(game.board().width(), width);
            prop_assert_eq!(game.board().height(), height);
            prop_assert_eq!(game.board().rows().count(), height as usize);
            prop_assert_eq!(game.score(), game.lines() * 100);

            if was_over {
                prop_assert!(!advanced);
                prop_assert_eq!(&game.snapshot(), &before);
            } else if !game.game_over() {
                prop_assert!(!game.collides(game.active()));
            }

            if !advanced {
                prop_assert_eq!(&game.snapshot(), &before);
            }
        }
    }

    #[test]
    fn move_left_then_right_restores_x(
        kind in kind_strategy(),
        offset in -3i8..=3,
    ) {
        let mut game =
            GameState::with_source(GameConfig::default(), ScriptedSource::repeat(kind)).unwrap();
        game.apply(Command::SoftDropNow);
        let direction = if offset < 0 { Command::MoveLeft } else { Command::MoveRight };
        for _ in 0..offset.unsigned_abs() {
            game.apply(direction);
        }

        let x = game.active().x;
        if game.apply(Command::MoveLeft) {
            prop_assert!(game.apply(Command::MoveRight));
            prop_assert_eq!(game.active().x, x);
        }
    }

    #[test]
    fn four_rotations_are_identity(kind in kind_strategy(), drops in 1usize..10) {
        let mut game =
            GameState::with_source(GameConfig::default(), ScriptedSource::repeat(kind)).unwrap();
        for _ in 0..drops {
            game.apply(Command::SoftDropNow);
        }
        let original = *game.active();
        let mut accepted = 0;
        for _ in 0..4 {
            if game.apply(Command::Rotate) {
                accepted += 1;
            }
        }
        // Open board: every orientation fits away from the floor
        prop_assert_eq!(accepted, 4);
        prop_assert_eq!(game.active().shape, original.shape);
    }

    #[test]
    fn clearing_preserves_height_and_removes_full_rows(
        filled in prop::collection::vec(any::<bool>(), 20),
        noise in prop::collection::vec((0i8..10, 0i8..20), 0..40),
    ) {
        let mut board = Board::new();
        for (y, full) in filled.iter().enumerate() {
            if *full {
                for x in 0..10 {
                    board.set(x, y as i8, Some(PieceKind::I));
                }
            }
        }
        // Scatter cells on non-full rows, always leaving column 9 empty there
        for (x, y) in noise {
            if !filled[y as usize] && x < 9 {
                board.set(x, y, Some(PieceKind::T));
            }
        }

        let expected_full = filled.iter().filter(|f| **f).count();
        let survivors: Vec<_> = board
            .rows()
            .filter(|row| !row.iter().all(|c| c.is_some()))
            .map(|row| row.to_vec())
            .collect();

        prop_assert_eq!(board.clear_full_rows(), expected_full);
        prop_assert_eq!(board.rows().count(), 20);

        let rows = board.to_rows();
        // Top rows are the fresh empty ones, the rest keep their order
        for row in &rows[..expected_full] {
            prop_assert!(row.iter().all(|c| c.is_none()));
        }
        prop_assert_eq!(&rows[expected_full..], &survivors[..]);
    }
}
