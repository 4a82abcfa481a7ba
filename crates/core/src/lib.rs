//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the board/piece state machine: spawning, movement and
//! rotation validation, collision detection, locking, line clearing, scoring
//! and game-over detection. It knows nothing about drawing or keyboards;
//! presenters read state through [`GameState`] accessors or a
//! [`GameSnapshot`], and forward intents as [`Command`](types::Command)s.
//!
//! - **Deterministic**: the spawner draws from an injected [`RandomSource`],
//!   so a seed (or a script) fixes the whole piece sequence
//! - **Clock-free**: time only enters through `Command::Tick`; the
//!   [`GravityDriver`] turns any [`Clock`] into ticks
//!
//! # Module Structure
//!
//! - [`board`]: configurable grid with row clearing
//! - [`shapes`]: the seven square piece matrices and clockwise rotation
//! - [`piece`]: a live matrix at a board position
//! - [`rng`]: random sources (seeded LCG, scripted)
//! - [`spawner`]: uniform piece selection with one piece of lookahead
//! - [`game_state`]: the controller state machine
//! - [`scoring`]: 100 points per cleared row
//! - [`clock`]: clocks and the gravity driver
//! - [`config`]: dimensions and drop interval
//! - [`snapshot`]: serializable view of the whole game
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, GameState};
//! use blockfall_core::types::Command;
//!
//! let mut game = GameState::new(GameConfig::default(), 12345).unwrap();
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::Rotate);
//! while game.pieces_locked() == 0 {
//!     game.apply(Command::SoftDropNow);
//! }
//!
//! assert!(!game.game_over());
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod clock;
pub mod config;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;
pub mod spawner;

pub use blockfall_types as types;

pub use board::Board;
pub use clock::{Clock, GravityDriver, ManualClock, SystemClock};
pub use config::{ConfigError, GameConfig};
pub use game_state::{step, GameState, LockEvent, Status};
pub use piece::Piece;
pub use rng::{RandomSource, ScriptedSource, SimpleRng};
pub use scoring::line_clear_score;
pub use shapes::{shape, ShapeMatrix};
pub use snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
pub use spawner::Spawner;
