//! Terminal input module (presenter-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s. There is no
//! game logic here: the caller forwards whatever comes out straight into the
//! controller.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
