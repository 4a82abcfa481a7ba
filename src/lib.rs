//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so binaries, tests and
//! benches can write `blockfall::core::GameState` regardless of where the code
//! lives under `crates/`.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_types as types;
