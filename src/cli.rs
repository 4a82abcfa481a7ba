//! Command-line interface for the blockfall driver.

use clap::{Args, Parser, Subcommand};

use blockfall::core::GameConfig;

/// Blockfall - falling-block puzzle core with a headless driver
#[derive(Parser, Debug)]
#[command(name = "blockfall")]
#[command(about = "Drive the falling-block game core from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Board overrides; anything left unset comes from `BLOCKFALL_*` variables
#[derive(Args, Debug, Clone, Copy)]
pub struct BoardArgs {
    /// Board columns
    #[arg(long)]
    pub width: Option<u8>,

    /// Board rows
    #[arg(long)]
    pub height: Option<u8>,

    /// Automatic drop interval in milliseconds
    #[arg(long)]
    pub drop_ms: Option<u32>,

    /// Spawner seed
    #[arg(long, env = "BLOCKFALL_SEED", default_value_t = 1)]
    pub seed: u32,
}

impl BoardArgs {
    pub fn config(&self) -> GameConfig {
        let env = GameConfig::from_env();
        GameConfig {
            width: self.width.unwrap_or(env.width),
            height: self.height.unwrap_or(env.height),
            drop_interval_ms: self.drop_ms.unwrap_or(env.drop_interval_ms),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a seeded game with random commands and a synthetic clock, then
    /// print the final snapshot as JSON
    Sim {
        #[command(flatten)]
        board: BoardArgs,

        /// Stop after this many locked pieces (0 = until game over)
        #[arg(long, default_value_t = 0)]
        max_pieces: u32,

        /// Synthetic milliseconds that pass between two commands
        #[arg(long, default_value_t = 100)]
        step_ms: u64,
    },

    /// Forward keyboard input to a live game (arrows or hjkl/wasd, q quits).
    /// Progress is reported through the log; nothing is drawn.
    Play {
        #[command(flatten)]
        board: BoardArgs,
    },
}
