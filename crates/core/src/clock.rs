//! Clock and gravity driver - the tick contract
//!
//! The controller never reads time itself. A [`GravityDriver`] asks a
//! [`Clock`] for the current timestamp, turns the time since the last
//! automatic drop into a [`Command::Tick`], and restarts its interval whenever
//! that tick actually moved the game. Tests use [`ManualClock`] to step time
//! by hand.

use std::cell::Cell;
use std::time::Instant;

use crate::game_state::GameState;
use crate::rng::RandomSource;
use crate::types::Command;

/// Monotonic millisecond timestamps
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall-clock time measured from construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Synthetic clock advanced explicitly
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }

    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Feeds time-driven ticks into a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GravityDriver {
    last_drop_ms: u64,
}

impl GravityDriver {
    /// Start measuring the drop interval from the clock's current time
    pub fn new(clock: &impl Clock) -> Self {
        Self {
            last_drop_ms: clock.now_ms(),
        }
    }

    /// Milliseconds since the last automatic drop
    pub fn elapsed_ms(&self, clock: &impl Clock) -> u64 {
        clock.now_ms().saturating_sub(self.last_drop_ms)
    }

    /// Send one tick. Returns true if the game fell or locked.
    pub fn pump<R: RandomSource>(&mut self, game: &mut GameState<R>, clock: &impl Clock) -> bool {
        let now = clock.now_ms();
        let fired = game.apply(Command::tick(now.saturating_sub(self.last_drop_ms)));
        if fired {
            self.last_drop_ms = now;
        }
        fired
    }
}
