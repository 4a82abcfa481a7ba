//! RNG module - injectable randomness for the spawner
//!
//! [`RandomSource`] is the seam between piece selection and whatever produces
//! the numbers. Production games use [`SimpleRng`], a seedable LCG, so a seed
//! fully determines the piece sequence. Tests that need an exact sequence use
//! [`ScriptedSource`].

use crate::types::PieceKind;

/// Source of uniformly distributed indices
pub trait RandomSource {
    /// Return a value in `[0, bound)`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Number of distinct values in the high 16 bits
const RANGE_SPAN: u32 = 1 << 16;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a uniformly distributed value in range [0, max)
    ///
    /// Uses the high 16 bits; the low bits of a power-of-two LCG cycle with
    /// short periods. Draws from the uneven tail above the largest multiple
    /// of `max` are rejected.
    ///
    /// # Panics
    ///
    /// Panics if `max` is 0 or greater than 65536.
    pub fn next_range(&mut self, max: u32) -> u32 {
        assert!((1..=RANGE_SPAN).contains(&max), "range bound {max} outside 1..=65536");
        let zone = RANGE_SPAN - RANGE_SPAN % max;
        loop {
            let value = self.next_u32() >> 16;
            if value < zone {
                return value % max;
            }
        }
    }

    /// Current internal state (restarting from it replays the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.next_range(bound as u32) as usize
    }
}

/// Replays a fixed cycle of variants, for deterministic scenarios
///
/// Indices are resolved against [`PieceKind::ALL`], which is also the order the
/// spawner draws from, so the spawner yields exactly the scripted kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedSource {
    script: Vec<PieceKind>,
    position: usize,
}

impl ScriptedSource {
    /// # Panics
    ///
    /// Panics if `script` is empty.
    pub fn new(script: impl Into<Vec<PieceKind>>) -> Self {
        let script = script.into();
        assert!(!script.is_empty(), "scripted source needs at least one piece");
        Self {
            script,
            position: 0,
        }
    }

    /// Always yields the same variant
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }
}

impl RandomSource for ScriptedSource {
    fn next_index(&mut self, bound: usize) -> usize {
        let kind = self.script[self.position % self.script.len()];
        self.position += 1;
        PieceKind::ALL
            .iter()
            .position(|&k| k == kind)
            .unwrap_or(0)
            % bound
    }
}
