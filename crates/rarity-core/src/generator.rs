//! Seeded linear congruential generator.
//!
//! State advances by `state * 6364136223846793005 + 1 (mod 2^64)` on every
//! draw. The mapping into `[min, max)` is a plain remainder, so every draw
//! consumes exactly one step no matter which bounds are requested.

use tracing::{debug, trace};

use crate::clock::Clock;
use crate::error::RarityError;
use crate::fill;
use crate::rng::{BoundedRng, range_width};
use crate::seed::Seed;

/// LCG multiplier.
pub const MULTIPLIER: u64 = 6_364_136_223_846_793_005;

/// LCG increment.
pub const INCREMENT: u64 = 1;

/// Default bounds for [`SeededGenerator::next_default`].
pub const DEFAULT_MIN: i128 = 0;
/// Default upper bound (exclusive) for [`SeededGenerator::next_default`].
pub const DEFAULT_MAX: i128 = 1000;

/// A deterministic generator owning a single 64-bit state.
///
/// Two generators built from the same seed and driven by the same number of
/// draws produce identical outputs for identical bounds. The generator has no
/// internal synchronization; share it behind a mutex if you must share it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeededGenerator {
    state: u64,
}

impl SeededGenerator {
    /// Creates a generator whose state is the given seed.
    #[must_use]
    pub fn new(seed: impl Into<Seed>) -> Self {
        let seed = seed.into();
        debug!(seed = seed.value(), "seeded generator created");
        Self {
            state: seed.value(),
        }
    }

    /// Creates a generator seeded from the clock's current time.
    #[must_use]
    pub fn from_clock(clock: &dyn Clock) -> Self {
        Self::new(Seed::from_clock(clock))
    }

    /// Returns the current raw state.
    #[must_use]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advances the state one step and returns the new state.
    fn step(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.state
    }

    /// Draws an integer in `[min, max)`.
    ///
    /// The state is left untouched when the range is rejected.
    ///
    /// # Errors
    ///
    /// Returns `RarityError::InvalidRange` if `max <= min`.
    pub fn next(&mut self, min: i128, max: i128) -> Result<i128, RarityError> {
        let width = range_width(min, max)?;
        let state = i128::from(self.step());
        let value = match width {
            Some(width) => min + state % width,
            // Wider than i128, and therefore wider than any 64-bit state.
            None => min + state,
        };
        trace!(min, max, value, "generator draw");
        Ok(value)
    }

    /// Draws an integer in `[0, 1000)`.
    ///
    /// # Errors
    ///
    /// Never fails for the default bounds; the `Result` mirrors [`next`].
    ///
    /// [`next`]: SeededGenerator::next
    pub fn next_default(&mut self) -> Result<i128, RarityError> {
        self.next(DEFAULT_MIN, DEFAULT_MAX)
    }

    /// Fills `values` in place; see [`fill::fill_array`].
    ///
    /// # Errors
    ///
    /// Returns `RarityError::InvalidRange` if `values` is non-empty and
    /// `max <= min`.
    pub fn fill_array<'a>(
        &mut self,
        values: &'a mut [i128],
        min: i128,
        max: i128,
    ) -> Result<&'a mut [i128], RarityError> {
        fill::fill_array(self, values, min, max)
    }

    /// Fills `values` in place from `[0, 100000)`.
    ///
    /// # Errors
    ///
    /// Never fails for the default bounds; the `Result` mirrors
    /// [`fill_array`](SeededGenerator::fill_array).
    pub fn fill_default<'a>(
        &mut self,
        values: &'a mut [i128],
    ) -> Result<&'a mut [i128], RarityError> {
        fill::fill_array(self, values, fill::DEFAULT_MIN, fill::DEFAULT_MAX)
    }
}

impl BoundedRng for SeededGenerator {
    fn next_in(&mut self, min: i128, max: i128) -> Result<i128, RarityError> {
        self.next(min, max)
    }
}
