//! Test RNGs — deterministic `BoundedRng` implementations for tests.

use rarity_core::error::RarityError;
use rarity_core::generator::SeededGenerator;
use rarity_core::rng::{BoundedRng, range_width};

/// An RNG that returns values from a predetermined sequence. Bounds are
/// validated but otherwise ignored. Panics if the sequence is exhausted.
/// Used in tests that need a specific draw (e.g., a threshold at the edge
/// of a weight bucket).
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<i128>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<i128>) -> Self {
        Self { values, index: 0 }
    }

    /// Number of values handed out so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.index
    }
}

impl BoundedRng for SequenceRng {
    fn next_in(&mut self, min: i128, max: i128) -> Result<i128, RarityError> {
        range_width(min, max)?;
        let val = self.values[self.index];
        self.index += 1;
        Ok(val)
    }
}

/// An RNG that delegates to a real `SeededGenerator` and records every
/// requested `(min, max)` pair and the value it produced.
#[derive(Debug)]
pub struct RecordingRng {
    inner: SeededGenerator,
    calls: Vec<(i128, i128, i128)>,
}

impl RecordingRng {
    /// Wrap `inner`, starting with an empty call log.
    #[must_use]
    pub fn new(inner: SeededGenerator) -> Self {
        Self {
            inner,
            calls: Vec::new(),
        }
    }

    /// Every successful call as `(min, max, value)`, in call order.
    #[must_use]
    pub fn calls(&self) -> &[(i128, i128, i128)] {
        &self.calls
    }

    /// The wrapped generator.
    #[must_use]
    pub fn inner(&self) -> &SeededGenerator {
        &self.inner
    }
}

impl BoundedRng for RecordingRng {
    fn next_in(&mut self, min: i128, max: i128) -> Result<i128, RarityError> {
        let value = self.inner.next(min, max)?;
        self.calls.push((min, max, value));
        Ok(value)
    }
}
