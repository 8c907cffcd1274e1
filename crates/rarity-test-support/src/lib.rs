//! Shared test mocks and utilities for rarity rolls.

mod clock;
mod rng;

pub use clock::FixedClock;
pub use rng::{RecordingRng, SequenceRng};
