//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RarityError {
    /// A table weight is negative after truncation, or cannot be held as an
    /// unsigned 64-bit weight.
    #[error("invalid weight for label `{0}`")]
    InvalidWeight(String),

    /// A draw was requested from an empty or inverted range.
    #[error("invalid range: max ({max}) must be greater than min ({min})")]
    InvalidRange {
        /// The requested lower bound (inclusive).
        min: i128,
        /// The requested upper bound (exclusive).
        max: i128,
    },

    /// The table's weights sum to zero, so no label can be drawn.
    #[error("degenerate distribution: total weight is zero")]
    DegenerateDistribution,

    /// Seed text could not be parsed.
    #[error("invalid seed: {0}")]
    InvalidSeed(String),
}
