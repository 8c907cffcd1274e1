//! Rarity roll runner — error types.

use rarity_core::error::RarityError;
use thiserror::Error;

/// Startup and runtime errors for the roll runner.
#[derive(Debug, Error)]
pub enum CliError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The table or generator rejected its input.
    #[error("roll error: {0}")]
    Rarity(#[from] RarityError),

    /// The report could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing the report failed.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}
