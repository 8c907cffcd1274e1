//! Session driver.

use rarity_core::clock::Clock;
use rarity_core::generator::SeededGenerator;
use rarity_core::seed::Seed;
use rarity_tables::application::{command_handlers, query_handlers};
use rarity_tables::domain::commands::RollSession;
use rarity_tables::domain::sampler::WeightedSampler;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::config::{Config, Mode};
use crate::error::CliError;

/// Runs the configured mode and returns the JSON document to print.
///
/// # Errors
///
/// Returns `CliError::Rarity` if the table is degenerate, or
/// `CliError::Serialization` if the result cannot be encoded.
pub fn run(config: &Config, clock: &dyn Clock) -> Result<Value, CliError> {
    let seed = config.seed.unwrap_or_else(|| Seed::from_clock(clock));
    info!(%seed, explicit = config.seed.is_some(), "seed selected");

    let mut sampler = WeightedSampler::with_rng(config.table.clone(), SeededGenerator::new(seed));

    let document = match config.mode {
        Mode::Odds => serde_json::to_value(query_handlers::get_odds(&sampler)?)?,
        Mode::Roll => {
            let command = RollSession {
                correlation_id: Uuid::new_v4(),
                rolls: config.rolls,
            };
            let report = command_handlers::handle_roll_session(&command, &mut sampler, clock)?;
            let mut document = serde_json::to_value(report)?;
            if let Value::Object(map) = &mut document {
                map.insert("seed".to_owned(), Value::String(seed.to_string()));
            }
            document
        }
    };

    Ok(document)
}
