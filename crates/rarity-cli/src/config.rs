//! Environment configuration.

use rarity_core::seed::Seed;
use rarity_tables::domain::table::WeightTable;
use serde_json::{Map, Value};

use crate::error::CliError;

/// Table rolled when `RARITY_TABLE` is not set.
pub const DEFAULT_TABLE: [(&str, u32); 5] = [
    ("Common", 55),
    ("Uncommon", 24),
    ("Rare", 15),
    ("Ultra-Rare", 5),
    ("Legendary", 1),
];

/// Rolls per session when `RARITY_ROLLS` is not set.
pub const DEFAULT_ROLLS: usize = 100;

/// What the runner prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Roll the table and print a tally report.
    Roll,
    /// Print the table's odds without rolling.
    Odds,
}

/// Runner configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Explicit seed; `None` seeds from the clock.
    pub seed: Option<Seed>,
    /// Number of rolls.
    pub rolls: usize,
    /// The validated table.
    pub table: WeightTable,
    /// Output mode.
    pub mode: Mode,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Config` if a variable is present but invalid, or
    /// `CliError::Rarity` if the table has an invalid weight.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which returns a variable's value
    /// or `None` if it is unset.
    ///
    /// Recognized variables: `RARITY_SEED`, `RARITY_ROLLS`, `RARITY_TABLE`
    /// (a JSON object of label to weight) and `RARITY_MODE` (`roll` or
    /// `odds`).
    ///
    /// # Errors
    ///
    /// Returns `CliError::Config` if a variable is present but invalid, or
    /// `CliError::Rarity` if the table has an invalid weight.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CliError> {
        let seed = lookup("RARITY_SEED")
            .map(|text| {
                text.parse::<Seed>()
                    .map_err(|e| CliError::Config(format!("RARITY_SEED: {e}")))
            })
            .transpose()?;

        let rolls = match lookup("RARITY_ROLLS") {
            Some(text) => text.trim().parse::<usize>().map_err(|e| {
                CliError::Config(format!("RARITY_ROLLS must be a valid usize: {e}"))
            })?,
            None => DEFAULT_ROLLS,
        };

        let table = match lookup("RARITY_TABLE") {
            Some(text) => parse_table(&text)?,
            None => WeightTable::from_weights(DEFAULT_TABLE)?,
        };

        let mode = match lookup("RARITY_MODE").as_deref().map(str::trim) {
            None | Some("roll") => Mode::Roll,
            Some("odds") => Mode::Odds,
            Some(other) => {
                return Err(CliError::Config(format!(
                    "RARITY_MODE must be `roll` or `odds`, got `{other}`"
                )));
            }
        };

        Ok(Self {
            seed,
            rolls,
            table,
            mode,
        })
    }
}

/// Parses a JSON object of label to numeric weight, keeping key order.
///
/// # Errors
///
/// Returns `CliError::Config` if the text is not a JSON object of numbers,
/// or `CliError::Rarity` if a weight is invalid.
pub fn parse_table(text: &str) -> Result<WeightTable, CliError> {
    let object: Map<String, Value> = serde_json::from_str(text)
        .map_err(|e| CliError::Config(format!("RARITY_TABLE must be a JSON object: {e}")))?;

    let weights = object
        .into_iter()
        .map(|(label, value)| match value.as_f64() {
            Some(weight) => Ok((label, weight)),
            None => Err(CliError::Config(format!(
                "RARITY_TABLE weight for `{label}` must be a number"
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(WeightTable::from_weights(weights)?)
}
