//! Shared test helpers for runner integration tests.
#![allow(dead_code)]

use std::collections::HashMap;

use chrono::{TimeZone, Utc};
use rarity_cli::config::Config;
use rarity_cli::error::CliError;
use rarity_test_support::FixedClock;

/// Fixed timestamp used across all integration tests.
pub fn fixed_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
}

/// Build a `Config` from the given variables, as if they were the only ones
/// set in the environment.
pub fn config_from(vars: &[(&str, &str)]) -> Result<Config, CliError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}
