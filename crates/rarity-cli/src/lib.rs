//! Rarity roll runner library: configuration, errors and the session driver
//! used by the `rarity-roll` binary.

pub mod config;
pub mod error;
pub mod run;
