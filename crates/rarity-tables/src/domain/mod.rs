//! Domain layer for the rarity tables context.

pub mod commands;
pub mod odds;
pub mod sampler;
pub mod table;
