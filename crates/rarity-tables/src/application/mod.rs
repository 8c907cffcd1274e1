//! Application layer for the rarity tables context.

pub mod command_handlers;
pub mod query_handlers;
