//! Rarity Tables — weighted rarity rolls.
//!
//! Responsible for validating weight tables, drawing labels in proportion
//! to their weight, reporting normalized odds, and running roll sessions.

pub mod application;
pub mod domain;
