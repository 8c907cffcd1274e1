//! Rarity Core — seeded generation and shared abstractions.
//!
//! This crate owns the linear congruential generator, the array filler and
//! the traits every rarity table depends on. It performs no I/O.

pub mod clock;
pub mod command;
pub mod error;
pub mod fill;
pub mod generator;
pub mod rng;
pub mod seed;
