//! Game implementations.

pub mod roulette;

pub use roulette::{RouletteEnv, RouletteGame};
