//! Shell roulette: a two-side duel over a shared, partially hidden magazine.
//!
//! - Each round loads 1-4 live and 1-4 blank shells in random order
//! - Sides shoot themselves or each other, or use items
//! - Shooting yourself with a blank keeps the turn
//! - First side to 0 health loses

mod env;
mod game;
mod round;

pub use env::RouletteEnv;
pub use game::RouletteGame;
