//! Rules engine trait and the tables that parameterize it.
//!
//! - `engine`: `RulesEngine`, step results, match results
//! - `reward`: reward constants per outcome
//! - `turn`: which actions keep the turn

pub mod engine;
pub mod reward;
pub mod turn;

pub use engine::{GameResult, RulesEngine, StepInfo, StepOutcome};
pub use reward::RewardTable;
pub use turn::TurnPolicy;
