//! Match-playing infrastructure for training and evaluation.
//!
//! ## Overview
//!
//! - **Trajectory**: Records a complete match with observations, actions and rewards
//! - **MatchSummary**: Aggregates wins, scores and action counts over many matches
//! - **SelfPlayWorker**: Plays matches between two policies
//!
//! ## Usage
//!
//! ```rust
//! use shell_roulette::games::RouletteGame;
//! use shell_roulette::nn::{ScriptedPolicy, UniformPolicy};
//! use shell_roulette::training::{SelfPlayConfig, SelfPlayWorker};
//!
//! let config = SelfPlayConfig::default().with_seed_offset(100);
//! let worker = SelfPlayWorker::new(RouletteGame::default(), config);
//!
//! let mut red = ScriptedPolicy::new(4, 0);
//! let mut blue = UniformPolicy::new(1);
//! let summary = worker.evaluate(&mut red, &mut blue, 8);
//! assert_eq!(summary.matches, 8);
//! ```

pub mod self_play;
pub mod trajectory;

// Re-export main types
pub use self_play::{SelfPlayConfig, SelfPlayWorker};
pub use trajectory::{MatchSummary, Step, Trajectory};
