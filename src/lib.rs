//! # shell-roulette
//!
//! A two-side duel rules engine built for reinforcement-learning training.
//!
//! ## Design Principles
//!
//! 1. **State Is a Value**: a match is a `MatchState` owned by the caller.
//!    The engine holds only configuration and can drive any number of
//!    matches.
//!
//! 2. **Closed Action Set**: seven actions, five items, two sides. Raw ids
//!    exist only at the edges and are converted with `TryFrom`.
//!
//! 3. **Explicit Randomness**: every random draw goes through the match's
//!    `GameRng`, so a seed reproduces a match exactly and a snapshot resumes
//!    it exactly.
//!
//! 4. **Configuration Over Convention**: health, shell and item ranges,
//!    rewards and turn continuation are all data in `RulesConfig`.
//!
//! ## Modules
//!
//! - `core`: Sides, shells, items, actions, state, RNG, configuration
//! - `rules`: `RulesEngine` trait, reward table, turn policy
//! - `games`: The shell roulette engine and its single-match environment
//! - `nn`: Observation encoding, perspective normalization, policies
//! - `training`: Self-play matches, trajectories, summaries
//! - `bridge`: Line protocol for driving an environment over a stream
//! - `error`: Typed errors

pub mod core;
pub mod rules;
pub mod games;
pub mod nn;
pub mod training;
pub mod bridge;
pub mod error;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    Side, SideMap,
    GameRng, GameRngState,
    RulesConfig,
    Shell, ShellKnowledge, Magazine,
    ItemKind, Inventory,
    ActionKind, ActionMask, ActionRecord, ACTION_COUNT,
    MatchState, PlayerState,
};

pub use crate::rules::{GameResult, RewardTable, RulesEngine, StepInfo, StepOutcome, TurnPolicy};

pub use crate::games::{RouletteEnv, RouletteGame};

pub use crate::nn::{FixedPolicy, Observation, Policy, ScriptedPolicy, UniformPolicy, OBS_LEN};

pub use crate::training::{MatchSummary, SelfPlayConfig, SelfPlayWorker, Trajectory};

pub use crate::bridge::{BridgeSession, Request, StepResponse};

pub use crate::error::{ActionError, BridgeError, ConfigError, SnapshotError};
