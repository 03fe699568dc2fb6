//! Rules engine trait for duel implementations.
//!
//! A rules engine is immutable configuration plus transition logic. All
//! mutable data lives in the caller-owned `MatchState`, so one engine can
//! drive any number of matches, including on different threads.

use serde::{Deserialize, Serialize};

use crate::core::{ActionKind, ActionMask, GameRng, MatchState, RulesConfig, Shell, Side};
use crate::nn::Observation;

/// Result of a finished match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One side survived.
    Winner(Side),
    /// Both sides are dead. Unreachable through `step`, only in staged states.
    Draw,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }

    /// The winning side, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self {
            GameResult::Winner(s) => Some(*s),
            GameResult::Draw => None,
        }
    }
}

/// Diagnostics about one resolved step. The engine never reads these back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepInfo {
    /// The actor was restrained and lost the turn without acting.
    pub skipped: bool,
    /// The action violated its preconditions and was penalized.
    pub illegal: bool,
    /// Shell fired or ejected by the action.
    pub drawn: Option<Shell>,
    /// The magazine ran out and a new round was loaded.
    pub new_round: bool,
    /// The actor keeps the turn.
    pub turn_kept: bool,
}

/// Everything `step` reports back to the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepOutcome {
    /// Observation after the transition.
    pub observation: Observation,
    /// Reward earned by the side that acted.
    pub reward: f64,
    /// Whether the match is over.
    pub done: bool,
    /// Diagnostics.
    pub info: StepInfo,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `reset`: randomness must come only from the supplied `GameRng`
/// - `step`: must never panic on a reachable state; illegal actions are
///   penalized, not rejected
/// - `legal_actions`: empty mask once the match is over
pub trait RulesEngine {
    /// Get the rules configuration.
    fn config(&self) -> &RulesConfig;

    /// Start a new match driven by `rng`.
    fn reset(&self, rng: GameRng) -> MatchState;

    /// Legal actions for the side to act.
    fn legal_actions(&self, state: &MatchState) -> ActionMask;

    /// Resolve `action` for the side to act.
    fn step(&self, state: &mut MatchState, action: ActionKind) -> StepOutcome;

    /// Check if the match is over.
    ///
    /// Returns `Some(result)` once a side is dead, `None` while it continues.
    fn is_terminal(&self, state: &MatchState) -> Option<GameResult> {
        let blue_dead = state.player(Side::Blue).is_dead();
        let red_dead = state.player(Side::Red).is_dead();
        match (blue_dead, red_dead) {
            (false, false) => None,
            (true, false) => Some(GameResult::Winner(Side::Red)),
            (false, true) => Some(GameResult::Winner(Side::Blue)),
            (true, true) => Some(GameResult::Draw),
        }
    }

    // === Convenience Methods ===

    /// Start a new match from a seed.
    fn reset_seeded(&self, seed: u64) -> MatchState {
        self.reset(GameRng::new(seed))
    }
}
