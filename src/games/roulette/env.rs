//! Single-match environment wrapper.

use crate::core::{ActionKind, ActionMask, GameRng, MatchState, RulesConfig};
use crate::error::{ConfigError, SnapshotError};
use crate::nn::Observation;
use crate::rules::{GameResult, RulesEngine, StepOutcome};

use super::RouletteGame;

/// A `RouletteGame` bundled with the one match it is playing.
///
/// This is the reset/step surface training loops and the transport bridge
/// talk to.
///
/// ```
/// use shell_roulette::games::roulette::RouletteEnv;
/// use shell_roulette::core::ActionKind;
///
/// let mut env = RouletteEnv::default();
/// env.reset(42);
/// let outcome = env.step(ActionKind::FireOpponent);
/// assert!(outcome.reward.is_finite());
/// ```
#[derive(Clone, Debug)]
pub struct RouletteEnv {
    game: RouletteGame,
    state: MatchState,
}

impl RouletteEnv {
    /// Create an environment and start a match from seed 0.
    pub fn new(config: RulesConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_game(RouletteGame::new(config)?))
    }

    /// Wrap an existing engine and start a match from seed 0.
    #[must_use]
    pub fn with_game(game: RouletteGame) -> Self {
        let state = game.reset(GameRng::new(0));
        Self { game, state }
    }

    /// Start a new match.
    pub fn reset(&mut self, seed: u64) -> Observation {
        self.state = self.game.reset(GameRng::new(seed));
        self.state.observation()
    }

    /// Resolve `action` for the side to act.
    pub fn step(&mut self, action: ActionKind) -> StepOutcome {
        self.game.step(&mut self.state, action)
    }

    #[must_use]
    pub fn observation(&self) -> Observation {
        self.state.observation()
    }

    #[must_use]
    pub fn legal_actions(&self) -> ActionMask {
        self.game.legal_actions(&self.state)
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.result().is_some()
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.game.is_terminal(&self.state)
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn game(&self) -> &RouletteGame {
        &self.game
    }

    /// Serialize the current match.
    pub fn snapshot(&self) -> Result<Vec<u8>, SnapshotError> {
        self.state.to_bytes()
    }

    /// Replace the current match with one produced by `snapshot`.
    ///
    /// Snapshots whose health or inventories break this engine's limits are
    /// rejected and the current match is kept.
    pub fn restore(&mut self, bytes: &[u8]) -> Result<(), SnapshotError> {
        let state = MatchState::from_bytes(bytes)?;
        state.check_limits(self.game.config())?;
        self.state = state;
        Ok(())
    }
}

impl Default for RouletteEnv {
    fn default() -> Self {
        Self::with_game(RouletteGame::default())
    }
}
