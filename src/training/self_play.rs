//! Self-play loop for generating training data.
//!
//! Drives matches between two policies and records trajectories for
//! training or evaluation.

use log::debug;

use crate::core::{GameRng, Side};
use crate::nn::Policy;
use crate::rules::RulesEngine;

use super::trajectory::{MatchSummary, Step, Trajectory};

/// Configuration for self-play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelfPlayConfig {
    /// Maximum steps per match before it is cut off.
    pub max_steps: usize,

    /// Seed offset for RNG (combined with match index for unique seeds).
    pub seed_offset: u64,

    /// Show each policy the observation from its own side.
    pub normalize_observations: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            max_steps: 1000,
            seed_offset: 0,
            normalize_observations: true,
        }
    }
}

impl SelfPlayConfig {
    /// Create a new self-play config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum steps per match.
    #[must_use]
    pub fn with_max_steps(mut self, max: usize) -> Self {
        self.max_steps = max;
        self
    }

    /// Set seed offset.
    #[must_use]
    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }

    /// Set whether policies see side-normalized observations.
    #[must_use]
    pub fn with_normalize_observations(mut self, normalize: bool) -> Self {
        self.normalize_observations = normalize;
        self
    }
}

/// Worker for running matches between two policies.
pub struct SelfPlayWorker<E: RulesEngine> {
    /// The rules every match is played under.
    engine: E,

    /// Self-play configuration.
    config: SelfPlayConfig,
}

impl<E: RulesEngine> SelfPlayWorker<E> {
    /// Create a new self-play worker.
    pub fn new(engine: E, config: SelfPlayConfig) -> Self {
        Self { engine, config }
    }

    /// Play one match from `seed` with `red` and `blue` choosing for their
    /// sides.
    ///
    /// Stops when the match ends, when the side to act has no choice, or
    /// after `max_steps` steps (marked as truncated).
    pub fn play_match<R, B>(&self, red: &mut R, blue: &mut B, seed: u64) -> Trajectory
    where
        R: Policy + ?Sized,
        B: Policy + ?Sized,
    {
        let mut state = self.engine.reset(GameRng::new(seed));
        let mut trajectory = Trajectory::new(seed);

        for move_number in 0..self.config.max_steps {
            if self.engine.is_terminal(&state).is_some() {
                break;
            }

            let side = state.turn;
            let observation = if self.config.normalize_observations {
                state.observation().normalize_perspective()
            } else {
                state.observation()
            };
            let mask = self.engine.legal_actions(&state);

            let choice = match side {
                Side::Red => red.choose(&observation, &mask),
                Side::Blue => blue.choose(&observation, &mask),
            };
            let Some(action) = choice else {
                debug!("{side} has no action at move {move_number}, stopping");
                break;
            };

            let outcome = self.engine.step(&mut state, action);
            trajectory.push(Step {
                side,
                observation,
                mask,
                action,
                reward: outcome.reward,
                move_number,
            });

            if outcome.done {
                break;
            }
        }

        trajectory.result = self.engine.is_terminal(&state);
        trajectory.truncated = trajectory.result.is_none();

        debug!(
            "match {seed} finished after {} steps: {:?}{}",
            trajectory.len(),
            trajectory.result,
            if trajectory.truncated { " (truncated)" } else { "" }
        );
        trajectory
    }

    /// Play `count` matches with seeds `seed_offset..seed_offset + count`.
    pub fn play_matches<R, B>(&self, red: &mut R, blue: &mut B, count: usize) -> Vec<Trajectory>
    where
        R: Policy + ?Sized,
        B: Policy + ?Sized,
    {
        (0..count)
            .map(|i| {
                let seed = self.config.seed_offset.wrapping_add(i as u64);
                self.play_match(red, blue, seed)
            })
            .collect()
    }

    /// Play `count` matches and summarize them.
    pub fn evaluate<R, B>(&self, red: &mut R, blue: &mut B, count: usize) -> MatchSummary
    where
        R: Policy + ?Sized,
        B: Policy + ?Sized,
    {
        self.play_matches(red, blue, count).iter().collect()
    }

    /// Get the engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Get the configuration.
    pub fn config(&self) -> &SelfPlayConfig {
        &self.config
    }
}
