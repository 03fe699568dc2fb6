//! Shell roulette rules.

use log::{debug, trace, warn};

use super::round::load_round;
use crate::core::{
    ActionKind, ActionMask, ActionRecord, GameRng, ItemKind, MatchState, RulesConfig, Shell,
    ShellKnowledge, Side,
};
use crate::error::ConfigError;
use crate::rules::{GameResult, RulesEngine, StepInfo, StepOutcome};

/// Shell roulette rules engine.
///
/// Holds only the validated configuration. Every match it drives lives in
/// a caller-owned `MatchState`.
#[derive(Clone, Debug)]
pub struct RouletteGame {
    config: RulesConfig,
}

impl RouletteGame {
    /// Create an engine, rejecting configurations that cannot produce a
    /// playable round.
    pub fn new(config: RulesConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Whether `action` may be resolved at all.
    ///
    /// Wider than the mask in one case: Restrain against an already
    /// restrained opponent is masked out but resolves as a wasted item.
    fn is_resolvable(&self, state: &MatchState, action: ActionKind) -> bool {
        if self.legal_actions(state).allows(action) {
            return true;
        }
        action == ActionKind::Restrain
            && state.player(state.turn).inventory.has(ItemKind::Restrain)
            && state.player(state.turn.opponent()).restrained
    }

    /// Apply `action` for the side to act.
    ///
    /// Returns the reward and the shell that left the magazine, or `None`
    /// without touching the state when a precondition fails.
    fn resolve(&self, state: &mut MatchState, action: ActionKind) -> Option<(f64, Option<Shell>)> {
        let rewards = &self.config.rewards;
        let actor = state.turn;

        if let Some(item) = action.item() {
            if !state.player(actor).inventory.has(item) {
                return None;
            }
        }

        let resolved = match action {
            ActionKind::FireSelf | ActionKind::FireOpponent => {
                let damage = state.damage_multiplier();
                let sharpened = state.sharpened;
                let shell = state.magazine.draw()?;
                state.sharpened = false;
                state.knowledge = ShellKnowledge::Unknown;

                let at_self = action == ActionKind::FireSelf;
                if shell.is_live() {
                    let target = if at_self { actor } else { actor.opponent() };
                    let player = state.player_mut(target);
                    player.health = player.health.saturating_sub(damage);
                }
                (rewards.shot(at_self, shell.is_live(), damage, sharpened), Some(shell))
            }
            ActionKind::Eject => {
                let shell = state.magazine.draw()?;
                state.player_mut(actor).inventory.take(ItemKind::Eject);
                state.sharpened = false;
                state.knowledge = ShellKnowledge::Unknown;
                (rewards.eject(shell.is_live()), Some(shell))
            }
            ActionKind::Inspect => {
                let shell = state.magazine.peek()?;
                state.player_mut(actor).inventory.take(ItemKind::Inspect);
                state.knowledge = ShellKnowledge::Revealed(shell);
                (rewards.inspect, None)
            }
            ActionKind::Heal => {
                let max_hp = self.config.max_hp;
                let player = state.player_mut(actor);
                player.inventory.take(ItemKind::Heal);
                if player.health < max_hp {
                    player.health += 1;
                    (rewards.heal, None)
                } else {
                    (rewards.heal_wasted, None)
                }
            }
            ActionKind::Sharpen => {
                state.player_mut(actor).inventory.take(ItemKind::Sharpen);
                state.sharpened = true;
                (rewards.sharpen, None)
            }
            ActionKind::Restrain => {
                state.player_mut(actor).inventory.take(ItemKind::Restrain);
                let opponent = state.player_mut(actor.opponent());
                if opponent.restrained {
                    (rewards.restrain_wasted, None)
                } else {
                    opponent.restrained = true;
                    (rewards.restrain, None)
                }
            }
        };
        Some(resolved)
    }

    /// Pass the turn to the opponent of `actor`, unless the opponent is
    /// restrained, in which case its restraint is spent and `actor` goes again.
    fn hand_off(state: &mut MatchState, actor: Side) {
        let next = actor.opponent();
        let player = state.player_mut(next);
        if player.restrained {
            player.restrained = false;
            state.turn = actor;
            trace!("{next} is restrained, turn returns to {actor}");
        } else {
            state.turn = next;
        }
    }

    fn record(
        state: &mut MatchState,
        actor: Side,
        action: ActionKind,
        drawn: Option<Shell>,
        illegal: bool,
        round: u32,
    ) {
        state.history.push_back(ActionRecord {
            side: actor,
            action,
            drawn,
            illegal,
            round,
        });
        state.steps += 1;
    }

    fn outcome(&self, state: &MatchState, reward: f64, info: StepInfo) -> StepOutcome {
        StepOutcome {
            observation: state.observation(),
            reward,
            done: self.is_terminal(state).is_some(),
            info,
        }
    }
}

impl Default for RouletteGame {
    fn default() -> Self {
        Self {
            config: RulesConfig::default(),
        }
    }
}

impl RulesEngine for RouletteGame {
    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn reset(&self, rng: GameRng) -> MatchState {
        let seed = rng.seed();
        let mut state = MatchState::new(rng, self.config.max_hp, self.config.starting_side);
        load_round(&self.config, &mut state);
        debug!("match reset (seed {seed}), {} to act", state.turn);
        state
    }

    fn legal_actions(&self, state: &MatchState) -> ActionMask {
        if self.is_terminal(state).is_some() {
            return ActionMask::none();
        }
        state.observation().legal_actions()
    }

    fn step(&self, state: &mut MatchState, action: ActionKind) -> StepOutcome {
        let mut info = StepInfo::default();
        let actor = state.turn;
        let round = state.round;

        if self.is_terminal(state).is_some() {
            warn!("{actor} submitted {action} after the match ended");
            return self.outcome(state, 0.0, info);
        }

        if state.player(actor).restrained {
            state.player_mut(actor).restrained = false;
            state.turn = actor.opponent();
            state.steps += 1;
            info.skipped = true;
            trace!("{actor} is restrained and loses the turn");
            return self.outcome(state, 0.0, info);
        }

        let resolved = if self.is_resolvable(state, action) {
            self.resolve(state, action)
        } else {
            None
        };

        let Some((mut reward, drawn)) = resolved else {
            warn!("{actor} submitted illegal action {action}");
            info.illegal = true;
            Self::hand_off(state, actor);
            Self::record(state, actor, action, None, true, round);
            return self.outcome(state, self.config.rewards.invalid_action, info);
        };
        info.drawn = drawn;

        if let Some(result) = self.is_terminal(state) {
            match result.winner() {
                Some(winner) if winner == actor => reward += self.config.rewards.win_bonus,
                Some(_) => reward += self.config.rewards.loss_penalty,
                None => {}
            }
            Self::record(state, actor, action, drawn, false, round);
            trace!("{actor} {action} -> {reward}, match over: {result:?}");
            return self.outcome(state, reward, info);
        }

        if state.magazine.is_empty() {
            load_round(&self.config, state);
            info.new_round = true;
        }

        info.turn_kept = self.config.turn_policy.keeps_turn(action, drawn);
        if !info.turn_kept {
            Self::hand_off(state, actor);
        }

        Self::record(state, actor, action, drawn, false, round);
        trace!("{actor} {action} -> {reward}, {} to act", state.turn);
        self.outcome(state, reward, info)
    }
}
