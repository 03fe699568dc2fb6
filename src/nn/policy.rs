//! Policies: anything that turns an observation and a mask into an action.
//!
//! Learned agents live outside this crate and plug in through `Policy`.
//! The baselines here are for testing and for opponents during training.

use crate::core::{ActionKind, ActionMask, GameRng, ItemKind, Shell, ShellKnowledge};
use crate::nn::Observation;

/// Chooses an action for the side to act.
///
/// Implementations must return an action the mask allows, or `None` when
/// the mask is empty. They never see engine internals.
pub trait Policy {
    /// Pick an action for `observation`.
    fn choose(&mut self, observation: &Observation, mask: &ActionMask) -> Option<ActionKind>;
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn choose(&mut self, observation: &Observation, mask: &ActionMask) -> Option<ActionKind> {
        (**self).choose(observation, mask)
    }
}

/// Uniformly random legal action (baseline for testing).
#[derive(Clone, Debug)]
pub struct UniformPolicy {
    rng: GameRng,
}

impl UniformPolicy {
    /// Create a new uniform policy.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Policy for UniformPolicy {
    fn choose(&mut self, _observation: &Observation, mask: &ActionMask) -> Option<ActionKind> {
        let legal: Vec<ActionKind> = mask.legal().collect();
        self.rng.choose(&legal).copied()
    }
}

/// Always submits the same action, legal or not.
///
/// Useful for exercising the illegal-action penalty.
#[derive(Clone, Copy, Debug)]
pub struct FixedPolicy(pub ActionKind);

impl Policy for FixedPolicy {
    fn choose(&mut self, _observation: &Observation, _mask: &ActionMask) -> Option<ActionKind> {
        Some(self.0)
    }
}

/// Rule-based opponent with five difficulty levels.
///
/// - 0: occasionally a random item, otherwise a random shot
/// - 1: no items; shoots the opponent when live shells are at least as
///   common as blanks
/// - 2: heals, restrains and inspects when useful; random shot
/// - 3: like 2, but shoots by the revealed shell when known
/// - 4: uses every item when useful; shoots by knowledge, else by odds
///
/// Choices the mask forbids fall back to shooting the opponent, then
/// yourself, then the first legal action.
#[derive(Clone, Debug)]
pub struct ScriptedPolicy {
    difficulty: u8,
    max_hp: f32,
    rng: GameRng,
}

impl ScriptedPolicy {
    /// Highest supported difficulty.
    pub const MAX_DIFFICULTY: u8 = 4;

    /// Create a scripted policy. Difficulty is clamped to `0..=4`.
    pub fn new(difficulty: u8, seed: u64) -> Self {
        Self {
            difficulty: difficulty.min(Self::MAX_DIFFICULTY),
            max_hp: 4.0,
            rng: GameRng::new(seed),
        }
    }

    /// Health the policy considers "full" when deciding to heal.
    #[must_use]
    pub fn with_max_hp(mut self, max_hp: u8) -> Self {
        self.max_hp = f32::from(max_hp);
        self
    }

    #[must_use]
    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    fn pick_item(&mut self, obs: &Observation) -> Option<ActionKind> {
        let me = obs.turn();
        let holds = |item: ItemKind| obs.item_count(me, item) > 0.0;
        let hurt = obs.health(me) < self.max_hp;
        let opponent_free = !obs.restrained(me.opponent());
        let unknown = obs.knowledge() == ShellKnowledge::Unknown;

        match self.difficulty {
            0 => {
                if self.rng.gen_bool(0.3) {
                    let items = [
                        ActionKind::Eject,
                        ActionKind::Inspect,
                        ActionKind::Heal,
                        ActionKind::Sharpen,
                        ActionKind::Restrain,
                    ];
                    self.rng.choose(&items).copied()
                } else {
                    None
                }
            }
            1 => None,
            2 | 3 => {
                if hurt && holds(ItemKind::Heal) {
                    Some(ActionKind::Heal)
                } else if opponent_free && holds(ItemKind::Restrain) {
                    Some(ActionKind::Restrain)
                } else if unknown && holds(ItemKind::Inspect) {
                    Some(ActionKind::Inspect)
                } else {
                    None
                }
            }
            _ => {
                if hurt && holds(ItemKind::Heal) {
                    Some(ActionKind::Heal)
                } else if unknown && holds(ItemKind::Inspect) {
                    Some(ActionKind::Inspect)
                } else if opponent_free && holds(ItemKind::Restrain) {
                    Some(ActionKind::Restrain)
                } else if holds(ItemKind::Eject) {
                    Some(ActionKind::Eject)
                } else if holds(ItemKind::Sharpen) && obs.multiplier() < 1.5 {
                    Some(ActionKind::Sharpen)
                } else {
                    None
                }
            }
        }
    }

    fn pick_shot(&mut self, obs: &Observation) -> ActionKind {
        let by_odds = if obs.shells_live() >= obs.shells_blank() {
            ActionKind::FireOpponent
        } else {
            ActionKind::FireSelf
        };
        let by_knowledge = match obs.knowledge() {
            ShellKnowledge::Revealed(Shell::Live) => Some(ActionKind::FireOpponent),
            ShellKnowledge::Revealed(Shell::Blank) => Some(ActionKind::FireSelf),
            ShellKnowledge::Unknown => None,
        };

        match self.difficulty {
            0 | 2 => self.random_shot(),
            1 => by_odds,
            3 => by_knowledge.unwrap_or_else(|| self.random_shot()),
            _ => by_knowledge.unwrap_or(by_odds),
        }
    }

    fn random_shot(&mut self) -> ActionKind {
        if self.rng.gen_bool(0.5) {
            ActionKind::FireOpponent
        } else {
            ActionKind::FireSelf
        }
    }
}

impl Policy for ScriptedPolicy {
    fn choose(&mut self, observation: &Observation, mask: &ActionMask) -> Option<ActionKind> {
        if mask.is_empty() {
            return None;
        }

        let preferred = match self.pick_item(observation) {
            Some(item) if mask.allows(item) => item,
            _ => self.pick_shot(observation),
        };

        [preferred, ActionKind::FireOpponent, ActionKind::FireSelf]
            .into_iter()
            .find(|a| mask.allows(*a))
            .or_else(|| mask.legal().next())
    }
}
