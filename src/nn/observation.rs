//! Observation encoding and perspective normalization.
//!
//! An observation is the fixed 20-value vector a policy sees. It is the
//! complete public view of a match: everything except the order of the
//! undrawn shells.
//!
//! | Index | Value |
//! |---|---|
//! | 0 | turn owner (Blue 0, Red 1) |
//! | 1..=3 | total, live, blank shells |
//! | 4, 5 | Red health, Blue health |
//! | 6..=10 | Red items (Eject, Inspect, Heal, Sharpen, Restrain) |
//! | 11..=15 | Blue items |
//! | 16 | damage multiplier |
//! | 17 | next shell: -1 unknown, 0 blank, 1 live |
//! | 18, 19 | Blue restrained, Red restrained |

use serde::{Deserialize, Serialize};

use crate::core::{ActionKind, ActionMask, ItemKind, MatchState, ShellKnowledge, Side};

/// Number of values in an observation.
pub const OBS_LEN: usize = 20;

pub const TURN: usize = 0;
pub const SHELLS_TOTAL: usize = 1;
pub const SHELLS_LIVE: usize = 2;
pub const SHELLS_BLANK: usize = 3;
pub const RED_HEALTH: usize = 4;
pub const BLUE_HEALTH: usize = 5;
pub const RED_ITEMS: usize = 6;
pub const BLUE_ITEMS: usize = 11;
pub const MULTIPLIER: usize = 16;
pub const KNOWLEDGE: usize = 17;
pub const BLUE_RESTRAINED: usize = 18;
pub const RED_RESTRAINED: usize = 19;

const ITEM_KINDS: usize = ItemKind::ALL.len();

/// Fixed-length public view of a match.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    values: [f32; OBS_LEN],
}

impl Observation {
    /// Wrap raw values.
    #[must_use]
    pub fn from_values(values: [f32; OBS_LEN]) -> Self {
        Self { values }
    }

    /// Wrap a slice, returning `None` unless it has exactly `OBS_LEN` values.
    #[must_use]
    pub fn from_slice(values: &[f32]) -> Option<Self> {
        let values: [f32; OBS_LEN] = values.try_into().ok()?;
        Some(Self { values })
    }

    /// Encode the public part of a match state.
    #[must_use]
    pub fn encode(state: &MatchState) -> Self {
        let mut values = [0.0f32; OBS_LEN];

        values[TURN] = state.turn.encoded();
        values[SHELLS_TOTAL] = state.magazine.len() as f32;
        values[SHELLS_LIVE] = state.magazine.live() as f32;
        values[SHELLS_BLANK] = state.magazine.blank() as f32;
        values[RED_HEALTH] = f32::from(state.player(Side::Red).health);
        values[BLUE_HEALTH] = f32::from(state.player(Side::Blue).health);

        for (base, side) in [(RED_ITEMS, Side::Red), (BLUE_ITEMS, Side::Blue)] {
            let counts = state.player(side).inventory.counts();
            for (slot, count) in values[base..base + ITEM_KINDS].iter_mut().zip(counts) {
                *slot = f32::from(count);
            }
        }

        values[MULTIPLIER] = f32::from(state.damage_multiplier());
        values[KNOWLEDGE] = state.knowledge.encoded();
        values[BLUE_RESTRAINED] = bool_value(state.player(Side::Blue).restrained);
        values[RED_RESTRAINED] = bool_value(state.player(Side::Red).restrained);

        Self { values }
    }

    #[must_use]
    pub fn values(&self) -> &[f32; OBS_LEN] {
        &self.values
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Side to act.
    #[must_use]
    pub fn turn(&self) -> Side {
        Side::from_encoded(self.values[TURN])
    }

    #[must_use]
    pub fn shells_total(&self) -> f32 {
        self.values[SHELLS_TOTAL]
    }

    #[must_use]
    pub fn shells_live(&self) -> f32 {
        self.values[SHELLS_LIVE]
    }

    #[must_use]
    pub fn shells_blank(&self) -> f32 {
        self.values[SHELLS_BLANK]
    }

    #[must_use]
    pub fn health(&self, side: Side) -> f32 {
        match side {
            Side::Red => self.values[RED_HEALTH],
            Side::Blue => self.values[BLUE_HEALTH],
        }
    }

    #[must_use]
    pub fn item_count(&self, side: Side, item: ItemKind) -> f32 {
        self.values[items_base(side) + item.index()]
    }

    #[must_use]
    pub fn multiplier(&self) -> f32 {
        self.values[MULTIPLIER]
    }

    #[must_use]
    pub fn knowledge(&self) -> ShellKnowledge {
        ShellKnowledge::from_encoded(self.values[KNOWLEDGE])
    }

    #[must_use]
    pub fn restrained(&self, side: Side) -> bool {
        match side {
            Side::Red => self.values[RED_RESTRAINED] > 0.5,
            Side::Blue => self.values[BLUE_RESTRAINED] > 0.5,
        }
    }

    /// Legal actions for the side to act, derived from the observation alone.
    ///
    /// This is the only legality rule: `RouletteGame::legal_actions` encodes
    /// the state and asks here.
    #[must_use]
    pub fn legal_actions(&self) -> ActionMask {
        let mut mask = ActionMask::none();
        if self.health(Side::Red) <= 0.0 || self.health(Side::Blue) <= 0.0 {
            return mask;
        }

        let actor = self.turn();
        let has_shells = self.shells_total() > 0.0;
        for action in ActionKind::ALL {
            let holds = action
                .item()
                .map_or(true, |item| self.item_count(actor, item) > 0.0);
            let allowed = holds
                && (has_shells || !action.needs_shell())
                && match action {
                    ActionKind::Sharpen => self.multiplier() < 1.5,
                    ActionKind::Restrain => !self.restrained(actor.opponent()),
                    _ => true,
                };
            mask.set(action, allowed);
        }
        mask
    }

    /// View the observation from the acting side.
    ///
    /// When Red is to act the two sides' health, item and restraint slots
    /// are swapped and the turn slot is set to Blue, so the actor always
    /// occupies the Blue slots. Blue-to-act observations come back
    /// unchanged, which makes the transform idempotent.
    #[must_use]
    pub fn normalize_perspective(&self) -> Observation {
        if self.turn() == Side::Blue {
            return *self;
        }

        let mut values = self.values;
        values[TURN] = Side::Blue.encoded();
        values.swap(RED_HEALTH, BLUE_HEALTH);
        for offset in 0..ITEM_KINDS {
            values.swap(RED_ITEMS + offset, BLUE_ITEMS + offset);
        }
        values.swap(BLUE_RESTRAINED, RED_RESTRAINED);
        Observation { values }
    }
}

impl Default for Observation {
    fn default() -> Self {
        Self {
            values: [0.0; OBS_LEN],
        }
    }
}

fn items_base(side: Side) -> usize {
    match side {
        Side::Red => RED_ITEMS,
        Side::Blue => BLUE_ITEMS,
    }
}

fn bool_value(b: bool) -> f32 {
    if b {
        1.0
    } else {
        0.0
    }
}
