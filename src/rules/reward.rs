//! Reward constants.

use serde::{Deserialize, Serialize};

/// Reward paid to the acting side for each outcome.
///
/// Shot rewards scale with the damage of the shot; the sharpen
/// adjustments are added on top when the shot was sharpened.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardTable {
    /// Per point of damage dealt to yourself (negative).
    pub hit_self_per_damage: f64,
    /// Surviving a shot at yourself.
    pub miss_self: f64,
    /// Per point of damage dealt to the opponent.
    pub hit_opponent_per_damage: f64,
    /// Wasting a shot on the opponent.
    pub miss_opponent: f64,
    /// Added when a sharpened shot is live.
    pub sharpened_hit_bonus: f64,
    /// Added when a sharpened shot is blank (negative).
    pub sharpened_miss_penalty: f64,
    /// Ejecting a live shell.
    pub eject_live: f64,
    /// Ejecting a blank shell.
    pub eject_blank: f64,
    /// Inspecting the next shell.
    pub inspect: f64,
    /// Healing while hurt.
    pub heal: f64,
    /// Healing at full health.
    pub heal_wasted: f64,
    /// Sharpening the gun.
    pub sharpen: f64,
    /// Restraining a free opponent.
    pub restrain: f64,
    /// Restraining an already restrained opponent.
    pub restrain_wasted: f64,
    /// Added when the actor kills the opponent.
    pub win_bonus: f64,
    /// Added when the actor kills itself (negative).
    pub loss_penalty: f64,
    /// Paid for any action whose preconditions do not hold.
    pub invalid_action: f64,
}

impl Default for RewardTable {
    fn default() -> Self {
        Self {
            hit_self_per_damage: -15.0,
            miss_self: 15.0,
            hit_opponent_per_damage: 10.0,
            miss_opponent: -5.0,
            sharpened_hit_bonus: 5.0,
            sharpened_miss_penalty: -5.0,
            eject_live: 5.0,
            eject_blank: 1.0,
            inspect: 3.0,
            heal: 5.0,
            heal_wasted: -2.0,
            sharpen: 0.0,
            restrain: 7.0,
            restrain_wasted: -10.0,
            win_bonus: 50.0,
            loss_penalty: -50.0,
            invalid_action: -50.0,
        }
    }
}

impl RewardTable {
    /// Reward for a fired shot.
    ///
    /// `damage` is the damage the shot carried (already multiplied).
    #[must_use]
    pub fn shot(&self, at_self: bool, live: bool, damage: u8, sharpened: bool) -> f64 {
        let base = match (at_self, live) {
            (true, true) => self.hit_self_per_damage * f64::from(damage),
            (true, false) => self.miss_self,
            (false, true) => self.hit_opponent_per_damage * f64::from(damage),
            (false, false) => self.miss_opponent,
        };
        let adjustment = match (sharpened, live) {
            (false, _) => 0.0,
            (true, true) => self.sharpened_hit_bonus,
            (true, false) => self.sharpened_miss_penalty,
        };
        base + adjustment
    }

    #[must_use]
    pub fn eject(&self, live: bool) -> f64 {
        if live {
            self.eject_live
        } else {
            self.eject_blank
        }
    }
}
