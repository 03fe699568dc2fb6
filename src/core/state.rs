//! Match state.
//!
//! ## PlayerState
//!
//! Per-side health, inventory and restraint.
//!
//! ## MatchState
//!
//! Everything a match needs to continue: both players, the magazine, gun
//! modifiers, turn owner, the match RNG and the action history. The state
//! is an ordinary value owned by the caller; the rules engine mutates it
//! only through `RulesEngine::step`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::config::RulesConfig;
use super::item::Inventory;
use super::player::{Side, SideMap};
use super::rng::GameRng;
use super::shell::{Magazine, ShellKnowledge};
use crate::error::SnapshotError;
use crate::nn::Observation;

/// State of one side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerState {
    /// Remaining health, never above the configured maximum.
    pub health: u8,

    /// Items held.
    pub inventory: Inventory,

    /// Skips this side's next turn once.
    pub restrained: bool,
}

impl PlayerState {
    /// A fresh player at `health` with no items.
    #[must_use]
    pub fn new(health: u8) -> Self {
        Self {
            health,
            inventory: Inventory::new(),
            restrained: false,
        }
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health == 0
    }
}

/// Complete state of one match.
///
/// Cloning is cheap: the history is a persistent vector and everything
/// else is inline.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchState {
    /// Both sides.
    pub players: SideMap<PlayerState>,

    /// Shells left in the current round.
    pub magazine: Magazine,

    /// Next shot deals double damage.
    pub sharpened: bool,

    /// What is known about `magazine.peek()`.
    pub knowledge: ShellKnowledge,

    /// Side to act.
    pub turn: Side,

    /// Current round number (starts at 1 after reset).
    pub round: u32,

    /// Number of `step` calls resolved so far.
    pub steps: u32,

    /// Source of all randomness in this match.
    pub rng: GameRng,

    /// Every resolved action, oldest first.
    pub history: Vector<ActionRecord>,
}

impl MatchState {
    /// Create a state with both sides at `health`, no items, an empty
    /// magazine and `turn` to act.
    ///
    /// Rules engines fill in the first round on reset; tests use this to
    /// stage exact positions.
    #[must_use]
    pub fn new(rng: GameRng, health: u8, turn: Side) -> Self {
        Self {
            players: SideMap::with_value(PlayerState::new(health)),
            magazine: Magazine::new(),
            sharpened: false,
            knowledge: ShellKnowledge::Unknown,
            turn,
            round: 0,
            steps: 0,
            rng,
            history: Vector::new(),
        }
    }

    /// Damage the next live shot deals.
    #[must_use]
    pub fn damage_multiplier(&self) -> u8 {
        if self.sharpened {
            2
        } else {
            1
        }
    }

    /// Get a side's state.
    #[must_use]
    pub fn player(&self, side: Side) -> &PlayerState {
        &self.players[side]
    }

    /// Get a side's state mutably.
    pub fn player_mut(&mut self, side: Side) -> &mut PlayerState {
        &mut self.players[side]
    }

    /// Encode the observable part of the state.
    #[must_use]
    pub fn observation(&self) -> Observation {
        Observation::encode(self)
    }

    /// Serialize the full state, RNG position included.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Check that health and inventories fit within `config`.
    pub fn check_limits(&self, config: &RulesConfig) -> Result<(), SnapshotError> {
        for (side, player) in self.players.iter() {
            if player.health > config.max_hp {
                return Err(SnapshotError::HealthAboveMax {
                    side,
                    health: player.health,
                    max_hp: config.max_hp,
                });
            }
            let held = player.inventory.total();
            if held > config.inventory_cap {
                return Err(SnapshotError::InventoryOverCap {
                    side,
                    held,
                    cap: config.inventory_cap,
                });
            }
        }
        Ok(())
    }

    /// Restore a state produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
