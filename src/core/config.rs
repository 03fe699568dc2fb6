//! Match configuration.
//!
//! `RulesConfig` gathers every tunable of the duel: health, round
//! generation ranges, inventory cap, starting side, the reward table and
//! the turn-continuation policy. Build it with the chained `with_*`
//! setters and check it with `validate` (the engine constructor does this).

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::item::MAX_ITEM_COUNT;
use super::player::Side;
use crate::error::ConfigError;
use crate::rules::{RewardTable, TurnPolicy};

/// Largest accepted `inventory_cap`, so no single item count can overflow.
pub const MAX_INVENTORY_CAP: usize = MAX_ITEM_COUNT as usize;

/// Complete rules configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Starting and maximum health of each side.
    pub max_hp: u8,

    /// Live shells loaded per round.
    pub live_range: RangeInclusive<u8>,

    /// Blank shells loaded per round.
    pub blank_range: RangeInclusive<u8>,

    /// Items granted to each side at the start of every round.
    pub item_grant_range: RangeInclusive<u8>,

    /// Maximum items a side can hold across all kinds.
    pub inventory_cap: usize,

    /// Side that acts first after `reset`.
    pub starting_side: Side,

    /// Reward constants.
    pub rewards: RewardTable,

    /// Which actions keep the turn.
    pub turn_policy: TurnPolicy,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_hp: 4,
            live_range: 1..=4,
            blank_range: 1..=4,
            item_grant_range: 2..=4,
            inventory_cap: 8,
            starting_side: Side::Blue,
            rewards: RewardTable::default(),
            turn_policy: TurnPolicy::default(),
        }
    }
}

impl RulesConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_hp(mut self, max_hp: u8) -> Self {
        self.max_hp = max_hp;
        self
    }

    #[must_use]
    pub fn with_live_range(mut self, range: RangeInclusive<u8>) -> Self {
        self.live_range = range;
        self
    }

    #[must_use]
    pub fn with_blank_range(mut self, range: RangeInclusive<u8>) -> Self {
        self.blank_range = range;
        self
    }

    #[must_use]
    pub fn with_item_grant_range(mut self, range: RangeInclusive<u8>) -> Self {
        self.item_grant_range = range;
        self
    }

    #[must_use]
    pub fn with_inventory_cap(mut self, cap: usize) -> Self {
        self.inventory_cap = cap;
        self
    }

    #[must_use]
    pub fn with_starting_side(mut self, side: Side) -> Self {
        self.starting_side = side;
        self
    }

    #[must_use]
    pub fn with_rewards(mut self, rewards: RewardTable) -> Self {
        self.rewards = rewards;
        self
    }

    #[must_use]
    pub fn with_turn_policy(mut self, policy: TurnPolicy) -> Self {
        self.turn_policy = policy;
        self
    }

    /// Check that every round can be generated and the match can end.
    ///
    /// Each round must load at least one shell of each kind, so live and
    /// blank ranges may not start at zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_hp == 0 {
            return Err(ConfigError::ZeroMaxHp);
        }
        check_range("live", &self.live_range, 1)?;
        check_range("blank", &self.blank_range, 1)?;
        check_range("item grant", &self.item_grant_range, 0)?;
        if self.inventory_cap == 0 {
            return Err(ConfigError::ZeroInventoryCap);
        }
        if self.inventory_cap > MAX_INVENTORY_CAP {
            return Err(ConfigError::InventoryCapTooLarge {
                cap: self.inventory_cap,
                max: MAX_INVENTORY_CAP,
            });
        }
        Ok(())
    }
}

fn check_range(name: &'static str, range: &RangeInclusive<u8>, min_start: u8) -> Result<(), ConfigError> {
    if range.is_empty() || *range.start() < min_start {
        return Err(ConfigError::InvalidRange {
            name,
            start: *range.start(),
            end: *range.end(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RulesConfig::default();
        assert_eq!(config.max_hp, 4);
        assert_eq!(config.live_range, 1..=4);
        assert_eq!(config.blank_range, 1..=4);
        assert_eq!(config.item_grant_range, 2..=4);
        assert_eq!(config.inventory_cap, 8);
        assert_eq!(config.starting_side, Side::Blue);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = RulesConfig::new()
            .with_max_hp(6)
            .with_live_range(2..=2)
            .with_blank_range(1..=3)
            .with_item_grant_range(0..=1)
            .with_inventory_cap(4)
            .with_starting_side(Side::Red);

        assert_eq!(config.max_hp, 6);
        assert_eq!(config.live_range, 2..=2);
        assert_eq!(config.item_grant_range, 0..=1);
        assert_eq!(config.inventory_cap, 4);
        assert_eq!(config.starting_side, Side::Red);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert_eq!(
            RulesConfig::new().with_max_hp(0).validate(),
            Err(ConfigError::ZeroMaxHp)
        );
        assert_eq!(
            RulesConfig::new().with_live_range(0..=3).validate(),
            Err(ConfigError::InvalidRange { name: "live", start: 0, end: 3 })
        );
        #[allow(clippy::reversed_empty_ranges)]
        let inverted = RulesConfig::new().with_blank_range(3..=1);
        assert!(matches!(
            inverted.validate(),
            Err(ConfigError::InvalidRange { name: "blank", .. })
        ));
        assert_eq!(
            RulesConfig::new().with_inventory_cap(0).validate(),
            Err(ConfigError::ZeroInventoryCap)
        );
    }

    #[test]
    fn test_validate_bounds_inventory_cap() {
        let at_limit = RulesConfig::new().with_inventory_cap(MAX_INVENTORY_CAP);
        assert!(at_limit.validate().is_ok());

        let oversized = RulesConfig::new()
            .with_inventory_cap(100_000)
            .with_item_grant_range(250..=255);
        assert_eq!(
            oversized.validate(),
            Err(ConfigError::InventoryCapTooLarge { cap: 100_000, max: MAX_INVENTORY_CAP })
        );
    }

    #[test]
    fn test_config_serde() {
        let config = RulesConfig::new().with_max_hp(3).with_starting_side(Side::Red);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: RulesConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
