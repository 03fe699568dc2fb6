//! Item kinds and per-player inventories.

use serde::{Deserialize, Serialize};

/// The five consumable items.
///
/// Declaration order is the fixed encoding order used in observations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemKind {
    /// Discard the next shell without firing it.
    Eject,
    /// Reveal the next shell.
    Inspect,
    /// Restore one health.
    Heal,
    /// Double the damage of the next shot.
    Sharpen,
    /// Make the opponent skip their next turn.
    Restrain,
}

impl ItemKind {
    /// All item kinds in encoding order.
    pub const ALL: [ItemKind; 5] = [
        ItemKind::Eject,
        ItemKind::Inspect,
        ItemKind::Heal,
        ItemKind::Sharpen,
        ItemKind::Restrain,
    ];

    /// Position in the encoding order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Largest count a single item kind can reach.
pub const MAX_ITEM_COUNT: u8 = u8::MAX;

/// Item counts held by one player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Inventory {
    counts: [u8; 5],
}

impl Inventory {
    /// An empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an inventory from explicit `(kind, count)` pairs.
    #[must_use]
    pub fn with_items(items: &[(ItemKind, u8)]) -> Self {
        let mut inventory = Self::new();
        for &(kind, count) in items {
            let slot = &mut inventory.counts[kind.index()];
            *slot = slot.saturating_add(count);
        }
        inventory
    }

    #[must_use]
    pub fn count(&self, kind: ItemKind) -> u8 {
        self.counts[kind.index()]
    }

    #[must_use]
    pub fn has(&self, kind: ItemKind) -> bool {
        self.count(kind) > 0
    }

    /// Total items held across all kinds.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    /// Add one item unless the inventory already holds `cap` items or the
    /// count for `kind` is at `MAX_ITEM_COUNT`.
    ///
    /// Returns whether the item was added.
    pub fn add(&mut self, kind: ItemKind, cap: usize) -> bool {
        if self.total() >= cap {
            return false;
        }
        let slot = &mut self.counts[kind.index()];
        if *slot == MAX_ITEM_COUNT {
            return false;
        }
        *slot += 1;
        true
    }

    /// Remove one item of `kind`. Returns false if none was held.
    pub fn take(&mut self, kind: ItemKind) -> bool {
        let slot = &mut self.counts[kind.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    /// Counts in encoding order.
    #[must_use]
    pub fn counts(&self) -> [u8; 5] {
        self.counts
    }
}
