//! Action representation and legality masks.
//!
//! The action set is closed: seven kinds, two shots and five item uses.
//! Raw integer ids only exist at the edges (observation/transport) and are
//! converted with `TryFrom`, so an out-of-range id never reaches the engine.

use serde::{Deserialize, Serialize};

use super::item::ItemKind;
use super::player::Side;
use super::shell::Shell;
use crate::error::ActionError;

/// Number of distinct actions.
pub const ACTION_COUNT: usize = 7;

/// One decision a side can make on its turn.
///
/// ```
/// use shell_roulette::core::ActionKind;
///
/// let action = ActionKind::try_from(1u8).unwrap();
/// assert_eq!(action, ActionKind::FireOpponent);
/// assert_eq!(action.id(), 1);
/// assert!(ActionKind::try_from(7u8).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActionKind {
    FireSelf,
    FireOpponent,
    Eject,
    Inspect,
    Heal,
    Sharpen,
    Restrain,
}

impl ActionKind {
    /// All actions in id order.
    pub const ALL: [ActionKind; ACTION_COUNT] = [
        ActionKind::FireSelf,
        ActionKind::FireOpponent,
        ActionKind::Eject,
        ActionKind::Inspect,
        ActionKind::Heal,
        ActionKind::Sharpen,
        ActionKind::Restrain,
    ];

    /// Stable 0-based id.
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// The item consumed by this action, if any.
    #[must_use]
    pub const fn item(self) -> Option<ItemKind> {
        match self {
            ActionKind::FireSelf | ActionKind::FireOpponent => None,
            ActionKind::Eject => Some(ItemKind::Eject),
            ActionKind::Inspect => Some(ItemKind::Inspect),
            ActionKind::Heal => Some(ItemKind::Heal),
            ActionKind::Sharpen => Some(ItemKind::Sharpen),
            ActionKind::Restrain => Some(ItemKind::Restrain),
        }
    }

    /// Whether this action needs a shell in the magazine.
    #[must_use]
    pub const fn needs_shell(self) -> bool {
        matches!(
            self,
            ActionKind::FireSelf | ActionKind::FireOpponent | ActionKind::Eject | ActionKind::Inspect
        )
    }

    /// The action that uses `item`.
    #[must_use]
    pub const fn for_item(item: ItemKind) -> ActionKind {
        match item {
            ItemKind::Eject => ActionKind::Eject,
            ItemKind::Inspect => ActionKind::Inspect,
            ItemKind::Heal => ActionKind::Heal,
            ItemKind::Sharpen => ActionKind::Sharpen,
            ItemKind::Restrain => ActionKind::Restrain,
        }
    }
}

impl TryFrom<u8> for ActionKind {
    type Error = ActionError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        ActionKind::ALL
            .get(id as usize)
            .copied()
            .ok_or(ActionError::UnknownId(i64::from(id)))
    }
}

impl TryFrom<i64> for ActionKind {
    type Error = ActionError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        u8::try_from(id)
            .map_err(|_| ActionError::UnknownId(id))
            .and_then(ActionKind::try_from)
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Legality of each action for the side to act, indexed by action id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionMask {
    allowed: [bool; ACTION_COUNT],
}

impl ActionMask {
    /// A mask with every action forbidden.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_array(allowed: [bool; ACTION_COUNT]) -> Self {
        Self { allowed }
    }

    #[must_use]
    pub fn allows(&self, action: ActionKind) -> bool {
        self.allowed[action.id() as usize]
    }

    pub fn set(&mut self, action: ActionKind, allowed: bool) {
        self.allowed[action.id() as usize] = allowed;
    }

    /// Legal actions in id order.
    pub fn legal(&self) -> impl Iterator<Item = ActionKind> + '_ {
        ActionKind::ALL.into_iter().filter(|a| self.allows(*a))
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.allowed.iter().filter(|&&b| b).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    #[must_use]
    pub fn as_array(&self) -> [bool; ACTION_COUNT] {
        self.allowed
    }
}

/// A resolved action kept in the match history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The side that acted.
    pub side: Side,

    /// The action submitted.
    pub action: ActionKind,

    /// Shell fired or ejected, if any.
    pub drawn: Option<Shell>,

    /// Whether the action violated its preconditions.
    pub illegal: bool,

    /// Round number the action was taken in (starts at 1).
    pub round: u32,
}
