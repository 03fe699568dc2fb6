//! Turn-continuation policy.

use serde::{Deserialize, Serialize};

use crate::core::{ActionKind, Shell};

/// Which resolved actions let the actor keep the turn.
///
/// Rule variants disagree on whether item use ends the turn, so the
/// decision is data rather than code. Illegal actions always end the turn
/// regardless of this table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnPolicy {
    /// Firing a blank at yourself keeps the turn.
    pub fire_self_blank: bool,
    pub eject: bool,
    pub inspect: bool,
    pub heal: bool,
    pub sharpen: bool,
    pub restrain: bool,
}

impl Default for TurnPolicy {
    fn default() -> Self {
        Self {
            fire_self_blank: true,
            eject: false,
            inspect: true,
            heal: false,
            sharpen: false,
            restrain: false,
        }
    }
}

impl TurnPolicy {
    /// Every item use keeps the turn; only shots can end it.
    #[must_use]
    pub fn items_keep_turn() -> Self {
        Self {
            fire_self_blank: true,
            eject: true,
            inspect: true,
            heal: true,
            sharpen: true,
            restrain: true,
        }
    }

    /// Whether `action` keeps the turn, given the shell it drew (if any).
    #[must_use]
    pub fn keeps_turn(&self, action: ActionKind, drawn: Option<Shell>) -> bool {
        match action {
            ActionKind::FireSelf => self.fire_self_blank && drawn == Some(Shell::Blank),
            ActionKind::FireOpponent => false,
            ActionKind::Eject => self.eject,
            ActionKind::Inspect => self.inspect,
            ActionKind::Heal => self.heal,
            ActionKind::Sharpen => self.sharpen,
            ActionKind::Restrain => self.restrain,
        }
    }
}
