//! Core match types: sides, shells, items, actions, state, RNG, configuration.
//!
//! These are plain data. The rules that move a `MatchState` forward live in
//! `rules` and `games`.

pub mod player;
pub mod rng;
pub mod config;
pub mod shell;
pub mod item;
pub mod action;
pub mod state;

pub use player::{Side, SideMap};
pub use rng::{GameRng, GameRngState};
pub use config::{RulesConfig, MAX_INVENTORY_CAP};
pub use shell::{Magazine, Shell, ShellKnowledge};
pub use item::{Inventory, ItemKind, MAX_ITEM_COUNT};
pub use action::{ActionKind, ActionMask, ActionRecord, ACTION_COUNT};
pub use state::{MatchState, PlayerState};
