use thiserror::Error;

use crate::core::Side;

/// Rejected `RulesConfig` values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max_hp must be at least 1")]
    ZeroMaxHp,

    #[error("invalid {name} range {start}..={end}")]
    InvalidRange {
        name: &'static str,
        start: u8,
        end: u8,
    },

    #[error("inventory cap must be at least 1")]
    ZeroInventoryCap,

    #[error("inventory cap {cap} exceeds the largest item count {max}")]
    InventoryCapTooLarge { cap: usize, max: usize },
}

/// Raw action id outside the action set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("unknown action id {0}")]
    UnknownId(i64),
}

/// Failure encoding or decoding a match snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),

    #[error("{side} health {health} exceeds max_hp {max_hp}")]
    HealthAboveMax { side: Side, health: u8, max_hp: u8 },

    #[error("{side} holds {held} items, over the inventory cap {cap}")]
    InventoryOverCap { side: Side, held: usize, cap: usize },
}

/// Failure handling one line of the transport protocol.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("malformed request {0:?}")]
    Malformed(String),

    #[error("malformed observation: {0}")]
    BadObservation(String),

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error("session is invalid and must be re-established")]
    SessionInvalid,

    #[error("bridge I/O error: {0}")]
    Io(#[from] std::io::Error),
}
