//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The two seats of a duel, `Blue` and `Red`. The numeric encoding
//! (Blue = 0, Red = 1) is the one used in observations.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two duelling sides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Encoded as 0. Acts first by default.
    #[default]
    Blue,
    /// Encoded as 1.
    Red,
}

impl Side {
    /// Both sides, in encoding order.
    pub const ALL: [Side; 2] = [Side::Blue, Side::Red];

    /// Get the raw side index (Blue = 0, Red = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Blue => 0,
            Side::Red => 1,
        }
    }

    /// The side sitting across the table.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Blue => Side::Red,
            Side::Red => Side::Blue,
        }
    }

    /// Decode a side from its observation value.
    ///
    /// Values above 0.5 decode to `Red`.
    #[must_use]
    pub fn from_encoded(value: f32) -> Side {
        if value > 0.5 {
            Side::Red
        } else {
            Side::Blue
        }
    }

    /// Observation value for this side.
    #[must_use]
    pub const fn encoded(self) -> f32 {
        match self {
            Side::Blue => 0.0,
            Side::Red => 1.0,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Blue => write!(f, "Blue"),
            Side::Red => write!(f, "Red"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use shell_roulette::core::{Side, SideMap};
///
/// let mut health: SideMap<u8> = SideMap::with_value(4);
/// health[Side::Red] = 2;
///
/// assert_eq!(health[Side::Blue], 4);
/// assert_eq!(health[Side::Red], 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Blue), factory(Side::Red)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs in encoding order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Side, &mut T) pairs in encoding order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Side, &mut T)> {
        Side::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
