//! Shells and the magazine they are drawn from.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A single shell in the magazine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shell {
    Live,
    Blank,
}

impl Shell {
    #[must_use]
    pub const fn is_live(self) -> bool {
        matches!(self, Shell::Live)
    }
}

/// What the acting side knows about the next shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShellKnowledge {
    #[default]
    Unknown,
    Revealed(Shell),
}

impl ShellKnowledge {
    /// Observation value: -1 unknown, 0 blank, 1 live.
    #[must_use]
    pub const fn encoded(self) -> f32 {
        match self {
            ShellKnowledge::Unknown => -1.0,
            ShellKnowledge::Revealed(Shell::Blank) => 0.0,
            ShellKnowledge::Revealed(Shell::Live) => 1.0,
        }
    }

    /// Decode from an observation value. Anything negative is unknown.
    #[must_use]
    pub fn from_encoded(value: f32) -> Self {
        if value < -0.5 {
            ShellKnowledge::Unknown
        } else if value > 0.5 {
            ShellKnowledge::Revealed(Shell::Live)
        } else {
            ShellKnowledge::Revealed(Shell::Blank)
        }
    }
}

/// Ordered queue of shells; index 0 is fired next.
///
/// Rounds hold at most a handful of shells, so the queue lives inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Magazine {
    shells: SmallVec<[Shell; 8]>,
}

impl Magazine {
    /// Create an empty magazine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a magazine with the given firing order.
    #[must_use]
    pub fn from_shells(shells: &[Shell]) -> Self {
        Self {
            shells: SmallVec::from_slice(shells),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shells.is_empty()
    }

    /// Number of live shells remaining.
    #[must_use]
    pub fn live(&self) -> usize {
        self.shells.iter().filter(|s| s.is_live()).count()
    }

    /// Number of blank shells remaining.
    #[must_use]
    pub fn blank(&self) -> usize {
        self.len() - self.live()
    }

    /// Look at the next shell without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<Shell> {
        self.shells.first().copied()
    }

    /// Remove and return the next shell.
    pub fn draw(&mut self) -> Option<Shell> {
        if self.shells.is_empty() {
            None
        } else {
            Some(self.shells.remove(0))
        }
    }

    /// Remaining shells in firing order.
    #[must_use]
    pub fn shells(&self) -> &[Shell] {
        &self.shells
    }
}
