//! Night phase counter.
//!
//! Beliefs are stamped with the level current when they were recorded.
//! The orchestrator advances the level between phases, so a belief with a
//! lower level may have been invalidated by a card move in a later phase.

use serde::{Deserialize, Serialize};

/// Monotonic phase counter for one round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Level(pub u32);

impl Level {
    /// Level before any phase has ended. Starting beliefs use this.
    pub const ZERO: Level = Level(0);

    /// The following level.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{}", self.0)
    }
}
