//! Belief records.

use serde::{Deserialize, Serialize};

use crate::cards::Role;
use crate::core::Level;

/// What a player observed at a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Observed {
    /// Saw this card.
    Card(Role),
    /// Knows the card here was swapped, but not what it became.
    Moved,
    /// Knows the seat did not start as a Werewolf.
    NotWerewolf,
}

impl Observed {
    /// The card, if one was actually seen.
    #[must_use]
    pub const fn card(self) -> Option<Role> {
        match self {
            Observed::Card(role) => Some(role),
            Observed::Moved | Observed::NotWerewolf => None,
        }
    }
}

impl std::fmt::Display for Observed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Observed::Card(role) => write!(f, "{}", role),
            Observed::Moved => f.write_str("*Moved"),
            Observed::NotWerewolf => f.write_str("!Werewolf"),
        }
    }
}

/// A player's latest claim about one position.
///
/// `level` is the round level when it was recorded. A card move in a
/// later level may have made it stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Belief {
    /// What was observed.
    pub observed: Observed,
    /// When it was observed.
    pub level: Level,
}

impl Belief {
    /// Create a belief.
    #[must_use]
    pub const fn new(observed: Observed, level: Level) -> Self {
        Self { observed, level }
    }
}

impl std::fmt::Display for Belief {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @{}", self.observed, self.level)
    }
}
