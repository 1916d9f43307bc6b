//! Role cards.

use serde::{Deserialize, Serialize};

/// A role card. The set is closed for a round; duplicates are allowed
/// in the deck (two Werewolves).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Wakes with the other Werewolf and learns who the others are.
    Werewolf,
    /// Looks at one other seat or at two middle cards.
    Seer,
    /// Swaps cards with another seat and looks at the new card.
    Robber,
    /// Swaps the cards of two other seats without looking.
    Troublemaker,
    /// No night action.
    Villager,
}

impl Role {
    /// Every role, in wake order with Villager last.
    pub const ALL: [Role; 5] = [
        Role::Werewolf,
        Role::Seer,
        Role::Robber,
        Role::Troublemaker,
        Role::Villager,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Role::Werewolf => "Werewolf",
            Role::Seer => "Seer",
            Role::Robber => "Robber",
            Role::Troublemaker => "Troublemaker",
            Role::Villager => "Villager",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
