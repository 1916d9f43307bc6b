//! Round configuration.
//!
//! A round is configured by its player count and the multiset of role
//! cards in the deck. Every card not dealt to a seat goes to the middle
//! pile, which always holds `MIDDLE_SIZE` cards.
//!
//! The standard deck only supports three players:
//!
//! ```
//! use one_night::core::RoundConfig;
//!
//! let config = RoundConfig::standard(3).unwrap();
//! assert_eq!(config.deck.len(), 6);
//! assert_eq!(config.middle_size(), 3);
//!
//! assert!(RoundConfig::standard(4).is_err());
//! ```

use serde::{Deserialize, Serialize};

use super::SetupError;
use crate::cards::Role;

/// Cards left face-down in the middle after dealing.
pub const MIDDLE_SIZE: usize = 3;

/// Smallest player count where the Troublemaker has two other seats to swap.
pub const MIN_PLAYERS: usize = 3;

/// Largest player count a `Seat` can number.
pub const MAX_PLAYERS: usize = 255;

/// Player count the standard deck is built for.
pub const STANDARD_PLAYERS: usize = 3;

/// The standard deck, in unshuffled order.
pub const STANDARD_DECK: [Role; 6] = [
    Role::Werewolf,
    Role::Werewolf,
    Role::Seer,
    Role::Robber,
    Role::Troublemaker,
    Role::Villager,
];

/// Configuration for one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Number of seats.
    pub player_count: usize,

    /// Deck contents before shuffling. Order only matters for reproducing
    /// a round from a seed.
    pub deck: Vec<Role>,
}

impl RoundConfig {
    /// Create a configuration with the standard deck and an arbitrary
    /// player count. Call `validate` before dealing.
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            deck: STANDARD_DECK.to_vec(),
        }
    }

    /// The standard configuration for `player_count` players.
    ///
    /// The deck composition is fixed, so only `STANDARD_PLAYERS` works.
    pub fn standard(player_count: usize) -> Result<Self, SetupError> {
        if player_count != STANDARD_PLAYERS {
            return Err(SetupError::UnsupportedPlayerCount {
                requested: player_count,
                supported: STANDARD_PLAYERS,
            });
        }
        let config = Self::new(player_count);
        config.validate()?;
        Ok(config)
    }

    /// Replace the deck.
    #[must_use]
    pub fn with_deck(mut self, deck: impl Into<Vec<Role>>) -> Self {
        self.deck = deck.into();
        self
    }

    /// Number of cards left in the middle after dealing.
    #[must_use]
    pub fn middle_size(&self) -> usize {
        self.deck.len().saturating_sub(self.player_count)
    }

    /// Number of belief positions: seats followed by middle slots.
    #[must_use]
    pub fn position_count(&self) -> usize {
        self.deck.len()
    }

    /// Check that the configuration can be dealt and played.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.player_count < MIN_PLAYERS {
            return Err(SetupError::TooFewPlayers {
                requested: self.player_count,
                minimum: MIN_PLAYERS,
            });
        }
        if self.player_count > MAX_PLAYERS {
            return Err(SetupError::TooManyPlayers {
                requested: self.player_count,
                maximum: MAX_PLAYERS,
            });
        }
        let expected = self.player_count + MIDDLE_SIZE;
        if self.deck.len() != expected {
            return Err(SetupError::DeckSize {
                deck: self.deck.len(),
                expected,
                players: self.player_count,
                middle: MIDDLE_SIZE,
            });
        }
        Ok(())
    }
}
