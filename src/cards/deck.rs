//! Deck building, shuffling and dealing.
//!
//! ## Dealing
//!
//! The deck is shuffled once with Fisher–Yates, walking from the last
//! index down to 1 and swapping with a uniformly chosen index at or below
//! it. The first `player_count` cards go one per seat in index order; the
//! rest become the middle pile in deck order.
//!
//! ```
//! use one_night::cards::{Deck, Role};
//! use one_night::core::{RoundConfig, ScriptedRng};
//!
//! let config = RoundConfig::standard(3).unwrap();
//! let mut deck = Deck::new(&config).unwrap();
//!
//! // Every swap lands on itself: the deck keeps its order.
//! deck.shuffle(&mut ScriptedRng::new([5, 4, 3, 2, 1]));
//! let deal = deck.deal(3);
//!
//! assert_eq!(deal.hands, vec![Role::Werewolf, Role::Werewolf, Role::Seer]);
//! assert_eq!(deal.middle, vec![Role::Robber, Role::Troublemaker, Role::Villager]);
//! ```

use crate::core::{RandomSource, RoundConfig, SetupError};

use super::Role;

/// An ordered deck of role cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Role>,
}

/// Cards handed out by `Deck::deal`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deal {
    /// One card per seat, in seat order.
    pub hands: Vec<Role>,
    /// Remaining cards, in deck order.
    pub middle: Vec<Role>,
}

impl Deck {
    /// Build the deck for a validated configuration.
    pub fn new(config: &RoundConfig) -> Result<Self, SetupError> {
        config.validate()?;
        Ok(Self {
            cards: config.deck.clone(),
        })
    }

    /// Build a deck from raw cards without validation.
    pub fn from_cards(cards: impl Into<Vec<Role>>) -> Self {
        Self { cards: cards.into() }
    }

    /// Cards in current order.
    #[must_use]
    pub fn cards(&self) -> &[Role] {
        &self.cards
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle in place. Draws exactly `len - 1` values from `rng`.
    pub fn shuffle(&mut self, rng: &mut dyn RandomSource) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.below(i + 1);
            self.cards.swap(i, j);
        }
    }

    /// Split into seat hands and the middle pile.
    ///
    /// The deck itself keeps its order so the round can report it.
    #[must_use]
    pub fn deal(&self, player_count: usize) -> Deal {
        assert!(
            player_count <= self.cards.len(),
            "Cannot deal {} seats from {} cards",
            player_count,
            self.cards.len()
        );
        let (hands, middle) = self.cards.split_at(player_count);
        Deal {
            hands: hands.to_vec(),
            middle: middle.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, ScriptedRng, STANDARD_DECK};

    fn sorted(cards: &[Role]) -> Vec<Role> {
        let mut cards = cards.to_vec();
        cards.sort();
        cards
    }

    #[test]
    fn test_new_validates() {
        let config = RoundConfig::new(4);
        assert!(Deck::new(&config).is_err());

        let deck = Deck::new(&RoundConfig::standard(3).unwrap()).unwrap();
        assert_eq!(deck.cards(), &STANDARD_DECK);
        assert_eq!(deck.len(), 6);
        assert!(!deck.is_empty());
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut deck = Deck::from_cards(STANDARD_DECK);
        deck.shuffle(&mut GameRng::new(42));

        assert_eq!(sorted(deck.cards()), sorted(&STANDARD_DECK));
    }

    #[test]
    fn test_shuffle_reproducible() {
        let mut a = Deck::from_cards(STANDARD_DECK);
        let mut b = Deck::from_cards(STANDARD_DECK);
        a.shuffle(&mut GameRng::new(1234));
        b.shuffle(&mut GameRng::new(1234));
        assert_eq!(a, b);
    }

    #[test]
    fn test_scripted_shuffle() {
        // i=5 j=5, i=4 j=0, i=3 j=1, i=2 j=0, i=1 j=1
        let mut rng = ScriptedRng::new([5, 0, 1, 0, 1]);
        let mut deck = Deck::from_cards(STANDARD_DECK);
        deck.shuffle(&mut rng);

        assert_eq!(rng.remaining(), 0);
        assert_eq!(
            deck.cards(),
            &[
                Role::Seer,
                Role::Robber,
                Role::Troublemaker,
                Role::Werewolf,
                Role::Werewolf,
                Role::Villager,
            ]
        );
    }

    #[test]
    fn test_deal_splits_in_order() {
        let deck = Deck::from_cards(STANDARD_DECK);
        let deal = deck.deal(3);

        assert_eq!(deal.hands.len() + deal.middle.len(), deck.len());
        assert_eq!(deal.hands, STANDARD_DECK[..3].to_vec());
        assert_eq!(deal.middle, STANDARD_DECK[3..].to_vec());
    }

    #[test]
    #[should_panic(expected = "Cannot deal")]
    fn test_deal_too_many_seats() {
        let _ = Deck::from_cards(STANDARD_DECK).deal(7);
    }
}
