//! Round invariants over arbitrary seeds.

use proptest::prelude::*;

use one_night::cards::{Deck, Role};
use one_night::core::{GameRng, Level, Position, STANDARD_DECK};
use one_night::game::Game;
use one_night::knowledge::Observed;
use one_night::night::NightEvent;

fn sorted(mut cards: Vec<Role>) -> Vec<Role> {
    cards.sort();
    cards
}

fn played(seed: u64) -> Game {
    let mut rng = GameRng::new(seed);
    let mut game = Game::standard(3, &mut rng).unwrap();
    game.play(&mut rng).unwrap();
    game
}

proptest! {
    /// Cards are only ever swapped: the multiset in play never changes.
    #[test]
    fn cards_are_conserved(seed in any::<u64>()) {
        let game = played(seed);

        prop_assert_eq!(game.middle().len() + game.player_count(), game.deck().len());

        let starts: Vec<_> = game.players().iter().map(|p| p.start())
            .chain(game.middle().iter().copied())
            .collect();
        let ends: Vec<_> = game.players().iter().map(|p| p.current())
            .chain(game.middle().iter().copied())
            .collect();
        prop_assert_eq!(sorted(starts.clone()), sorted(ends));
        prop_assert_eq!(sorted(starts), sorted(STANDARD_DECK.to_vec()));
    }

    /// Same seed, same round.
    #[test]
    fn rounds_are_reproducible(seed in any::<u64>()) {
        let a = played(seed);
        let b = played(seed);

        prop_assert_eq!(a.deck(), b.deck());
        prop_assert_eq!(a.players(), b.players());
        prop_assert_eq!(a.history(), b.history());
    }

    #[test]
    fn shuffle_is_permutation(seed in any::<u64>()) {
        let mut deck = Deck::from_cards(STANDARD_DECK);
        deck.shuffle(&mut GameRng::new(seed));
        prop_assert_eq!(sorted(deck.cards().to_vec()), sorted(STANDARD_DECK.to_vec()));
    }

    /// Levels stay within the night and only Troublemaker swaps are "moved".
    #[test]
    fn beliefs_are_well_formed(seed in any::<u64>()) {
        let game = played(seed);
        prop_assert_eq!(game.level(), Level(2));

        for player in game.players() {
            let knowledge = player.knowledge();
            prop_assert!(knowledge.iter().all(|(p, b)| p.index() < game.position_count() && b.level <= Level(2)));

            // Everyone knows something about their own seat.
            prop_assert!(knowledge.knows(Position::seat(player.seat())));

            for (_, belief) in knowledge.iter() {
                match belief.observed {
                    Observed::Moved => {
                        prop_assert_eq!(player.start(), Role::Troublemaker);
                        prop_assert_eq!(belief.level, Level(2));
                    }
                    Observed::NotWerewolf => {
                        prop_assert_eq!(player.start(), Role::Werewolf);
                        prop_assert_eq!(belief.level, Level::ZERO);
                    }
                    Observed::Card(_) => {}
                }
            }
        }
    }

    /// The Troublemaker's own card is never touched by its own swap, and the
    /// Seer's seat view matches the target's card at level 0.
    #[test]
    fn resolver_effects_hold(seed in any::<u64>()) {
        let game = played(seed);

        for event in game.history() {
            match event {
                NightEvent::Swapped { troublemaker, first, second } => {
                    prop_assert_ne!(first, second);
                    prop_assert_ne!(first, troublemaker);
                    prop_assert_ne!(second, troublemaker);
                }
                NightEvent::SeerViewedSeat { seer, target, card } => {
                    prop_assert_ne!(seer, target);
                    let belief = game.player(*seer).knowledge().get(Position::seat(*target)).copied();
                    prop_assert_eq!(belief.map(|b| (b.observed, b.level)), Some((Observed::Card(*card), Level::ZERO)));
                    // Before the Robber and Troublemaker, the card was the target's dealt card.
                    prop_assert_eq!(game.player(*target).start(), *card);
                }
                NightEvent::SeerViewedMiddle { skipped, revealed, .. } => {
                    prop_assert_eq!(revealed.len(), 2);
                    prop_assert!(revealed.iter().all(|(i, _)| i != skipped));
                }
                NightEvent::Robbed { robber, target, took } => {
                    prop_assert_ne!(robber, target);
                    // The Robber's take is whatever the target was dealt.
                    prop_assert_eq!(game.player(*target).start(), *took);
                }
                _ => {}
            }
        }
    }
}
