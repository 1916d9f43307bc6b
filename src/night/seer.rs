//! The Seer looks at one other seat or at two middle cards.

use smallvec::SmallVec;

use crate::cards::Role;
use crate::core::{Position, RandomSource};
use crate::game::Game;
use crate::knowledge::Observed;

use super::{NightEvent, Resolver};

/// Flips a coin. Heads: look at a random other seat. Tails: skip one
/// random middle slot and look at the rest.
///
/// Only the first seat dealt the Seer acts.
#[derive(Clone, Copy, Debug, Default)]
pub struct SeerResolver;

impl Resolver for SeerResolver {
    fn role(&self) -> Role {
        Role::Seer
    }

    fn resolve(&self, game: &mut Game, rng: &mut dyn RandomSource) -> NightEvent {
        let Some(&seer) = game.seats_starting_as(Role::Seer).first() else {
            log::debug!("no seer was dealt");
            return NightEvent::Skipped { role: Role::Seer };
        };

        if rng.coin_flip() {
            let target = game.pick_other_player(&[seer], rng);
            let card = game.player(target).current();
            game.record_belief(seer, Position::seat(target), Observed::Card(card));

            log::debug!("seer {} looked at {} and saw {}", seer, target, card);
            NightEvent::SeerViewedSeat { seer, target, card }
        } else {
            let skipped = rng.below(game.middle().len());
            let revealed: SmallVec<[(usize, Role); 2]> = game
                .middle()
                .iter()
                .copied()
                .enumerate()
                .filter(|(i, _)| *i != skipped)
                .collect();

            let player_count = game.player_count();
            for &(i, card) in &revealed {
                game.record_belief(seer, Position::middle(player_count, i), Observed::Card(card));
            }

            log::debug!("seer {} looked at the middle, skipping {}", seer, skipped);
            NightEvent::SeerViewedMiddle { seer, skipped, revealed }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Level, RoundConfig, ScriptedRng, Seat};
    use crate::knowledge::Belief;

    /// Seats Seer, Werewolf, Robber; middle Troublemaker, Werewolf, Villager.
    fn game() -> Game {
        use Role::*;
        let config = RoundConfig::new(3).with_deck([Seer, Werewolf, Robber, Troublemaker, Werewolf, Villager]);
        Game::new(config, &mut ScriptedRng::new([5, 4, 3, 2, 1])).unwrap()
    }

    #[test]
    fn test_heads_sees_current_card() {
        let mut game = game();
        // Move cards first so "current" differs from "start".
        game.swap_cards(Seat::new(1), Seat::new(2));

        // heads, then draw 1 of {1, 2} → seat 2
        let mut rng = ScriptedRng::new([0, 1]);
        let event = SeerResolver.resolve(&mut game, &mut rng);

        assert_eq!(
            event,
            NightEvent::SeerViewedSeat {
                seer: Seat::new(0),
                target: Seat::new(2),
                card: Role::Werewolf,
            }
        );
        assert_eq!(
            game.player(Seat::new(0)).knowledge().get(Position(2)),
            Some(&Belief::new(Observed::Card(Role::Werewolf), Level::ZERO))
        );
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_tails_sees_two_middle_cards() {
        for skipped in 0..3 {
            let mut game = game();
            let mut rng = ScriptedRng::new([1, skipped]);
            let event = SeerResolver.resolve(&mut game, &mut rng);

            let NightEvent::SeerViewedMiddle { revealed, .. } = &event else {
                panic!("expected a middle view, got {:?}", event);
            };
            assert_eq!(revealed.len(), 2);

            let knowledge = game.player(Seat::new(0)).knowledge();
            let middle: Vec<_> = knowledge
                .iter()
                .filter_map(|(pos, b)| pos.as_middle_index(3).map(|i| (i, b.observed)))
                .collect();
            assert_eq!(middle.len(), 2);
            assert!(middle.iter().all(|(i, _)| *i != skipped));
            for (i, observed) in middle {
                assert_eq!(observed, Observed::Card(game.middle()[i]));
            }
        }
    }

    #[test]
    fn test_no_seer_is_noop() {
        use Role::*;
        let config = RoundConfig::new(3).with_deck([Werewolf, Robber, Villager, Seer, Werewolf, Troublemaker]);
        let mut game = Game::new(config, &mut ScriptedRng::new([5, 4, 3, 2, 1])).unwrap();

        let mut rng = ScriptedRng::default();
        assert_eq!(
            SeerResolver.resolve(&mut game, &mut rng),
            NightEvent::Skipped { role: Seer }
        );
    }
}
