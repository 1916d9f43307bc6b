//! The Robber swaps with another seat and looks at the new card.

use crate::cards::Role;
use crate::core::{Position, RandomSource};
use crate::game::Game;
use crate::knowledge::Observed;

use super::{NightEvent, Resolver};

/// Takes the card of a random other seat, leaving the Robber's card
/// there. The Robber knows both resulting cards.
#[derive(Clone, Copy, Debug, Default)]
pub struct RobberResolver;

impl Resolver for RobberResolver {
    fn role(&self) -> Role {
        Role::Robber
    }

    fn resolve(&self, game: &mut Game, rng: &mut dyn RandomSource) -> NightEvent {
        let Some(&robber) = game.seats_starting_as(Role::Robber).first() else {
            log::debug!("no robber was dealt");
            return NightEvent::Skipped { role: Role::Robber };
        };

        let target = game.pick_other_player(&[robber], rng);
        game.swap_cards(robber, target);

        let took = game.player(robber).current();
        let left = game.player(target).current();
        game.record_belief(robber, Position::seat(target), Observed::Card(left));
        game.record_belief(robber, Position::seat(robber), Observed::Card(took));

        log::debug!("robber {} took {} from {}", robber, took, target);
        NightEvent::Robbed { robber, target, took }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Level, RoundConfig, ScriptedRng, Seat};
    use crate::knowledge::Belief;

    #[test]
    fn test_robber_swaps_and_looks() {
        use Role::*;
        let config = RoundConfig::new(3).with_deck([Werewolf, Robber, Seer, Troublemaker, Werewolf, Villager]);
        let mut game = Game::new(config, &mut ScriptedRng::new([5, 4, 3, 2, 1])).unwrap();
        game.advance_level();

        // Draw 0 of {0, 2} → seat 0
        let event = RobberResolver.resolve(&mut game, &mut ScriptedRng::new([0]));
        assert_eq!(
            event,
            NightEvent::Robbed {
                robber: Seat::new(1),
                target: Seat::new(0),
                took: Werewolf,
            }
        );

        assert_eq!(game.player(Seat::new(1)).current(), Werewolf);
        assert_eq!(game.player(Seat::new(0)).current(), Robber);
        assert_eq!(game.player(Seat::new(1)).start(), Robber);

        let knowledge = game.player(Seat::new(1)).knowledge();
        assert_eq!(knowledge.get(Position(1)), Some(&Belief::new(Observed::Card(Werewolf), Level(1))));
        assert_eq!(knowledge.get(Position(0)), Some(&Belief::new(Observed::Card(Robber), Level(1))));

        // The robbed seat still believes its old card.
        assert_eq!(
            game.player(Seat::new(0)).knowledge().get(Position(0)),
            Some(&Belief::new(Observed::Card(Werewolf), Level::ZERO))
        );
    }

    #[test]
    fn test_no_robber_is_noop() {
        use Role::*;
        let config = RoundConfig::new(3).with_deck([Werewolf, Seer, Villager, Robber, Werewolf, Troublemaker]);
        let mut game = Game::new(config, &mut ScriptedRng::new([5, 4, 3, 2, 1])).unwrap();
        let before: Vec<_> = game.players().iter().map(|p| p.current()).collect();

        let event = RobberResolver.resolve(&mut game, &mut ScriptedRng::default());

        assert_eq!(event, NightEvent::Skipped { role: Robber });
        let after: Vec<_> = game.players().iter().map(|p| p.current()).collect();
        assert_eq!(before, after);
    }
}
