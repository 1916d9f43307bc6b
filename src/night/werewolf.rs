//! Werewolves recognize each other.

use smallvec::SmallVec;

use crate::cards::Role;
use crate::core::{Position, RandomSource, Seat};
use crate::game::{Game, Player, StartSeats};
use crate::knowledge::Observed;

use super::{NightEvent, Resolver};

/// Every Werewolf learns which seats are not Werewolves. When exactly two
/// seats started as Werewolf, each also learns the other.
#[derive(Clone, Copy, Debug, Default)]
pub struct WerewolfResolver;

impl Resolver for WerewolfResolver {
    fn role(&self) -> Role {
        Role::Werewolf
    }

    fn resolve(&self, game: &mut Game, _rng: &mut dyn RandomSource) -> NightEvent {
        let wolves = StartSeats::from_slice(game.seats_starting_as(Role::Werewolf));
        if wolves.is_empty() {
            log::debug!("no werewolf was dealt");
            return NightEvent::Skipped { role: Role::Werewolf };
        }

        if let [first, second] = wolves[..] {
            game.record_belief(first, Position::seat(second), Observed::Card(Role::Werewolf));
            game.record_belief(second, Position::seat(first), Observed::Card(Role::Werewolf));
        }

        let villagers: SmallVec<[Seat; 4]> = game
            .players()
            .iter()
            .filter(|p| p.start() != Role::Werewolf)
            .map(Player::seat)
            .collect();
        for &wolf in &wolves {
            for &seat in &villagers {
                game.record_belief(wolf, Position::seat(seat), Observed::NotWerewolf);
            }
        }

        log::debug!("werewolves {:?} woke up", wolves);
        NightEvent::WerewolvesWoke { wolves }
    }
}
