//! The Troublemaker swaps two other seats without looking.

use crate::cards::Role;
use crate::core::{Position, RandomSource};
use crate::game::Game;
use crate::knowledge::Observed;

use super::{NightEvent, Resolver};

/// Picks two distinct other seats and swaps their cards. The Troublemaker
/// only knows that both seats moved.
#[derive(Clone, Copy, Debug, Default)]
pub struct TroublemakerResolver;

impl Resolver for TroublemakerResolver {
    fn role(&self) -> Role {
        Role::Troublemaker
    }

    fn resolve(&self, game: &mut Game, rng: &mut dyn RandomSource) -> NightEvent {
        let Some(&troublemaker) = game.seats_starting_as(Role::Troublemaker).first() else {
            log::debug!("no troublemaker was dealt");
            return NightEvent::Skipped { role: Role::Troublemaker };
        };

        let first = game.pick_other_player(&[troublemaker], rng);
        let second = game.pick_other_player(&[troublemaker, first], rng);
        game.swap_cards(first, second);

        game.record_belief(troublemaker, Position::seat(first), Observed::Moved);
        game.record_belief(troublemaker, Position::seat(second), Observed::Moved);

        log::debug!("troublemaker {} swapped {} and {}", troublemaker, first, second);
        NightEvent::Swapped { troublemaker, first, second }
    }
}
