//! The fixed night schedule.

use crate::core::{RandomSource, RoundError};
use crate::game::Game;

use super::{
    NightEvent, Resolver, RobberResolver, SeerResolver, TroublemakerResolver, WerewolfResolver,
};

/// One step of the night.
#[derive(Debug)]
pub enum NightStep {
    /// Wake a role and resolve its action.
    Wake(Box<dyn Resolver>),
    /// Close the current phase. Later beliefs get a higher level.
    AdvanceLevel,
}

/// Ordered night steps.
///
/// The order is part of the round's contract: the Seer must look before
/// anything moves, and the Troublemaker must see the Robber's swap.
#[derive(Debug)]
pub struct NightOrder {
    steps: Vec<NightStep>,
}

impl NightOrder {
    /// Werewolf, Seer, advance, Robber, advance, Troublemaker.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            steps: vec![
                NightStep::Wake(Box::new(WerewolfResolver)),
                NightStep::Wake(Box::new(SeerResolver)),
                NightStep::AdvanceLevel,
                NightStep::Wake(Box::new(RobberResolver)),
                NightStep::AdvanceLevel,
                NightStep::Wake(Box::new(TroublemakerResolver)),
            ],
        }
    }

    /// The steps in order.
    #[must_use]
    pub fn steps(&self) -> &[NightStep] {
        &self.steps
    }

    /// Run every step on `game`. A round can only be played once.
    pub fn run(&self, game: &mut Game, rng: &mut dyn RandomSource) -> Result<(), RoundError> {
        if game.is_played() {
            return Err(RoundError::AlreadyPlayed);
        }

        for step in &self.steps {
            match step {
                NightStep::Wake(resolver) => {
                    let event = resolver.resolve(game, rng);
                    game.push_event(event);
                }
                NightStep::AdvanceLevel => game.advance_level(),
            }
        }
        game.mark_played();

        log::info!("night resolved at {}", game.level());
        Ok(())
    }
}

impl Game {
    /// Play the night in the standard order.
    pub fn play(&mut self, rng: &mut dyn RandomSource) -> Result<(), RoundError> {
        NightOrder::standard().run(self, rng)
    }

    /// Events from the night, skipping roles nobody was dealt.
    pub fn actions(&self) -> impl Iterator<Item = &NightEvent> {
        self.history().iter().filter(|e| !e.is_skipped())
    }
}
