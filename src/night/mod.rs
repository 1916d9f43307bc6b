//! Night actions.
//!
//! Each role with a night action has a `Resolver`. A resolver finds the
//! seat(s) whose *dealt* card is its role, performs the action on the
//! round, records what the acting player learned, and returns a
//! `NightEvent` describing what happened.
//!
//! A card moved away from its starting seat does not carry its action
//! with it: the Robber who steals the Seer card does not look at anything.
//!
//! ## Order
//!
//! `NightOrder::standard()` wakes roles in a fixed order and advances the
//! level between phases:
//!
//! ```text
//! Werewolf → Seer → (level+1) → Robber → (level+1) → Troublemaker
//! ```
//!
//! ```
//! use one_night::core::GameRng;
//! use one_night::game::Game;
//!
//! let mut rng = GameRng::new(7);
//! let mut game = Game::standard(3, &mut rng).unwrap();
//! game.play(&mut rng).unwrap();
//!
//! assert_eq!(game.history().len(), 4);
//! assert!(game.play(&mut rng).is_err());
//! ```

mod werewolf;
mod seer;
mod robber;
mod troublemaker;
mod order;

pub use werewolf::WerewolfResolver;
pub use seer::SeerResolver;
pub use robber::RobberResolver;
pub use troublemaker::TroublemakerResolver;
pub use order::{NightOrder, NightStep};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Role;
use crate::core::{RandomSource, Seat};
use crate::game::{Game, StartSeats};

/// One role's night action.
pub trait Resolver: std::fmt::Debug {
    /// The dealt card that triggers this action.
    fn role(&self) -> Role;

    /// Perform the action. Must not fail when no seat started as `role`;
    /// return `NightEvent::Skipped` instead.
    fn resolve(&self, game: &mut Game, rng: &mut dyn RandomSource) -> NightEvent;
}

/// What a resolver did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NightEvent {
    /// No seat started as the role.
    Skipped {
        /// The role that had no seat.
        role: Role,
    },

    /// Werewolves opened their eyes.
    WerewolvesWoke {
        /// Seats that started as Werewolf.
        wolves: StartSeats,
    },

    /// Seer looked at another seat.
    SeerViewedSeat {
        /// The Seer's seat.
        seer: Seat,
        /// Seat looked at.
        target: Seat,
        /// Card the target held at the time.
        card: Role,
    },

    /// Seer looked at all middle cards but one.
    SeerViewedMiddle {
        /// The Seer's seat.
        seer: Seat,
        /// Middle index left unseen.
        skipped: usize,
        /// Middle indices seen with their cards.
        revealed: SmallVec<[(usize, Role); 2]>,
    },

    /// Robber swapped with another seat.
    Robbed {
        /// The Robber's seat.
        robber: Seat,
        /// Seat robbed.
        target: Seat,
        /// Card the Robber took.
        took: Role,
    },

    /// Troublemaker swapped two other seats.
    Swapped {
        /// The Troublemaker's seat.
        troublemaker: Seat,
        /// First seat picked.
        first: Seat,
        /// Second seat picked.
        second: Seat,
    },
}

impl NightEvent {
    /// The role whose action produced this event.
    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            NightEvent::Skipped { role } => *role,
            NightEvent::WerewolvesWoke { .. } => Role::Werewolf,
            NightEvent::SeerViewedSeat { .. } | NightEvent::SeerViewedMiddle { .. } => Role::Seer,
            NightEvent::Robbed { .. } => Role::Robber,
            NightEvent::Swapped { .. } => Role::Troublemaker,
        }
    }

    /// Check if the role had no seat.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        matches!(self, NightEvent::Skipped { .. })
    }
}

impl std::fmt::Display for NightEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NightEvent::Skipped { role } => write!(f, "{}: nobody", role),
            NightEvent::WerewolvesWoke { wolves } => {
                write!(f, "Werewolf: ")?;
                for (i, wolf) in wolves.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", wolf)?;
                }
                Ok(())
            }
            NightEvent::SeerViewedSeat { seer, target, card } => {
                write!(f, "Seer: {} saw {} holding {}", seer, target, card)
            }
            NightEvent::SeerViewedMiddle { seer, revealed, .. } => {
                write!(f, "Seer: {} saw", seer)?;
                for (i, card) in revealed {
                    write!(f, " middle[{}]={}", i, card)?;
                }
                Ok(())
            }
            NightEvent::Robbed { robber, target, took } => {
                write!(f, "Robber: {} took {} from {}", robber, took, target)
            }
            NightEvent::Swapped { troublemaker, first, second } => {
                write!(f, "Troublemaker: {} swapped {} and {}", troublemaker, first, second)
            }
        }
    }
}
