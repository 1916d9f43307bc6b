//! A seated player.

use serde::{Deserialize, Serialize};

use crate::cards::Role;
use crate::core::{Level, Position, Seat};
use crate::knowledge::{Belief, Knowledge, Observed};

/// One seat's cards and private knowledge.
///
/// Only `Game` mutates a player; everything outside the crate reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    seat: Seat,
    start: Role,
    current: Role,
    knowledge: Knowledge,
}

impl Player {
    /// Seat a player with their dealt card. They know their own card at
    /// level 0 before any night action.
    pub(crate) fn new(seat: Seat, card: Role, position_count: usize) -> Self {
        let mut knowledge = Knowledge::new(position_count);
        knowledge.record(Position::seat(seat), Belief::new(Observed::Card(card), Level::ZERO));
        Self {
            seat,
            start: card,
            current: card,
            knowledge,
        }
    }

    /// Seat number.
    #[must_use]
    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// Card dealt to this seat. Decides which role acts for the seat.
    #[must_use]
    pub fn start(&self) -> Role {
        self.start
    }

    /// Card this seat holds now.
    #[must_use]
    pub fn current(&self) -> Role {
        self.current
    }

    /// This player's beliefs.
    #[must_use]
    pub fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    pub(crate) fn set_current(&mut self, card: Role) {
        self.current = card;
    }

    pub(crate) fn knowledge_mut(&mut self) -> &mut Knowledge {
        &mut self.knowledge
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.seat, self.current)
    }
}
