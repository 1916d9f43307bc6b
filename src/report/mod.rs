//! End-of-round status.
//!
//! `RoundReport` is a snapshot of everything a reader needs after the
//! night: each seat's starting card, current card and full belief map,
//! plus the middle pile and what each role did.
//!
//! The text form lists one block per seat:
//!
//! ```text
//! num:   0
//! start: Seer
//! end:   Troublemaker
//! know:  seat 0 = Seer @L0, seat 1 = Robber @L0
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::Role;
use crate::core::{Level, Position, Seat};
use crate::game::{Game, Player};
use crate::knowledge::Belief;
use crate::night::NightEvent;

/// One seat's final state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatReport {
    /// Seat number.
    pub seat: Seat,
    /// Card dealt.
    pub start: Role,
    /// Card held at the end of the night.
    pub end: Role,
    /// Beliefs in position order.
    pub knowledge: Vec<(Position, Belief)>,
}

impl SeatReport {
    fn from_player(player: &Player) -> Self {
        Self {
            seat: player.seat(),
            start: player.start(),
            end: player.current(),
            knowledge: player.knowledge().iter().map(|(p, b)| (p, *b)).collect(),
        }
    }
}

/// Snapshot of a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// Seed the round was dealt from, when known.
    pub seed: Option<u64>,
    /// Seats in order.
    pub seats: Vec<SeatReport>,
    /// Middle pile in deal order.
    pub middle: Vec<Role>,
    /// Level when the report was taken.
    pub level: Level,
    /// What each role did.
    pub history: Vec<NightEvent>,
}

impl RoundReport {
    /// Capture the current state of `game`.
    #[must_use]
    pub fn from_game(game: &Game) -> Self {
        Self {
            seed: None,
            seats: game.players().iter().map(SeatReport::from_player).collect(),
            middle: game.middle().to_vec(),
            level: game.level(),
            history: game.history().iter().cloned().collect(),
        }
    }

    /// Attach the seed so the round can be replayed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn position_label(&self, position: Position) -> String {
        let player_count = self.seats.len();
        match position.as_seat(player_count) {
            Some(seat) => format!("seat {}", seat.0),
            None => format!("middle[{}]", position.index() - player_count),
        }
    }
}

impl std::fmt::Display for RoundReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(seed) = self.seed {
            writeln!(f, "seed:  {}", seed)?;
            writeln!(f)?;
        }

        for (i, seat) in self.seats.iter().enumerate() {
            writeln!(f, "num:   {}", seat.seat.0)?;
            writeln!(f, "start: {}", seat.start)?;
            writeln!(f, "end:   {}", seat.end)?;
            write!(f, "know:  ")?;
            for (j, (position, belief)) in seat.knowledge.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{} = {}", self.position_label(*position), belief)?;
            }
            writeln!(f)?;

            if i != self.seats.len() - 1 {
                writeln!(f)?;
            }
        }

        if !self.middle.is_empty() {
            writeln!(f)?;
            write!(f, "middle:")?;
            for card in &self.middle {
                write!(f, " {}", card)?;
            }
            writeln!(f)?;
        }

        if !self.history.is_empty() {
            writeln!(f)?;
            writeln!(f, "night:")?;
            for event in &self.history {
                writeln!(f, "  {}", event)?;
            }
        }
        Ok(())
    }
}
