//! Belief positions.
//!
//! Every place a card can sit has a `Position`. Seats and middle-pile
//! slots share one key space so a player's beliefs live in a single map.
//!
//! ## Layout
//!
//! - `0..player_count`: seats
//! - `player_count..player_count + middle_size`: middle slots, in deal order
//!
//! ```
//! use one_night::core::{Position, Seat};
//!
//! let player_count = 3;
//!
//! let seat = Position::seat(Seat::new(1));
//! assert_eq!(seat.as_seat(player_count), Some(Seat::new(1)));
//!
//! let middle = Position::middle(player_count, 2);
//! assert_eq!(middle, Position(5));
//! assert_eq!(middle.as_middle_index(player_count), Some(2));
//! assert_eq!(middle.as_seat(player_count), None);
//! ```

use serde::{Deserialize, Serialize};

use super::Seat;

/// A seat or a middle-pile slot.
///
/// Interpreting a position requires the player count, the same way
/// the seat/middle boundary is a property of the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position(pub u32);

impl Position {
    /// Position of a seat.
    #[must_use]
    pub const fn seat(seat: Seat) -> Self {
        Self(seat.0 as u32)
    }

    /// Position of the middle slot at `index`.
    #[must_use]
    pub const fn middle(player_count: usize, index: usize) -> Self {
        Self((player_count + index) as u32)
    }

    /// Check if this position is a seat.
    #[must_use]
    pub const fn is_seat(self, player_count: usize) -> bool {
        self.0 < player_count as u32
    }

    /// Convert to a seat if this position is one.
    #[must_use]
    pub const fn as_seat(self, player_count: usize) -> Option<Seat> {
        if self.is_seat(player_count) {
            Some(Seat(self.0 as u8))
        } else {
            None
        }
    }

    /// Convert to a middle-pile index if this position is past the seats.
    ///
    /// Does not check the upper bound; callers that need it compare
    /// against the middle size.
    #[must_use]
    pub const fn as_middle_index(self, player_count: usize) -> Option<usize> {
        if self.is_seat(player_count) {
            None
        } else {
            Some(self.0 as usize - player_count)
        }
    }

    /// Get the raw position value.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<Seat> for Position {
    fn from(seat: Seat) -> Self {
        Self::seat(seat)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Position({})", self.0)
    }
}
