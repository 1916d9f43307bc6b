//! The round: dealt players, the middle pile, and seat selection.

mod selection;
mod player;
mod state;

pub use selection::pick_other_seat;
pub use player::Player;
pub use state::{Game, StartSeats};
