//! Core round types: seats, positions, levels, RNG, configuration, errors.
//!
//! These are the building blocks every other module shares. Nothing here
//! knows what a role does at night.

pub mod seat;
pub mod position;
pub mod level;
pub mod rng;
pub mod config;
pub mod error;

pub use seat::Seat;
pub use position::Position;
pub use level::Level;
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use config::{RoundConfig, MIDDLE_SIZE, MIN_PLAYERS, MAX_PLAYERS, STANDARD_DECK, STANDARD_PLAYERS};
pub use error::{RoundError, SetupError};
