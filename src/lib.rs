//! # one-night
//!
//! Simulates the night of a single One Night Werewolf round and records
//! what every player believes about the final arrangement of cards.
//!
//! ## Design Principles
//!
//! 1. **Roles follow the deal**: a role acts for the seat it was dealt to,
//!    even after its card has been swapped away.
//!
//! 2. **Beliefs are stamped, not corrected**: a belief records the card as
//!    it was when observed, tagged with the level of the phase it was
//!    observed in. Later moves leave it stale rather than rewrite it.
//!
//! 3. **Explicit randomness**: one `RandomSource` is passed into dealing
//!    and every night action. `ScriptedRng` replays hand-computed rounds.
//!
//! ## Modules
//!
//! - `core`: Seats, positions, levels, RNG, configuration, errors
//! - `cards`: Roles and the dealer
//! - `knowledge`: Belief records and per-player stores
//! - `game`: The round state and the "pick another player" rule
//! - `night`: Role resolvers and the fixed night order
//! - `report`: End-of-round status
//!
//! ## Example
//!
//! ```
//! use one_night::core::GameRng;
//! use one_night::game::Game;
//! use one_night::report::RoundReport;
//!
//! let mut rng = GameRng::new(42);
//! let mut game = Game::standard(3, &mut rng).unwrap();
//! game.play(&mut rng).unwrap();
//!
//! let report = RoundReport::from_game(&game).with_seed(42);
//! assert_eq!(report.seats.len(), 3);
//! ```

pub mod core;
pub mod cards;
pub mod knowledge;
pub mod game;
pub mod night;
pub mod report;

// Re-export commonly used types
pub use crate::core::{
    Seat, Position, Level,
    RandomSource, GameRng, ScriptedRng,
    RoundConfig, MIDDLE_SIZE, STANDARD_DECK,
    RoundError, SetupError,
};

pub use crate::cards::{Deal, Deck, Role};

pub use crate::knowledge::{Belief, Knowledge, Observed};

pub use crate::game::{pick_other_seat, Game, Player};

pub use crate::night::{
    NightEvent, NightOrder, NightStep, Resolver,
    WerewolfResolver, SeerResolver, RobberResolver, TroublemakerResolver,
};

pub use crate::report::{RoundReport, SeatReport};
