//! Error types for round setup and resolution.
//!
//! Only configuration problems and replaying a finished round are
//! reported as errors. Contract violations inside the engine (selecting
//! from an exhausted seat set, recording a belief about a position that
//! does not exist) panic instead.

/// A round configuration that cannot be dealt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// The standard deck only supports a fixed player count.
    #[error("the standard deck supports {supported} players, not {requested}")]
    UnsupportedPlayerCount {
        /// Requested player count.
        requested: usize,
        /// Player count the standard deck is built for.
        supported: usize,
    },

    /// Not enough seats for every role to pick its targets.
    #[error("at least {minimum} players are required, got {requested}")]
    TooFewPlayers {
        /// Requested player count.
        requested: usize,
        /// Smallest supported player count.
        minimum: usize,
    },

    /// More players than seats can be numbered.
    #[error("at most {maximum} players are supported, got {requested}")]
    TooManyPlayers {
        /// Requested player count.
        requested: usize,
        /// Largest supported player count.
        maximum: usize,
    },

    /// Deck does not cover one card per seat plus the middle pile.
    #[error("deck has {deck} cards, expected {expected} ({players} players + {middle} middle)")]
    DeckSize {
        /// Cards in the configured deck.
        deck: usize,
        /// Cards required.
        expected: usize,
        /// Configured player count.
        players: usize,
        /// Required middle pile size.
        middle: usize,
    },
}

/// A request the round cannot honor in its current stage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    /// The night has already been resolved for this round.
    #[error("the night has already been played for this round")]
    AlreadyPlayed,
}
