//! Round state: deck, middle pile, players and the level counter.
//!
//! ## Ownership
//!
//! `Game` owns every card. Seats hold one card each, the middle holds the
//! rest, and night actions only ever swap cards between seats, so the
//! multiset of cards in play never changes.
//!
//! ## Knowledge
//!
//! Beliefs are recorded through `record_belief`, which stamps them with the
//! current level. It is crate-private: only a role's own resolver writes
//! into that role's player.

use im::Vector;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::cards::{Deck, Role};
use crate::core::{Level, Position, RandomSource, RoundConfig, Seat, SetupError};
use crate::knowledge::{Belief, Observed};
use crate::night::NightEvent;

use super::{pick_other_seat, Player};

/// Seats that started with a role, in seat order.
pub type StartSeats = SmallVec<[Seat; 2]>;

/// A single round.
#[derive(Clone, Debug)]
pub struct Game {
    config: RoundConfig,
    deck: Deck,
    middle: Vec<Role>,
    players: Vec<Player>,
    level: Level,
    start_seats: FxHashMap<Role, StartSeats>,
    history: Vector<NightEvent>,
    played: bool,
}

impl Game {
    /// Shuffle and deal a new round.
    ///
    /// The configuration is validated before any card is dealt.
    pub fn new(config: RoundConfig, rng: &mut dyn RandomSource) -> Result<Self, SetupError> {
        let mut deck = Deck::new(&config)?;
        deck.shuffle(rng);
        let deal = deck.deal(config.player_count);

        let position_count = config.position_count();
        let players: Vec<Player> = Seat::all(config.player_count)
            .zip(deal.hands)
            .map(|(seat, card)| Player::new(seat, card, position_count))
            .collect();

        let mut start_seats: FxHashMap<Role, StartSeats> = FxHashMap::default();
        for player in &players {
            start_seats.entry(player.start()).or_default().push(player.seat());
        }

        log::info!("dealt {:?}, middle {:?}", deck.cards(), deal.middle);

        Ok(Self {
            config,
            deck,
            middle: deal.middle,
            players,
            level: Level::ZERO,
            start_seats,
            history: Vector::new(),
            played: false,
        })
    }

    /// Deal a round with the standard deck.
    pub fn standard(player_count: usize, rng: &mut dyn RandomSource) -> Result<Self, SetupError> {
        Self::new(RoundConfig::standard(player_count)?, rng)
    }

    // === Read access ===

    /// The configuration this round was dealt from.
    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Number of belief positions (seats plus middle slots).
    #[must_use]
    pub fn position_count(&self) -> usize {
        self.players.len() + self.middle.len()
    }

    /// All players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The player at a seat.
    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// The deck in shuffled order.
    #[must_use]
    pub fn deck(&self) -> &[Role] {
        self.deck.cards()
    }

    /// The middle pile in deal order.
    #[must_use]
    pub fn middle(&self) -> &[Role] {
        &self.middle
    }

    /// Current level.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// What each role did, in resolution order.
    #[must_use]
    pub fn history(&self) -> &Vector<NightEvent> {
        &self.history
    }

    /// Check if the night has been played.
    #[must_use]
    pub fn is_played(&self) -> bool {
        self.played
    }

    /// Seats whose dealt card was `role`, in seat order.
    #[must_use]
    pub fn seats_starting_as(&self, role: Role) -> &[Seat] {
        self.start_seats
            .get(&role)
            .map(|seats| seats.as_slice())
            .unwrap_or(&[])
    }

    /// The card at a position right now, or `None` past the middle pile.
    #[must_use]
    pub fn card_at(&self, position: Position) -> Option<Role> {
        match position.as_seat(self.player_count()) {
            Some(seat) => self.players.get(seat.index()).map(Player::current),
            None => position
                .as_middle_index(self.player_count())
                .and_then(|i| self.middle.get(i).copied()),
        }
    }

    // === Mutation (night actions only) ===

    /// Pick a random seat other than `exclude`.
    pub(crate) fn pick_other_player(&self, exclude: &[Seat], rng: &mut dyn RandomSource) -> Seat {
        pick_other_seat(self.player_count(), exclude, rng)
    }

    /// Record what `owner` now believes is at `position`, at the current level.
    pub(crate) fn record_belief(&mut self, owner: Seat, position: Position, observed: Observed) {
        let belief = Belief::new(observed, self.level);
        log::trace!("{} believes {} holds {}", owner, position, belief);
        self.players[owner.index()].knowledge_mut().record(position, belief);
    }

    /// Exchange the cards held by two seats.
    pub(crate) fn swap_cards(&mut self, a: Seat, b: Seat) {
        let card_a = self.players[a.index()].current();
        let card_b = self.players[b.index()].current();
        self.players[a.index()].set_current(card_b);
        self.players[b.index()].set_current(card_a);
    }

    pub(crate) fn advance_level(&mut self) {
        self.level = self.level.next();
        log::trace!("advanced to {}", self.level);
    }

    pub(crate) fn push_event(&mut self, event: NightEvent) {
        self.history.push_back(event);
    }

    pub(crate) fn mark_played(&mut self) {
        self.played = true;
    }
}
