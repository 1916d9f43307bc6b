//! Per-player belief store.
//!
//! Maps each position to the most recent belief about it. Recording
//! again at a position replaces the old belief; no history is kept, so
//! the level tag is the only record of freshness.
//!
//! Backed by `im::OrdMap` so snapshots for reporting are cheap and
//! iteration is in position order.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use crate::core::Position;

use super::Belief;

/// One player's beliefs about every position they have observed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Knowledge {
    position_count: usize,
    beliefs: OrdMap<Position, Belief>,
}

impl Knowledge {
    /// Create an empty store for a round with `position_count` positions
    /// (seats plus middle slots).
    #[must_use]
    pub fn new(position_count: usize) -> Self {
        Self {
            position_count,
            beliefs: OrdMap::new(),
        }
    }

    /// Record a belief, returning the one it replaced.
    ///
    /// Panics if `position` is outside the round.
    pub fn record(&mut self, position: Position, belief: Belief) -> Option<Belief> {
        assert!(
            position.index() < self.position_count,
            "{} is outside a round with {} positions",
            position,
            self.position_count
        );
        self.beliefs.insert(position, belief)
    }

    /// Current belief about a position.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&Belief> {
        self.beliefs.get(&position)
    }

    /// Check if anything is believed about a position.
    #[must_use]
    pub fn knows(&self, position: Position) -> bool {
        self.beliefs.contains_key(&position)
    }

    /// Iterate over beliefs in position order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Belief)> {
        self.beliefs.iter().map(|(p, b)| (*p, b))
    }

    /// Number of positions with a belief.
    #[must_use]
    pub fn len(&self) -> usize {
        self.beliefs.len()
    }

    /// Check if nothing is believed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.beliefs.is_empty()
    }

    /// Number of positions in the round.
    #[must_use]
    pub fn position_count(&self) -> usize {
        self.position_count
    }
}
