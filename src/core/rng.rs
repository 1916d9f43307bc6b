//! Random sources for dealing and night actions.
//!
//! ## Key Features
//!
//! - **Explicit**: The source is passed as `&mut dyn RandomSource` into
//!   dealing and every resolver. There is no global generator.
//! - **Deterministic**: `GameRng` with the same seed produces the same round.
//! - **Scriptable**: `ScriptedRng` replays a fixed list of draws so a round
//!   can be computed by hand.
//!
//! ```
//! use one_night::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! for _ in 0..10 {
//!     assert_eq!(a.below(6), b.below(6));
//! }
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform draws.
///
/// Everything random in a round reduces to `below`, so a source fully
/// determines the shuffle, every selection and every coin flip.
pub trait RandomSource {
    /// Draw uniformly from `0..bound`. `bound` is always at least 1.
    fn below(&mut self, bound: usize) -> usize;

    /// Unbiased coin. `true` is heads.
    fn coin_flip(&mut self) -> bool {
        self.below(2) == 0
    }
}

/// Seeded RNG for real rounds.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a fresh OS-provided seed.
    ///
    /// The seed is kept so the round can be replayed with `GameRng::new`.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn below(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "Cannot draw from an empty range");
        self.inner.gen_range(0..bound)
    }
}

/// Replays a fixed sequence of draws.
///
/// Used to build rounds with known outcomes. A draw that is not below
/// the requested bound, or running out of draws, means the script does
/// not match the round and panics.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    draws: VecDeque<usize>,
}

impl ScriptedRng {
    /// Create a source that returns `draws` in order.
    pub fn new(draws: impl IntoIterator<Item = usize>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    /// Number of draws not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRng {
    fn below(&mut self, bound: usize) -> usize {
        let draw = self
            .draws
            .pop_front()
            .unwrap_or_else(|| panic!("Scripted draws exhausted (bound {})", bound));
        assert!(draw < bound, "Scripted draw {} is not below {}", draw, bound);
        draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.below(1000), rng2.below(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.below(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.below(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_below_stays_in_range() {
        let mut rng = GameRng::new(7);
        for bound in 1..10 {
            for _ in 0..50 {
                assert!(rng.below(bound) < bound);
            }
        }
    }

    #[test]
    fn test_seed_is_kept() {
        assert_eq!(GameRng::new(99).seed(), 99);

        let rng = GameRng::from_entropy();
        let mut replay = GameRng::new(rng.seed());
        let mut original = rng.clone();
        assert_eq!(original.below(1000), replay.below(1000));
    }

    #[test]
    fn test_coin_flip_sees_both_sides() {
        let mut rng = GameRng::new(3);
        let heads = (0..200).filter(|_| rng.coin_flip()).count();
        assert!(heads > 0 && heads < 200);
    }

    #[test]
    fn test_scripted_replays_in_order() {
        let mut rng = ScriptedRng::new([1, 0, 2]);
        assert_eq!(rng.remaining(), 3);

        assert!(!rng.coin_flip());
        assert!(rng.coin_flip());
        assert_eq!(rng.below(3), 2);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "Scripted draws exhausted")]
    fn test_scripted_exhausted() {
        let mut rng = ScriptedRng::new(Vec::new());
        rng.below(2);
    }

    #[test]
    #[should_panic(expected = "is not below")]
    fn test_scripted_out_of_bound() {
        let mut rng = ScriptedRng::new([3]);
        rng.below(3);
    }
}
