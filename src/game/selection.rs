//! The "pick another player" rule.
//!
//! Draw `r` from the seats that remain after exclusion, then walk the
//! exclusions in ascending order, bumping `r` past each one it reaches.
//! This maps the reduced range back onto real seats while keeping every
//! remaining seat equally likely.
//!
//! The walk is only correct in ascending order, so exclusions are sorted
//! (and deduplicated) here rather than trusted from the caller.
//!
//! ```
//! use one_night::core::{ScriptedRng, Seat};
//! use one_night::game::pick_other_seat;
//!
//! // Seats 0..4 without 1 and 2 leave {0, 3}; draw 1 is the second of them.
//! let mut rng = ScriptedRng::new([1]);
//! let seat = pick_other_seat(4, &[Seat::new(2), Seat::new(1)], &mut rng);
//! assert_eq!(seat, Seat::new(3));
//! ```

use smallvec::SmallVec;

use crate::core::{RandomSource, Seat};

/// Pick a uniformly random seat in `0..seat_count` not in `exclude`.
///
/// Panics if an exclusion is not a seat or no seat remains.
pub fn pick_other_seat(seat_count: usize, exclude: &[Seat], rng: &mut dyn RandomSource) -> Seat {
    let mut excluded: SmallVec<[Seat; 4]> = SmallVec::from_slice(exclude);
    excluded.sort_unstable();
    excluded.dedup();

    if let Some(last) = excluded.last() {
        assert!(
            last.index() < seat_count,
            "Cannot exclude {} from {} seats",
            last,
            seat_count
        );
    }
    assert!(
        excluded.len() < seat_count,
        "No seat left after excluding {} of {}",
        excluded.len(),
        seat_count
    );

    let mut r = rng.below(seat_count - excluded.len());
    for seat in &excluded {
        if r >= seat.index() {
            r += 1;
        }
    }
    Seat::new(r as u8)
}
