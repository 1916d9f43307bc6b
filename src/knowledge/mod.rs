//! What each player believes about the final arrangement.
//!
//! ## Components
//!
//! - `Observed`: a seen card, or one of the sentinels `Moved` / `NotWerewolf`
//! - `Belief`: an observation stamped with the level it was made at
//! - `Knowledge`: one player's position → belief map
//!
//! Beliefs can be stale: a card seen at level 0 may have been swapped at
//! level 2. The level lets a reader tell which beliefs a later move could
//! have invalidated.

mod belief;
mod store;

pub use belief::{Belief, Observed};
pub use store::Knowledge;
