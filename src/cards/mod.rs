//! Role cards and the dealer.

mod role;
mod deck;

pub use role::Role;
pub use deck::{Deal, Deck};
