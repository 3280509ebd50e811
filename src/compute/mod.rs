//! Compute module - Problem model, social game and evolutionary search.

mod game;
mod vrp;

pub mod evolution;

pub use game::*;
pub use vrp::*;
