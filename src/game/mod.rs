//! Top-level game: table setup and the loop that runs rounds until one
//! player is left.

mod builder;
mod controller;

pub use builder::GameBuilder;
pub use controller::{GameController, GameOutcome};
