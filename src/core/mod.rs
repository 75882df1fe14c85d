//! Core types: seats, RNG, configuration, actions, state.
//!
//! Everything here is rules-agnostic plumbing; the turn logic lives in
//! `rules`.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{PlayerId, PlayerKind, PlayerMap};
pub use rng::GameRng;
pub use config::{AiConfig, GameConfig};
pub use action::{Action, ActionRecord, HandIndices, TurnView};
pub use state::{GameState, LastPlay, PlayedCards, Player, RoundState};
