//! # liars-bar
//!
//! A turn-based bluffing game engine. Players hold Innocent and Liar
//! cards, play them face down, and accuse each other of lying. The loser
//! of an accusation pulls the trigger of their own six-chamber revolver,
//! which holds one lethal round. Last player standing wins.
//!
//! ## Design Principles
//!
//! 1. **Seat-stable**: players live in a fixed arena indexed by
//!    `PlayerId`. Elimination is a flag, never a removal.
//!
//! 2. **Deterministic**: one seeded `GameRng` per game drives every
//!    shuffle and every computer decision.
//!
//! 3. **Auditable round loop**: each iteration evaluates
//!    terminate → forced accusation → skip → act, in that order.
//!
//! ## Modules
//!
//! - `core`: seats, RNG, configuration, actions, state
//! - `cards`: cards, the shared deck, revolvers
//! - `rules`: legality, accusation resolution, the round engine
//! - `agents`: decision providers (computer, scripted, closure-backed)
//! - `events`: notifications for presentation layers
//! - `game`: builder and game controller
//!
//! ```
//! use liars_bar::events::EventLog;
//! use liars_bar::game::GameBuilder;
//!
//! let mut game = GameBuilder::new().player_count(4).seed(2024).build();
//! let mut log = EventLog::new();
//! let outcome = game.run(&mut log).unwrap();
//!
//! assert!(outcome.winner.is_some());
//! assert!(!log.is_empty());
//! ```

pub mod core;
pub mod cards;
pub mod rules;
pub mod agents;
pub mod events;
pub mod game;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerKind, PlayerMap,
    GameRng,
    GameConfig, AiConfig,
    Action, ActionRecord, TurnView,
    GameState, Player, RoundState, LastPlay,
};

pub use crate::cards::{Card, CardDeck, Chamber, Revolver};

pub use crate::rules::{AccusationOutcome, AccusationResolver, RoundEnd, RoundEngine, RoundStep};

pub use crate::agents::{DecisionProvider, FnAgent, RandomAgent, ScriptedAgent, Seats};

pub use crate::events::{EventLog, EventSink, GameEvent, NullSink};

pub use crate::game::{GameBuilder, GameController, GameOutcome};

pub use crate::error::{GameError, InvalidActionError};
