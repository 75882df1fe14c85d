//! Decision providers: whoever chooses a seat's action.
//!
//! The engine only sees the `DecisionProvider` trait. Computer seats use
//! `RandomAgent`; a human I/O layer plugs in through `FnAgent`; tests and
//! replays use `ScriptedAgent`.

pub mod provider;
pub mod random;
pub mod scripted;

pub use provider::{DecisionProvider, FnAgent, Seats};
pub use random::RandomAgent;
pub use scripted::ScriptedAgent;
