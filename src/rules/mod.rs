//! Game rules: turn legality, accusation resolution, and the round loop.
//!
//! - `legality`: which actions a seat may take
//! - `resolver`: what an accusation does to the revolvers
//! - `engine`: the round state machine

pub mod legality;
pub mod resolver;
pub mod engine;

pub use engine::{RoundEnd, RoundEngine, RoundStep};
pub use resolver::{AccusationOutcome, AccusationResolver};
