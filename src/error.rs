//! Error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::PlayerId;

/// A decision provider asked for something the rules do not allow.
///
/// Raised before any state is touched.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum InvalidActionError {
    #[error("no play to accuse")]
    NothingToAccuse,
    #[error("can't accuse your own play")]
    AccuseOwnPlay,
    #[error("must play between 1 and {max} cards, not {count}")]
    PlayCount { count: usize, max: usize },
    #[error("card {index} is out of range for a hand of {hand_size}")]
    IndexOutOfRange { index: usize, hand_size: usize },
    #[error("card {0} chosen more than once")]
    DuplicateIndex(usize),
}

/// Errors that stop a round or a game.
#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    #[error("{player} made an invalid move: {source}")]
    InvalidAction {
        player: PlayerId,
        #[source]
        source: InvalidActionError,
    },
    #[error("expected {expected} decision providers, got {actual}")]
    ProviderCountMismatch { expected: usize, actual: usize },
    #[error("round {round} can't progress: no surviving player holds cards")]
    RoundStalled { round: u32 },
}
