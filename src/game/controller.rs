//! The game loop.

use serde::{Deserialize, Serialize};

use crate::agents::Seats;
use crate::core::{GameState, PlayerId};
use crate::error::GameError;
use crate::events::{EventSink, GameEvent};
use crate::rules::{RoundEnd, RoundEngine};

/// Final result of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Sole survivor, or `None` if nobody survived.
    pub winner: Option<PlayerId>,

    /// Rounds played.
    pub rounds: u32,
}

/// Runs rounds until at most one player is left.
pub struct GameController {
    state: GameState,
    seats: Seats,
}

impl GameController {
    /// Take over a prepared game. Needs exactly one provider per seat.
    pub fn from_state(state: GameState, seats: Seats) -> Result<Self, GameError> {
        if seats.player_count() != state.player_count() {
            return Err(GameError::ProviderCountMismatch {
                expected: state.player_count(),
                actual: seats.player_count(),
            });
        }
        Ok(Self::assemble(state, seats))
    }

    pub(crate) fn assemble(state: GameState, seats: Seats) -> Self {
        Self { state, seats }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// True once at most one player survives.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.all_but_one_eliminated()
    }

    /// Play one round. `Ok(None)` if the game is already over.
    pub fn step_round(&mut self, sink: &mut dyn EventSink) -> Result<Option<RoundEnd>, GameError> {
        if self.is_over() {
            return Ok(None);
        }
        RoundEngine::run_round(&mut self.state, &mut self.seats, sink).map(Some)
    }

    /// Play rounds until the game ends and report the survivor.
    pub fn run(&mut self, sink: &mut dyn EventSink) -> Result<GameOutcome, GameError> {
        while self.step_round(sink)?.is_some() {}

        let winner = self.state.winner();
        match winner {
            Some(id) => log::info!("{} wins after {} rounds", self.state.player(id).name(), self.state.round_number),
            None => log::info!("all players eliminated, no winner"),
        }
        sink.emit(GameEvent::GameEnded { winner });

        Ok(GameOutcome {
            winner,
            rounds: self.state.round_number,
        })
    }
}
