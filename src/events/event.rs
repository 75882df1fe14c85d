//! Game events.
//!
//! The engine reports what happens through an `EventSink`. Nothing in the
//! rules depends on anyone listening; a text UI, a network bridge or a
//! test can subscribe.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::error::InvalidActionError;

/// Something that happened at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A round has been dealt and `starting_player` opens it.
    RoundStarted { round: u32, starting_player: PlayerId },

    /// `player` received `count` cards.
    CardsDealt { player: PlayerId, count: usize },

    /// `player` was passed over (no cards left).
    TurnSkipped { player: PlayerId },

    /// `player` placed `count` cards face down.
    CardsPlayed { player: PlayerId, count: usize },

    /// A decision provider returned an illegal action; nothing changed.
    ActionRejected { player: PlayerId, error: InvalidActionError },

    /// `accuser` called `accused` a liar. `forced` when the engine compelled it.
    AccusationMade {
        accuser: PlayerId,
        accused: PlayerId,
        forced: bool,
    },

    /// The play was revealed and `drawn_by` pulled their revolver.
    AccusationResolved {
        liar_found: bool,
        eliminated: Option<PlayerId>,
        drawn_by: PlayerId,
    },

    PlayerEliminated { player: PlayerId },

    /// Round over; `next_starter` opens the next one.
    RoundEnded { round: u32, next_starter: PlayerId },

    /// Game over. `None` if nobody survived.
    GameEnded { winner: Option<PlayerId> },
}

/// Receiver for game events.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}

/// Records events in order. Clones share structure, so snapshots are cheap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vector<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &Vector<GameEvent> {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    /// Number of recorded events matching `pred`.
    pub fn count(&self, pred: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }
}
