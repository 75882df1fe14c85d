//! Turn actions and the action history.
//!
//! On their turn a player either accuses the previous player or plays
//! 1 to 3 cards face down. A play names hand positions, not cards: the
//! player picks *which* cards, the engine moves them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::cards::Card;

/// Hand positions chosen for a play. Never more than three.
pub type HandIndices = SmallVec<[usize; 3]>;

/// A turn action.
///
/// ```
/// use liars_bar::core::Action;
///
/// let accuse = Action::Accuse;
/// let play = Action::play(&[0, 3]);
/// assert_eq!(play.card_count(), 2);
/// assert_eq!(accuse.card_count(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Challenge the previous play.
    Accuse,
    /// Place the cards at these hand positions face down.
    Play(HandIndices),
}

impl Action {
    /// Create a play action from hand positions.
    #[must_use]
    pub fn play(indices: &[usize]) -> Self {
        Action::Play(SmallVec::from_slice(indices))
    }

    /// Number of cards this action would place.
    #[must_use]
    pub fn card_count(&self) -> usize {
        match self {
            Action::Accuse => 0,
            Action::Play(indices) => indices.len(),
        }
    }

    #[must_use]
    pub fn is_accusation(&self) -> bool {
        matches!(self, Action::Accuse)
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Round number when the action was taken (starts at 1).
    pub round: u32,

    /// Sequence number within the round.
    pub sequence: u32,

    /// True for accusations the engine compelled.
    pub forced: bool,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, round: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            round,
            sequence,
            forced: false,
        }
    }

    /// Mark this record as a forced accusation.
    #[must_use]
    pub fn forced(mut self) -> Self {
        self.forced = true;
        self
    }
}

/// What a decision provider sees when asked to act.
#[derive(Clone, Copy, Debug)]
pub struct TurnView<'a> {
    /// Seat being asked.
    pub player: PlayerId,

    /// The acting player's own hand. Only this seat may see it.
    pub hand: &'a [Card],

    /// Whether `Action::Accuse` is legal right now.
    pub can_accuse: bool,

    /// Who made the previous play this round, if anyone.
    pub last_player: Option<PlayerId>,

    /// How many cards the previous play contained.
    pub last_play_size: usize,

    /// Current round number.
    pub round: u32,

    /// Seats at the table, eliminated ones included.
    pub player_count: usize,
}

impl TurnView<'_> {
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Largest legal play size for this turn.
    #[must_use]
    pub fn max_play(&self) -> usize {
        crate::rules::legality::max_play_size(self.hand.len())
    }
}
