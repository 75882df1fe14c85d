//! Game constants and configuration.
//!
//! The rules themselves are fixed (deck composition, revolver size, hand
//! size). What a caller may choose is the table: how many seats, which
//! seat is human, the seed, and how the computer opponents behave.

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Innocent cards in a freshly built deck.
pub const NUM_INNOCENTS: usize = 8;

/// Liar cards in a freshly built deck.
pub const NUM_LIARS: usize = 12;

/// Total deck size after a rebuild.
pub const DECK_SIZE: usize = NUM_INNOCENTS + NUM_LIARS;

/// Chambers in each player's revolver. Exactly one is lethal.
pub const REVOLVER_CHAMBERS: usize = 6;

/// Cards dealt to every surviving player at the start of a round.
pub const STARTING_HAND_SIZE: usize = 5;

/// Most cards a single play may contain.
pub const MAX_CARDS_PER_PLAY: usize = 3;

/// Chance a computer player accuses when accusing is legal.
pub const AI_ACCUSE_CHANCE: f64 = 0.3;

/// Recommended table sizes. Others are allowed with a warning.
pub const RECOMMENDED_PLAYERS: std::ops::RangeInclusive<usize> = 2..=4;

/// Behaviour of computer-controlled seats.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    /// Probability of accusing when an accusation is legal.
    pub accuse_chance: f64,

    /// Upper bound on cards played per turn (never above
    /// `MAX_CARDS_PER_PLAY`).
    pub max_cards_per_play: usize,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            accuse_chance: AI_ACCUSE_CHANCE,
            max_cards_per_play: MAX_CARDS_PER_PLAY,
        }
    }
}

impl AiConfig {
    /// Set the accusation probability (clamped to `[0, 1]`).
    #[must_use]
    pub fn with_accuse_chance(mut self, chance: f64) -> Self {
        self.accuse_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Set the per-turn card cap (clamped to `1..=MAX_CARDS_PER_PLAY`).
    #[must_use]
    pub fn with_max_cards_per_play(mut self, max: usize) -> Self {
        self.max_cards_per_play = max.clamp(1, MAX_CARDS_PER_PLAY);
        self
    }
}

/// Table configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats.
    pub player_count: usize,

    /// Seat driven by a human decision provider, if any.
    pub human_seat: Option<PlayerId>,

    /// RNG seed. `None` draws one from entropy at build time.
    pub seed: Option<u64>,

    /// Computer opponent behaviour.
    pub ai: AiConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            human_seat: None,
            seed: None,
            ai: AiConfig::default(),
        }
    }
}

impl GameConfig {
    /// Whether the seat count is within the recommended range.
    #[must_use]
    pub fn is_recommended_size(&self) -> bool {
        RECOMMENDED_PLAYERS.contains(&self.player_count)
    }
}
