//! Computer opponent.
//!
//! If an accusation is legal, accuse with probability `accuse_chance`.
//! Otherwise play a uniformly random number of cards
//! (1..=min(max_cards_per_play, hand size)) from uniformly sampled
//! positions. Hand contents are ignored: the computer bluffs blindly.

use crate::core::config::AiConfig;
use crate::core::{Action, GameRng, TurnView};

use super::provider::DecisionProvider;

#[derive(Clone, Debug, Default)]
pub struct RandomAgent {
    config: AiConfig,
}

impl RandomAgent {
    #[must_use]
    pub fn new(config: AiConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &AiConfig {
        &self.config
    }
}

impl DecisionProvider for RandomAgent {
    fn decide(&mut self, view: &TurnView<'_>, rng: &mut GameRng) -> Action {
        if view.can_accuse && rng.gen_bool(self.config.accuse_chance) {
            return Action::Accuse;
        }

        let max = view.max_play().min(self.config.max_cards_per_play).max(1);
        let count = rng.gen_range_usize(1..max + 1);
        Action::play(&rng.sample_indices(view.hand_size(), count))
    }
}
