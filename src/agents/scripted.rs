//! Replays a fixed list of actions.

use std::collections::VecDeque;

use crate::core::{Action, GameRng, TurnView};
use crate::error::InvalidActionError;

use super::provider::DecisionProvider;

/// Answers each request with the next scripted action.
///
/// After a rejection it asks for another try while script remains. When
/// the script runs out it plays its first card.
#[derive(Clone, Debug, Default)]
pub struct ScriptedAgent {
    script: VecDeque<Action>,
}

impl ScriptedAgent {
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = Action>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Actions not yet used.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl DecisionProvider for ScriptedAgent {
    fn decide(&mut self, _view: &TurnView<'_>, _rng: &mut GameRng) -> Action {
        self.script.pop_front().unwrap_or_else(|| Action::play(&[0]))
    }

    fn on_rejected(&mut self, _error: &InvalidActionError) -> bool {
        !self.script.is_empty()
    }
}
