//! Table setup.

use rustc_hash::FxHashMap;

use crate::agents::{DecisionProvider, RandomAgent, Seats};
use crate::core::{AiConfig, GameConfig, GameRng, GameState, PlayerId, PlayerKind, PlayerMap};

use super::controller::GameController;

/// Builder for a `GameController`.
///
/// Seats without an explicit provider are filled with `RandomAgent`s
/// using the configured `AiConfig`.
///
/// ```
/// use liars_bar::game::GameBuilder;
///
/// let mut game = GameBuilder::new().player_count(3).seed(42).build();
/// let outcome = game.run(&mut liars_bar::events::NullSink).unwrap();
/// assert!(outcome.winner.is_some());
/// ```
#[derive(Default)]
pub struct GameBuilder {
    config: GameConfig,
    providers: FxHashMap<PlayerId, Box<dyn DecisionProvider>>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: GameConfig) -> Self {
        Self {
            config,
            providers: FxHashMap::default(),
        }
    }

    /// Number of seats. Outside 2..=4 the game still runs, with a warning.
    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn ai(mut self, ai: AiConfig) -> Self {
        self.config.ai = ai;
        self
    }

    /// Seat a human-driven provider.
    pub fn human(mut self, seat: PlayerId, provider: impl DecisionProvider + 'static) -> Self {
        self.config.human_seat = Some(seat);
        self.providers.insert(seat, Box::new(provider));
        self
    }

    /// Seat any provider, replacing the default computer player.
    pub fn provider(mut self, seat: PlayerId, provider: impl DecisionProvider + 'static) -> Self {
        self.providers.insert(seat, Box::new(provider));
        self
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seat everyone, load revolvers, pick the opening seat.
    ///
    /// # Panics
    ///
    /// If `player_count` is zero.
    pub fn build(mut self) -> GameController {
        let config = self.config;
        if !config.is_recommended_size() {
            log::warn!(
                "Liar's Bar is meant for 2 to 4 players, got {}; proceeding anyway",
                config.player_count
            );
        }

        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        log::info!("new {}-player game, seed {}", config.player_count, rng.seed());

        let human_seat = config.human_seat;
        let state = GameState::with_kinds(config.player_count, rng, |id| {
            if Some(id) == human_seat {
                PlayerKind::Human
            } else {
                PlayerKind::Computer
            }
        });

        let seats: Seats = PlayerMap::new(config.player_count, |id| {
            self.providers
                .remove(&id)
                .unwrap_or_else(|| Box::new(RandomAgent::new(config.ai.clone())) as Box<dyn DecisionProvider>)
        });
        for seat in self.providers.keys() {
            log::warn!("ignoring provider for {seat}: table has {} seats", config.player_count);
        }

        GameController::assemble(state, seats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::ScriptedAgent;

    #[test]
    fn test_human_seat_kind() {
        let game = GameBuilder::new()
            .player_count(3)
            .seed(1)
            .human(PlayerId::new(1), ScriptedAgent::default())
            .build();

        let state = game.state();
        assert_eq!(state.player(PlayerId::new(1)).kind(), PlayerKind::Human);
        assert_eq!(state.player(PlayerId::new(0)).kind(), PlayerKind::Computer);
    }

    #[test]
    fn test_unusual_table_sizes_proceed() {
        for count in [1, 5, 6] {
            let game = GameBuilder::new().player_count(count).seed(3).build();
            assert_eq!(game.state().player_count(), count);
        }
    }

    #[test]
    fn test_seed_reproduces_setup() {
        let a = GameBuilder::new().seed(77).build();
        let b = GameBuilder::new().seed(77).build();
        assert_eq!(a.state().next_starter, b.state().next_starter);
        assert_eq!(a.state().rng.seed(), 77);
    }

    #[test]
    fn test_extra_providers_ignored() {
        let game = GameBuilder::new()
            .player_count(2)
            .seed(4)
            .provider(PlayerId::new(7), ScriptedAgent::default())
            .build();
        assert_eq!(game.state().player_count(), 2);
    }
}
