//! The decision provider seam.

use crate::core::{Action, GameRng, PlayerMap, TurnView};
use crate::error::InvalidActionError;

/// Chooses actions for one seat.
///
/// Providers must answer with a legal action. If they do not, the engine
/// leaves the state untouched and calls `on_rejected`: returning `true`
/// asks the engine to request a new decision (re-prompt), `false` aborts
/// the round with `GameError::InvalidAction` (fail fast).
pub trait DecisionProvider {
    /// Pick an action for the turn described by `view`.
    ///
    /// `rng` is the game's shared RNG; providers that need randomness
    /// draw from it so seeded games replay exactly.
    fn decide(&mut self, view: &TurnView<'_>, rng: &mut GameRng) -> Action;

    /// Called after an illegal answer. Default: fail fast.
    fn on_rejected(&mut self, _error: &InvalidActionError) -> bool {
        false
    }
}

/// One provider per seat.
pub type Seats = PlayerMap<Box<dyn DecisionProvider>>;

/// Adapts a closure into a provider.
///
/// ```
/// use liars_bar::agents::{DecisionProvider, FnAgent};
/// use liars_bar::core::Action;
///
/// let always_first = FnAgent::new(|_view, _rng| Action::play(&[0])).reprompt();
/// let _boxed: Box<dyn DecisionProvider> = Box::new(always_first);
/// ```
pub struct FnAgent<F> {
    decide: F,
    reprompt: bool,
}

impl<F> FnAgent<F>
where
    F: FnMut(&TurnView<'_>, &mut GameRng) -> Action,
{
    pub fn new(decide: F) -> Self {
        Self {
            decide,
            reprompt: false,
        }
    }

    /// Ask again after an illegal answer instead of failing.
    #[must_use]
    pub fn reprompt(mut self) -> Self {
        self.reprompt = true;
        self
    }
}

impl<F> DecisionProvider for FnAgent<F>
where
    F: FnMut(&TurnView<'_>, &mut GameRng) -> Action,
{
    fn decide(&mut self, view: &TurnView<'_>, rng: &mut GameRng) -> Action {
        (self.decide)(view, rng)
    }

    fn on_rejected(&mut self, error: &InvalidActionError) -> bool {
        if self.reprompt {
            log::debug!("asking again after rejected action: {error}");
        }
        self.reprompt
    }
}
