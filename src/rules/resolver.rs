//! Accusation resolution.
//!
//! The previous play is revealed. If it holds at least one Liar the
//! accused pulls their revolver; otherwise the accuser does. An empty
//! reveal (nothing was ever played) counts as a false accusation.
//!
//! Whoever pulled opens the next round, unless that pull eliminated them,
//! in which case the next surviving seat after them does.

use serde::{Deserialize, Serialize};

use crate::cards::{contains_liar, Chamber};
use crate::core::{GameState, PlayerId};

/// What an accusation did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccusationOutcome {
    pub accuser: PlayerId,
    pub accused: PlayerId,

    /// At least one Liar card was revealed.
    pub liar_found: bool,

    /// Seat that pulled their revolver.
    pub drawn_by: PlayerId,

    /// The chamber pulled; `None` only for an exhausted revolver.
    pub chamber: Option<Chamber>,

    /// Seat eliminated by the pull, if any.
    pub eliminated: Option<PlayerId>,

    /// Seat that opens the next round.
    pub next_starter: PlayerId,
}

/// Resolves accusations against the current round's last play.
pub struct AccusationResolver;

impl AccusationResolver {
    /// Reveal `state.round.last_play` and apply the consequence.
    ///
    /// Only the revolver of `drawn_by` is touched; the round state is
    /// left alone. The caller carries `next_starter` into the next round.
    pub fn resolve(state: &mut GameState, accuser: PlayerId, accused: PlayerId) -> AccusationOutcome {
        let liar_found = state
            .round
            .last_play
            .as_ref()
            .is_some_and(|play| contains_liar(&play.cards));

        let drawn_by = if liar_found { accused } else { accuser };
        let chamber = state.player_mut(drawn_by).pull_trigger();

        debug_assert!(chamber.is_some(), "{drawn_by} pulled an exhausted revolver");
        if chamber.is_none() {
            log::error!("{drawn_by} pulled an exhausted revolver; treating it as blank");
        }

        let eliminated = state.player(drawn_by).is_eliminated().then_some(drawn_by);
        let next_starter = match eliminated {
            Some(out) => state.next_active(out).unwrap_or(out),
            None => drawn_by,
        };

        AccusationOutcome {
            accuser,
            accused,
            liar_found,
            drawn_by,
            chamber,
            eliminated,
            next_starter,
        }
    }
}
