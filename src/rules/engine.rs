//! Round engine: dealing, turn order, forced accusations, turn actions.
//!
//! A round is a loop. Each iteration evaluates one ordered priority list:
//!
//! 1. **Terminate** if at most one player survives.
//! 2. **Forced accusation** if exactly one survivor still holds cards, a
//!    play exists, and that survivor did not make it.
//! 3. **Skip** the current seat if it is eliminated or empty-handed.
//! 4. **Act**: ask the seat's decision provider for `Accuse` or `Play`.
//!
//! Any accusation, voluntary or forced, resolves and ends the round.

use crate::agents::{DecisionProvider, Seats};
use crate::core::config::STARTING_HAND_SIZE;
use crate::core::{Action, GameState, LastPlay, PlayerId, RoundState, TurnView};
use crate::error::{GameError, InvalidActionError};
use crate::events::{EventSink, GameEvent};

use super::legality;
use super::resolver::{AccusationOutcome, AccusationResolver};

/// What the round loop does next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStep {
    /// At most one player survives.
    Terminate,
    /// `accuser` must accuse `accused` immediately.
    ForcedAccusation { accuser: PlayerId, accused: PlayerId },
    /// Pass over this seat without an action.
    Skip(PlayerId),
    /// This seat takes a turn.
    Act(PlayerId),
}

/// How a round finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundEnd {
    /// An accusation was resolved.
    Accusation(AccusationOutcome),
    /// Only one player was left when a turn came up.
    LastPlayerStanding,
    /// No seat survives.
    Aborted,
}

impl RoundEnd {
    #[must_use]
    pub fn accusation(&self) -> Option<&AccusationOutcome> {
        match self {
            RoundEnd::Accusation(outcome) => Some(outcome),
            _ => None,
        }
    }
}

/// Drives rounds over a `GameState`.
pub struct RoundEngine;

impl RoundEngine {
    /// Deal a fresh round and play it to the end.
    pub fn run_round(
        state: &mut GameState,
        seats: &mut Seats,
        sink: &mut dyn EventSink,
    ) -> Result<RoundEnd, GameError> {
        Self::check_seats(state, seats)?;
        Self::begin_round(state, sink);
        Self::play_out(state, seats, sink)
    }

    /// Rebuild and reshuffle the deck, deal every survivor a new hand,
    /// and open a new round from `state.next_starter`.
    pub fn begin_round(state: &mut GameState, sink: &mut dyn EventSink) {
        state.round_number += 1;
        state.deck.reset_and_shuffle(&mut state.rng);

        let seats: Vec<PlayerId> = state.players().player_ids().collect();
        for id in seats {
            if state.player(id).is_eliminated() {
                state.player_mut(id).set_hand(Vec::new());
                continue;
            }
            let hand = state.deck.draw(STARTING_HAND_SIZE);
            let count = hand.len();
            state.player_mut(id).set_hand(hand);
            log::debug!("dealt {count} cards to {id}");
            sink.emit(GameEvent::CardsDealt { player: id, count });
        }

        state.round = RoundState::new(state.next_starter);
        log::info!("round {} starts with {}", state.round_number, state.next_starter);
        sink.emit(GameEvent::RoundStarted {
            round: state.round_number,
            starting_player: state.next_starter,
        });
    }

    /// Decide what the round does next. Pure: reads the state only.
    #[must_use]
    pub fn next_step(state: &GameState) -> RoundStep {
        if state.all_but_one_eliminated() {
            return RoundStep::Terminate;
        }

        if let (Some(last), [sole]) = (state.round.last_player(), state.card_holders().as_slice()) {
            if *sole != last {
                return RoundStep::ForcedAccusation {
                    accuser: *sole,
                    accused: last,
                };
            }
        }

        let current = state.round.current;
        let player = state.player(current);
        if player.is_eliminated() || !player.has_cards() {
            return RoundStep::Skip(current);
        }

        RoundStep::Act(current)
    }

    /// Run the current round's loop until it ends.
    pub fn play_out(
        state: &mut GameState,
        seats: &mut Seats,
        sink: &mut dyn EventSink,
    ) -> Result<RoundEnd, GameError> {
        Self::check_seats(state, seats)?;

        let mut consecutive_skips = 0;
        let end = loop {
            match Self::next_step(state) {
                RoundStep::Terminate if state.alive_count() == 0 => {
                    log::warn!("round {} aborted: no survivors", state.round_number);
                    break RoundEnd::Aborted;
                }
                RoundStep::Terminate => break RoundEnd::LastPlayerStanding,
                RoundStep::ForcedAccusation { accuser, accused } => {
                    log::debug!("{accuser} is the last with cards and must accuse {accused}");
                    break RoundEnd::Accusation(Self::accuse(state, accuser, accused, true, sink));
                }
                RoundStep::Skip(id) => {
                    consecutive_skips += 1;
                    if consecutive_skips > state.player_count() {
                        log::warn!("round {} has no playable seat", state.round_number);
                        return Err(GameError::RoundStalled {
                            round: state.round_number,
                        });
                    }
                    if !state.player(id).is_eliminated() {
                        log::debug!("{id} has no cards, skipping");
                        sink.emit(GameEvent::TurnSkipped { player: id });
                    }
                    match state.next_active(id) {
                        Some(next) => state.round.current = next,
                        None => break RoundEnd::Aborted,
                    }
                }
                RoundStep::Act(id) => {
                    consecutive_skips = 0;
                    if let Some(outcome) = Self::take_turn(state, id, &mut **seats.get_mut(id), sink)? {
                        break RoundEnd::Accusation(outcome);
                    }
                }
            }
        };

        log::info!("round {} over, {} opens next", state.round_number, state.next_starter);
        sink.emit(GameEvent::RoundEnded {
            round: state.round_number,
            next_starter: state.next_starter,
        });
        Ok(end)
    }

    /// Ask `player` for an action and apply it. Returns the outcome if
    /// the turn was an accusation.
    fn take_turn(
        state: &mut GameState,
        player: PlayerId,
        provider: &mut dyn DecisionProvider,
        sink: &mut dyn EventSink,
    ) -> Result<Option<AccusationOutcome>, GameError> {
        let hand = state.player(player).hand().to_vec();
        let view = TurnView {
            player,
            hand: &hand,
            can_accuse: state.round.can_accuse(player),
            last_player: state.round.last_player(),
            last_play_size: state.round.last_play.as_ref().map_or(0, |play| play.cards.len()),
            round: state.round_number,
            player_count: state.player_count(),
        };

        let action = loop {
            let action = provider.decide(&view, &mut state.rng);
            match legality::validate(&view, &action) {
                Ok(()) => break action,
                Err(error) => {
                    log::warn!("{player} chose {action:?}: {error}");
                    sink.emit(GameEvent::ActionRejected {
                        player,
                        error: error.clone(),
                    });
                    if !provider.on_rejected(&error) {
                        return Err(GameError::InvalidAction { player, source: error });
                    }
                }
            }
        };

        match action {
            Action::Accuse => {
                let Some(accused) = view.last_player else {
                    return Err(GameError::InvalidAction {
                        player,
                        source: InvalidActionError::NothingToAccuse,
                    });
                };
                Ok(Some(Self::accuse(state, player, accused, false, sink)))
            }
            Action::Play(indices) => {
                let cards = state.player_mut(player).take_cards(&indices);
                let count = cards.len();
                state.record(player, Action::Play(indices), false);
                state.round.last_play = Some(LastPlay { player, cards });
                state.round.current = state.next_active(player).unwrap_or(player);

                log::debug!("{player} plays {count} card(s) face down");
                sink.emit(GameEvent::CardsPlayed { player, count });
                Ok(None)
            }
        }
    }

    /// Record, resolve and report an accusation; carry the next starter.
    fn accuse(
        state: &mut GameState,
        accuser: PlayerId,
        accused: PlayerId,
        forced: bool,
        sink: &mut dyn EventSink,
    ) -> AccusationOutcome {
        state.record(accuser, Action::Accuse, forced);
        log::debug!("{accuser} calls {accused} a liar");
        sink.emit(GameEvent::AccusationMade {
            accuser,
            accused,
            forced,
        });

        let outcome = AccusationResolver::resolve(state, accuser, accused);
        log::debug!(
            "liar found: {}, {} pulled {:?}",
            outcome.liar_found,
            outcome.drawn_by,
            outcome.chamber
        );
        sink.emit(GameEvent::AccusationResolved {
            liar_found: outcome.liar_found,
            eliminated: outcome.eliminated,
            drawn_by: outcome.drawn_by,
        });
        if let Some(out) = outcome.eliminated {
            log::info!("{out} is eliminated");
            sink.emit(GameEvent::PlayerEliminated { player: out });
        }

        state.next_starter = outcome.next_starter;
        outcome
    }

    fn check_seats(state: &GameState, seats: &Seats) -> Result<(), GameError> {
        if seats.player_count() == state.player_count() {
            Ok(())
        } else {
            Err(GameError::ProviderCountMismatch {
                expected: state.player_count(),
                actual: seats.player_count(),
            })
        }
    }
}
