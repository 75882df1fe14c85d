//! Game state: players, the shared deck, and the current round.
//!
//! ## Player
//!
//! Seat-stable: created once, mutated in place, never removed. A player's
//! hand is replaced each round; their revolver lives for the whole game;
//! elimination is a one-way flag.
//!
//! ## RoundState
//!
//! Recreated every round, seeded with the starting seat decided by the
//! previous round's accusation (random for round 1).
//!
//! ## GameState
//!
//! Owns the seat arena, the shared deck, the round, the RNG and the
//! action history.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{Action, ActionRecord};
use super::player::{PlayerId, PlayerKind, PlayerMap};
use super::rng::GameRng;
use crate::cards::{CardDeck, Card, Chamber, Revolver};

/// Cards placed face down by one play.
pub type PlayedCards = SmallVec<[Card; 3]>;

/// One seat at the table.
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    kind: PlayerKind,
    hand: Vec<Card>,
    eliminated: bool,
    revolver: Revolver,
}

impl Player {
    /// Seat a player with their own revolver and an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: PlayerKind, revolver: Revolver) -> Self {
        Self {
            name: name.into(),
            kind,
            hand: Vec::new(),
            eliminated: false,
            revolver,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.hand.is_empty()
    }

    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }

    #[must_use]
    pub fn revolver(&self) -> &Revolver {
        &self.revolver
    }

    /// Replace the hand wholesale.
    pub fn set_hand(&mut self, hand: Vec<Card>) {
        self.hand = hand;
    }

    /// Remove the cards at `indices` and return them in ascending
    /// position order.
    ///
    /// Indices must already be validated as distinct and in range.
    pub fn take_cards(&mut self, indices: &[usize]) -> PlayedCards {
        let mut sorted: SmallVec<[usize; 3]> = SmallVec::from_slice(indices);
        sorted.sort_unstable();

        let mut taken: PlayedCards = sorted.iter().rev().map(|&i| self.hand.remove(i)).collect();
        taken.reverse();
        taken
    }

    /// Pull one chamber of this player's revolver. A lethal chamber
    /// eliminates the player.
    pub fn pull_trigger(&mut self) -> Option<Chamber> {
        let chamber = self.revolver.draw();
        if chamber.is_some_and(Chamber::is_lethal) {
            self.eliminated = true;
            self.hand.clear();
        }
        chamber
    }
}

/// The most recent face-down play of the round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastPlay {
    pub player: PlayerId,
    pub cards: PlayedCards,
}

/// Per-round progression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Seat whose turn it is.
    pub current: PlayerId,

    /// Seat that opened the round.
    pub starting: PlayerId,

    /// Previous play, overwritten by every new play.
    pub last_play: Option<LastPlay>,

    /// Actions applied this round.
    pub sequence: u32,
}

impl RoundState {
    /// Fresh round opened by `starting`.
    #[must_use]
    pub fn new(starting: PlayerId) -> Self {
        Self {
            current: starting,
            starting,
            last_play: None,
            sequence: 0,
        }
    }

    /// Seat that made the previous play, if any.
    #[must_use]
    pub fn last_player(&self) -> Option<PlayerId> {
        self.last_play.as_ref().map(|play| play.player)
    }

    /// `player` may accuse iff a play exists and it isn't theirs.
    #[must_use]
    pub fn can_accuse(&self, player: PlayerId) -> bool {
        self.last_player().is_some_and(|last| last != player)
    }
}

/// Full game state.
pub struct GameState {
    players: PlayerMap<Player>,

    /// Shared deck, rebuilt every round.
    pub deck: CardDeck,

    /// Current round.
    pub round: RoundState,

    /// Round number (0 before the first deal).
    pub round_number: u32,

    /// Seat that will open the next round. Random for round 1, then
    /// decided by each round's accusation.
    pub next_starter: PlayerId,

    /// Deterministic RNG shared by everything in this game.
    pub rng: GameRng,

    history: Vector<ActionRecord>,
}

impl GameState {
    /// Create a game with `player_count` computer seats named
    /// "Player 1".."Player N".
    ///
    /// Revolvers are loaded, the deck built, and the opening seat chosen
    /// uniformly, all from one RNG seeded with `seed`.
    #[must_use]
    pub fn new(player_count: usize, seed: u64) -> Self {
        Self::with_kinds(player_count, GameRng::new(seed), |_| PlayerKind::Computer)
    }

    /// Create a game choosing each seat's kind.
    #[must_use]
    pub fn with_kinds(
        player_count: usize,
        mut rng: GameRng,
        kind_of: impl Fn(PlayerId) -> PlayerKind,
    ) -> Self {
        let players = PlayerMap::new(player_count, |id| {
            Player::new(id.to_string(), kind_of(id), Revolver::new(&mut rng))
        });
        let starting = PlayerId::new(rng.gen_range_usize(0..player_count) as u8);
        Self::from_players(players, rng, starting)
    }

    /// Assemble a game from prepared seats.
    #[must_use]
    pub fn from_players(players: PlayerMap<Player>, mut rng: GameRng, starting: PlayerId) -> Self {
        let deck = CardDeck::new(&mut rng);
        Self {
            players,
            deck,
            round: RoundState::new(starting),
            round_number: 0,
            next_starter: starting,
            rng,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut PlayerMap<Player> {
        &mut self.players
    }

    /// Seats still in the game.
    pub fn alive(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players
            .iter()
            .filter(|(_, p)| !p.is_eliminated())
            .map(|(id, _)| id)
    }

    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.alive().count()
    }

    /// Surviving seats that still hold cards.
    #[must_use]
    pub fn card_holders(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|(_, p)| !p.is_eliminated() && p.has_cards())
            .map(|(id, _)| id)
            .collect()
    }

    #[must_use]
    pub fn all_but_one_eliminated(&self) -> bool {
        self.alive_count() <= 1
    }

    /// The sole survivor, if exactly one remains.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        let mut alive = self.alive();
        match (alive.next(), alive.next()) {
            (Some(only), None) => Some(only),
            _ => None,
        }
    }

    /// First surviving seat after `from`, scanning clockwise and
    /// reaching `from` itself last. `None` if every seat is eliminated.
    #[must_use]
    pub fn next_active(&self, from: PlayerId) -> Option<PlayerId> {
        let n = self.player_count();
        (1..=n)
            .map(|offset| PlayerId::new(((from.index() + offset) % n) as u8))
            .find(|&id| !self.players[id].is_eliminated())
    }

    /// Append an action to the history.
    pub fn record(&mut self, player: PlayerId, action: Action, forced: bool) {
        let mut record = ActionRecord::new(player, action, self.round_number, self.round.sequence);
        if forced {
            record = record.forced();
        }
        self.round.sequence += 1;
        self.history.push_back(record);
    }

    /// Every action applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }
}
