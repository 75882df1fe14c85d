//! The shared Liar deck.
//!
//! One deck serves the whole table. It is rebuilt and reshuffled at the
//! start of every round, then shrinks as hands are dealt.

use super::card::Card;
use crate::core::config::{NUM_INNOCENTS, NUM_LIARS};
use crate::core::GameRng;

/// A shuffled multiset of cards, drawn from the front.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardDeck {
    cards: Vec<Card>,
}

impl CardDeck {
    /// Build a full deck and shuffle it.
    #[must_use]
    pub fn new(rng: &mut GameRng) -> Self {
        let mut deck = Self { cards: Vec::new() };
        deck.reset_and_shuffle(rng);
        deck
    }

    /// Discard whatever remains, rebuild `NUM_INNOCENTS` Innocent and
    /// `NUM_LIARS` Liar cards, and shuffle uniformly.
    pub fn reset_and_shuffle(&mut self, rng: &mut GameRng) {
        self.cards.clear();
        self.cards.extend(std::iter::repeat(Card::Innocent).take(NUM_INNOCENTS));
        self.cards.extend(std::iter::repeat(Card::Liar).take(NUM_LIARS));
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the first `n` cards.
    ///
    /// If fewer than `n` remain, returns all of them. Never fails.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        let n = n.min(self.cards.len());
        self.cards.drain(..n).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Count remaining cards of one kind.
    #[must_use]
    pub fn count(&self, kind: Card) -> usize {
        self.cards.iter().filter(|&&c| c == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DECK_SIZE;

    #[test]
    fn test_new_deck_composition() {
        let mut rng = GameRng::new(42);
        let deck = CardDeck::new(&mut rng);

        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(deck.count(Card::Innocent), NUM_INNOCENTS);
        assert_eq!(deck.count(Card::Liar), NUM_LIARS);
    }

    #[test]
    fn test_draw_takes_from_front() {
        let mut rng = GameRng::new(1);
        let mut deck = CardDeck::new(&mut rng);
        let expected: Vec<Card> = deck.cards()[..5].to_vec();

        let drawn = deck.draw(5);

        assert_eq!(drawn, expected);
        assert_eq!(deck.len(), DECK_SIZE - 5);
    }

    #[test]
    fn test_partial_draw() {
        let mut rng = GameRng::new(2);
        let mut deck = CardDeck::new(&mut rng);
        deck.draw(18);

        let drawn = deck.draw(5);
        assert_eq!(drawn.len(), 2);
        assert!(deck.is_empty());
        assert!(deck.draw(3).is_empty());
    }

    #[test]
    fn test_reset_restores_composition() {
        let mut rng = GameRng::new(3);
        let mut deck = CardDeck::new(&mut rng);
        deck.draw(13);

        deck.reset_and_shuffle(&mut rng);

        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(deck.count(Card::Innocent), NUM_INNOCENTS);
        assert_eq!(deck.count(Card::Liar), NUM_LIARS);
    }

    #[test]
    fn test_same_seed_same_order() {
        let a = CardDeck::new(&mut GameRng::new(9));
        let b = CardDeck::new(&mut GameRng::new(9));
        assert_eq!(a, b);
    }
}
