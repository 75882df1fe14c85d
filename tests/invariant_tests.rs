//! Property tests for the deck and the revolver.

use liars_bar::cards::{Card, CardDeck, Chamber, Revolver};
use liars_bar::core::config::{DECK_SIZE, NUM_INNOCENTS, NUM_LIARS, REVOLVER_CHAMBERS};
use liars_bar::core::GameRng;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_reset_restores_composition(seed in any::<u64>(), drawn in 0usize..=25) {
        let mut rng = GameRng::new(seed);
        let mut deck = CardDeck::new(&mut rng);
        let taken = deck.draw(drawn);
        prop_assert_eq!(taken.len(), drawn.min(DECK_SIZE));
        prop_assert_eq!(deck.len(), DECK_SIZE - taken.len());

        deck.reset_and_shuffle(&mut rng);

        prop_assert_eq!(deck.len(), DECK_SIZE);
        prop_assert_eq!(deck.count(Card::Innocent), NUM_INNOCENTS);
        prop_assert_eq!(deck.count(Card::Liar), NUM_LIARS);
    }

    #[test]
    fn prop_draws_partition_the_deck(seed in any::<u64>(), sizes in prop::collection::vec(0usize..8, 1..8)) {
        let mut deck = CardDeck::new(&mut GameRng::new(seed));
        let full = deck.cards().to_vec();

        let mut seen = Vec::new();
        for n in sizes {
            seen.extend(deck.draw(n));
        }
        seen.extend(deck.cards().iter().copied());

        prop_assert_eq!(seen, full);
    }

    #[test]
    fn prop_revolver_has_one_lethal(seed in any::<u64>(), extra_pulls in 0usize..4) {
        let mut revolver = Revolver::new(&mut GameRng::new(seed));
        let mut pulls = Vec::new();
        for _ in 0..REVOLVER_CHAMBERS + extra_pulls {
            if let Some(chamber) = revolver.draw() {
                pulls.push(chamber);
            }
        }

        prop_assert_eq!(pulls.len(), REVOLVER_CHAMBERS);
        prop_assert_eq!(pulls.iter().filter(|&&c| c == Chamber::Lethal).count(), 1);
        prop_assert!(revolver.is_exhausted());
        prop_assert_eq!(revolver.draw(), None);
    }
}
