//! Turn legality.
//!
//! - `Accuse` is legal iff a play exists this round and it is not the
//!   acting player's own.
//! - `Play(k)` is legal iff `1 <= k <= min(3, hand size)` and the chosen
//!   positions are distinct and inside the hand.

use rustc_hash::FxHashSet;

use crate::core::config::MAX_CARDS_PER_PLAY;
use crate::core::{Action, TurnView};
use crate::error::InvalidActionError;

/// Largest legal play for a hand of `hand_size` cards.
#[must_use]
pub fn max_play_size(hand_size: usize) -> usize {
    hand_size.min(MAX_CARDS_PER_PLAY)
}

/// Legal play sizes for a hand of `hand_size` cards (empty for an empty hand).
#[must_use]
pub fn legal_play_sizes(hand_size: usize) -> std::ops::RangeInclusive<usize> {
    1..=max_play_size(hand_size)
}

/// Check an action against the turn it answers.
pub fn validate(view: &TurnView<'_>, action: &Action) -> Result<(), InvalidActionError> {
    match action {
        Action::Accuse => match view.last_player {
            None => Err(InvalidActionError::NothingToAccuse),
            Some(last) if last == view.player => Err(InvalidActionError::AccuseOwnPlay),
            Some(_) => Ok(()),
        },
        Action::Play(indices) => {
            let hand_size = view.hand_size();
            if !legal_play_sizes(hand_size).contains(&indices.len()) {
                return Err(InvalidActionError::PlayCount {
                    count: indices.len(),
                    max: max_play_size(hand_size),
                });
            }

            let mut seen = FxHashSet::default();
            for &index in indices {
                if index >= hand_size {
                    return Err(InvalidActionError::IndexOutOfRange { index, hand_size });
                }
                if !seen.insert(index) {
                    return Err(InvalidActionError::DuplicateIndex(index));
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::PlayerId;

    fn view(hand: &[Card], last_player: Option<u8>) -> TurnView<'_> {
        let player = PlayerId::new(0);
        let last_player = last_player.map(PlayerId::new);
        TurnView {
            player,
            hand,
            can_accuse: last_player.is_some_and(|p| p != player),
            last_player,
            last_play_size: usize::from(last_player.is_some()),
            round: 1,
            player_count: 3,
        }
    }

    const HAND: [Card; 5] = [Card::Liar, Card::Innocent, Card::Liar, Card::Liar, Card::Innocent];

    #[test]
    fn test_play_sizes() {
        assert_eq!(legal_play_sizes(5), 1..=3);
        assert_eq!(legal_play_sizes(2), 1..=2);
        assert!(legal_play_sizes(0).is_empty());
    }

    #[test]
    fn test_accuse_needs_a_play() {
        assert_eq!(
            validate(&view(&HAND, None), &Action::Accuse),
            Err(InvalidActionError::NothingToAccuse)
        );
    }

    #[test]
    fn test_cannot_accuse_self() {
        assert_eq!(
            validate(&view(&HAND, Some(0)), &Action::Accuse),
            Err(InvalidActionError::AccuseOwnPlay)
        );
        assert_eq!(validate(&view(&HAND, Some(2)), &Action::Accuse), Ok(()));
    }

    #[test]
    fn test_play_count_bounds() {
        let v = view(&HAND, None);
        assert_eq!(
            validate(&v, &Action::play(&[])),
            Err(InvalidActionError::PlayCount { count: 0, max: 3 })
        );
        assert_eq!(
            validate(&v, &Action::play(&[0, 1, 2, 3])),
            Err(InvalidActionError::PlayCount { count: 4, max: 3 })
        );
        assert_eq!(validate(&v, &Action::play(&[4, 0, 2])), Ok(()));

        let short = view(&HAND[..2], None);
        assert_eq!(
            validate(&short, &Action::play(&[0, 1, 1])),
            Err(InvalidActionError::PlayCount { count: 3, max: 2 })
        );
    }

    #[test]
    fn test_bad_indices() {
        let v = view(&HAND, None);
        assert_eq!(
            validate(&v, &Action::play(&[5])),
            Err(InvalidActionError::IndexOutOfRange { index: 5, hand_size: 5 })
        );
        assert_eq!(
            validate(&v, &Action::play(&[1, 1])),
            Err(InvalidActionError::DuplicateIndex(1))
        );
    }
}
