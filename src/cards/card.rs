//! Card kinds.

use serde::{Deserialize, Serialize};

/// A Liar's Bar card. Cards carry no identity beyond their kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    /// Never confirms a bluff.
    Innocent,
    /// Confirms a bluff if it is among the cards revealed by an accusation.
    Liar,
}

impl Card {
    #[must_use]
    pub const fn is_liar(self) -> bool {
        matches!(self, Card::Liar)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Innocent => write!(f, "I"),
            Card::Liar => write!(f, "L"),
        }
    }
}

/// True if any card in the slice is a Liar.
#[must_use]
pub fn contains_liar(cards: &[Card]) -> bool {
    cards.iter().any(|c| c.is_liar())
}
