//! Cards, the shared deck, and each player's revolver.
//!
//! - `Card`: Innocent or Liar
//! - `CardDeck`: shared 20-card deck, rebuilt every round
//! - `Revolver`: per-player elimination device, never reloaded

pub mod card;
pub mod deck;
pub mod revolver;

pub use card::{contains_liar, Card};
pub use deck::CardDeck;
pub use revolver::{Chamber, Revolver};
