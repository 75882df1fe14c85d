//! Per-player elimination device.
//!
//! Each player owns one revolver for the whole game: six chambers, one
//! lethal, shuffled once at creation. Chambers are consumed one at a time
//! and are never refilled or reshuffled.

use serde::{Deserialize, Serialize};

use crate::core::config::REVOLVER_CHAMBERS;
use crate::core::GameRng;

/// Outcome of pulling one chamber.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chamber {
    Blank,
    Lethal,
}

impl Chamber {
    #[must_use]
    pub const fn is_lethal(self) -> bool {
        matches!(self, Chamber::Lethal)
    }
}

/// Six shuffled chambers with exactly one lethal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Revolver {
    chambers: Vec<Chamber>,
}

impl Revolver {
    /// Load one lethal and five blanks, then shuffle.
    #[must_use]
    pub fn new(rng: &mut GameRng) -> Self {
        let mut chambers = vec![Chamber::Blank; REVOLVER_CHAMBERS];
        chambers[0] = Chamber::Lethal;
        rng.shuffle(&mut chambers);
        Self { chambers }
    }

    /// Build a revolver with the lethal chamber at a known position
    /// (0 = first pull). Positions past the end are clamped to the last
    /// chamber.
    #[must_use]
    pub fn with_lethal_at(position: usize) -> Self {
        let mut chambers = vec![Chamber::Blank; REVOLVER_CHAMBERS];
        chambers[position.min(REVOLVER_CHAMBERS - 1)] = Chamber::Lethal;
        Self { chambers }
    }

    /// Pull the next chamber.
    ///
    /// Returns `None` once all six have been pulled; the revolver stays
    /// empty for the rest of the game.
    pub fn draw(&mut self) -> Option<Chamber> {
        if self.chambers.is_empty() {
            return None;
        }
        Some(self.chambers.remove(0))
    }

    /// Chambers not yet pulled.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.chambers.len()
    }

    /// Chambers pulled so far.
    #[must_use]
    pub fn pulled(&self) -> usize {
        REVOLVER_CHAMBERS - self.chambers.len()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.chambers.is_empty()
    }

    /// Whether the lethal chamber is still loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.chambers.contains(&Chamber::Lethal)
    }
}
