use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Hint {
    /// A random safe cell was revealed.
    Revealed(Coord2),
    /// No safe cell was left closed, so the mines were shown instead.
    MinesShown,
}

/// Hints left in the current game; bigger boards get more.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintBudget {
    remaining: u8,
}

impl HintBudget {
    pub const fn for_dim(dim: Coord) -> Self {
        let remaining = match dim {
            0..6 => 0,
            6..9 => 1,
            9..13 => 2,
            _ => 3,
        };
        Self { remaining }
    }

    pub const fn remaining(&self) -> u8 {
        self.remaining
    }

    /// Spends one hint on `board`, or returns `None` when none are left.
    pub fn use_on<R: Rng>(&mut self, board: &mut Board, rng: &mut R) -> Option<Hint> {
        self.remaining = self.remaining.checked_sub(1)?;

        let candidates = board.unrevealed_safe_cells();
        if candidates.is_empty() {
            board.reveal_all_mines();
            return Some(Hint::MinesShown);
        }

        let coords = candidates[rng.random_range(0..candidates.len())];
        log::debug!("Hint reveals {coords:?} out of {} candidates", candidates.len());
        match board.reveal(coords) {
            Ok(_) => Some(Hint::Revealed(coords)),
            Err(err) => {
                // candidates come from the board itself
                log::error!("Hint picked an invalid cell {coords:?}: {err}");
                None
            }
        }
    }
}
