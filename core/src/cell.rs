use serde::{Deserialize, Serialize};

/// One grid position.
///
/// The mine is fixed when the cell is created, only the reveal and flag marks change during play.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    revealed: bool,
    has_mine: bool,
    flagged: bool,
}

impl Cell {
    pub const fn new(has_mine: bool) -> Self {
        Self {
            revealed: false,
            has_mine,
            flagged: false,
        }
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    pub const fn has_mine(self) -> bool {
        self.has_mine
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    /// Whether this cell still counts against winning the game.
    pub const fn is_hidden_safe(self) -> bool {
        !self.revealed && !self.has_mine
    }

    pub(crate) fn reveal(&mut self) {
        self.revealed = true;
    }

    pub(crate) fn set_flagged(&mut self, flagged: bool) {
        self.flagged = flagged;
    }
}
