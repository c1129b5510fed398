use core::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::*;

/// How much of the safe ground the player uncovered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub revealed: CellCount,
    pub total: CellCount,
}

impl Score {
    pub const fn new(revealed: CellCount, total: CellCount) -> Self {
        Self { revealed, total }
    }

    /// Percentage in tenths of a percent, rounded half up. `None` when the board had no safe cells.
    pub fn percent_tenths(&self) -> Option<u32> {
        if self.total == 0 {
            return None;
        }
        let revealed = u64::from(self.revealed);
        let total = u64::from(self.total);
        // revealed <= total, so the result is at most 1000
        Some(((revealed * 2000 + total) / (total * 2)) as u32)
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.percent_tenths() {
            Some(tenths) => write!(f, "{}.{}%", tenths / 10, tenths % 10),
            None => f.write_str("n/a"),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn percentage_rounds_to_one_decimal() {
        assert_eq!(Score::new(1, 3).percent_tenths(), Some(333));
        assert_eq!(Score::new(2, 3).percent_tenths(), Some(667));
        assert_eq!(Score::new(1, 8).percent_tenths(), Some(125));
        assert_eq!(Score::new(24, 24).to_string(), "100.0%");
        assert_eq!(Score::new(5, 8).to_string(), "62.5%");
        assert_eq!(Score::new(0, 7).to_string(), "0.0%");
    }

    #[test]
    fn empty_safe_area_has_no_percentage() {
        let score = Score::new(0, 0);

        assert_eq!(score.percent_tenths(), None);
        assert_eq!(score.to_string(), "n/a");
    }
}
