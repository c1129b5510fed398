use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The grid of cells plus the progress counters used to decide the game.
///
/// Deserialized snapshots are checked against their cells, see [`BoardSnapshot`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardSnapshot")]
pub struct Board {
    cells: Array2<Cell>,
    revealed_safe_count: CellCount,
    total_safe_count: CellCount,
    outcome: GameOutcome,
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct BoardSnapshot {
    cells: Array2<Cell>,
    revealed_safe_count: CellCount,
    total_safe_count: CellCount,
    outcome: GameOutcome,
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = GameError;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self> {
        let BoardSnapshot {
            cells,
            revealed_safe_count,
            total_safe_count,
            outcome,
        } = snapshot;

        let (rows, columns) = cells.dim();
        if rows != columns || rows > usize::from(Coord::MAX) {
            return Err(GameError::InvalidBoardShape);
        }

        let count = |filter: fn(&&Cell) -> bool| -> Result<CellCount> {
            cells
                .iter()
                .filter(filter)
                .count()
                .try_into()
                .map_err(|_| GameError::InvalidBoardShape)
        };
        let safe = count(|cell| !cell.has_mine())?;
        let revealed = count(|cell| !cell.has_mine() && cell.is_revealed())?;
        if safe != total_safe_count || revealed != revealed_safe_count {
            return Err(GameError::InconsistentSnapshot);
        }

        // a lost game may still have every safe cell open afterwards
        let all_open = safe > 0 && revealed == safe;
        let consistent = match outcome {
            GameOutcome::InProgress => !all_open,
            GameOutcome::Won => all_open,
            GameOutcome::Lost => true,
        };
        if !consistent {
            return Err(GameError::InconsistentSnapshot);
        }

        Ok(Self {
            cells,
            revealed_safe_count,
            total_safe_count,
            outcome,
        })
    }
}

impl Board {
    pub fn new(mine_layout: MineLayout) -> Self {
        let total_safe_count = mine_layout.safe_cell_count();
        Self {
            cells: mine_layout.mine_mask().map(|&has_mine| Cell::new(has_mine)),
            revealed_safe_count: 0,
            total_safe_count,
            outcome: Default::default(),
        }
    }

    /// Rolls a fresh minefield for `config` and wraps it in a board.
    pub fn generate(config: GameConfig, seed: u64) -> Self {
        Self::new(BernoulliGenerator::new(seed).generate(config))
    }

    pub fn dim(&self) -> Coord {
        // square and bounded by `Coord::MAX` since it comes from a `MineLayout`
        self.cells.nrows() as Coord
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    pub fn revealed_safe_count(&self) -> CellCount {
        self.revealed_safe_count
    }

    pub fn total_safe_count(&self) -> CellCount {
        self.total_safe_count
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let dim = self.dim();
        if coords.0 < dim && coords.1 < dim {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Number of mines among the up to 8 cells around `coords`.
    ///
    /// `coords` must be in range.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8, always fits
        self.iter_neighbors(coords)
            .filter(|&pos| self.cell_at(pos).has_mine())
            .count() as u8
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        let cell = self.cell_at(coords);

        if cell.has_mine() {
            self.cells[coords.to_nd_index()].reveal();
            log::debug!("Mine hit at {coords:?}");
            self.end_game(false);
            return Ok(RevealOutcome::MineHit);
        }

        if cell.is_revealed() {
            return Ok(RevealOutcome::NoOp);
        }

        let mut queued = BTreeSet::from([coords]);
        let mut to_visit = vec![coords];
        let mut opened: CellCount = 0;

        while let Some(visit_coords) = to_visit.pop() {
            let cell = &mut self.cells[visit_coords.to_nd_index()];
            if cell.is_revealed() {
                continue;
            }
            debug_assert!(!cell.has_mine(), "flood fill only reaches safe cells");
            cell.reveal();
            opened += 1;

            if self.adjacent_mine_count(visit_coords) == 0 {
                for pos in self.iter_neighbors(visit_coords) {
                    if !self.cell_at(pos).is_revealed() && queued.insert(pos) {
                        to_visit.push(pos);
                    }
                }
            }
        }

        self.revealed_safe_count += opened;
        log::trace!("Revealing {coords:?} opened {opened} cells");

        if self.total_safe_count > 0 && self.revealed_safe_count == self.total_safe_count {
            self.end_game(true);
        }
        Ok(RevealOutcome::Cleared)
    }

    pub fn set_flag(&mut self, coords: Coord2, flagged: bool) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];

        Ok(if cell.is_flagged() == flagged {
            MarkOutcome::NoChange
        } else {
            cell.set_flagged(flagged);
            MarkOutcome::Changed
        })
    }

    /// Opens every mined cell, used to show the layout once the game is lost.
    pub fn reveal_all_mines(&mut self) {
        self.cells
            .iter_mut()
            .filter(|cell| cell.has_mine())
            .for_each(Cell::reveal);
    }

    /// Cells that are still closed and hold no mine, in row-major order.
    pub fn unrevealed_safe_cells(&self) -> Vec<Coord2> {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_hidden_safe())
            // indices are bounded by `dim`, which fits in `Coord`
            .map(|((row, column), _)| (column as Coord, row as Coord))
            .collect()
    }

    pub fn score(&self) -> Score {
        Score::new(self.revealed_safe_count, self.total_safe_count)
    }

    fn end_game(&mut self, won: bool) {
        if self.outcome.is_finished() {
            return;
        }

        self.outcome = if won {
            GameOutcome::Won
        } else {
            GameOutcome::Lost
        };
        log::debug!("Game ended: {:?}", self.outcome);
    }

    fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }
}
